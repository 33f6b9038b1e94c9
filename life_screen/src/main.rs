// main.rs - Windowed Game of Life that reseeds itself when the population dies out

use eframe::egui;
use life_core::config::surface_from_env;
use life_core::{Life, LifeConfig};

mod canvas; // egui-backed renderer
mod ui;     // eframe::App frame callback

use canvas::Canvas;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = LifeConfig::from_env()?;
    let [width, height] = surface_from_env()?;

    // The window is not resizable, so its inner size is the surface for the whole run
    let life = Life::from_surface(config, width, height)?;
    let size = life.grid().size();
    log::info!(
        "{}x{} cells of {}px, one generation every {:?}",
        size.width(),
        size.height(),
        life.config().cell_size,
        life.config().step_interval
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::new(life))),
    )?;
    Ok(())
}

/// Owns the simulation and the retained drawing of its latest generation.
pub struct LifeApp {
    life: Life,
    canvas: Canvas,
}

impl LifeApp {
    pub fn new(life: Life) -> Self {
        let mut canvas = Canvas::default();
        life.render(&mut canvas);
        Self { life, canvas }
    }
}
