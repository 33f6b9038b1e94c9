// main.rs - Game of Life paced by a tokio frame clock instead of a window

use std::time::Duration;

use life_core::config::{read_setting, surface_from_env};
use life_core::{FrameOutcome, Life, LifeConfig, RecordingRenderer};
use tokio::time::{Instant, MissedTickBehavior};

const FRAME_LIMIT_KEY: &str = "LIFE_FRAME_LIMIT";

/// Stand-in for a 60 Hz display refresh.
const FRAME_PERIOD: Duration = Duration::from_micros(16_667);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = LifeConfig::from_env()?;
    let [width, height] = surface_from_env()?;
    let frame_limit: Option<u64> = read_setting(|key| std::env::var(key).ok(), FRAME_LIMIT_KEY)?;

    let mut life = Life::from_surface(config, width, height)?;
    let size = life.grid().size();
    log::info!(
        "headless {}x{} grid, one generation every {:?}",
        size.width(),
        size.height(),
        life.config().step_interval
    );

    let stop = life.stop_handle();
    tokio::spawn({
        let stop = stop.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("interrupted");
                stop.stop();
            }
        }
    });

    let mut canvas = RecordingRenderer::default();
    life.render(&mut canvas);

    let started = Instant::now();
    let mut frames = tokio::time::interval(FRAME_PERIOD);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut frame_count: u64 = 0;
    loop {
        frames.tick().await;
        let outcome = life.on_frame(started.elapsed(), &mut canvas);
        match outcome {
            FrameOutcome::Stepped { census } => log::info!(
                "generation {}: {} live cells drawn ({:.1}%)",
                life.generation(),
                canvas.rects.len(),
                census.fraction() * 100.0
            ),
            FrameOutcome::Reseeded { reason, .. } => {
                log::info!("reseeded ({reason:?}), {} live cells drawn", canvas.rects.len())
            }
            _ => {}
        }
        if !outcome.keeps_running() {
            break;
        }

        frame_count += 1;
        if frame_limit.is_some_and(|limit| frame_count >= limit) {
            stop.stop();
        }
    }

    let stats = life.stats();
    log::info!(
        "stopped after {} frames: {} steps, {} reseeds",
        frame_count,
        stats.steps,
        stats.reseeds
    );
    Ok(())
}
