// ui.rs - Per-frame callback: pace the simulation, paint the canvas

use std::time::Duration;

use eframe::egui;
use egui::{Align2, Color32, FontId};

use crate::LifeApp;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            log::info!("stopping at generation {}", self.life.generation());
            self.life.stop_handle().stop();
        }

        // egui's clock is monotonic seconds since start-up
        let timestamp = Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0));
        let outcome = self.life.on_frame(timestamp, &mut self.canvas);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                let painter = ui.painter();
                self.canvas.paint(painter, origin);

                let stats = self.life.stats();
                painter.text(
                    origin + egui::vec2(8.0, 8.0),
                    Align2::LEFT_TOP,
                    format!(
                        "Generation: {}   Live: {}   Reseeds: {}",
                        self.life.generation(),
                        self.canvas.cell_count(),
                        stats.reseeds
                    ),
                    FontId::monospace(14.0),
                    Color32::WHITE,
                );
            });

        // Asking for the next frame is what keeps the loop alive
        if outcome.keeps_running() {
            ctx.request_repaint();
        }
    }
}
