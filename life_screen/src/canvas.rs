// canvas.rs - Retained list of cell rectangles painted with egui

use egui::{Color32, Painter, Pos2, Rect, Vec2};
use life_core::{CellColor, Region, Renderer};

/// egui repaints everything each frame, but the engine only draws when a
/// generation changes. The canvas keeps the last drawing and replays it.
#[derive(Default)]
pub struct Canvas {
    region: Option<Region>,
    cells: Vec<(Rect, Color32)>,
}

impl Renderer for Canvas {
    fn clear(&mut self, region: Region) {
        self.region = Some(region);
        self.cells.clear();
    }

    fn draw_rect(&mut self, x: f32, y: f32, size: f32, color: CellColor) {
        let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(size));
        self.cells.push((rect, Color32::from_rgb(color.r, color.g, color.b)));
    }
}

impl Canvas {
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Paint the retained frame with its top-left corner at `origin`.
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        if let Some(region) = self.region {
            painter.rect_filled(
                Rect::from_min_size(origin, egui::vec2(region.width, region.height)),
                0.0,
                Color32::BLACK,
            );
        }

        let offset = origin.to_vec2();
        for (rect, color) in &self.cells {
            painter.rect_filled(rect.translate(offset), 0.0, *color);
        }
    }
}
