// render.rs - Drawing contract between the engine and a display backend

use crate::grid::{Grid, GridSize};

/// An sRGB color for one live cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CellColor {
    /// Hue in degrees, saturation and lightness in 0..=1.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = hue.rem_euclid(360.0) / 60.0;
        let second = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, second, 0.0),
            1 => (second, chroma, 0.0),
            2 => (0.0, chroma, second),
            3 => (0.0, second, chroma),
            4 => (second, 0.0, chroma),
            _ => (chroma, 0.0, second),
        };
        let offset = lightness - chroma / 2.0;
        let channel = |v: f32| ((v + offset) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }
}

/// Pixel area covered by the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub width: f32,
    pub height: f32,
}

/// A pixel backend. The engine clears once per frame and then draws one
/// square per live cell.
pub trait Renderer {
    fn clear(&mut self, region: Region);
    fn draw_rect(&mut self, x: f32, y: f32, size: f32, color: CellColor);
}

/// Color of the cell at (x, y): the hue sweeps once around the wheel from
/// the top-left corner to the bottom-right.
pub fn cell_color(x: usize, y: usize, size: GridSize) -> CellColor {
    let span = (size.width() + size.height()) as f32;
    let hue = 360.0 * (x + y) as f32 / span;
    CellColor::from_hsl(hue, 1.0, 0.5)
}

pub fn paint<R: Renderer + ?Sized>(grid: &Grid, cell_size: u32, renderer: &mut R) {
    let size = grid.size();
    let px = cell_size as f32;
    renderer.clear(Region {
        width: size.width() as f32 * px,
        height: size.height() as f32 * px,
    });
    for (x, y) in grid.live_cells() {
        renderer.draw_rect(x as f32 * px, y as f32 * px, px, cell_color(x, y, size));
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawnRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: CellColor,
}

/// Keeps the rectangles of the most recent frame in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub clears: usize,
    pub region: Option<Region>,
    pub rects: Vec<DrawnRect>,
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, region: Region) {
        self.clears += 1;
        self.region = Some(region);
        self.rects.clear();
    }

    fn draw_rect(&mut self, x: f32, y: f32, size: f32, color: CellColor) {
        self.rects.push(DrawnRect { x, y, size, color });
    }
}
