// error.rs - Start-up precondition failures for the life engine

use thiserror::Error;

/// Everything that can be rejected before the first generation runs.
///
/// Stepping itself never fails: out-of-range neighbor reads are dead cells,
/// not errors.
#[derive(Debug, Error, PartialEq)]
pub enum LifeError {
    #[error("grid must be at least 1x1 cells, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid of {width}x{height} cells exceeds the {max} cell limit", max = crate::grid::MAX_CELLS)]
    GridTooLarge { width: usize, height: usize },

    #[error("surface {width}x{height} cannot hold a single {cell_size}px cell")]
    SurfaceTooSmall {
        width: f32,
        height: f32,
        cell_size: u32,
    },

    #[error("cell size must be at least 1px")]
    InvalidCellSize,

    #[error("step interval must be longer than zero")]
    InvalidStepInterval,

    #[error("reseed threshold {0} must be between 0.0 and 1.0")]
    InvalidThreshold(f64),

    #[error("seed density {0} must be between 0.0 and 1.0")]
    InvalidDensity(f64),

    #[error("stagnation window must remember at least one generation")]
    InvalidStagnationWindow,

    #[error("invalid value {value:?} for {key}")]
    InvalidSetting { key: &'static str, value: String },
}
