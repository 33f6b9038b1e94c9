// lib.rs - Conway's Game of Life engine on a bounded grid
//
// The grid has dead edges (no wraparound), steps at a fixed wall-clock
// cadence independent of the display refresh rate, and reseeds itself when
// the population collapses.

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod life;
pub mod monitor;
pub mod pacing;
pub mod patterns;
pub mod render;
pub mod rules;

pub use config::LifeConfig;
pub use engine::Simulation;
pub use error::LifeError;
pub use grid::{Grid, GridSize};
pub use life::{FrameOutcome, Life, LifeStats, ReseedReason};
pub use monitor::{Census, PopulationMonitor, StagnationDetector};
pub use pacing::{Pace, PacingLoop, StopHandle};
pub use render::{CellColor, RecordingRenderer, Region, Renderer};
