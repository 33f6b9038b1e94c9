// config.rs - Engine tuning knobs with environment overrides

use std::str::FromStr;
use std::time::Duration;

use crate::error::LifeError;
use crate::monitor::DEFAULT_RESEED_THRESHOLD;
use crate::pacing::DEFAULT_STEP_INTERVAL;

pub const CELL_SIZE_KEY: &str = "LIFE_CELL_SIZE";
pub const STEP_INTERVAL_KEY: &str = "LIFE_STEP_INTERVAL_MS";
pub const RESEED_THRESHOLD_KEY: &str = "LIFE_RESEED_THRESHOLD";
pub const SEED_DENSITY_KEY: &str = "LIFE_SEED_DENSITY";
pub const RNG_SEED_KEY: &str = "LIFE_SEED";
pub const STAGNATION_WINDOW_KEY: &str = "LIFE_STAGNATION_WINDOW";
pub const SURFACE_WIDTH_KEY: &str = "LIFE_SURFACE_WIDTH";
pub const SURFACE_HEIGHT_KEY: &str = "LIFE_SURFACE_HEIGHT";

/// Drawing surface in pixels when no override is given.
pub const DEFAULT_SURFACE: [f32; 2] = [800.0, 600.0];

#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    /// Side of one cell in pixels.
    pub cell_size: u32,
    /// Wall-clock time between generations.
    pub step_interval: Duration,
    /// Live fraction below which the grid is thrown away and reseeded.
    pub reseed_threshold: f64,
    /// Probability that a freshly seeded cell is alive.
    pub seed_density: f64,
    /// Fixed RNG seed for reproducible runs; `None` draws from the OS.
    pub rng_seed: Option<u64>,
    /// Also reseed when a generation repeats one of the last N.
    pub stagnation_window: Option<usize>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_size: 10,
            step_interval: DEFAULT_STEP_INTERVAL,
            reseed_threshold: DEFAULT_RESEED_THRESHOLD,
            seed_density: 0.5,
            rng_seed: None,
            stagnation_window: None,
        }
    }
}

impl LifeConfig {
    /// Defaults, overridden by any `LIFE_*` variables that are set.
    pub fn from_env() -> Result<Self, LifeError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, LifeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(cell_size) = read_setting(&lookup, CELL_SIZE_KEY)? {
            self.cell_size = cell_size;
        }
        if let Some(ms) = read_setting(&lookup, STEP_INTERVAL_KEY)? {
            self.step_interval = Duration::from_millis(ms);
        }
        if let Some(threshold) = read_setting(&lookup, RESEED_THRESHOLD_KEY)? {
            self.reseed_threshold = threshold;
        }
        if let Some(density) = read_setting(&lookup, SEED_DENSITY_KEY)? {
            self.seed_density = density;
        }
        if let Some(seed) = read_setting(&lookup, RNG_SEED_KEY)? {
            self.rng_seed = Some(seed);
        }
        if let Some(window) = read_setting(&lookup, STAGNATION_WINDOW_KEY)? {
            self.stagnation_window = Some(window);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), LifeError> {
        if self.cell_size == 0 {
            return Err(LifeError::InvalidCellSize);
        }
        if self.step_interval.is_zero() {
            return Err(LifeError::InvalidStepInterval);
        }
        if !(0.0..=1.0).contains(&self.reseed_threshold) {
            return Err(LifeError::InvalidThreshold(self.reseed_threshold));
        }
        if !(0.0..=1.0).contains(&self.seed_density) {
            return Err(LifeError::InvalidDensity(self.seed_density));
        }
        if self.stagnation_window == Some(0) {
            return Err(LifeError::InvalidStagnationWindow);
        }
        Ok(())
    }
}

/// Surface size from `LIFE_SURFACE_WIDTH` / `LIFE_SURFACE_HEIGHT`, falling
/// back to [`DEFAULT_SURFACE`] per side.
pub fn surface_from_env() -> Result<[f32; 2], LifeError> {
    surface_with_overrides(|key| std::env::var(key).ok())
}

pub fn surface_with_overrides<F>(lookup: F) -> Result<[f32; 2], LifeError>
where
    F: Fn(&str) -> Option<String>,
{
    let width = read_setting(&lookup, SURFACE_WIDTH_KEY)?.unwrap_or(DEFAULT_SURFACE[0]);
    let height = read_setting(&lookup, SURFACE_HEIGHT_KEY)?.unwrap_or(DEFAULT_SURFACE[1]);
    Ok([width, height])
}

/// Parses an optional setting; unset or blank is `None`.
pub fn read_setting<T, F>(lookup: F, key: &'static str) -> Result<Option<T>, LifeError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| LifeError::InvalidSetting {
        key,
        value: raw.clone(),
    })
}
