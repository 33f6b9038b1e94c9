// life.rs - The self-resetting simulation driven by frame callbacks

use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};

use crate::config::LifeConfig;
use crate::engine::Simulation;
use crate::error::LifeError;
use crate::grid::{Grid, GridSize};
use crate::monitor::{Census, PopulationMonitor, StagnationDetector};
use crate::pacing::{Pace, PacingLoop, StopHandle};
use crate::render::{self, Renderer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReseedReason {
    /// Live fraction fell below the reseed threshold.
    Collapsed,
    /// The generation repeated one seen inside the stagnation window.
    Stagnant,
}

/// Result of one frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Primed,
    Waiting,
    Stepped { census: Census },
    /// The stepped generation was discarded; `census` describes it.
    Reseeded { reason: ReseedReason, census: Census },
    Stopped,
}

impl FrameOutcome {
    /// Whether the host should schedule another frame.
    pub fn keeps_running(&self) -> bool {
        *self != FrameOutcome::Stopped
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LifeStats {
    pub steps: u64,
    pub reseeds: u64,
}

pub struct Life {
    config: LifeConfig,
    simulation: Simulation,
    monitor: PopulationMonitor,
    stagnation: Option<StagnationDetector>,
    pacing: PacingLoop,
    rng: StdRng,
    stats: LifeStats,
}

impl Life {
    /// A randomly seeded grid of `size` cells.
    pub fn new(config: LifeConfig, size: GridSize) -> Result<Self, LifeError> {
        let mut life = Self::with_grid(config, Grid::new(size))?;
        let density = life.config.seed_density;
        life.simulation.reseed(&mut life.rng, density);
        Ok(life)
    }

    /// Sizes the grid once from the drawing surface; it never changes after.
    pub fn from_surface(config: LifeConfig, width: f32, height: f32) -> Result<Self, LifeError> {
        let size = GridSize::from_surface(width, height, config.cell_size)?;
        Self::new(config, size)
    }

    /// Starts from a prepared first generation instead of random cells.
    pub fn with_grid(config: LifeConfig, grid: Grid) -> Result<Self, LifeError> {
        config.validate()?;

        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            monitor: PopulationMonitor::new(config.reseed_threshold),
            stagnation: config.stagnation_window.map(StagnationDetector::new),
            pacing: PacingLoop::new(config.step_interval),
            simulation: Simulation::from_grid(grid),
            rng,
            stats: LifeStats::default(),
            config,
        })
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        self.simulation.current()
    }

    pub fn generation(&self) -> u64 {
        self.simulation.generation()
    }

    pub fn stats(&self) -> LifeStats {
        self.stats
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.pacing.stop_handle()
    }

    /// Handles one display frame. Steps (and redraws) only when the step
    /// interval has elapsed since the previous step.
    pub fn on_frame<R: Renderer + ?Sized>(
        &mut self,
        timestamp: Duration,
        renderer: &mut R,
    ) -> FrameOutcome {
        match self.pacing.poll(timestamp) {
            Pace::Primed => FrameOutcome::Primed,
            Pace::Waiting => FrameOutcome::Waiting,
            Pace::Stopped => FrameOutcome::Stopped,
            Pace::Step => {
                let outcome = self.tick();
                self.render(renderer);
                outcome
            }
        }
    }

    /// One generation followed by the population checks, without pacing.
    pub fn tick(&mut self) -> FrameOutcome {
        self.simulation.step();
        self.stats.steps += 1;

        let census = Census::of(self.simulation.current());
        log::debug!(
            "generation {}: {}/{} alive ({:.1}%)",
            self.simulation.generation(),
            census.live,
            census.total,
            census.fraction() * 100.0
        );

        if self.monitor.is_collapsed(&census) {
            log::info!(
                "population collapsed to {:.1}% after {} generations, reseeding",
                census.fraction() * 100.0,
                self.simulation.generation()
            );
            return self.reseed(ReseedReason::Collapsed, census);
        }

        let stagnant = self
            .stagnation
            .as_mut()
            .is_some_and(|detector| detector.observe(self.simulation.current()));
        if stagnant {
            log::warn!(
                "generation {} repeats an earlier one, reseeding",
                self.simulation.generation()
            );
            return self.reseed(ReseedReason::Stagnant, census);
        }

        FrameOutcome::Stepped { census }
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        render::paint(self.grid(), self.config.cell_size, renderer);
    }

    fn reseed(&mut self, reason: ReseedReason, census: Census) -> FrameOutcome {
        self.simulation.reseed(&mut self.rng, self.config.seed_density);
        if let Some(detector) = self.stagnation.as_mut() {
            detector.reset();
        }
        self.stats.reseeds += 1;
        FrameOutcome::Reseeded { reason, census }
    }
}
