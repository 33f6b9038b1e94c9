// engine.rs - Double-buffered generation stepping

use rand::Rng;

use crate::grid::{Grid, GridSize};
use crate::rules::{neighbor_count, transition};

/// Owns the current generation and a spare buffer of the same size.
///
/// `step` reads only `current` and writes every cell of `next` before the
/// two are swapped, so no read ever sees a half-updated generation and the
/// stale contents of the spare buffer never leak through.
#[derive(Clone, Debug)]
pub struct Simulation {
    current: Grid,
    next: Grid,
    generation: u64,
}

impl Simulation {
    pub fn new(size: GridSize) -> Self {
        Self::from_grid(Grid::new(size))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            next: Grid::new(grid.size()),
            current: grid,
            generation: 0,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn size(&self) -> GridSize {
        self.current.size()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        for y in 0..self.current.height() {
            for x in 0..self.current.width() {
                let alive = self.current.get(x, y);
                let neighbors = neighbor_count(&self.current, x, y);
                self.next.set(x, y, transition(alive, neighbors));
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Throw the current generation away and start over from random cells.
    /// `density` must lie in 0..=1; `LifeConfig::validate` guarantees it for
    /// every caller inside the crate.
    pub(crate) fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        self.current.seed_random(rng, density);
        self.next.clear();
        self.generation = 0;
    }
}
