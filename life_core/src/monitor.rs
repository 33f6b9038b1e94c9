// monitor.rs - Population collapse and stagnation checks

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

pub const DEFAULT_RESEED_THRESHOLD: f64 = 0.10;

/// Live cell count of one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Census {
    pub live: usize,
    pub total: usize,
}

impl Census {
    pub fn of(grid: &Grid) -> Self {
        Self {
            live: grid.live_count(),
            total: grid.size().cell_count(),
        }
    }

    pub fn fraction(&self) -> f64 {
        self.live as f64 / self.total as f64
    }
}

/// Declares a generation collapsed when its live fraction drops below the
/// threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopulationMonitor {
    threshold: f64,
}

impl Default for PopulationMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_RESEED_THRESHOLD)
    }
}

impl PopulationMonitor {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_collapsed(&self, census: &Census) -> bool {
        census.fraction() < self.threshold
    }
}

/// Remembers hashes of the last few generations to spot still lifes and
/// short oscillators that will never collapse on their own.
#[derive(Clone, Debug)]
pub struct StagnationDetector {
    history: VecDeque<u64>,
    window: usize,
}

impl StagnationDetector {
    pub fn new(window: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(window),
            window,
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Records `grid` and reports whether it already appeared in the window.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let hash = hash_grid(grid);
        if self.history.contains(&hash) {
            return true;
        }
        if self.history.len() == self.window {
            self.history.pop_front();
        }
        self.history.push_back(hash);
        false
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSize;

    fn grid_with_live(width: usize, height: usize, live: usize) -> Grid {
        let mut grid = Grid::new(GridSize::new(width, height).unwrap());
        for i in 0..live {
            grid.set(i % width, i / width, true);
        }
        grid
    }

    #[test]
    fn census_counts_live_cells() {
        let census = Census::of(&grid_with_live(10, 10, 37));
        assert_eq!(census, Census { live: 37, total: 100 });
        assert!((census.fraction() - 0.37).abs() < f64::EPSILON);
    }

    #[test]
    fn exactly_at_threshold_is_not_collapsed() {
        let monitor = PopulationMonitor::default();
        assert!(!monitor.is_collapsed(&Census::of(&grid_with_live(10, 10, 10))));
    }

    #[test]
    fn just_below_threshold_is_collapsed() {
        let monitor = PopulationMonitor::default();
        assert!(monitor.is_collapsed(&Census::of(&grid_with_live(10, 10, 9))));
        assert!(monitor.is_collapsed(&Census::of(&grid_with_live(10, 10, 0))));
    }

    #[test]
    fn just_above_threshold_is_not_collapsed() {
        let monitor = PopulationMonitor::default();
        assert!(!monitor.is_collapsed(&Census::of(&grid_with_live(10, 10, 11))));
    }

    #[test]
    fn threshold_is_tunable() {
        let monitor = PopulationMonitor::new(0.04);
        assert!(!monitor.is_collapsed(&Census::of(&grid_with_live(10, 10, 4))));
        assert!(monitor.is_collapsed(&Census::of(&grid_with_live(10, 10, 3))));
    }

    #[test]
    fn repeat_within_window_is_stagnant() {
        let a = grid_with_live(4, 4, 3);
        let b = grid_with_live(4, 4, 5);
        let mut detector = StagnationDetector::new(2);

        assert!(!detector.observe(&a));
        assert!(!detector.observe(&b));
        assert!(detector.observe(&a));
    }

    #[test]
    fn repeat_outside_window_is_forgotten() {
        let a = grid_with_live(4, 4, 3);
        let b = grid_with_live(4, 4, 5);
        let c = grid_with_live(4, 4, 7);
        let mut detector = StagnationDetector::new(2);

        assert!(!detector.observe(&a));
        assert!(!detector.observe(&b));
        assert!(!detector.observe(&c));
        assert!(!detector.observe(&a));
    }

    #[test]
    fn reset_clears_history() {
        let a = grid_with_live(4, 4, 3);
        let mut detector = StagnationDetector::new(4);
        detector.observe(&a);
        detector.reset();
        assert!(!detector.observe(&a));
    }
}
