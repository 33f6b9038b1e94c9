// grid.rs - Grid types for Conway's Game of Life

use rand::Rng;

use crate::error::LifeError;

/// Upper bound on cells per grid; 2^24 is far beyond any real display.
pub const MAX_CELLS: usize = 1 << 24;

/// Grid dimensions in cells. Both sides are always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    width: usize,
    height: usize,
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::EmptyGrid { width, height });
        }
        match width.checked_mul(height) {
            Some(cells) if cells <= MAX_CELLS => Ok(Self { width, height }),
            _ => Err(LifeError::GridTooLarge { width, height }),
        }
    }

    /// Number of whole cells of `cell_size` pixels that fit on a surface.
    /// Partial cells at the right and bottom edges are dropped.
    pub fn from_surface(
        surface_width: f32,
        surface_height: f32,
        cell_size: u32,
    ) -> Result<Self, LifeError> {
        if cell_size == 0 {
            return Err(LifeError::InvalidCellSize);
        }

        let too_small = LifeError::SurfaceTooSmall {
            width: surface_width,
            height: surface_height,
            cell_size,
        };
        if !surface_width.is_finite() || !surface_height.is_finite() {
            return Err(too_small);
        }

        // Negative sizes saturate to zero columns/rows
        let columns = (surface_width / cell_size as f32).floor() as usize;
        let rows = (surface_height / cell_size as f32).floor() as usize;
        Self::new(columns, rows).map_err(|err| match err {
            LifeError::EmptyGrid { .. } => too_small,
            other => other,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// A dense W×H field of dead/alive cells, stored row-major.
///
/// Coordinates outside the grid read as dead and are ignored on write, so
/// the edges behave as a permanently dead border.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: GridSize,
    cells: Vec<bool>,
}

impl Grid {
    /// An all-dead grid.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![false; size.cell_count()],
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn height(&self) -> usize {
        self.size.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.size.width && y < self.size.height).then(|| y * self.size.width + x)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Signed lookup for neighbor offsets; anything off the grid is dead.
    #[inline]
    pub fn cell_at(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.get(x as usize, y as usize)
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = alive;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Independent Bernoulli trial per cell: alive with probability `density`.
    /// Panics unless `density` lies in 0..=1.
    pub fn seed_random<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        for cell in self.cells.iter_mut() {
            *cell = rng.random_bool(density);
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.size.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i % width, i / width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            GridSize::new(0, 4),
            Err(LifeError::EmptyGrid { width: 0, height: 4 })
        );
        assert!(GridSize::new(3, 0).is_err());
        assert!(GridSize::new(1, 1).is_ok());
    }

    #[test]
    fn surface_size_floors_partial_cells() {
        let size = GridSize::from_surface(805.0, 599.0, 10).unwrap();
        assert_eq!((size.width(), size.height()), (80, 59));
    }

    #[test]
    fn surface_smaller_than_a_cell_fails_fast() {
        assert_eq!(
            GridSize::from_surface(9.0, 100.0, 10),
            Err(LifeError::SurfaceTooSmall {
                width: 9.0,
                height: 100.0,
                cell_size: 10
            })
        );
        assert!(GridSize::from_surface(-50.0, 100.0, 10).is_err());
        assert!(GridSize::from_surface(f32::INFINITY, 100.0, 10).is_err());
        assert_eq!(
            GridSize::from_surface(100.0, 100.0, 0),
            Err(LifeError::InvalidCellSize)
        );
    }

    #[test]
    fn oversized_grids_are_rejected_without_overflow() {
        assert_eq!(
            GridSize::new(usize::MAX, 2),
            Err(LifeError::GridTooLarge {
                width: usize::MAX,
                height: 2
            })
        );
        assert!(GridSize::new(4096, 4096).is_ok());
        assert!(GridSize::new(4096, 4097).is_err());
    }

    #[test]
    fn huge_surface_fails_fast() {
        assert!(matches!(
            GridSize::from_surface(f32::MAX, f32::MAX, 1),
            Err(LifeError::GridTooLarge { .. })
        ));
        assert!(matches!(
            GridSize::from_surface(1e30, 600.0, 10),
            Err(LifeError::GridTooLarge { .. })
        ));
        assert!(matches!(
            GridSize::from_surface(1e6, 1e6, 1),
            Err(LifeError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(GridSize::new(7, 3).unwrap());
        assert_eq!(grid.live_count(), 0);
        assert!((0..3).all(|y| (0..7).all(|x| !grid.get(x, y))));
    }

    #[test]
    fn out_of_range_reads_are_dead_and_writes_ignored() {
        let mut grid = Grid::new(GridSize::new(2, 2).unwrap());
        grid.set(0, 0, true);
        grid.set(2, 0, true);
        grid.set(0, 5, true);

        assert_eq!(grid.live_count(), 1);
        assert!(grid.cell_at(0, 0));
        assert!(!grid.cell_at(-1, 0));
        assert!(!grid.cell_at(0, -1));
        assert!(!grid.cell_at(2, 1));
        assert!(!grid.get(1, 2));
    }

    #[test]
    fn live_cells_are_reported_row_major() {
        let mut grid = Grid::new(GridSize::new(3, 3).unwrap());
        grid.set(2, 0, true);
        grid.set(0, 2, true);
        grid.set(1, 1, true);
        let cells: Vec<_> = grid.live_cells().collect();
        assert_eq!(cells, vec![(2, 0), (1, 1), (0, 2)]);
    }

    #[test]
    fn random_seeding_converges_to_density() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(GridSize::new(200, 200).unwrap());
        grid.seed_random(&mut rng, 0.5);

        let fraction = grid.live_count() as f64 / 40_000.0;
        assert!((fraction - 0.5).abs() < 0.02, "fraction was {fraction}");
    }

    #[test]
    fn seeding_overwrites_previous_state() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(GridSize::new(10, 10).unwrap());
        grid.seed_random(&mut rng, 1.0);
        assert_eq!(grid.live_count(), 100);
        grid.seed_random(&mut rng, 0.0);
        assert_eq!(grid.live_count(), 0);
    }
}
