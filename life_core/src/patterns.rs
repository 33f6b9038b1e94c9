// patterns.rs - Well-known Life patterns as relative cell lists

use crate::grid::Grid;

/// Live cells as (x, y) offsets from the pattern's top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BEEHIVE: Pattern = Pattern {
    name: "Beehive",
    cells: &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BEEHIVE, BLINKER, TOAD, BEACON, GLIDER, R_PENTOMINO];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Sets the pattern's cells alive with its corner at `origin`. Cells past
/// the grid edge are dropped; everything else on the grid is left as is.
pub fn stamp(grid: &mut Grid, pattern: &Pattern, origin: (usize, usize)) {
    let (ox, oy) = origin;
    for &(dx, dy) in pattern.cells {
        grid.set(ox + dx, oy + dy, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSize;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find("glider").map(|p| p.name), Some("Glider"));
        assert_eq!(find("R-PENTOMINO").map(|p| p.cells.len()), Some(5));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn stamp_drops_cells_past_the_edge() {
        let mut grid = Grid::new(GridSize::new(3, 3).unwrap());
        stamp(&mut grid, &BLINKER, (1, 1));
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(1, 1), (2, 1)]);
    }

    #[test]
    fn stamp_keeps_existing_cells() {
        let mut grid = Grid::new(GridSize::new(6, 6).unwrap());
        grid.set(5, 5, true);
        stamp(&mut grid, &BLOCK, (0, 0));
        assert_eq!(grid.live_count(), 5);
    }
}
