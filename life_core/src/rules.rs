// rules.rs - Neighbor counting and the B3/S23 transition rule

use crate::grid::Grid;

/// Live cells among the 8 surrounding (x, y). Cells beyond the grid edge
/// count as dead; there is no wraparound.
pub fn neighbor_count(grid: &Grid, x: usize, y: usize) -> u8 {
    let (x, y) = (x as isize, y as isize);
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if grid.cell_at(x + dx, y + dy) {
                count += 1;
            }
        }
    }
    count
}

/// Next state of a cell from its current state and live neighbor count.
pub fn transition(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (_, n) if !(2..=3).contains(&n) => false, // Under/overpopulation
        (false, 3) => true,                       // Birth
        (state, _) => state,                      // Survival or stays dead
    }
}
