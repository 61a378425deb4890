//! Generation transition
//!
//! One generation is a single in-place sweep over the grid in row-major
//! order followed by a collection pass:
//!
//! 1. **Evaluation**: each cell clears its own `needs_update`, counts its
//!    effectively-live neighbours, and transitions when the thresholds say so,
//!    marking itself with `needs_update`.
//! 2. **Collection**: every marked cell is reported and unmarked.
//!
//! Because a transitioned cell carries `needs_update`, later cells in the
//! sweep see its pre-sweep state, so the outcome matches a double-buffered
//! generation.
//!
//! Thresholds are applied as given. Inconsistent settings (for example
//! `overpopulation <= underpopulation`) are accepted and simply kill every
//! live cell.

use crate::grid::Grid;
use crate::neighbors::count_live_neighbors;
use crate::types::{CellChange, RuleSet};

/// Advance `grid` by one generation, returning the cells that changed in row-major order.
pub fn step(grid: &mut Grid, rules: &RuleSet) -> Vec<CellChange> {
    evaluate(grid, rules);
    collect_changes(grid)
}

fn evaluate(grid: &mut Grid, rules: &RuleSet) {
    let cols = grid.cols();
    for idx in 0..grid.cells().len() {
        grid.cells_mut()[idx].needs_update = false;

        let cell = grid.cells()[idx];
        debug_assert_eq!(idx, cell.y() as usize * cols + cell.x() as usize);
        let neighbors = count_live_neighbors(grid, &cell);

        let next = next_state(cell.is_alive(), neighbors, rules);
        if next != cell.is_alive() {
            let cell = &mut grid.cells_mut()[idx];
            cell.is_alive = next;
            cell.needs_update = true;
        }
    }
}

fn collect_changes(grid: &mut Grid) -> Vec<CellChange> {
    let mut changes = Vec::new();
    for cell in grid.cells_mut().iter_mut().filter(|c| c.needs_update) {
        cell.needs_update = false;
        changes.push(CellChange::new(cell.x(), cell.y(), cell.is_alive));
    }
    changes
}

/// Liveness of a cell in the next generation.
///
/// `reproduction_min`/`reproduction_max` are not consulted: a
/// live cell survives whenever it is neither under- nor overpopulated.
#[inline]
pub fn next_state(is_alive: bool, neighbors: u8, rules: &RuleSet) -> bool {
    if is_alive {
        !(neighbors >= rules.overpopulation || neighbors <= rules.underpopulation)
    } else {
        neighbors == rules.dead_reproduction
    }
}
