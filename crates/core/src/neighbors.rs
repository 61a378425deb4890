//! Moore-neighbourhood evaluation.
//!
//! Counting is done against the grid as it stands, including any cells that
//! already transitioned earlier in the current sweep. Those carry
//! `needs_update` and therefore report their pre-sweep state through
//! [`Cell::is_effectively_alive`].

use arrayvec::ArrayVec;

use crate::grid::{Cell, Grid};

/// Offsets of the eight Moore neighbours, row by row.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// In-bounds neighbours of `(x, y)`; off-grid positions are skipped.
pub fn neighbors_of(grid: &Grid, x: i32, y: i32) -> ArrayVec<&Cell, 8> {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| grid.get(x + dx, y + dy))
        .collect()
}

/// Number of effectively-live neighbours of `cell`, in `0..=8`.
pub fn count_live_neighbors(grid: &Grid, cell: &Cell) -> u8 {
    neighbors_of(grid, cell.x(), cell.y())
        .iter()
        .filter(|n| n.is_effectively_alive())
        .count() as u8
}
