//! Grid module - owns the cell field
//!
//! The grid is a fixed `rows × cols` rectangle of cells stored in a flat
//! row-major `Vec`. Coordinates: `(x, y)` where `x` is the
//! column (left to right) and `y` the row (top to bottom).

use std::fmt;

use crate::types::CellChange;

/// Stable identity of a cell, derived from its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    pub row: i32,
    pub col: i32,
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// One grid position.
///
/// `x` and `y` are fixed at creation. `needs_update` is per-tick scratch state
/// owned by the transition sweep; `selected` is a UI highlight independent of
/// liveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    x: i32,
    y: i32,
    pub(crate) is_alive: bool,
    pub(crate) needs_update: bool,
    pub(crate) selected: bool,
}

impl Cell {
    fn dead(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            is_alive: false,
            needs_update: false,
            selected: false,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn id(&self) -> CellId {
        CellId {
            row: self.y,
            col: self.x,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Liveness as seen by neighbours during a sweep.
    ///
    /// A cell that already transitioned in the current sweep carries
    /// `needs_update`, which inverts its stored liveness.
    #[inline(always)]
    pub fn is_effectively_alive(&self) -> bool {
        self.is_alive != self.needs_update
    }
}

/// The cell field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of dead, unselected cells
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for y in 0..rows {
            for x in 0..cols {
                cells.push(Cell::dead(x as i32, y as i32));
            }
        }
        Self { rows, cols, cells }
    }

    /// Build a grid from text rows; `#` and `O` are live, anything else dead.
    ///
    /// Rows shorter than the longest row are padded with dead cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[".#.", "..#", "###"]);
    /// assert_eq!((grid.rows(), grid.cols()), (3, 3));
    /// assert_eq!(grid.live_count(), 5);
    /// assert!(grid.get(1, 0).unwrap().is_alive());
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let cols = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(rows.len(), cols);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if matches!(ch, '#' | 'O') {
                    grid.set(x as i32, y as i32, true);
                }
            }
        }
        grid
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.rows {
            return None;
        }
        Some((y as usize) * self.cols + (x as usize))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    pub(crate) fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        let idx = self.index(x, y)?;
        Some(&mut self.cells[idx])
    }

    /// Set liveness at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, is_alive: bool) -> bool {
        match self.get_mut(x, y) {
            Some(cell) => {
                cell.is_alive = is_alive;
                true
            }
            None => false,
        }
    }

    /// Toggle liveness at (x, y), returning the new state
    pub fn flip(&mut self, x: i32, y: i32) -> Option<bool> {
        let cell = self.get_mut(x, y)?;
        cell.is_alive = !cell.is_alive;
        Some(cell.is_alive)
    }

    /// Toggle the selection highlight at (x, y), returning the new state
    pub fn toggle_selected(&mut self, x: i32, y: i32) -> Option<bool> {
        let cell = self.get_mut(x, y)?;
        cell.selected = !cell.selected;
        Some(cell.selected)
    }

    /// Clear every selection, returning the positions that were selected
    pub fn clear_selection(&mut self) -> Vec<(i32, i32)> {
        let mut cleared = Vec::new();
        for cell in self.cells.iter_mut().filter(|c| c.selected) {
            cell.selected = false;
            cleared.push((cell.x, cell.y));
        }
        cleared
    }

    /// One row of the grid
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.rows {
            return None;
        }
        let start = y * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive).count()
    }

    /// Cells whose liveness differs from `other`, carrying this grid's state.
    ///
    /// Grids of different shape are compared over their common area only.
    pub fn diff(&self, other: &Grid) -> Vec<CellChange> {
        let mut changes = Vec::new();
        let rows = self.rows.min(other.rows);
        let cols = self.cols.min(other.cols);
        for y in 0..rows {
            for x in 0..cols {
                let mine = &self.cells[y * self.cols + x];
                let theirs = &other.cells[y * other.cols + x];
                if mine.is_alive != theirs.is_alive {
                    changes.push(CellChange::new(mine.x, mine.y, mine.is_alive));
                }
            }
        }
        changes
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            for cell in &self.cells[y * self.cols..(y + 1) * self.cols] {
                f.write_str(if cell.is_alive { "#" } else { "." })?;
            }
            if y + 1 < self.rows {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
