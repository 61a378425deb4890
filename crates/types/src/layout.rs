//! Mapping between grid coordinates and surface (terminal) coordinates.

/// Placement of the grid on a character surface.
///
/// Each grid cell covers `cell_w × cell_h` surface units, starting at
/// `(origin_x, origin_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl Default for CellLayout {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            origin_x: 0,
            origin_y: 0,
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl CellLayout {
    pub fn new(origin_x: u16, origin_y: u16, cell_w: u16, cell_h: u16) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Layout for a square logical cell of `cell_size` rows, doubled horizontally.
    pub fn for_cell_size(cell_size: u16) -> Self {
        let size = cell_size.max(1);
        Self::new(0, 0, size.saturating_mul(2), size)
    }

    /// Top-left surface position of grid cell `(x, y)`.
    ///
    /// Returns `None` for negative coordinates or when the position overflows `u16`.
    pub fn to_screen(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        let sx = self.origin_x.checked_add(x.checked_mul(self.cell_w)?)?;
        let sy = self.origin_y.checked_add(y.checked_mul(self.cell_h)?)?;
        Some((sx, sy))
    }

    /// Grid cell covering surface position `(col, row)`.
    ///
    /// Positions left of or above the origin map to `None`. Positions beyond
    /// the grid's far edge still produce coordinates; bounds checking against
    /// the actual grid is the engine's job.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_types::CellLayout;
    ///
    /// let layout = CellLayout::new(0, 1, 2, 1);
    /// assert_eq!(layout.to_grid(5, 3), Some((2, 2)));
    /// assert_eq!(layout.to_grid(5, 0), None);
    /// ```
    pub fn to_grid(&self, col: u16, row: u16) -> Option<(i32, i32)> {
        let dx = col.checked_sub(self.origin_x)?;
        let dy = row.checked_sub(self.origin_y)?;
        Some(((dx / self.cell_w) as i32, (dy / self.cell_h) as i32))
    }

    /// Number of whole `(rows, cols)` that fit in a `width × height` area past the origin.
    pub fn grid_dims(&self, width: u16, height: u16) -> (usize, usize) {
        let w = width.saturating_sub(self.origin_x);
        let h = height.saturating_sub(self.origin_y);
        ((h / self.cell_h) as usize, (w / self.cell_w) as usize)
    }
}
