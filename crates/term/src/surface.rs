//! TerminalSurface: the rendering collaborator for the simulation.
//!
//! It implements [`LifeObserver`], so the controller tells it exactly which
//! cells changed and it queues crossterm commands for those cells only. The
//! queued bytes are written out by [`TerminalSurface::flush_into`] once per
//! frame. A full redraw happens only on grid reset.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};
use log::warn;

use crate::core::LifeObserver;
use crate::status::StatusLine;
use crate::types::CellLayout;

/// Colours for the four cell looks plus chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub alive: Color,
    pub dead: Color,
    pub alive_selected: Color,
    pub dead_selected: Color,
    pub cursor: Color,
    pub status_fg: Color,
    pub status_bg: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Color::Rgb { r: 20, g: 20, b: 20 },
            dead: Color::Rgb { r: 235, g: 235, b: 235 },
            // Red wash over the base colour for highlighted cells.
            alive_selected: Color::Rgb { r: 120, g: 30, b: 30 },
            dead_selected: Color::Rgb { r: 230, g: 140, b: 140 },
            cursor: Color::Rgb { r: 40, g: 120, b: 220 },
            status_fg: Color::Rgb { r: 220, g: 220, b: 220 },
            status_bg: Color::Rgb { r: 30, g: 30, b: 40 },
        }
    }
}

/// What is currently painted for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Painted {
    alive: bool,
    selected: bool,
}

pub struct TerminalSurface {
    layout: CellLayout,
    palette: Palette,
    rows: usize,
    cols: usize,
    painted: Vec<Painted>,
    cursor: Option<(i32, i32)>,
    /// Last status drawn, with the width it was drawn at.
    status: Option<(StatusLine, u16)>,
    buf: Vec<u8>,
}

impl TerminalSurface {
    pub fn new(layout: CellLayout) -> Self {
        Self {
            layout,
            palette: Palette::default(),
            rows: 0,
            cols: 0,
            painted: Vec::new(),
            cursor: None,
            status: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn layout(&self) -> &CellLayout {
        &self.layout
    }

    /// Bytes queued since the last flush.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    /// Write queued bytes to `out` and clear the queue.
    pub fn flush_into(&mut self, out: &mut impl Write) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        out.write_all(&self.buf)?;
        out.flush()?;
        self.buf.clear();
        Ok(())
    }

    /// Move the keyboard cursor marker, repainting the old and new cells.
    pub fn set_cursor(&mut self, cursor: Option<(i32, i32)>) {
        if self.cursor == cursor {
            return;
        }
        let old = std::mem::replace(&mut self.cursor, cursor);
        for (x, y) in old.into_iter().chain(cursor) {
            self.repaint(x, y);
        }
    }

    /// Overwrite the status row above the grid if it changed since the last draw.
    pub fn draw_status(&mut self, status: &StatusLine, width: u16) {
        if self.status == Some((*status, width)) {
            return;
        }
        match self.queue_status(status, width) {
            Ok(()) => self.status = Some((*status, width)),
            Err(e) => warn!("status draw failed: {e}"),
        }
    }

    fn queue_status(&mut self, status: &StatusLine, width: u16) -> io::Result<()> {
        let text = status.render(width);
        let pad = (width as usize).saturating_sub(text.chars().count());
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.queue(SetForegroundColor(self.palette.status_fg))?;
        self.buf.queue(SetBackgroundColor(self.palette.status_bg))?;
        self.buf.queue(Print(text))?;
        self.buf.queue(Print(" ".repeat(pad)))?;
        self.buf.queue(ResetColor)?;
        Ok(())
    }

    fn slot(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.rows {
            return None;
        }
        Some(y as usize * self.cols + x as usize)
    }

    fn repaint(&mut self, x: i32, y: i32) {
        let Some(idx) = self.slot(x, y) else {
            return;
        };
        let look = self.painted[idx];
        if let Err(e) = self.queue_cell(x, y, look) {
            warn!("cell ({x}, {y}) draw failed: {e}");
        }
    }

    fn queue_cell(&mut self, x: i32, y: i32, look: Painted) -> io::Result<()> {
        let Some((sx, sy)) = self.layout.to_screen(x, y) else {
            return Ok(());
        };
        let bg = match (look.alive, look.selected) {
            (true, false) => self.palette.alive,
            (false, false) => self.palette.dead,
            (true, true) => self.palette.alive_selected,
            (false, true) => self.palette.dead_selected,
        };
        let w = self.layout.cell_w as usize;
        let fill = if self.cursor == Some((x, y)) && w >= 2 {
            self.buf.queue(SetForegroundColor(self.palette.cursor))?;
            format!("[{}]", " ".repeat(w - 2))
        } else {
            " ".repeat(w)
        };
        self.buf.queue(SetBackgroundColor(bg))?;
        for dy in 0..self.layout.cell_h {
            self.buf.queue(cursor::MoveTo(sx, sy.saturating_add(dy)))?;
            self.buf.queue(Print(&fill))?;
        }
        self.buf.queue(ResetColor)?;
        Ok(())
    }

    fn queue_reset(&mut self) -> io::Result<()> {
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        let row_fill = " ".repeat(self.cols * self.layout.cell_w as usize);
        self.buf.queue(SetBackgroundColor(self.palette.dead))?;
        for row in 0..(self.rows * self.layout.cell_h as usize) {
            let sy = self.layout.origin_y as usize + row;
            let Ok(sy) = u16::try_from(sy) else {
                break;
            };
            self.buf.queue(cursor::MoveTo(self.layout.origin_x, sy))?;
            self.buf.queue(Print(&row_fill))?;
        }
        self.buf.queue(ResetColor)?;
        Ok(())
    }

    #[cfg(test)]
    fn painted_at(&self, x: i32, y: i32) -> Option<Painted> {
        self.slot(x, y).map(|i| self.painted[i])
    }
}

impl LifeObserver for TerminalSurface {
    fn on_cell_changed(&mut self, x: i32, y: i32, is_alive: bool) {
        let Some(idx) = self.slot(x, y) else {
            return;
        };
        self.painted[idx].alive = is_alive;
        self.repaint(x, y);
    }

    fn on_grid_reset(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.painted.clear();
        self.painted.resize(rows * cols, Painted::default());
        if let Some((x, y)) = self.cursor {
            if self.slot(x, y).is_none() {
                self.cursor = None;
            }
        }
        self.buf.clear();
        self.status = None;
        if let Err(e) = self.queue_reset() {
            warn!("surface reset failed: {e}");
        }
        if let Some((x, y)) = self.cursor {
            self.repaint(x, y);
        }
    }

    fn on_selection_changed(&mut self, x: i32, y: i32, selected: bool) {
        let Some(idx) = self.slot(x, y) else {
            return;
        };
        self.painted[idx].selected = selected;
        self.repaint(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    fn move_to(x: u16, y: u16) -> Vec<u8> {
        let mut v = Vec::new();
        v.queue(cursor::MoveTo(x, y)).unwrap();
        v
    }

    #[test]
    fn test_reset_clears_queue_and_paints_field() {
        let mut s = TerminalSurface::new(CellLayout::new(0, 1, 2, 1));
        s.on_cell_changed(0, 0, true); // before any reset: off-grid, ignored
        assert!(s.pending().is_empty());

        s.on_grid_reset(2, 3);
        assert!(contains(s.pending(), &move_to(0, 1)));
        assert!(contains(s.pending(), &move_to(0, 2)));
        assert_eq!(s.painted_at(2, 1), Some(Painted::default()));
        assert_eq!(s.painted_at(3, 1), None);
    }

    #[test]
    fn test_change_queues_only_that_cell() {
        let mut s = TerminalSurface::new(CellLayout::new(0, 1, 2, 1));
        s.on_grid_reset(4, 4);
        let mut out = Vec::new();
        s.flush_into(&mut out).unwrap();
        assert!(s.pending().is_empty());

        s.on_cell_changed(3, 2, true);
        assert!(contains(s.pending(), &move_to(6, 3)));
        assert!(!contains(s.pending(), &move_to(0, 1)));
        assert_eq!(
            s.painted_at(3, 2),
            Some(Painted {
                alive: true,
                selected: false
            })
        );
    }

    #[test]
    fn test_selection_keeps_liveness() {
        let mut s = TerminalSurface::new(CellLayout::default());
        s.on_grid_reset(2, 2);
        s.on_cell_changed(1, 1, true);
        s.on_selection_changed(1, 1, true);
        assert_eq!(
            s.painted_at(1, 1),
            Some(Painted {
                alive: true,
                selected: true
            })
        );
    }

    #[test]
    fn test_cursor_repaints_old_and_new() {
        let mut s = TerminalSurface::new(CellLayout::new(0, 0, 2, 1));
        s.on_grid_reset(3, 3);
        s.set_cursor(Some((0, 0)));
        let mut out = Vec::new();
        s.flush_into(&mut out).unwrap();

        s.set_cursor(Some((1, 0)));
        assert!(contains(s.pending(), &move_to(0, 0)));
        assert!(contains(s.pending(), &move_to(2, 0)));
        assert!(contains(s.pending(), b"[]"));
    }

    #[test]
    fn test_status_redraws_only_on_change_or_reset() {
        let mut s = TerminalSurface::new(CellLayout::new(0, 1, 2, 1));
        s.on_grid_reset(2, 2);
        let status = StatusLine {
            state: crate::types::RunState::Stopped,
            generation: 0,
            interval_ms: 1000,
            cursor: 0,
            retained: 0,
            capacity: 1,
            live: 0,
        };
        s.draw_status(&status, 40);
        let mut out = Vec::new();
        s.flush_into(&mut out).unwrap();

        s.draw_status(&status, 40);
        assert!(s.pending().is_empty());

        s.on_grid_reset(2, 2);
        s.flush_into(&mut out).unwrap();
        s.draw_status(&status, 40);
        assert!(contains(s.pending(), b"STOPPED"));
    }

    #[test]
    fn test_flush_writes_and_empties() {
        let mut s = TerminalSurface::new(CellLayout::default());
        s.on_grid_reset(1, 1);
        let queued = s.pending().len();
        let mut out = Vec::new();
        s.flush_into(&mut out).unwrap();
        assert_eq!(out.len(), queued);
        assert!(s.pending().is_empty());
    }
}
