//! Front-end glue: applies [`LifeAction`]s to a controller and tracks the
//! keyboard cursor.

use log::debug;

use crate::core::{LifeObserver, SimulationController};
use crate::types::{LifeAction, LifeError, HISTORY_LENGTH_UI_MAX, INTERVAL_MAX_MS, INTERVAL_MIN_MS};

pub struct App<O: LifeObserver> {
    life: SimulationController<O>,
    cursor: (i32, i32),
}

impl<O: LifeObserver> App<O> {
    pub fn new(life: SimulationController<O>) -> Self {
        Self {
            life,
            cursor: (0, 0),
        }
    }

    pub fn life(&self) -> &SimulationController<O> {
        &self.life
    }

    pub fn life_mut(&mut self) -> &mut SimulationController<O> {
        &mut self.life
    }

    /// Keyboard cursor, always inside the grid (or `(0, 0)` for an empty grid).
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// Recreate the grid for a new surface size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.life.resize_to_viewport(width, height);
        self.cursor = self.clamp(self.cursor.0, self.cursor.1);
    }

    /// Apply one action. Returns whether it had any effect.
    pub fn apply(&mut self, action: LifeAction) -> bool {
        match action {
            LifeAction::TogglePlay => {
                self.life.toggle();
                true
            }
            LifeAction::Step => {
                self.life.stop();
                self.life.tick();
                true
            }
            LifeAction::Clear => {
                self.life.clear();
                true
            }
            LifeAction::StepBack => self.life.step_back(),
            LifeAction::StepForward => self.life.step_forward(),
            LifeAction::Faster => {
                let ms = (self.life.interval_time() / 2).max(INTERVAL_MIN_MS);
                self.change_interval(ms)
            }
            LifeAction::Slower => {
                let ms = self.life.interval_time().saturating_mul(2).min(INTERVAL_MAX_MS);
                self.change_interval(ms)
            }
            LifeAction::HistoryLonger => {
                let len = (self.life.history_length() + 1).min(HISTORY_LENGTH_UI_MAX);
                report(self.life.set_history_length(len))
            }
            LifeAction::HistoryShorter => {
                let len = self.life.history_length().saturating_sub(1);
                report(self.life.set_history_length(len))
            }
            LifeAction::MoveCursor { dx, dy } => {
                let next = self.clamp(self.cursor.0 + dx, self.cursor.1 + dy);
                let moved = next != self.cursor;
                self.cursor = next;
                moved
            }
            LifeAction::FlipAtCursor => {
                let (x, y) = self.cursor;
                report(self.life.edit_cell(x, y))
            }
            LifeAction::SelectAtCursor => {
                let (x, y) = self.cursor;
                report(self.life.select(x, y))
            }
            LifeAction::Flip { x, y } => {
                let flipped = report(self.life.edit_cell(x, y));
                if self.life.grid().contains(x, y) {
                    self.cursor = (x, y);
                }
                flipped
            }
            LifeAction::Select { x, y } => report(self.life.select(x, y)),
            LifeAction::DeselectAll => self.life.deselect_all() > 0,
        }
    }

    fn change_interval(&mut self, ms: u32) -> bool {
        if ms == self.life.interval_time() {
            return false;
        }
        report(self.life.set_interval_time(ms))
    }

    fn clamp(&self, x: i32, y: i32) -> (i32, i32) {
        let max_x = self.life.grid().cols().saturating_sub(1) as i32;
        let max_y = self.life.grid().rows().saturating_sub(1) as i32;
        (x.clamp(0, max_x), y.clamp(0, max_y))
    }
}

fn report<T>(result: Result<T, LifeError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            debug!("action had no effect: {e}");
            false
        }
    }
}
