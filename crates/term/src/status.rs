//! One-line status summary shown above the grid.
//!
//! Pure formatting; no I/O.

use crate::core::{LifeObserver, SimulationController};
use crate::types::RunState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub state: RunState,
    pub generation: u64,
    pub interval_ms: u32,
    pub cursor: usize,
    pub retained: usize,
    pub capacity: usize,
    pub live: usize,
}

impl StatusLine {
    pub fn from_controller<O: LifeObserver>(life: &SimulationController<O>) -> Self {
        Self {
            state: life.run_state(),
            generation: life.generation(),
            interval_ms: life.interval_time(),
            cursor: life.cursor(),
            retained: life.history().len(),
            capacity: life.history_length(),
            live: life.displayed().live_count(),
        }
    }

    /// Render into at most `width` characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_term::StatusLine;
    /// use tui_life_term::types::RunState;
    ///
    /// let line = StatusLine {
    ///     state: RunState::Running,
    ///     generation: 12,
    ///     interval_ms: 250,
    ///     cursor: 0,
    ///     retained: 3,
    ///     capacity: 10,
    ///     live: 5,
    /// };
    /// assert_eq!(
    ///     line.render(80),
    ///     "RUNNING | gen 12 | 250ms | history 3/10 | live 5"
    /// );
    /// assert_eq!(line.render(7), "RUNNING");
    /// ```
    pub fn render(&self, width: u16) -> String {
        let state = match self.cursor {
            0 => self.state.as_str().to_uppercase(),
            back => format!("REWOUND -{back}"),
        };
        let text = format!(
            "{state} | gen {} | {}ms | history {}/{} | live {}",
            self.generation, self.interval_ms, self.retained, self.capacity, self.live
        );
        text.chars().take(width as usize).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LifeConfig;

    #[test]
    fn test_reflects_history_cursor() {
        let config = LifeConfig {
            history_length: 4,
            ..LifeConfig::default()
        };
        let mut life = SimulationController::headless(config, 4, 4);
        life.edit_cell(1, 1).unwrap();
        life.tick();
        life.tick();
        assert!(life.step_back());

        let line = StatusLine::from_controller(&life);
        assert_eq!(line.cursor, 1);
        assert_eq!(line.retained, 2);
        assert!(line.render(80).starts_with("REWOUND -1 | gen 2"));
    }
}
