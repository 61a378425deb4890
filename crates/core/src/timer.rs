//! Cooperative periodic tick source.
//!
//! The timer never fires by itself; the owner feeds it elapsed time via
//! [`TickTimer::advance`] and runs the returned number of ticks. There is only
//! ever one schedule: arming cancels whatever was pending.

use crate::types::MAX_CATCH_UP_TICKS;

#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    interval_ms: u32,
    accumulated_ms: u64,
    armed: bool,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)arm at `interval_ms`, discarding any partially elapsed period.
    pub fn start(&mut self, interval_ms: u32) {
        self.cancel();
        self.interval_ms = interval_ms.max(1);
        self.armed = true;
    }

    /// Disarm and drop any partially elapsed period.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.accumulated_ms = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time left until the next tick, if armed.
    pub fn remaining_ms(&self) -> Option<u64> {
        if !self.armed {
            return None;
        }
        Some((self.interval_ms as u64).saturating_sub(self.accumulated_ms))
    }

    /// Account for `elapsed_ms` and return how many ticks are now due.
    ///
    /// At most [`MAX_CATCH_UP_TICKS`] are returned per call; a larger backlog
    /// is dropped rather than replayed.
    pub fn advance(&mut self, elapsed_ms: u64) -> u32 {
        if !self.armed {
            return 0;
        }
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        let interval = self.interval_ms as u64;
        let due = self.accumulated_ms / interval;
        self.accumulated_ms %= interval;
        due.min(MAX_CATCH_UP_TICKS as u64) as u32
    }
}
