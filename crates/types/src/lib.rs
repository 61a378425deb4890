//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (engine, terminal rendering, input mapping, configuration files).
//!
//! # Timing Constants
//!
//! Interval values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_INTERVAL_MS` | 1000 | One generation per second |
//! | `INTERVAL_MIN_MS` | 200 | Fastest accepted interval |
//! | `INTERVAL_MAX_MS` | 86 400 000 | Slowest accepted interval (one day) |
//!
//! # Canonical Thresholds
//!
//! | Threshold | Value | Meaning |
//! |-----------|-------|---------|
//! | `underpopulation` | 1 | live cell dies with this many neighbours or fewer |
//! | `overpopulation` | 4 | live cell dies with this many neighbours or more |
//! | `dead_reproduction` | 3 | dead cell is born with exactly this many |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{RuleSet, RunState, INTERVAL_MIN_MS};
//!
//! let rules = RuleSet::default();
//! assert_eq!(rules.underpopulation, 1);
//! assert_eq!(rules.overpopulation, 4);
//! assert_eq!(rules.dead_reproduction, 3);
//!
//! assert_eq!(RunState::Stopped.as_str(), "stopped");
//! assert_eq!(INTERVAL_MIN_MS, 200);
//! ```

pub mod layout;

use serde::{Deserialize, Serialize};

pub use layout::CellLayout;

/// Default interval between generations (1000ms)
pub const DEFAULT_INTERVAL_MS: u32 = 1000;

/// Fastest accepted interval (200ms)
pub const INTERVAL_MIN_MS: u32 = 200;

/// Slowest accepted interval (24h)
pub const INTERVAL_MAX_MS: u32 = 86_400_000;

/// Default number of retained generations.
///
/// A length of 1 disables history recording entirely.
pub const DEFAULT_HISTORY_LENGTH: usize = 1;

/// Upper bound offered by the interactive front-end when growing history.
pub const HISTORY_LENGTH_UI_MAX: usize = 1000;

/// Default cell size in surface units (terminal rows for the bundled front-end).
pub const DEFAULT_CELL_SIZE: u16 = 1;

/// Maximum number of queued ticks a single `advance` call will run.
pub const MAX_CATCH_UP_TICKS: u32 = 8;

/// Transition thresholds.
///
/// `reproduction_min` and `reproduction_max` are carried as configuration
/// (and round-trip through config files) but the transition rule never reads
/// them: a live cell survives whenever it is neither under- nor overpopulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub underpopulation: u8,
    pub reproduction_min: u8,
    pub reproduction_max: u8,
    pub overpopulation: u8,
    pub dead_reproduction: u8,
}

impl RuleSet {
    /// Canonical Life thresholds (B3/S23 expressed as die-at-or-below 1, die-at-or-above 4).
    pub const fn canonical() -> Self {
        Self {
            underpopulation: 1,
            reproduction_min: 2,
            reproduction_max: 3,
            overpopulation: 4,
            dead_reproduction: 3,
        }
    }

    /// Parse the compact `"under,repmin,repmax,over,birth"` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_types::RuleSet;
    ///
    /// let rules = RuleSet::parse_compact("1, 2, 3, 4, 3").unwrap();
    /// assert_eq!(rules, RuleSet::canonical());
    /// assert_eq!(RuleSet::parse_compact("1,2,3"), None);
    /// assert_eq!(RuleSet::parse_compact("1,2,3,4,x"), None);
    /// ```
    pub fn parse_compact(s: &str) -> Option<Self> {
        let mut values = [0u8; 5];
        let mut parts = s.split(',');
        for slot in values.iter_mut() {
            *slot = parts.next()?.trim().parse().ok()?;
        }
        if parts.next().is_some() {
            return None;
        }
        let [underpopulation, reproduction_min, reproduction_max, overpopulation, dead_reproduction] =
            values;
        Some(Self {
            underpopulation,
            reproduction_min,
            reproduction_max,
            overpopulation,
            dead_reproduction,
        })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::canonical()
    }
}

/// A single cell whose liveness changed, reported so renderers redraw only that cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellChange {
    pub x: i32,
    pub y: i32,
    pub is_alive: bool,
}

impl CellChange {
    pub const fn new(x: i32, y: i32, is_alive: bool) -> Self {
        Self { x, y, is_alive }
    }
}

/// Simulation run state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Stopped => "stopped",
            RunState::Running => "running",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }
}

/// User intents produced by the input layer and applied by the front-end.
///
/// Coordinates carried by `Flip` and `Select` are grid coordinates and may be
/// off-grid; the controller rejects those with [`LifeError::OutOfBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeAction {
    /// Start when stopped, stop when running
    TogglePlay,
    /// Advance exactly one generation
    Step,
    /// Stop and wipe the grid and its history
    Clear,
    /// View one generation further into the past
    StepBack,
    /// View one generation closer to the present
    StepForward,
    /// Halve the interval
    Faster,
    /// Double the interval
    Slower,
    /// Retain one more generation
    HistoryLonger,
    /// Retain one fewer generation
    HistoryShorter,
    /// Move the keyboard cursor
    MoveCursor { dx: i32, dy: i32 },
    /// Flip the cell under the keyboard cursor
    FlipAtCursor,
    /// Toggle selection of the cell under the keyboard cursor
    SelectAtCursor,
    /// Flip the cell at grid coordinates
    Flip { x: i32, y: i32 },
    /// Toggle selection at grid coordinates
    Select { x: i32, y: i32 },
    /// Clear every selection highlight
    DeselectAll,
}

/// Errors reported by engine operations.
///
/// None of these are fatal; the requested action simply had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },
    #[error("invalid value {value} for {field}")]
    InvalidConfiguration { field: &'static str, value: u64 },
    #[error("cannot edit while viewing history (step {cursor})")]
    NotLive { cursor: usize },
}
