//! Core simulation engine - pure, deterministic, and testable
//!
//! This crate contains the cellular automaton itself: the grid, neighbour
//! evaluation, the generation transition, bounded history, and the controller
//! that orchestrates them. It has **no dependencies** on terminals, files, or
//! clocks, making it:
//!
//! - **Deterministic**: the same edits and elapsed times produce the same generations
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Portable**: any front-end drives it through [`SimulationController`]
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size cell field with bounds-checked access
//! - [`neighbors`]: Moore-neighbourhood live counts
//! - [`transition`]: one in-place generation sweep under a [`RuleSet`](types::RuleSet)
//! - [`history`]: bounded snapshot store with a navigation cursor
//! - [`timer`]: cooperative periodic tick source
//! - [`observer`]: notification seam for the rendering collaborator
//! - [`controller`]: start/stop/step state machine, editing, and history navigation
//! - [`config`]: defaults, JSON and environment overrides
//!
//! # Example
//!
//! ```
//! use tui_life_core::{LifeConfig, SimulationController};
//!
//! let mut life = SimulationController::headless(LifeConfig::default(), 5, 5);
//!
//! // A vertical blinker.
//! for y in 1..=3 {
//!     life.edit_cell(2, y).unwrap();
//! }
//!
//! let changes = life.tick();
//! assert_eq!(changes.len(), 4);
//! assert!(life.grid().get(1, 2).unwrap().is_alive());
//! assert!(!life.grid().get(2, 1).unwrap().is_alive());
//! ```
//!
//! # Timing
//!
//! Call [`SimulationController::advance`] from the front-end loop with the
//! elapsed milliseconds; due generations run sequentially inside that call.

pub mod config;
pub mod controller;
pub mod grid;
pub mod history;
pub mod neighbors;
pub mod observer;
pub mod timer;
pub mod transition;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use config::LifeConfig;
pub use controller::{CellView, SimulationController};
pub use grid::{Cell, CellId, Grid};
pub use history::{HistoryStore, HistoryView};
pub use neighbors::{count_live_neighbors, neighbors_of};
pub use observer::{LifeObserver, NullObserver, ObserverEvent, RecordingObserver};
pub use timer::TickTimer;
pub use transition::step;
