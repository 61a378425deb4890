//! Terminal rendering collaborator.
//!
//! This crate draws the simulation in a terminal without a widget toolkit.
//! The controller pushes changes into a [`TerminalSurface`] through the
//! observer trait, and the surface turns each change into a handful of
//! crossterm commands.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Redraw only the cells the engine reports as changed
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod session;
pub mod status;
pub mod surface;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use session::TerminalSession;
pub use status::StatusLine;
pub use surface::{Palette, TerminalSurface};
