//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` events. It maps key presses and mouse clicks into
//! [`crate::types::LifeAction`], translating terminal positions into grid
//! coordinates with a [`crate::types::CellLayout`].

pub mod map;

pub use tui_life_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit};
