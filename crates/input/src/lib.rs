//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` key events. It maps keys into [`KeyAction`]s and tracks the
//! card cursor; turning a cursor position into a
//! [`crate::types::GameAction::Flip`] is the shell's job.

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::GridCursor;
pub use map::{handle_key_event, should_quit, KeyAction};
