//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is diffed and flushed to the terminal.
//!
//! Views only read [`core::GameSnapshot`]s; they never touch game state.

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod renderer;
pub mod symbols;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{format_clock, GameView, Viewport};
pub use menu_view::{describe_level, MenuView};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use symbols::{symbol_color, symbol_label, SYMBOL_COUNT};
