//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and timing logic
//! of the memory game. It has no dependencies on the terminal or any other I/O,
//! so the same code drives the interactive shell, tests and benchmarks.
//!
//! # Module Structure
//!
//! - [`deck`]: shuffled pairs of symbol ids, seedable for reproducible games
//! - [`grid`]: `rows x cols` cards and their face states
//! - [`game_state`]: flip sequencing, pair evaluation, move and time budgets
//! - [`timer`]: the level clock and the deferred pair evaluation
//! - [`session`]: level selection, restart and quit around a single game
//! - [`snapshot`]: read-only view of a game for rendering
//! - [`error`]: configuration errors and rejected actions
//!
//! # Game Rules
//!
//! - Two flips make one move. The flipped pair stays visible for 500ms, then
//!   stays up for good if the symbols match or turns back down otherwise.
//! - A game is won once every card is matched.
//! - Levels may cap moves, time, both or neither. The move cap is lost only
//!   when the count goes past it.
//! - Pause freezes both the clock and any pending evaluation.
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{DeckGenerator, Session};
//! use tui_memory_types::{LevelConfig, Outcome, EVALUATION_DELAY_MS};
//!
//! let mut session = Session::new(DeckGenerator::new(16, 7));
//! session.new_game(LevelConfig::preset(1).unwrap()).unwrap();
//!
//! // Cheat by reading the layout, then match both pairs.
//! let symbols: Vec<u32> = session
//!     .game()
//!     .unwrap()
//!     .grid()
//!     .cards()
//!     .iter()
//!     .map(|c| c.symbol)
//!     .collect();
//! for symbol in [0, 1] {
//!     let mut pair = symbols.iter().enumerate().filter(|&(_, &s)| s == symbol);
//!     let (a, _) = pair.next().unwrap();
//!     let (b, _) = pair.next().unwrap();
//!     session.flip(a).unwrap();
//!     session.flip(b).unwrap();
//!     session.tick(EVALUATION_DELAY_MS);
//! }
//!
//! assert_eq!(session.game().unwrap().outcome(), Outcome::Won);
//! ```
//!
//! # Timing
//!
//! Nothing reads wall time. Call [`Session::tick`](session::Session::tick) every
//! frame with the elapsed milliseconds; the shell uses a fixed 16ms step.

pub mod deck;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod session;
pub mod snapshot;
pub mod timer;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use deck::DeckGenerator;
pub use error::{ConfigError, GameError, Rejection, Result};
pub use game_state::{validate_level, FlipOutcome, GameEvent, GameState};
pub use grid::{Card, Grid};
pub use session::{ActionOutcome, Session};
pub use snapshot::{CardView, GameSnapshot};
pub use timer::{ClockReading, ClockTick, DelayedTask, GameClock};
