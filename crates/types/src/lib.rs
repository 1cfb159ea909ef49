//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (core engine, terminal rendering, serialized observations).
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep of the shell loop (~60 FPS) |
//! | `EVALUATION_DELAY_MS` | 500 | How long a flipped pair stays visible before it resolves |
//! | `CLOCK_TICK_MS` | 1000 | Period of the level clock |
//!
//! # Level Presets
//!
//! | # | Grid | Max moves | Time limit |
//! |---|------|-----------|------------|
//! | 1 | 2x2 | 4 | 30s |
//! | 2 | 4x4 | 16 | 60s |
//! | 3 | 6x6 | 46 | 120s |
//! | 4 | 8x8 | - | - |
//! | 5 | 16x16 | - | - |
//! | 6 | 32x32 | - | - |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{FaceState, LevelConfig, Outcome};
//!
//! let level = LevelConfig::preset(1).unwrap();
//! assert_eq!(level.total_cards(), 4);
//! assert_eq!(level.pair_count(), 2);
//! assert_eq!(level.max_moves, Some(4));
//!
//! assert!(FaceState::Hidden.is_hidden());
//! assert!(Outcome::Won.is_terminal());
//! assert!(!Outcome::InProgress.is_terminal());
//! ```

use serde::{Deserialize, Serialize};

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Time a mismatched or matched pair stays face up before it resolves.
pub const EVALUATION_DELAY_MS: u32 = 500;

/// Period of the level clock (one second).
pub const CLOCK_TICK_MS: u32 = 1000;

/// Smallest playable grid (one 2x2 board).
pub const MIN_CARDS: usize = 4;

/// Identifier of a card face. Exactly two cards of a grid share each id.
pub type SymbolId = u32;

/// Row-major position of a card in its grid.
pub type CardIndex = usize;


/// What a single card currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceState {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, waiting for its pair to resolve.
    Revealed,
    /// Permanently face up.
    Matched,
}

impl FaceState {
    pub fn is_hidden(&self) -> bool {
        matches!(self, FaceState::Hidden)
    }

    pub fn is_face_up(&self) -> bool {
        !self.is_hidden()
    }
}

/// How a game ended, or that it has not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    /// Move budget exceeded.
    LostMoves,
    /// Time limit reached zero.
    LostTime,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::InProgress => "in_progress",
            Outcome::Won => "won",
            Outcome::LostMoves => "lost_moves",
            Outcome::LostTime => "lost_time",
        }
    }
}

/// Flip sequencing phase of a game.
///
/// The cycle goes: SelectingFirst → SelectingSecond → Evaluating → SelectingFirst,
/// until a terminal outcome moves the game to Terminal. Pause is tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    SelectingFirst,
    SelectingSecond,
    /// Two cards are face up and their resolution is scheduled.
    Evaluating,
    Terminal,
}

/// Inbound actions a shell can apply to a session.
///
/// Flip carries its target explicitly; the shell resolves the cursor position
/// to an index at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Turn over the card at the given row-major index
    Flip(CardIndex),
    /// Toggle pause state
    Pause,
    /// Start over on the same level with a fresh deck
    Restart,
    /// Tear the game down and go back to level selection
    Quit,
}

impl GameAction {
    /// Parse a non-flip action from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("pause"), Some(GameAction::Pause));
    /// assert_eq!(GameAction::from_str("Restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("flip:7"), Some(GameAction::Flip(7)));
    /// assert_eq!(GameAction::from_str("flip:x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if let Some(index) = lower.strip_prefix("flip:") {
            return index.parse().ok().map(GameAction::Flip);
        }
        match lower.as_str() {
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Flip(_) => "flip",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}

/// Immutable description of a level: grid shape plus optional budgets.
///
/// `None` for a budget means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelConfig {
    pub rows: u16,
    pub cols: u16,
    pub max_moves: Option<u32>,
    pub time_limit_secs: Option<u32>,
}

impl LevelConfig {
    pub const fn new(
        rows: u16,
        cols: u16,
        max_moves: Option<u32>,
        time_limit_secs: Option<u32>,
    ) -> Self {
        Self {
            rows,
            cols,
            max_moves,
            time_limit_secs,
        }
    }

    /// A level without move or time budget.
    pub const fn unlimited(rows: u16, cols: u16) -> Self {
        Self::new(rows, cols, None, None)
    }

    /// Look up one of the six canonical presets (1-based, as shown in the menu).
    pub fn preset(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| LEVEL_PRESETS.get(i))
            .copied()
    }

    pub const fn total_cards(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    pub const fn pair_count(&self) -> usize {
        self.total_cards() / 2
    }

    pub const fn has_limits(&self) -> bool {
        self.max_moves.is_some() || self.time_limit_secs.is_some()
    }

    /// Shape and budget sanity only; symbol availability is checked by the deck.
    pub fn is_valid(&self) -> bool {
        let cards = self.total_cards();
        cards >= MIN_CARDS
            && cards % 2 == 0
            && self.max_moves != Some(0)
            && self.time_limit_secs != Some(0)
    }
}

/// The six canonical levels, easiest first.
pub const LEVEL_PRESETS: [LevelConfig; 6] = [
    LevelConfig::new(2, 2, Some(4), Some(30)),
    LevelConfig::new(4, 4, Some(16), Some(60)),
    LevelConfig::new(6, 6, Some(46), Some(120)),
    LevelConfig::unlimited(8, 8),
    LevelConfig::unlimited(16, 16),
    LevelConfig::unlimited(32, 32),
];
