use thiserror::Error;

use crate::types::{CardIndex, SymbolId};

/// Why a level or deck cannot start a game.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid {rows}x{cols} must hold an even number of at least 4 cards")]
    InvalidGrid { rows: u16, cols: u16 },
    #[error("Move and time limits must be positive when set")]
    ZeroLimit,
    #[error("A deck needs at least one pair")]
    NoPairs,
    #[error("Level needs {requested} symbols but only {available} are available")]
    NotEnoughSymbols { requested: usize, available: usize },
    #[error("Deck has {actual} values for a grid of {expected} cards")]
    DeckSizeMismatch { expected: usize, actual: usize },
    #[error("Symbol {symbol} appears {count} times instead of twice")]
    UnpairedSymbol { symbol: SymbolId, count: usize },
}

/// Why an operation was refused without touching any state.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Game is paused")]
    Paused,
    #[error("Game already ended, no new moves are accepted")]
    Finished,
    #[error("Card is already face up")]
    AlreadyRevealed,
    #[error("Card is already matched")]
    AlreadyMatched,
    #[error("Card is not face up")]
    NotRevealed,
    #[error("A pair is still being evaluated")]
    EvaluationPending,
    #[error("No game in progress")]
    NoActiveSession,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Card index {index} is outside the grid of {len} cards")]
    InvalidIndex { index: CardIndex, len: usize },
    #[error("Illegal state: {0}")]
    Rejected(#[from] Rejection),
}

impl GameError {
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
