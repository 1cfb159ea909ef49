use serde::{Deserialize, Serialize};

use crate::grid::Card;
use crate::timer::ClockReading;
use crate::types::{CardIndex, FaceState, LevelConfig, Outcome, Phase, SymbolId};

/// What a shell may know about one card.
///
/// `symbol` is only present for face-up cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardView {
    pub face: FaceState,
    pub symbol: Option<SymbolId>,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            face: card.face,
            symbol: card.face.is_face_up().then_some(card.symbol),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub level: LevelConfig,
    pub cards: Vec<CardView>,
    pub moves: u32,
    pub clock: ClockReading,
    pub paused: bool,
    pub phase: Phase,
    pub outcome: Outcome,
    pub pending: [Option<CardIndex>; 2],
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn rows(&self) -> u16 {
        self.level.rows
    }

    pub fn cols(&self) -> u16 {
        self.level.cols
    }

    pub fn card(&self, row: u16, col: u16) -> Option<CardView> {
        if row >= self.level.rows || col >= self.level.cols {
            return None;
        }
        self.cards
            .get(row as usize * self.level.cols as usize + col as usize)
            .copied()
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.face == FaceState::Matched)
            .count()
            / 2
    }

    pub fn playable(&self) -> bool {
        !self.outcome.is_terminal() && !self.paused
    }
}
