//! Grid module - per-card face state
//!
//! The grid is `rows x cols` cards stored row-major in a flat vector
//! (index = row * cols + col). Every mutation targets exactly one card and
//! either succeeds or leaves the grid untouched.

use std::collections::HashMap;

use crate::error::{ConfigError, GameError, Rejection, Result};
use crate::types::{CardIndex, FaceState, LevelConfig, SymbolId};

/// One card of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub index: CardIndex,
    pub symbol: SymbolId,
    pub face: FaceState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u16,
    cols: u16,
    cards: Vec<Card>,
}

impl Grid {
    /// Lay out `values` row-major, all face down
    pub fn build(level: &LevelConfig, values: &[SymbolId]) -> Result<Self> {
        let expected = level.total_cards();
        if values.len() != expected {
            return Err(ConfigError::DeckSizeMismatch {
                expected,
                actual: values.len(),
            }
            .into());
        }

        let mut counts: HashMap<SymbolId, usize> = HashMap::with_capacity(expected / 2);
        for &symbol in values {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        if let Some((&symbol, &count)) = counts.iter().find(|&(_, &count)| count != 2) {
            return Err(ConfigError::UnpairedSymbol { symbol, count }.into());
        }

        let cards = values
            .iter()
            .enumerate()
            .map(|(index, &symbol)| Card {
                index,
                symbol,
                face: FaceState::Hidden,
            })
            .collect();

        Ok(Self {
            rows: level.rows,
            cols: level.cols,
            cards,
        })
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: CardIndex) -> Result<&Card> {
        self.cards.get(index).ok_or(GameError::InvalidIndex {
            index,
            len: self.cards.len(),
        })
    }

    /// `(row, col)` of a card
    pub fn position(&self, index: CardIndex) -> Result<(u16, u16)> {
        self.card(index)?;
        let cols = self.cols as usize;
        Ok(((index / cols) as u16, (index % cols) as u16))
    }

    /// Index of the card at `(row, col)`, if inside the grid
    pub fn index_of(&self, row: u16, col: u16) -> Option<CardIndex> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Turn a face-down card up
    pub fn reveal(&mut self, index: CardIndex) -> Result<()> {
        match self.card(index)?.face {
            FaceState::Hidden => {
                self.cards[index].face = FaceState::Revealed;
                Ok(())
            }
            FaceState::Revealed => Err(Rejection::AlreadyRevealed.into()),
            FaceState::Matched => Err(Rejection::AlreadyMatched.into()),
        }
    }

    /// Turn a revealed card back down
    pub fn hide(&mut self, index: CardIndex) -> Result<()> {
        self.transition_revealed(index, FaceState::Hidden)
    }

    /// Lock a revealed card face up for good
    pub fn mark_matched(&mut self, index: CardIndex) -> Result<()> {
        self.transition_revealed(index, FaceState::Matched)
    }

    fn transition_revealed(&mut self, index: CardIndex, to: FaceState) -> Result<()> {
        match self.card(index)?.face {
            FaceState::Revealed => {
                self.cards[index].face = to;
                Ok(())
            }
            FaceState::Matched => Err(Rejection::AlreadyMatched.into()),
            FaceState::Hidden => Err(Rejection::NotRevealed.into()),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|c| c.face == FaceState::Matched)
    }

    pub fn revealed_count(&self) -> usize {
        self.count_faces(FaceState::Revealed)
    }

    pub fn matched_count(&self) -> usize {
        self.count_faces(FaceState::Matched)
    }

    fn count_faces(&self, face: FaceState) -> usize {
        self.cards.iter().filter(|c| c.face == face).count()
    }
}
