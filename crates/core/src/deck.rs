//! Deck module - shuffled pairs of symbol ids
//!
//! A deck for `n` pairs holds every id in `0..n` exactly twice, shuffled with
//! Fisher-Yates so every arrangement is equally likely. The generator is seeded
//! from the OS in production and reseedable for deterministic tests.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{ConfigError, Result};
use crate::types::{LevelConfig, SymbolId};

/// Builds shuffled decks, bounded by how many distinct faces the shell can show.
#[derive(Debug, Clone)]
pub struct DeckGenerator {
    rng: StdRng,
    available_symbols: usize,
}

impl DeckGenerator {
    /// Create a generator with a fixed seed
    pub fn new(available_symbols: usize, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            available_symbols,
        }
    }

    /// Create a generator seeded from operating system entropy
    pub fn from_entropy(available_symbols: usize) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            available_symbols,
        }
    }

    /// Restart the random sequence from `seed`
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Check that a level can be dealt from this generator's symbol set
    pub fn check_capacity(&self, pair_count: usize) -> Result<()> {
        if pair_count == 0 {
            return Err(ConfigError::NoPairs.into());
        }
        if pair_count > self.available_symbols {
            return Err(ConfigError::NotEnoughSymbols {
                requested: pair_count,
                available: self.available_symbols,
            }
            .into());
        }
        Ok(())
    }

    /// Generate `2 * pair_count` values, each id in `0..pair_count` twice
    pub fn generate_values(&mut self, pair_count: usize) -> Result<Vec<SymbolId>> {
        self.check_capacity(pair_count)?;

        let mut values: Vec<SymbolId> = (0..pair_count as SymbolId)
            .chain(0..pair_count as SymbolId)
            .collect();
        values.shuffle(&mut self.rng);

        tracing::debug!(pair_count, "dealt deck");
        Ok(values)
    }

    /// Deal a deck sized for `level`
    pub fn deal(&mut self, level: &LevelConfig) -> Result<Vec<SymbolId>> {
        self.generate_values(level.pair_count())
    }
}
