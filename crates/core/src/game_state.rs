//! Game state module - flip sequencing, match resolution and budgets
//!
//! This module ties together the grid and the timers. A game moves through
//! `SelectingFirst → SelectingSecond → Evaluating` for every pair and ends in
//! `Terminal` once it is won or a budget runs out. Pause freezes every
//! transition and both timers without changing the phase.

use crate::error::{ConfigError, Rejection, Result};
use crate::grid::Grid;
use crate::snapshot::{CardView, GameSnapshot};
use crate::timer::{ClockReading, ClockTick, DelayedTask, GameClock};
use crate::types::*;

/// Something that happened to a game, for shells that react to changes
/// instead of diffing snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CardRevealed { index: CardIndex, symbol: SymbolId },
    PairMatched { first: CardIndex, second: CardIndex },
    PairMismatched { first: CardIndex, second: CardIndex },
    Paused,
    Resumed,
    ClockTick(ClockReading),
    Finished(Outcome),
}

/// Accepted result of a flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// First card of a pair is face up
    FirstOfPair,
    /// Second card is face up and its evaluation is scheduled
    PairPending,
    /// Second card pushed the move count past the budget; the game is lost
    MoveBudgetExceeded,
}

/// Reject levels that can never be dealt, whatever the symbol set.
pub fn validate_level(level: &LevelConfig) -> Result<()> {
    let cards = level.total_cards();
    if cards < MIN_CARDS || cards % 2 != 0 {
        return Err(ConfigError::InvalidGrid {
            rows: level.rows,
            cols: level.cols,
        }
        .into());
    }
    if level.max_moves == Some(0) || level.time_limit_secs == Some(0) {
        return Err(ConfigError::ZeroLimit.into());
    }
    Ok(())
}

/// Complete state of one game
///
/// Every accepted transition is recorded as a [`GameEvent`]. The queue is only
/// emptied by [`GameState::drain_events`], so an owner that never drains it
/// keeps one `ClockTick` per elapsed second.
#[derive(Debug, Clone)]
pub struct GameState {
    level: LevelConfig,
    grid: Grid,
    phase: Phase,
    outcome: Outcome,
    /// Completed flip-pairs.
    moves: u32,
    paused: bool,
    pending_first: Option<CardIndex>,
    pending_second: Option<CardIndex>,
    evaluation: DelayedTask,
    evaluation_delay_ms: u32,
    clock: GameClock,
    /// Monotonic episode id (assigned by the session, increments on restart).
    episode_id: u32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game on `level` with the card faces laid out as `values`
    pub fn new(level: LevelConfig, values: &[SymbolId]) -> Result<Self> {
        validate_level(&level)?;
        let grid = Grid::build(&level, values)?;

        Ok(Self {
            level,
            grid,
            phase: Phase::SelectingFirst,
            outcome: Outcome::InProgress,
            moves: 0,
            paused: false,
            pending_first: None,
            pending_second: None,
            evaluation: DelayedTask::default(),
            evaluation_delay_ms: EVALUATION_DELAY_MS,
            clock: GameClock::new(level.time_limit_secs),
            episode_id: 0,
            events: Vec::new(),
        })
    }

    pub fn with_episode_id(mut self, episode_id: u32) -> Self {
        self.episode_id = episode_id;
        self
    }

    pub fn with_evaluation_delay(mut self, delay_ms: u32) -> Self {
        self.evaluation_delay_ms = delay_ms;
        self
    }

    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn pending(&self) -> [Option<CardIndex>; 2] {
        [self.pending_first, self.pending_second]
    }

    pub fn evaluation_pending(&self) -> bool {
        self.evaluation.is_pending()
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn remaining_or_elapsed(&self) -> ClockReading {
        self.clock.reading()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            level: self.level,
            cards: self.grid.cards().iter().map(CardView::from).collect(),
            moves: self.moves,
            clock: self.clock.reading(),
            paused: self.paused,
            phase: self.phase,
            outcome: self.outcome,
            pending: self.pending(),
            episode_id: self.episode_id,
        }
    }

    /// Take every event recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Turn over the card at `index`
    pub fn flip(&mut self, index: CardIndex) -> Result<FlipOutcome> {
        let card = *self.grid.card(index)?;

        if self.paused {
            return Err(Rejection::Paused.into());
        }
        if self.outcome.is_terminal() {
            return Err(Rejection::Finished.into());
        }
        match card.face {
            FaceState::Revealed => return Err(Rejection::AlreadyRevealed.into()),
            FaceState::Matched => return Err(Rejection::AlreadyMatched.into()),
            FaceState::Hidden => {}
        }
        if self.phase == Phase::Evaluating {
            return Err(Rejection::EvaluationPending.into());
        }

        self.grid.reveal(index)?;
        self.events.push(GameEvent::CardRevealed {
            index,
            symbol: card.symbol,
        });
        tracing::debug!(index, symbol = card.symbol, "card revealed");

        if self.pending_first.is_none() {
            self.pending_first = Some(index);
            self.phase = Phase::SelectingSecond;
            return Ok(FlipOutcome::FirstOfPair);
        }

        self.pending_second = Some(index);
        self.moves += 1;
        self.phase = Phase::Evaluating;
        self.evaluation.schedule(self.evaluation_delay_ms);

        if self.move_budget_exceeded() {
            self.finish(Outcome::LostMoves);
            return Ok(FlipOutcome::MoveBudgetExceeded);
        }
        Ok(FlipOutcome::PairPending)
    }

    /// Pause or resume; returns the new paused flag
    pub fn toggle_pause(&mut self) -> Result<bool> {
        if self.outcome.is_terminal() {
            return Err(Rejection::Finished.into());
        }
        self.paused = !self.paused;
        self.events.push(if self.paused {
            GameEvent::Paused
        } else {
            GameEvent::Resumed
        });
        tracing::debug!(paused = self.paused, "pause toggled");
        Ok(self.paused)
    }

    /// Main game tick - advance the pending evaluation and the clock
    ///
    /// The step is split at every due time inside it, so timers fire in the
    /// order they fall due whatever the step size. An evaluation and a clock
    /// second due at the same instant resolve evaluation first.
    ///
    /// Returns true when anything observable changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.outcome.is_terminal() {
            return false;
        }

        let mut changed = false;
        let mut left = elapsed_ms;
        while left > 0 && !self.outcome.is_terminal() {
            let step = [
                Some(left),
                self.evaluation.remaining_ms(),
                self.clock.ms_until_next_second(),
            ]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(left);
            left -= step;

            if self.evaluation.advance(step) {
                self.resolve_pending();
                changed = true;
            }
            for _ in 0..self.clock.advance(step) {
                if self.outcome.is_terminal() {
                    break;
                }
                changed |= self.count_second();
            }
        }
        changed
    }

    /// Apply one clock tick directly, bypassing millisecond accumulation
    pub fn tick_second(&mut self) -> bool {
        if self.paused || self.outcome.is_terminal() {
            return false;
        }
        self.count_second()
    }

    /// Stop both timers so nothing can fire after the game is discarded.
    ///
    /// Returns true if an evaluation was still pending.
    pub fn cancel_timers(&mut self) -> bool {
        let cancelled = self.evaluation.cancel();
        self.clock.stop();
        if cancelled {
            tracing::debug!(episode_id = self.episode_id, "pending evaluation cancelled");
        }
        cancelled
    }

    fn count_second(&mut self) -> bool {
        match self.clock.tick_second() {
            ClockTick::Counted => {
                tracing::trace!(reading = ?self.clock.reading(), "clock tick");
                self.events.push(GameEvent::ClockTick(self.clock.reading()));
                true
            }
            ClockTick::Expired => {
                self.events.push(GameEvent::ClockTick(self.clock.reading()));
                self.finish(Outcome::LostTime);
                true
            }
            ClockTick::Stopped => false,
        }
    }

    fn resolve_pending(&mut self) {
        if let Err(err) = self.evaluate() {
            tracing::error!(%err, "pair evaluation failed");
        }
    }

    /// Resolve the face-up pair: keep it if the symbols agree, hide it otherwise
    fn evaluate(&mut self) -> Result<()> {
        let (Some(first), Some(second)) = (self.pending_first, self.pending_second) else {
            self.phase = Phase::SelectingFirst;
            return Err(Rejection::NotRevealed.into());
        };

        let is_match = self.grid.card(first)?.symbol == self.grid.card(second)?.symbol;
        if is_match {
            self.grid.mark_matched(first)?;
            self.grid.mark_matched(second)?;
            self.events.push(GameEvent::PairMatched { first, second });
        } else {
            self.grid.hide(first)?;
            self.grid.hide(second)?;
            self.events.push(GameEvent::PairMismatched { first, second });
        }
        tracing::debug!(first, second, is_match, moves = self.moves, "pair evaluated");

        self.pending_first = None;
        self.pending_second = None;
        self.phase = Phase::SelectingFirst;

        if is_match {
            self.check_win();
        }
        Ok(())
    }

    fn check_win(&mut self) {
        if self.grid.is_complete() {
            self.finish(Outcome::Won);
        }
    }

    // Loss triggers once moves go past the budget, not when they reach it.
    fn move_budget_exceeded(&self) -> bool {
        self.level.max_moves.is_some_and(|max| self.moves > max)
    }

    fn finish(&mut self, outcome: Outcome) {
        if self.outcome.is_terminal() {
            return;
        }
        self.outcome = outcome;
        self.phase = Phase::Terminal;
        self.cancel_timers();
        self.events.push(GameEvent::Finished(outcome));
        tracing::info!(
            episode_id = self.episode_id,
            outcome = outcome.as_str(),
            moves = self.moves,
            clock = self.clock.reading().secs(),
            "game finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    fn game(level: LevelConfig, values: &[SymbolId]) -> GameState {
        GameState::new(level, values).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let state = game(LevelConfig::new(2, 2, Some(4), Some(30)), &[0, 1, 0, 1]);

        assert_eq!(state.phase(), Phase::SelectingFirst);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.moves(), 0);
        assert!(!state.paused());
        assert_eq!(state.pending(), [None, None]);
        assert_eq!(state.remaining_or_elapsed(), ClockReading::Remaining(30));
    }

    #[test]
    fn test_invalid_levels_rejected() {
        assert_eq!(
            GameState::new(LevelConfig::unlimited(1, 3), &[0, 0, 1]).unwrap_err(),
            GameError::Config(ConfigError::InvalidGrid { rows: 1, cols: 3 })
        );
        assert_eq!(
            GameState::new(LevelConfig::new(2, 2, Some(0), None), &[0, 1, 0, 1]).unwrap_err(),
            GameError::Config(ConfigError::ZeroLimit)
        );
    }

    #[test]
    fn test_flip_sequence_phases() {
        let mut state = game(LevelConfig::unlimited(2, 2), &[0, 1, 0, 1]);

        assert_eq!(state.flip(0), Ok(FlipOutcome::FirstOfPair));
        assert_eq!(state.phase(), Phase::SelectingSecond);
        assert_eq!(state.flip(2), Ok(FlipOutcome::PairPending));
        assert_eq!(state.phase(), Phase::Evaluating);
        assert_eq!(state.moves(), 1);
        assert!(state.evaluation_pending());

        assert!(state.tick(EVALUATION_DELAY_MS));
        assert_eq!(state.phase(), Phase::SelectingFirst);
        assert_eq!(state.grid().matched_count(), 2);
        assert_eq!(state.pending(), [None, None]);
    }

    #[test]
    fn test_third_flip_rejected_while_evaluating() {
        let mut state = game(LevelConfig::unlimited(2, 3), &[0, 1, 2, 0, 1, 2]);
        state.flip(0).unwrap();
        state.flip(1).unwrap();

        assert_eq!(
            state.flip(2),
            Err(GameError::Rejected(Rejection::EvaluationPending))
        );
        assert_eq!(
            state.flip(1),
            Err(GameError::Rejected(Rejection::AlreadyRevealed))
        );
        assert_eq!(state.grid().revealed_count(), 2);
    }

    #[test]
    fn test_invalid_index_checked_first() {
        let mut state = game(LevelConfig::unlimited(2, 2), &[0, 1, 0, 1]);
        state.toggle_pause().unwrap();
        assert_eq!(
            state.flip(9),
            Err(GameError::InvalidIndex { index: 9, len: 4 })
        );
        assert_eq!(state.flip(0), Err(GameError::Rejected(Rejection::Paused)));
    }

    #[test]
    fn test_events_follow_transitions() {
        let mut state = game(LevelConfig::unlimited(2, 2), &[0, 1, 0, 1]);
        state.flip(0).unwrap();
        state.flip(1).unwrap();
        state.tick(EVALUATION_DELAY_MS);

        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::CardRevealed { index: 0, symbol: 0 },
                GameEvent::CardRevealed { index: 1, symbol: 1 },
                GameEvent::PairMismatched { first: 0, second: 1 },
            ]
        );
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_pause_rejected_after_finish() {
        let mut state = game(LevelConfig::new(2, 2, None, Some(1)), &[0, 1, 0, 1]);
        assert!(state.tick_second());
        assert_eq!(state.outcome(), Outcome::LostTime);
        assert_eq!(
            state.toggle_pause(),
            Err(GameError::Rejected(Rejection::Finished))
        );
        assert_eq!(state.flip(0), Err(GameError::Rejected(Rejection::Finished)));
    }

    #[test]
    fn test_tick_accumulates_milliseconds_into_seconds() {
        let mut state = game(LevelConfig::new(2, 2, None, Some(30)), &[0, 1, 0, 1]);
        for _ in 0..62 {
            state.tick(TICK_MS);
        }
        // 62 * 16 = 992ms, not a full second yet.
        assert_eq!(state.remaining_or_elapsed(), ClockReading::Remaining(30));
        state.tick(TICK_MS);
        assert_eq!(state.remaining_or_elapsed(), ClockReading::Remaining(29));
    }

    #[test]
    fn test_custom_evaluation_delay() {
        let mut state =
            game(LevelConfig::unlimited(2, 2), &[0, 1, 0, 1]).with_evaluation_delay(100);
        state.flip(0).unwrap();
        state.flip(1).unwrap();
        assert!(!state.tick(99));
        assert!(state.tick(1));
        assert_eq!(state.grid().revealed_count(), 0);
    }
}
