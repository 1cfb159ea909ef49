//! Session module - level selection and game lifecycle
//!
//! A [`Session`] owns the deck generator and at most one running game. Shells
//! hold the session and talk to the game only through it, so tearing a game
//! down (quit, restart, new level) always cancels its timers first.

use crate::deck::DeckGenerator;
use crate::error::{Rejection, Result};
use crate::game_state::{validate_level, FlipOutcome, GameEvent, GameState};
use crate::snapshot::GameSnapshot;
use crate::types::{CardIndex, GameAction, LevelConfig};

/// Result of [`Session::apply_action`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Flipped(FlipOutcome),
    PauseToggled { paused: bool },
    Restarted { episode_id: u32 },
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    deck: DeckGenerator,
    game: Option<GameState>,
    /// Monotonic episode id (increments on every new game or restart).
    episode_id: u32,
    evaluation_delay_ms: Option<u32>,
}

impl Session {
    pub fn new(deck: DeckGenerator) -> Self {
        Self {
            deck,
            game: None,
            episode_id: 0,
            evaluation_delay_ms: None,
        }
    }

    /// Override the pair evaluation delay for every game this session starts
    pub fn with_evaluation_delay(mut self, delay_ms: u32) -> Self {
        self.evaluation_delay_ms = Some(delay_ms);
        self
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.game.is_some()
    }

    pub fn level(&self) -> Option<LevelConfig> {
        self.game.as_ref().map(|g| *g.level())
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Start a fresh game on `level`, replacing any running one.
    ///
    /// On a configuration error the current game (if any) keeps running.
    pub fn new_game(&mut self, level: LevelConfig) -> Result<&GameState> {
        validate_level(&level)?;
        self.deck.check_capacity(level.pair_count())?;

        let values = self.deck.deal(&level)?;
        let mut game = GameState::new(level, &values)?.with_episode_id(self.episode_id + 1);
        if let Some(delay_ms) = self.evaluation_delay_ms {
            game = game.with_evaluation_delay(delay_ms);
        }

        self.teardown();
        self.episode_id += 1;
        tracing::info!(
            episode_id = self.episode_id,
            rows = level.rows,
            cols = level.cols,
            max_moves = ?level.max_moves,
            time_limit_secs = ?level.time_limit_secs,
            "new game"
        );
        Ok(&*self.game.insert(game))
    }

    /// Start over on the current level with a new deck
    pub fn restart(&mut self) -> Result<&GameState> {
        let level = self.level().ok_or(Rejection::NoActiveSession)?;
        self.new_game(level)
    }

    /// Discard the running game and go back to level selection.
    ///
    /// Returns false if there was nothing to quit.
    pub fn quit(&mut self) -> bool {
        let had_game = self.teardown();
        if had_game {
            tracing::info!(episode_id = self.episode_id, "game quit");
        }
        had_game
    }

    pub fn flip(&mut self, index: CardIndex) -> Result<FlipOutcome> {
        self.active_game()?.flip(index)
    }

    pub fn toggle_pause(&mut self) -> Result<bool> {
        self.active_game()?.toggle_pause()
    }

    /// Advance the running game's timers; no-op at level selection
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.game
            .as_mut()
            .map(|g| g.tick(elapsed_ms))
            .unwrap_or(false)
    }

    /// Inject one clock tick into the running game
    pub fn tick_second(&mut self) -> bool {
        self.game.as_mut().is_some_and(GameState::tick_second)
    }

    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.game.as_ref().map(GameState::snapshot)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.game
            .as_mut()
            .map(GameState::drain_events)
            .unwrap_or_default()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> Result<ActionOutcome> {
        match action {
            GameAction::Flip(index) => self.flip(index).map(ActionOutcome::Flipped),
            GameAction::Pause => self
                .toggle_pause()
                .map(|paused| ActionOutcome::PauseToggled { paused }),
            GameAction::Restart => {
                let episode_id = self.restart()?.episode_id();
                Ok(ActionOutcome::Restarted { episode_id })
            }
            GameAction::Quit => {
                if self.quit() {
                    Ok(ActionOutcome::Quit)
                } else {
                    Err(Rejection::NoActiveSession.into())
                }
            }
        }
    }

    fn active_game(&mut self) -> Result<&mut GameState> {
        self.game
            .as_mut()
            .ok_or_else(|| Rejection::NoActiveSession.into())
    }

    fn teardown(&mut self) -> bool {
        match self.game.take() {
            Some(mut game) => {
                game.cancel_timers();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, GameError};
    use crate::types::{Outcome, LEVEL_PRESETS};

    fn session() -> Session {
        Session::new(DeckGenerator::new(64, 42))
    }

    #[test]
    fn test_new_game_starts_fresh_episode() {
        let mut session = session();
        let game = session.new_game(LEVEL_PRESETS[1]).unwrap();
        assert_eq!(game.episode_id(), 1);
        assert_eq!(game.grid().len(), 16);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(session.level(), Some(LEVEL_PRESETS[1]));
    }

    #[test]
    fn test_restart_keeps_level_and_bumps_episode() {
        let mut session = session();
        session.new_game(LEVEL_PRESETS[0]).unwrap();
        session.flip(0).unwrap();

        let game = session.restart().unwrap();
        assert_eq!(game.episode_id(), 2);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.grid().revealed_count(), 0);
        assert_eq!(*game.level(), LEVEL_PRESETS[0]);
    }

    #[test]
    fn test_quit_leaves_nothing_reachable() {
        let mut session = session();
        session.new_game(LEVEL_PRESETS[0]).unwrap();
        assert!(session.quit());
        assert!(session.game().is_none());
        assert!(session.snapshot().is_none());
        assert!(!session.quit());
        assert_eq!(
            session.flip(0),
            Err(GameError::Rejected(Rejection::NoActiveSession))
        );
        assert_eq!(
            session.restart().unwrap_err(),
            GameError::Rejected(Rejection::NoActiveSession)
        );
        assert!(!session.tick(10_000));
    }

    #[test]
    fn test_config_error_keeps_current_game() {
        let mut session = Session::new(DeckGenerator::new(14, 1));
        session.new_game(LEVEL_PRESETS[1]).unwrap();
        session.flip(3).unwrap();

        let err = session.new_game(LEVEL_PRESETS[2]).unwrap_err();
        assert_eq!(
            err,
            GameError::Config(ConfigError::NotEnoughSymbols {
                requested: 18,
                available: 14
            })
        );
        let game = session.game().unwrap();
        assert_eq!(game.episode_id(), 1);
        assert_eq!(game.grid().revealed_count(), 1);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut session = session();
        assert_eq!(
            session.apply_action(GameAction::Pause),
            Err(GameError::Rejected(Rejection::NoActiveSession))
        );

        session.new_game(LEVEL_PRESETS[0]).unwrap();
        assert_eq!(
            session.apply_action(GameAction::Flip(0)),
            Ok(ActionOutcome::Flipped(FlipOutcome::FirstOfPair))
        );
        assert_eq!(
            session.apply_action(GameAction::Pause),
            Ok(ActionOutcome::PauseToggled { paused: true })
        );
        assert_eq!(
            session.apply_action(GameAction::Restart),
            Ok(ActionOutcome::Restarted { episode_id: 2 })
        );
        assert_eq!(session.apply_action(GameAction::Quit), Ok(ActionOutcome::Quit));
        assert!(!session.is_active());
    }
}
