//! Integration tests for whole games: win, both losses, pause and timing.

use tui_memory::core::{ClockReading, FlipOutcome, GameError, GameEvent, GameState, Rejection};
use tui_memory::types::{LevelConfig, Outcome, Phase, EVALUATION_DELAY_MS, TICK_MS};

fn game(level: LevelConfig, values: &[u32]) -> GameState {
    GameState::new(level, values).unwrap()
}

/// Flip two cards and let the evaluation run.
fn play_pair(state: &mut GameState, a: usize, b: usize) {
    state.flip(a).unwrap();
    state.flip(b).unwrap();
    state.tick(EVALUATION_DELAY_MS);
}

#[test]
fn test_win_on_smallest_preset() {
    let mut state = game(LevelConfig::preset(1).unwrap(), &[0, 1, 0, 1]);

    play_pair(&mut state, 0, 2);
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert_eq!(state.grid().matched_count(), 2);

    play_pair(&mut state, 1, 3);
    assert_eq!(state.outcome(), Outcome::Won);
    assert_eq!(state.phase(), Phase::Terminal);
    assert_eq!(state.moves(), 2);

    // Clock is frozen once the game is over.
    let reading = state.remaining_or_elapsed();
    assert!(!state.tick(5_000));
    assert_eq!(state.remaining_or_elapsed(), reading);
    assert_eq!(state.flip(0), Err(GameError::Rejected(Rejection::Finished)));
}

#[test]
fn test_reaching_move_budget_is_not_a_loss() {
    let mut state = game(LevelConfig::new(2, 3, Some(2), None), &[0, 1, 2, 0, 1, 2]);
    play_pair(&mut state, 0, 1);
    play_pair(&mut state, 0, 1);
    assert_eq!(state.moves(), 2);
    assert_eq!(state.outcome(), Outcome::InProgress);
}

#[test]
fn test_loss_by_moves_keeps_pair_revealed() {
    let mut state = game(LevelConfig::new(2, 3, Some(2), None), &[0, 1, 2, 0, 1, 2]);
    play_pair(&mut state, 0, 1);
    play_pair(&mut state, 0, 1);

    state.flip(0).unwrap();
    assert_eq!(state.flip(1), Ok(FlipOutcome::MoveBudgetExceeded));
    assert_eq!(state.outcome(), Outcome::LostMoves);
    assert_eq!(state.moves(), 3);
    assert!(!state.evaluation_pending());

    // The pending evaluation was cancelled: nothing resolves later.
    state.tick(EVALUATION_DELAY_MS * 4);
    assert_eq!(state.grid().revealed_count(), 2);
    assert_eq!(state.grid().matched_count(), 0);
}

#[test]
fn test_loss_by_time() {
    let mut state = game(LevelConfig::preset(1).unwrap(), &[0, 1, 0, 1]);
    state.tick(29_999);
    assert_eq!(state.remaining_or_elapsed(), ClockReading::Remaining(1));
    assert_eq!(state.outcome(), Outcome::InProgress);

    assert!(state.tick(1));
    assert_eq!(state.outcome(), Outcome::LostTime);
    assert_eq!(state.remaining_or_elapsed(), ClockReading::Remaining(0));
    assert_eq!(
        state.drain_events().last(),
        Some(&GameEvent::Finished(Outcome::LostTime))
    );
}

#[test]
fn test_unlimited_level_counts_up() {
    let mut state = game(LevelConfig::preset(4).unwrap(), &(0..32).chain(0..32).collect::<Vec<_>>());
    for _ in 0..(3_000 / TICK_MS + 1) {
        state.tick(TICK_MS);
    }
    assert_eq!(state.remaining_or_elapsed(), ClockReading::Elapsed(3));
    assert_eq!(state.outcome(), Outcome::InProgress);
}

#[test]
fn test_pause_mid_evaluation_fires_exactly_once() {
    let mut state = game(LevelConfig::new(2, 2, None, Some(30)), &[0, 1, 0, 1]);
    state.flip(0).unwrap();
    state.flip(1).unwrap();
    state.tick(300);

    assert_eq!(state.toggle_pause(), Ok(true));
    assert!(!state.tick(10_000));
    assert_eq!(state.grid().revealed_count(), 2);
    assert_eq!(state.remaining_or_elapsed(), ClockReading::Remaining(30));
    assert_eq!(state.flip(3), Err(GameError::Rejected(Rejection::Paused)));

    assert_eq!(state.toggle_pause(), Ok(false));
    assert!(!state.tick(199));
    assert!(state.evaluation_pending());
    assert!(state.tick(1));
    assert_eq!(state.grid().revealed_count(), 0);
    state.tick(EVALUATION_DELAY_MS * 2);

    let mismatches = state
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::PairMismatched { .. }))
        .count();
    assert_eq!(mismatches, 1);
}

#[test]
fn test_double_flip_same_card_is_idempotent() {
    let mut state = game(LevelConfig::unlimited(2, 2), &[0, 1, 0, 1]);
    assert_eq!(state.flip(0), Ok(FlipOutcome::FirstOfPair));
    assert_eq!(
        state.flip(0),
        Err(GameError::Rejected(Rejection::AlreadyRevealed))
    );
    assert_eq!(state.moves(), 0);
    assert_eq!(state.phase(), Phase::SelectingSecond);
    assert_eq!(state.pending(), [Some(0), None]);
}

#[test]
fn test_mismatch_round_trip() {
    let mut state = game(LevelConfig::unlimited(2, 2), &[0, 1, 0, 1]);
    play_pair(&mut state, 0, 1);
    assert_eq!(state.grid().revealed_count(), 0);
    assert_eq!(state.phase(), Phase::SelectingFirst);
    assert_eq!(state.moves(), 1);
    assert_eq!(state.flip(0), Ok(FlipOutcome::FirstOfPair));
}

#[test]
fn test_never_more_than_two_revealed() {
    let values: Vec<u32> = (0..8).chain(0..8).collect();
    let mut state = game(LevelConfig::unlimited(4, 4), &values);
    for i in 0..400usize {
        let _ = state.flip((i * 7) % 16);
        if i % 3 == 0 {
            state.tick(EVALUATION_DELAY_MS);
        }
        assert!(state.grid().revealed_count() <= 2, "step {}", i);
        if state.is_finished() {
            break;
        }
    }
}

#[test]
fn test_evaluation_resolves_before_clock_in_same_tick() {
    let mut state = game(LevelConfig::new(2, 2, None, Some(1)), &[0, 1, 0, 1]);
    play_pair(&mut state, 0, 2);
    state.flip(1).unwrap();
    state.flip(3).unwrap();

    // The last pair resolves at the same instant the single second runs out.
    state.tick(EVALUATION_DELAY_MS);
    assert_eq!(state.outcome(), Outcome::Won);
}

#[test]
fn test_classic_win_sequence_counts_three_moves() {
    let mut state = game(LevelConfig::unlimited(2, 2), &[0, 1, 0, 1]);
    play_pair(&mut state, 0, 1);
    assert_eq!(state.outcome(), Outcome::InProgress);
    play_pair(&mut state, 0, 2);
    play_pair(&mut state, 1, 3);
    assert_eq!(state.outcome(), Outcome::Won);
    assert_eq!(state.moves(), 3);
}

#[test]
fn test_second_mismatch_over_single_move_budget() {
    let mut state = game(LevelConfig::new(2, 2, Some(1), None), &[0, 1, 0, 1]);
    play_pair(&mut state, 0, 1);
    assert_eq!(state.outcome(), Outcome::InProgress);

    state.flip(0).unwrap();
    assert_eq!(state.flip(1), Ok(FlipOutcome::MoveBudgetExceeded));
    assert_eq!(state.outcome(), Outcome::LostMoves);
}

#[test]
fn test_five_second_limit_with_direct_ticks() {
    let mut state = game(LevelConfig::new(2, 2, None, Some(5)), &[0, 1, 0, 1]);
    for _ in 0..4 {
        assert!(state.tick_second());
    }
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert!(state.tick_second());
    assert_eq!(state.outcome(), Outcome::LostTime);

    for _ in 0..3 {
        assert!(!state.tick_second());
    }
    assert_eq!(state.remaining_or_elapsed(), ClockReading::Remaining(0));
}

/// Advance `total_ms` in ticks of at most `step_ms`.
fn advance(state: &mut GameState, total_ms: u32, step_ms: u32) {
    let mut left = total_ms;
    while left > 0 {
        let step = left.min(step_ms);
        state.tick(step);
        left -= step;
    }
}

/// Last pair flipped 100ms before a 1s limit, resolving 400ms after it.
fn late_final_match(step_ms: u32) -> Outcome {
    let mut state = game(LevelConfig::new(2, 2, None, Some(1)), &[0, 1, 0, 1]);
    advance(&mut state, 400, step_ms);
    state.flip(0).unwrap();
    state.flip(2).unwrap();
    advance(&mut state, 500, step_ms);
    state.flip(1).unwrap();
    state.flip(3).unwrap();
    advance(&mut state, 500, step_ms);
    state.outcome()
}

#[test]
fn test_outcome_independent_of_tick_size() {
    assert_eq!(late_final_match(4), Outcome::LostTime);
    assert_eq!(late_final_match(TICK_MS), Outcome::LostTime);
    assert_eq!(late_final_match(500), Outcome::LostTime);
    assert_eq!(late_final_match(5_000), Outcome::LostTime);
}

#[test]
fn test_single_large_tick_keeps_event_order() {
    let mut state = game(LevelConfig::new(2, 2, None, Some(30)), &[0, 1, 0, 1]);
    state.tick(700);
    state.flip(0).unwrap();
    state.flip(1).unwrap();
    state.drain_events();

    // Second due at +300ms, mismatch resolves at +500ms.
    state.tick(600);
    assert_eq!(
        state.drain_events(),
        vec![
            GameEvent::ClockTick(ClockReading::Remaining(29)),
            GameEvent::PairMismatched { first: 0, second: 1 },
        ]
    );
}

#[test]
fn test_pause_keeps_partial_second() {
    let mut state = game(LevelConfig::new(2, 2, None, Some(30)), &[0, 1, 0, 1]);
    state.tick(700);
    state.toggle_pause().unwrap();
    state.tick(5_000);
    state.toggle_pause().unwrap();

    assert!(!state.tick(299));
    assert_eq!(state.remaining_or_elapsed(), ClockReading::Remaining(30));
    assert!(state.tick(1));
    assert_eq!(state.remaining_or_elapsed(), ClockReading::Remaining(29));
}
