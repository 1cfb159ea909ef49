//! Timer module - the level clock and the deferred pair evaluation
//!
//! Nothing here reads wall time. The owner feeds elapsed milliseconds in from its
//! fixed-step loop, so pausing is simply not feeding time, and tests can step
//! the clock deterministically.

use serde::{Deserialize, Serialize};

use crate::types::CLOCK_TICK_MS;

/// A one-shot, cancellable countdown.
///
/// Used for the delay between flipping the second card of a pair and resolving it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelayedTask {
    remaining_ms: Option<u32>,
}

impl DelayedTask {
    pub fn schedule(&mut self, delay_ms: u32) {
        self.remaining_ms = Some(delay_ms);
    }

    pub fn cancel(&mut self) -> bool {
        self.remaining_ms.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.remaining_ms.is_some()
    }

    pub fn remaining_ms(&self) -> Option<u32> {
        self.remaining_ms
    }

    /// Advance by `elapsed_ms`; returns true exactly once, when the delay runs out
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let Some(remaining) = self.remaining_ms else {
            return false;
        };
        let remaining = remaining.saturating_sub(elapsed_ms);
        if remaining == 0 {
            self.remaining_ms = None;
            true
        } else {
            self.remaining_ms = Some(remaining);
            false
        }
    }
}

/// What the clock shows: a countdown for timed levels, a stopwatch otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "secs")]
pub enum ClockReading {
    Remaining(u32),
    Elapsed(u32),
}

impl ClockReading {
    pub fn secs(&self) -> u32 {
        match *self {
            ClockReading::Remaining(s) | ClockReading::Elapsed(s) => s,
        }
    }
}

/// Result of one clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    Counted,
    /// The time limit was just reached.
    Expired,
    /// The clock was already stopped; nothing changed.
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameClock {
    limit_secs: Option<u32>,
    elapsed_secs: u32,
    carry_ms: u32,
    stopped: bool,
}

impl GameClock {
    pub fn new(limit_secs: Option<u32>) -> Self {
        Self {
            limit_secs,
            elapsed_secs: 0,
            carry_ms: 0,
            stopped: false,
        }
    }

    pub fn limit_secs(&self) -> Option<u32> {
        self.limit_secs
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn remaining_secs(&self) -> Option<u32> {
        self.limit_secs
            .map(|limit| limit.saturating_sub(self.elapsed_secs))
    }

    pub fn reading(&self) -> ClockReading {
        match self.remaining_secs() {
            Some(remaining) => ClockReading::Remaining(remaining),
            None => ClockReading::Elapsed(self.elapsed_secs),
        }
    }

    pub fn stop(&mut self) {
        self.stopped = true;
        self.carry_ms = 0;
    }

    /// Milliseconds until the next whole second is due; `None` once stopped
    pub fn ms_until_next_second(&self) -> Option<u32> {
        (!self.stopped).then(|| CLOCK_TICK_MS - self.carry_ms)
    }

    /// Accumulate `elapsed_ms` and return how many whole seconds became due.
    ///
    /// The caller applies them one at a time with [`GameClock::tick_second`] so it
    /// can react to expiry in between.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.stopped {
            return 0;
        }
        let total = self.carry_ms.saturating_add(elapsed_ms);
        self.carry_ms = total % CLOCK_TICK_MS;
        total / CLOCK_TICK_MS
    }

    /// Count one second
    pub fn tick_second(&mut self) -> ClockTick {
        if self.stopped {
            return ClockTick::Stopped;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        match self.limit_secs {
            Some(limit) if self.elapsed_secs >= limit => {
                self.stop();
                ClockTick::Expired
            }
            _ => ClockTick::Counted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delayed_task_fires_once() {
        let mut task = DelayedTask::default();
        assert!(!task.advance(1000));

        task.schedule(500);
        assert!(!task.advance(200));
        assert_eq!(task.remaining_ms(), Some(300));
        assert!(task.advance(300));
        assert!(!task.is_pending());
        assert!(!task.advance(500));
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut task = DelayedTask::default();
        task.schedule(500);
        assert!(task.cancel());
        assert!(!task.cancel());
        assert!(!task.advance(1000));
    }

    #[test]
    fn clock_counts_down_and_expires() {
        let mut clock = GameClock::new(Some(3));
        assert_eq!(clock.reading(), ClockReading::Remaining(3));
        assert_eq!(clock.tick_second(), ClockTick::Counted);
        assert_eq!(clock.tick_second(), ClockTick::Counted);
        assert_eq!(clock.reading(), ClockReading::Remaining(1));
        assert_eq!(clock.tick_second(), ClockTick::Expired);
        assert_eq!(clock.reading(), ClockReading::Remaining(0));
        assert_eq!(clock.tick_second(), ClockTick::Stopped);
        assert_eq!(clock.elapsed_secs(), 3);
    }

    #[test]
    fn unlimited_clock_is_a_stopwatch() {
        let mut clock = GameClock::new(None);
        for _ in 0..100 {
            assert_eq!(clock.tick_second(), ClockTick::Counted);
        }
        assert_eq!(clock.reading(), ClockReading::Elapsed(100));
    }

    #[test]
    fn next_second_due_time_follows_carry() {
        let mut clock = GameClock::new(Some(10));
        assert_eq!(clock.ms_until_next_second(), Some(1000));
        clock.advance(700);
        assert_eq!(clock.ms_until_next_second(), Some(300));
        clock.stop();
        assert_eq!(clock.ms_until_next_second(), None);
    }

    #[test]
    fn advance_carries_partial_seconds() {
        let mut clock = GameClock::new(None);
        assert_eq!(clock.advance(600), 0);
        assert_eq!(clock.advance(600), 1);
        assert_eq!(clock.advance(2_800), 3);
        clock.stop();
        assert_eq!(clock.advance(5_000), 0);
    }
}
