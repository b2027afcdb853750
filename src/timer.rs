//! The timer module provides the state machine of a single stopwatch.
//!
//! A stopwatch is either counting, in which case its elapsed time is the
//! difference between the current time and its reference instant, or it is
//! frozen, in which case its elapsed time is a stored value. Every
//! transition receives the current [`TimeStamp`] from the caller, so the
//! state machine itself never looks at a clock.

use crate::timing::{TimeSpan, TimeStamp};

/// Describes which phase a stopwatch is in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TimerPhase {
    /// The stopwatch hasn't been started, or has been stopped or reset.
    NotRunning,
    /// The stopwatch is counting.
    Running,
    /// The stopwatch has been started and is currently paused.
    Paused,
}

impl Default for TimerPhase {
    fn default() -> Self {
        TimerPhase::NotRunning
    }
}

/// The state of a single stopwatch.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerState {
    reference: TimeStamp,
    frozen: TimeSpan,
    phase: TimerPhase,
}

impl TimerState {
    /// Creates a stopwatch that is not running and has no elapsed time.
    pub fn new(now: TimeStamp) -> Self {
        Self {
            reference: now,
            frozen: TimeSpan::zero(),
            phase: TimerPhase::NotRunning,
        }
    }

    /// Returns the phase the stopwatch is in.
    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Returns the instant the current counting interval is anchored to.
    pub fn reference_instant(&self) -> TimeStamp {
        self.reference
    }

    /// Returns the elapsed time that is held while the stopwatch isn't
    /// counting.
    pub fn frozen_elapsed(&self) -> TimeSpan {
        self.frozen
    }

    /// Returns `true` only while the stopwatch is counting. A paused
    /// stopwatch is not considered running.
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Returns `true` while the stopwatch is paused.
    pub fn is_paused(&self) -> bool {
        self.phase == TimerPhase::Paused
    }

    /// Returns the elapsed time at the given instant.
    pub fn elapsed(&self, now: TimeStamp) -> TimeSpan {
        match self.phase {
            TimerPhase::Running => now - self.reference,
            TimerPhase::NotRunning | TimerPhase::Paused => self.frozen,
        }
    }

    /// Starts the stopwatch from zero, no matter which phase it was in.
    pub fn start(&mut self, now: TimeStamp) {
        self.reference = now;
        self.frozen = TimeSpan::zero();
        self.phase = TimerPhase::Running;
    }

    /// Pauses a counting stopwatch, holding its elapsed time. Returns whether
    /// the stopwatch was counting.
    pub fn pause(&mut self, now: TimeStamp) -> bool {
        if self.phase != TimerPhase::Running {
            return false;
        }
        self.frozen = self.elapsed(now);
        self.phase = TimerPhase::Paused;
        true
    }

    /// Resumes a paused stopwatch so that it continues counting from the
    /// elapsed time it held. Returns whether the stopwatch was paused.
    pub fn resume(&mut self, now: TimeStamp) -> bool {
        if self.phase != TimerPhase::Paused {
            return false;
        }
        self.reference = now - self.frozen;
        self.phase = TimerPhase::Running;
        true
    }

    /// Stops the stopwatch, holding its elapsed time until it is started or
    /// reset.
    pub fn stop(&mut self, now: TimeStamp) {
        self.frozen = self.elapsed(now);
        self.phase = TimerPhase::NotRunning;
    }

    /// Puts the stopwatch back into the state of a freshly created one.
    pub fn reset(&mut self, now: TimeStamp) {
        *self = Self::new(now);
    }

    /// Sets the elapsed time. A counting stopwatch keeps counting from the
    /// new value.
    pub fn set_time(&mut self, now: TimeStamp, elapsed: TimeSpan) {
        self.frozen = elapsed;
        if self.phase == TimerPhase::Running {
            self.reference = now - elapsed;
        }
    }

    /// Shifts the elapsed time by the given delta, which may be negative.
    pub fn add_time(&mut self, now: TimeStamp, delta: TimeSpan) {
        let elapsed = self.elapsed(now) + delta;
        self.set_time(now, elapsed);
    }
}
