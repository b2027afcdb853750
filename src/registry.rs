use crate::{
    settings::Settings,
    timer::TimerState,
    timing::{
        formatter::{self, Formatted, TimeFormat},
        Clock, TimeSpan,
    },
};
use alloc::string::String;
use hashbrown::HashMap;

#[cfg(feature = "std")]
use crate::timing::SystemClock;

/// A Timer Registry keeps any number of stopwatches, each identified by its
/// name. A stopwatch comes into existence the first time its name is used
/// and is never removed. All stopwatches of a registry share the registry's
/// [`Clock`].
///
/// Asking for the elapsed time or the phase of a name that has never been
/// used answers exactly like a freshly created stopwatch would, without
/// creating one.
///
/// # Examples
///
/// ```
/// use stopwatch_registry::{ManualClock, TimeSpan, TimerRegistry};
///
/// let clock = ManualClock::new();
/// let mut registry = TimerRegistry::with_clock(clock.clone());
///
/// registry.start("lap");
/// clock.advance(TimeSpan::from_seconds(3.0));
/// registry.pause("lap");
/// clock.advance(TimeSpan::from_seconds(10.0));
///
/// assert_eq!(registry.time_seconds("lap"), 3);
/// assert!(registry.is_paused("lap"));
/// assert!(!registry.is_running("lap"));
/// ```
#[derive(Debug, Clone)]
pub struct TimerRegistry<C> {
    timers: HashMap<String, TimerState>,
    clock: C,
    settings: Settings,
}

/// A Shared Registry is a wrapper around the [`TimerRegistry`] that can be
/// shared across multiple threads with multiple owners. Every operation is a
/// lookup followed by a mutation, so mutations need to hold the write lock
/// for their whole duration.
#[cfg(feature = "std")]
pub type SharedRegistry<C = SystemClock> = std::sync::Arc<parking_lot::RwLock<TimerRegistry<C>>>;

#[cfg(feature = "std")]
impl TimerRegistry<SystemClock> {
    /// Creates a new empty registry that measures real time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

#[cfg(feature = "std")]
impl Default for TimerRegistry<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimerRegistry<C> {
    /// Creates a new empty registry that measures time with the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self::with_settings(clock, Settings::default())
    }

    /// Creates a new empty registry with the given clock and settings.
    pub fn with_settings(clock: C, settings: Settings) -> Self {
        Self {
            timers: HashMap::new(),
            clock,
            settings,
        }
    }

    /// Wraps the registry so that it can be shared between threads.
    #[cfg(feature = "std")]
    pub fn into_shared(self) -> SharedRegistry<C> {
        std::sync::Arc::new(parking_lot::RwLock::new(self))
    }

    /// Returns the settings of the registry.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the clock the registry measures time with.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the stopwatch with the given name, if the name has been used
    /// by any mutating operation.
    pub fn get(&self, name: &str) -> Option<&TimerState> {
        self.timers.get(name)
    }

    fn timer_mut(&mut self, name: &str) -> &mut TimerState {
        let clock = &self.clock;
        self.timers.entry_ref(name).or_insert_with(|| {
            log::debug!(target: "Timer Registry", "Created timer {:?}", name);
            TimerState::new(clock.now())
        })
    }

    /// Starts the stopwatch from zero. A stopwatch that is already running
    /// or paused restarts from zero as well.
    pub fn start(&mut self, name: &str) {
        let now = self.clock.now();
        self.timer_mut(name).start(now);
        log::trace!(target: "Timer Registry", "Started {:?}", name);
    }

    /// Pauses the stopwatch if it is running. Does nothing otherwise.
    pub fn pause(&mut self, name: &str) {
        let now = self.clock.now();
        if self.timer_mut(name).pause(now) {
            log::trace!(target: "Timer Registry", "Paused {:?}", name);
        } else {
            log::trace!(target: "Timer Registry", "Ignored pause of {:?}, it isn't running", name);
        }
    }

    /// Resumes the stopwatch if it is paused, continuing from the elapsed
    /// time it held. Does nothing otherwise.
    pub fn resume(&mut self, name: &str) {
        let now = self.clock.now();
        if self.timer_mut(name).resume(now) {
            log::trace!(target: "Timer Registry", "Resumed {:?}", name);
        } else {
            log::trace!(target: "Timer Registry", "Ignored resume of {:?}, it isn't paused", name);
        }
    }

    /// Stops the stopwatch. Its elapsed time is held until it gets started
    /// or reset.
    pub fn stop(&mut self, name: &str) {
        let now = self.clock.now();
        self.timer_mut(name).stop(now);
        log::trace!(target: "Timer Registry", "Stopped {:?}", name);
    }

    /// Resets the stopwatch to zero without starting it.
    pub fn reset(&mut self, name: &str) {
        let now = self.clock.now();
        self.timer_mut(name).reset(now);
        log::trace!(target: "Timer Registry", "Reset {:?}", name);
    }

    /// Sets the elapsed time of the stopwatch. A running stopwatch keeps
    /// running from the new value. Negative and non-finite times are
    /// applied as they are.
    pub fn set_time(&mut self, name: &str, elapsed: impl Into<TimeSpan>) {
        let elapsed = elapsed.into();
        let now = self.clock.now();
        self.timer_mut(name).set_time(now, elapsed);
        warn_if_unusual(name, elapsed);
    }

    /// Adds the given time to the elapsed time of the stopwatch. The time
    /// may be negative to take time away.
    pub fn add_time(&mut self, name: &str, delta: impl Into<TimeSpan>) {
        let delta = delta.into();
        let now = self.clock.now();
        let timer = self.timer_mut(name);
        timer.add_time(now, delta);
        warn_if_unusual(name, timer.elapsed(now));
    }

    /// Returns the elapsed time of the stopwatch, excluding the time it
    /// spent paused.
    pub fn elapsed(&self, name: &str) -> TimeSpan {
        match self.timers.get(name) {
            Some(timer) => timer.elapsed(self.clock.now()),
            None => TimeSpan::zero(),
        }
    }

    /// Returns the elapsed time in whole seconds.
    pub fn time_seconds(&self, name: &str) -> i64 {
        formatter::whole_seconds(self.elapsed(name))
    }

    /// Returns the elapsed time in whole minutes. The minutes are not wrapped
    /// at the hour.
    pub fn minutes(&self, name: &str) -> i64 {
        formatter::total_minutes(self.elapsed(name))
    }

    /// Returns the seconds within the current minute of the elapsed time.
    pub fn seconds_only(&self, name: &str) -> i64 {
        formatter::seconds_only(self.elapsed(name))
    }

    /// Returns the elapsed time prepared for rendering in the given format.
    pub fn formatted(&self, name: &str, format: TimeFormat) -> Formatted {
        Formatted::new(self.elapsed(name), format, self.settings.minute_field)
    }

    /// Returns `true` if the stopwatch is counting. A paused stopwatch is not
    /// running.
    pub fn is_running(&self, name: &str) -> bool {
        self.timers.get(name).map_or(false, TimerState::is_running)
    }

    /// Returns `true` if the stopwatch is paused.
    pub fn is_paused(&self, name: &str) -> bool {
        self.timers.get(name).map_or(false, TimerState::is_paused)
    }
}

fn warn_if_unusual(name: &str, elapsed: TimeSpan) {
    if !elapsed.is_finite() || elapsed.is_negative() {
        log::warn!(
            target: "Timer Registry",
            "Timer {:?} now has an elapsed time of {} seconds",
            name,
            elapsed.total_seconds(),
        );
    }
}
