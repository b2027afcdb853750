use super::TimeStamp;

mod manual;

pub use self::manual::ManualClock;

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        mod system;
        pub use self::system::SystemClock;
    }
}

/// A Clock is the registry's only source of the current time. Stopwatches
/// don't tick; their elapsed time is derived by subtracting Time Stamps
/// handed out by the clock, so a clock only needs to be monotonic.
pub trait Clock {
    /// Returns the current point on the clock's timeline.
    fn now(&self) -> TimeStamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> TimeStamp {
        (**self).now()
    }
}
