use super::Clock;
use crate::timing::TimeStamp;
use std::time::Instant;

/// The System Clock measures real time with the operating system's
/// monotonic clock. Its timeline starts when the clock is created.
#[derive(Copy, Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a new System Clock whose timeline starts now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> TimeStamp {
        TimeStamp::from_seconds_since_origin(self.origin.elapsed().as_secs_f64())
    }
}
