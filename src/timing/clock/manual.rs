use super::Clock;
use crate::timing::{TimeSpan, TimeStamp};
use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};

/// A Manual Clock only moves when it is told to. Clones share the same
/// timeline, so a host (or a test) can keep one handle around to advance the
/// time while a registry owns another one.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    // The bits of an `f64` holding the seconds since the origin.
    seconds: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a new Manual Clock that stands at the origin of its timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock to the given Time Stamp. The clock may be moved
    /// backwards; stopwatches anchored to it then report less elapsed time.
    pub fn set(&self, time_stamp: TimeStamp) {
        self.seconds.store(
            time_stamp.seconds_since_origin().to_bits(),
            Ordering::SeqCst,
        );
    }

    /// Moves the clock forward by the given Time Span.
    pub fn advance(&self, span: TimeSpan) {
        let mut current = self.seconds.load(Ordering::SeqCst);
        loop {
            let next = (f64::from_bits(current) + span.total_seconds()).to_bits();
            match self.seconds.compare_exchange_weak(
                current,
                next,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return,
                Err(actual) => current = actual,
            }
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> TimeStamp {
        TimeStamp::from_seconds_since_origin(f64::from_bits(self.seconds.load(Ordering::SeqCst)))
    }
}
