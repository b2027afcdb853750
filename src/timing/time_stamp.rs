use super::TimeSpan;
use core::ops::{Add, Sub};

/// A Time Stamp is a point on the timeline of a [`Clock`](super::Clock). It
/// is only meaningful in relation to other Time Stamps of the same clock:
/// subtracting two of them yields the [`TimeSpan`] between them.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct TimeStamp(f64);

impl TimeStamp {
    /// Creates a Time Stamp that lies the given amount of seconds after the
    /// origin of its clock's timeline.
    pub const fn from_seconds_since_origin(seconds: f64) -> Self {
        TimeStamp(seconds)
    }

    /// Returns the amount of seconds between the origin of the clock's
    /// timeline and this Time Stamp.
    pub const fn seconds_since_origin(self) -> f64 {
        self.0
    }
}

impl Sub for TimeStamp {
    type Output = TimeSpan;
    fn sub(self, rhs: TimeStamp) -> TimeSpan {
        TimeSpan::from_seconds(self.0 - rhs.0)
    }
}

impl Sub<TimeSpan> for TimeStamp {
    type Output = TimeStamp;
    fn sub(self, rhs: TimeSpan) -> TimeStamp {
        TimeStamp(self.0 - rhs.total_seconds())
    }
}

impl Add<TimeSpan> for TimeStamp {
    type Output = TimeStamp;
    fn add(self, rhs: TimeSpan) -> TimeStamp {
        TimeStamp(self.0 + rhs.total_seconds())
    }
}
