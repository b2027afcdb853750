use core::{
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    time::Duration as StdDuration,
};
use time::Duration;

/// A Time Span represents a signed span of time, measured in seconds. Unlike
/// a [`Duration`], a Time Span carries whatever value it is given: it may be
/// negative and it may even be NaN or infinite. Hosts can set a stopwatch to
/// such values and they propagate into every derived representation.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct TimeSpan(f64);

impl TimeSpan {
    /// Creates a new Time Span of zero length.
    pub const fn zero() -> Self {
        TimeSpan(0.0)
    }

    /// Creates a new Time Span from a given amount of seconds.
    pub const fn from_seconds(seconds: f64) -> Self {
        TimeSpan(seconds)
    }

    /// Creates a new Time Span from a given amount of milliseconds.
    pub fn from_milliseconds(milliseconds: f64) -> Self {
        TimeSpan(milliseconds / 1000.0)
    }

    /// Returns the total amount of seconds (including decimals) this Time
    /// Span represents.
    pub const fn total_seconds(self) -> f64 {
        self.0
    }

    /// Returns the total amount of milliseconds (including decimals) this
    /// Time Span represents.
    pub fn total_milliseconds(self) -> f64 {
        self.0 * 1000.0
    }

    /// Converts the Time Span into a [`Duration`]. Returns `None` if the
    /// Time Span is not finite or too large to be represented.
    pub fn to_duration(self) -> Option<Duration> {
        // i64::MAX seconds, rounded down so that the cast can't overflow.
        const MAX_SECONDS: f64 = 9.2e18;
        if self.0.is_finite() && libm::fabs(self.0) < MAX_SECONDS {
            Some(Duration::seconds_f64(self.0))
        } else {
            None
        }
    }

    /// Returns `true` if the Time Span is neither infinite nor NaN.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Returns `true` if the Time Span is strictly less than zero.
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }
}

impl From<f64> for TimeSpan {
    fn from(seconds: f64) -> Self {
        TimeSpan(seconds)
    }
}

impl From<Duration> for TimeSpan {
    fn from(duration: Duration) -> Self {
        TimeSpan(duration.as_seconds_f64())
    }
}

impl From<StdDuration> for TimeSpan {
    fn from(duration: StdDuration) -> Self {
        TimeSpan(duration.as_secs_f64())
    }
}

impl Add for TimeSpan {
    type Output = TimeSpan;
    fn add(self, rhs: TimeSpan) -> TimeSpan {
        TimeSpan(self.0 + rhs.0)
    }
}

impl Sub for TimeSpan {
    type Output = TimeSpan;
    fn sub(self, rhs: TimeSpan) -> TimeSpan {
        TimeSpan(self.0 - rhs.0)
    }
}

impl AddAssign for TimeSpan {
    fn add_assign(&mut self, rhs: TimeSpan) {
        self.0 += rhs.0;
    }
}

impl SubAssign for TimeSpan {
    fn sub_assign(&mut self, rhs: TimeSpan) {
        self.0 -= rhs.0;
    }
}

impl Neg for TimeSpan {
    type Output = TimeSpan;
    fn neg(self) -> TimeSpan {
        TimeSpan(-self.0)
    }
}
