//! The formatter module turns the elapsed time of a stopwatch into the
//! representations hosts display: whole seconds, a minute / second
//! decomposition and the formatted strings of the format menu.
//!
//! All values are derived by flooring the elapsed time in seconds. Negative
//! and non-finite elapsed times are not rejected, they simply flow through
//! the arithmetic, so `-5.5` seconds are shown as `-1:-6` in `M:SS`.

use super::TimeSpan;
use core::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

/// The formats a stopwatch's elapsed time can be rendered in. Hosts offer
/// these as a closed menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeFormat {
    /// The total amount of whole seconds, unpadded. `SS`
    #[serde(rename = "SS")]
    Seconds,
    /// Minutes unpadded, seconds padded to two digits. `M:SS`
    #[serde(rename = "M:SS")]
    MinutesSeconds,
    /// Minutes and seconds, each padded to two digits. `MM:SS`
    #[serde(rename = "MM:SS")]
    PaddedMinutesSeconds,
    /// Hours, minutes within the hour and seconds, each padded to two
    /// digits. `HH:MM:SS`
    #[serde(rename = "HH:MM:SS")]
    HoursMinutesSeconds,
}

impl Default for TimeFormat {
    fn default() -> Self {
        TimeFormat::PaddedMinutesSeconds
    }
}

impl TimeFormat {
    /// The format menu in the order hosts present it.
    pub const MENU: [TimeFormat; 4] = [
        TimeFormat::PaddedMinutesSeconds,
        TimeFormat::HoursMinutesSeconds,
        TimeFormat::MinutesSeconds,
        TimeFormat::Seconds,
    ];

    /// Returns the menu literal of the format.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeFormat::Seconds => "SS",
            TimeFormat::MinutesSeconds => "M:SS",
            TimeFormat::PaddedMinutesSeconds => "MM:SS",
            TimeFormat::HoursMinutesSeconds => "HH:MM:SS",
        }
    }

    /// Resolves a menu literal. Anything that isn't part of the menu falls
    /// back to `MM:SS`.
    pub fn from_menu_item(item: &str) -> Self {
        item.parse().unwrap_or_default()
    }

    /// Formats the elapsed time with the minute field `M:SS` and `MM:SS`
    /// show by default.
    pub fn format(self, elapsed: TimeSpan) -> Formatted {
        Formatted::new(elapsed, self, MinuteField::default())
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when strictly parsing a format that isn't part of the
/// menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq, snafu::Snafu)]
pub enum ParseError {
    /// The format is not part of the format menu.
    UnknownFormat,
}

impl FromStr for TimeFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "SS" => TimeFormat::Seconds,
            "M:SS" => TimeFormat::MinutesSeconds,
            "MM:SS" => TimeFormat::PaddedMinutesSeconds,
            "HH:MM:SS" => TimeFormat::HoursMinutesSeconds,
            _ => return Err(ParseError::UnknownFormat),
        })
    }
}

/// Selects the minutes shown by the `M:SS` and `MM:SS` formats. The two only
/// differ once a stopwatch has run for an hour or more.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinuteField {
    /// The total amount of minutes, so 3661 seconds show as `61:01`.
    Total,
    /// The minutes within the current hour, so 3661 seconds show as `01:01`.
    /// Hours are dropped from the output.
    WithinHour,
}

impl Default for MinuteField {
    fn default() -> Self {
        MinuteField::Total
    }
}

/// An elapsed time prepared for rendering in one of the [`TimeFormat`]s.
/// The rendering happens lazily through its [`Display`](fmt::Display)
/// implementation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Formatted {
    elapsed: TimeSpan,
    format: TimeFormat,
    minute_field: MinuteField,
}

impl Formatted {
    /// Prepares the elapsed time for rendering.
    pub fn new(elapsed: TimeSpan, format: TimeFormat, minute_field: MinuteField) -> Self {
        Self {
            elapsed,
            format,
            minute_field,
        }
    }

    /// The elapsed time that is getting rendered.
    pub fn elapsed(&self) -> TimeSpan {
        self.elapsed
    }

    /// The format the elapsed time is rendered in.
    pub fn format(&self) -> TimeFormat {
        self.format
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.elapsed.total_seconds();
        let seconds = floor(total % 60.0);
        let minutes = match self.minute_field {
            MinuteField::Total => floor(total / 60.0),
            MinuteField::WithinHour => floor((total % 3600.0) / 60.0),
        };

        match self.format {
            TimeFormat::Seconds => write!(f, "{}", floor(total)),
            TimeFormat::MinutesSeconds => write!(f, "{}:{:02}", minutes, seconds),
            TimeFormat::PaddedMinutesSeconds => write!(f, "{:02}:{:02}", minutes, seconds),
            TimeFormat::HoursMinutesSeconds => write!(
                f,
                "{:02}:{:02}:{:02}",
                floor(total / 3600.0),
                floor((total % 3600.0) / 60.0),
                seconds,
            ),
        }
    }
}

/// Returns the elapsed time as whole seconds.
pub fn whole_seconds(elapsed: TimeSpan) -> i64 {
    to_int(floor(elapsed.total_seconds()))
}

/// Returns the total amount of whole minutes of the elapsed time. The
/// minutes are not wrapped at the hour.
pub fn total_minutes(elapsed: TimeSpan) -> i64 {
    to_int(floor(elapsed.total_seconds() / 60.0))
}

/// Returns the seconds within the current minute of the elapsed time.
pub fn seconds_only(elapsed: TimeSpan) -> i64 {
    to_int(floor(elapsed.total_seconds() % 60.0))
}

// Adding zero turns -0 into 0, which would otherwise be shown as "-0".
fn floor(value: f64) -> f64 {
    libm::floor(value) + 0.0
}

// Saturates at the bounds of i64, NaN becomes 0.
fn to_int(value: f64) -> i64 {
    value as i64
}
