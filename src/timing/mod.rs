//! The timing module provides everything the registry needs to measure and
//! present time: spans of time, points on a clock's timeline, the clocks
//! themselves and the formatters that turn spans into text.

mod clock;
pub mod formatter;
mod time_span;
mod time_stamp;

pub use self::{
    clock::{Clock, ManualClock},
    time_span::TimeSpan,
    time_stamp::TimeStamp,
};

#[cfg(feature = "std")]
pub use self::clock::SystemClock;
