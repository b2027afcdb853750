#![warn(
    clippy::complexity,
    clippy::correctness,
    clippy::perf,
    clippy::style,
    missing_docs,
    rust_2018_idioms
)]
#![cfg_attr(not(feature = "std"), no_std)]

//! stopwatch-registry is a library that keeps track of any number of
//! independently named stopwatches. Every stopwatch can be started, paused,
//! resumed, stopped and reset, have its elapsed time set or shifted directly,
//! and be queried for its elapsed time as whole seconds, as a minute / second
//! decomposition or as a formatted string.
//!
//! Elapsed time is never accumulated by ticking. A running stopwatch stores
//! the instant it is anchored to and its elapsed time is the difference
//! between that instant and the current time of the registry's [`Clock`].
//!
//! # Examples
//!
//! ```
//! use stopwatch_registry::{ManualClock, TimeFormat, TimeSpan, TimerRegistry};
//!
//! let clock = ManualClock::new();
//! let mut registry = TimerRegistry::with_clock(clock.clone());
//!
//! registry.start("principal");
//! clock.advance(TimeSpan::from_seconds(90.0));
//!
//! assert_eq!(registry.time_seconds("principal"), 90);
//! assert_eq!(
//!     registry.formatted("principal", TimeFormat::PaddedMinutesSeconds).to_string(),
//!     "01:30",
//! );
//! ```

extern crate alloc;

pub mod command;
mod registry;
pub mod settings;
pub mod timer;
pub mod timing;

pub use crate::{
    command::{Command, Reply},
    registry::TimerRegistry,
    settings::Settings,
    timer::{TimerPhase, TimerState},
    timing::{
        formatter::{Formatted, MinuteField, TimeFormat},
        Clock, ManualClock, TimeSpan, TimeStamp,
    },
};

#[cfg(feature = "std")]
pub use crate::{registry::SharedRegistry, timing::SystemClock};

/// The name hosts conventionally use when they don't name a timer.
pub const DEFAULT_TIMER_NAME: &str = "principal";
