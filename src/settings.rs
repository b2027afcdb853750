//! The settings module provides the configuration of a
//! [`TimerRegistry`](crate::TimerRegistry). Settings never contain any timer
//! state. With the `std` feature they can be read from and written as JSON.

use crate::{
    timing::formatter::{MinuteField, TimeFormat},
    DEFAULT_TIMER_NAME,
};
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// The settings of a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The name commands refer to when they don't name a timer.
    pub default_timer_name: String,
    /// The format commands render in when they don't specify one.
    pub default_format: TimeFormat,
    /// The minutes shown by the `M:SS` and `MM:SS` formats.
    pub minute_field: MinuteField,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_timer_name: String::from(DEFAULT_TIMER_NAME),
            default_format: TimeFormat::default(),
            minute_field: MinuteField::default(),
        }
    }
}

#[cfg(feature = "std")]
pub use self::json::{Error, Result};

#[cfg(feature = "std")]
mod json {
    use super::Settings;
    use snafu::ResultExt;
    use std::io::{Read, Write};

    /// The error type for reading and writing settings.
    #[derive(Debug, snafu::Snafu)]
    pub enum Error {
        /// Failed to parse the settings as JSON.
        ParseJson {
            /// The underlying JSON error.
            source: serde_json::Error,
        },
        /// Failed to write the settings as JSON.
        WriteJson {
            /// The underlying JSON error.
            source: serde_json::Error,
        },
    }

    /// The result type for reading and writing settings.
    pub type Result<T = ()> = std::result::Result<T, Error>;

    impl Settings {
        /// Reads settings from JSON. Fields that are missing keep their
        /// default values.
        pub fn from_json<R: Read>(reader: R) -> Result<Self> {
            serde_json::from_reader(reader).context(ParseJson)
        }

        /// Writes the settings as pretty printed JSON.
        pub fn write_json<W: Write>(&self, writer: W) -> Result {
            serde_json::to_writer_pretty(writer, self).context(WriteJson)
        }
    }
}
