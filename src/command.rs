//! The command module is the seam between a [`TimerRegistry`] and the host
//! that dispatches user authored commands into it. A host translates each of
//! its commands into a [`Command`], lets the registry
//! [`execute`](TimerRegistry::execute) it and reads the [`Reply`] back.
//!
//! Hosts may leave out the timer name and the format. The registry's
//! [`Settings`](crate::Settings) fill them in.

use crate::{
    timing::{formatter::TimeFormat, Clock, TimeSpan},
    TimerRegistry,
};
use alloc::string::{String, ToString};
use core::fmt;

/// A single operation on a named stopwatch.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command<'a> {
    /// Start the stopwatch from zero.
    Start(Option<&'a str>),
    /// Pause the stopwatch if it is running.
    Pause(Option<&'a str>),
    /// Resume the stopwatch if it is paused.
    Resume(Option<&'a str>),
    /// Stop the stopwatch, holding its elapsed time.
    Stop(Option<&'a str>),
    /// Reset the stopwatch to zero without starting it.
    Reset(Option<&'a str>),
    /// Set the elapsed time of the stopwatch.
    SetTime(Option<&'a str>, TimeSpan),
    /// Add to the elapsed time of the stopwatch.
    AddTime(Option<&'a str>, TimeSpan),
    /// Query the elapsed time in whole seconds.
    GetTimeSeconds(Option<&'a str>),
    /// Query the elapsed time rendered in a format.
    GetTimeFormatted(Option<&'a str>, Option<TimeFormat>),
    /// Query the elapsed time in whole minutes.
    GetMinutes(Option<&'a str>),
    /// Query the seconds within the current minute.
    GetSecondsOnly(Option<&'a str>),
    /// Query whether the stopwatch is counting.
    IsRunning(Option<&'a str>),
    /// Query whether the stopwatch is paused.
    IsPaused(Option<&'a str>),
}

impl<'a> Command<'a> {
    /// Returns the timer name the command refers to, if it names one.
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Command::Start(name)
            | Command::Pause(name)
            | Command::Resume(name)
            | Command::Stop(name)
            | Command::Reset(name)
            | Command::SetTime(name, _)
            | Command::AddTime(name, _)
            | Command::GetTimeSeconds(name)
            | Command::GetTimeFormatted(name, _)
            | Command::GetMinutes(name)
            | Command::GetSecondsOnly(name)
            | Command::IsRunning(name)
            | Command::IsPaused(name) => name,
        }
    }
}

/// The value a [`Command`] hands back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The command changed a stopwatch and has nothing to report.
    Done,
    /// A whole number of seconds or minutes.
    Number(i64),
    /// A formatted elapsed time.
    Text(String),
    /// The answer to a yes / no question.
    Boolean(bool),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Done => Ok(()),
            Reply::Number(number) => fmt::Display::fmt(number, f),
            Reply::Text(text) => f.write_str(text),
            Reply::Boolean(boolean) => fmt::Display::fmt(boolean, f),
        }
    }
}

impl<C: Clock> TimerRegistry<C> {
    /// Executes a command from the host. No command can fail: unknown names
    /// create a new stopwatch and omitted arguments use the registry's
    /// settings.
    pub fn execute(&mut self, command: Command<'_>) -> Reply {
        let settings = self.settings();
        let name = command
            .name()
            .unwrap_or(settings.default_timer_name.as_str())
            .to_string();
        let name = name.as_str();

        match command {
            Command::Start(_) => self.start(name),
            Command::Pause(_) => self.pause(name),
            Command::Resume(_) => self.resume(name),
            Command::Stop(_) => self.stop(name),
            Command::Reset(_) => self.reset(name),
            Command::SetTime(_, time) => self.set_time(name, time),
            Command::AddTime(_, time) => self.add_time(name, time),
            Command::GetTimeSeconds(_) => return Reply::Number(self.time_seconds(name)),
            Command::GetTimeFormatted(_, format) => {
                let format = format.unwrap_or(self.settings().default_format);
                return Reply::Text(self.formatted(name, format).to_string());
            }
            Command::GetMinutes(_) => return Reply::Number(self.minutes(name)),
            Command::GetSecondsOnly(_) => return Reply::Number(self.seconds_only(name)),
            Command::IsRunning(_) => return Reply::Boolean(self.is_running(name)),
            Command::IsPaused(_) => return Reply::Boolean(self.is_paused(name)),
        }

        Reply::Done
    }
}
