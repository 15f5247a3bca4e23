//! Log level parsing and validation
//!
//! `LOG_LEVEL` is matched case-insensitively against a closed set of seven
//! levels. Declaration order doubles as verbosity order: a logger configured at
//! a given level emits every entry whose level compares less than or equal to it.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Panic,
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Panic,
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Canonical uppercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Panic => "PANIC",
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Whether an entry at `entry` passes a filter configured at `self`
    pub fn allows(&self, entry: LogLevel) -> bool {
        entry <= *self
    }

    /// All level names, alphabetically sorted and space-joined
    pub fn valid_names() -> String {
        let mut names: Vec<&str> = Self::ALL.iter().map(LogLevel::as_str).collect();
        names.sort_unstable();
        names.join(" ")
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("loglevel : {level} not valid, must be one of : {valid}")]
pub struct LogLevelError {
    /// Requested level, canonicalized to uppercase
    pub level: String,
    pub valid: String,
}

impl FromStr for LogLevel {
    type Err = LogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = s.to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == canonical)
            .ok_or_else(|| LogLevelError {
                level: canonical,
                valid: Self::valid_names(),
            })
    }
}

/// Validate a requested log level
///
/// # Returns
/// * `Ok(LogLevel)` - Recognized level (input is case-insensitive)
/// * `Err(LogLevelError)` - Message lists every valid level in alphabetical order,
///   e.g. `loglevel : BLAH not valid, must be one of : DEBUG ERROR FATAL INFO PANIC TRACE WARN`
pub fn validate_log_level(level: &str) -> Result<LogLevel, LogLevelError> {
    level.parse()
}
