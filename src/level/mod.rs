//! Severity levels that gate which call sites reach the output.

use std::fmt;
use std::str::FromStr;

/// Ordered by urgency so thresholds are plain ordinal comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Everything, including per-iteration noise.
    #[default]
    Verbose = 0,
    /// Debugging detail.
    Trace = 1,
    /// Function entry and exit.
    Debug = 2,
    /// Service start/stop and request access.
    Info = 3,
    /// Anomalies that recover without intervention.
    Warning = 4,
    /// Failures that need a human but leave the service running.
    Error = 5,
    /// The service can no longer do its job. Still only a label: nothing exits.
    Fatal = 6,
    /// Never attached to a message. As a threshold it mutes everything.
    Silence = 7,
}

pub const VERBOSE: Level = Level::Verbose;
pub const TRACE: Level = Level::Trace;
pub const DEBUG: Level = Level::Debug;
pub const INFO: Level = Level::Info;
pub const WARNING: Level = Level::Warning;
pub const ERROR: Level = Level::Error;
pub const FATAL: Level = Level::Fatal;
pub const SILENCE: Level = Level::Silence;

/// Display labels indexed by ordinal.
pub const LEVEL_NAMES: [&str; 8] = [
    "VERBOSE", "TRACE", "DEBUG", "INFO", "WARNING", "ERROR", "FATAL", "SILENCE",
];

impl Level {
    /// Uppercase label as it appears between the brackets of a log line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        LEVEL_NAMES[self as usize]
    }

    /// Thresholds live in an `AtomicU8`, so the ordinal has to map back.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Verbose),
            1 => Some(Self::Trace),
            2 => Some(Self::Debug),
            3 => Some(Self::Info),
            4 => Some(Self::Warning),
            5 => Some(Self::Error),
            6 => Some(Self::Fatal),
            7 => Some(Self::Silence),
            _ => None,
        }
    }

    /// All eight levels in ascending order.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Verbose,
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Fatal,
            Self::Silence,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so config loading can report which entry was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            "silence" | "off" | "none" => Ok(Self::Silence),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_round_trip() {
        for level in Level::all() {
            assert_eq!(Level::from_u8(level as u8), Some(level));
        }
        assert_eq!(Level::from_u8(8), None);
    }

    #[test]
    fn order_is_ascending_urgency() {
        let all = Level::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all[0], VERBOSE);
        assert_eq!(all[7], SILENCE);
    }

    #[test]
    fn labels_match_names_table() {
        assert_eq!(Level::Warning.as_str(), "WARNING");
        assert_eq!(Level::Silence.to_string(), "SILENCE");
        for level in Level::all() {
            assert_eq!(level.as_str(), LEVEL_NAMES[level as usize]);
        }
    }

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!("WARN".parse::<Level>(), Ok(Level::Warning));
        assert_eq!(" Fatal ".parse::<Level>(), Ok(Level::Fatal));
        assert_eq!("off".parse::<Level>(), Ok(Level::Silence));
        assert!("loud".parse::<Level>().is_err());
    }
}
