//! Log level definitions and the enabled-level filter

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Severity/category tag for a log line.
///
/// `All` and `None` are filter pseudo-levels: `All` is a wildcard that lets
/// every level pass, `None` matches nothing. Neither is ever attached to an
/// emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Info,
    Warning,
    Success,
    Error,
    All,
    None,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Success => "SUCCESS",
            LogLevel::Error => "ERROR",
            LogLevel::All => "ALL",
            LogLevel::None => "NONE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(LogLevel::Info),
            // Some deployments label this level DEBUG; both names are accepted.
            "WARN" | "WARNING" | "DEBUG" => Ok(LogLevel::Warning),
            "SUCCESS" => Ok(LogLevel::Success),
            "ERROR" => Ok(LogLevel::Error),
            "ALL" => Ok(LogLevel::All),
            "NONE" => Ok(LogLevel::None),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// The set of levels currently allowed to produce output.
///
/// Defaults to `{All}`. `set_levels` replaces the whole set rather than
/// adding to it.
#[derive(Debug, Clone)]
pub struct LevelFilter {
    enabled: HashSet<LogLevel>,
}

impl LevelFilter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: HashSet::from([LogLevel::All]),
        }
    }

    /// Replace the enabled set with the given levels.
    pub fn set_levels(&mut self, levels: impl IntoIterator<Item = LogLevel>) {
        self.enabled = levels.into_iter().collect();
    }

    /// True iff `level` is enabled, either directly or via the `All` wildcard.
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.enabled.contains(&level) || self.enabled.contains(&LogLevel::All)
    }

    /// The current enabled set.
    pub fn levels(&self) -> &HashSet<LogLevel> {
        &self.enabled
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMIT_LEVELS: [LogLevel; 4] = [
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Success,
        LogLevel::Error,
    ];

    #[test]
    fn test_default_enables_everything() {
        let filter = LevelFilter::new();
        for level in EMIT_LEVELS {
            assert!(filter.is_enabled(level), "{} should pass by default", level);
        }
    }

    #[test]
    fn test_all_wildcard_overrides_membership() {
        let mut filter = LevelFilter::new();
        filter.set_levels([LogLevel::Error, LogLevel::All]);
        for level in EMIT_LEVELS {
            assert!(filter.is_enabled(level));
        }
    }

    #[test]
    fn test_set_levels_replaces_not_adds() {
        let mut filter = LevelFilter::new();
        filter.set_levels([LogLevel::Error]);
        filter.set_levels([LogLevel::Info]);
        assert!(filter.is_enabled(LogLevel::Info));
        assert!(!filter.is_enabled(LogLevel::Error));
    }

    #[test]
    fn test_absent_level_is_disabled() {
        let mut filter = LevelFilter::new();
        filter.set_levels([LogLevel::Info, LogLevel::Success]);
        assert!(!filter.is_enabled(LogLevel::Warning));
        assert!(!filter.is_enabled(LogLevel::Error));
    }

    #[test]
    fn test_none_disables_everything() {
        let mut filter = LevelFilter::new();
        filter.set_levels([LogLevel::None]);
        for level in EMIT_LEVELS {
            assert!(!filter.is_enabled(level));
        }
    }

    #[test]
    fn test_empty_set_disables_everything() {
        let mut filter = LevelFilter::new();
        filter.set_levels([]);
        for level in EMIT_LEVELS {
            assert!(!filter.is_enabled(level));
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&LogLevel::Warning).expect("serialize");
        assert_eq!(json, "\"Warning\"");
        let parsed: LogLevel = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, LogLevel::Warning);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("info".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("Success".parse::<LogLevel>(), Ok(LogLevel::Success));
        assert_eq!("ERROR".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert!("verbose".parse::<LogLevel>().is_err());
    }
}
