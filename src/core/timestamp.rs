//! Wall-clock timestamp rendering for the file sink

use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};

const TIMESTAMP_FORMAT: &str = "[%Y-%m-%d %H:%M:%S]";

/// Which wall clock file timestamps are taken from.
///
/// Defaults to UTC so log files from different hosts line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Timezone {
    #[default]
    Utc,
    /// The host's local timezone.
    Local,
}

impl Timezone {
    /// The current time rendered as `[YYYY-MM-DD HH:MM:SS]`.
    #[must_use]
    pub fn now(&self) -> String {
        match self {
            Timezone::Utc => Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            Timezone::Local => Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
