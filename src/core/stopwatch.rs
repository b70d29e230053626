//! Monotonic stopwatch
//!
//! Independent of the logging engine: measures elapsed wall time on the
//! monotonic clock and reports the stored interval in a caller-chosen unit.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// The unit a stored interval is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

/// Start/stop elapsed-time measurement on the monotonic clock.
///
/// `start()` records "now", overwriting any prior unstopped interval;
/// `stop()` stores the elapsed duration since the last `start()`. Calling
/// `stop()` without a preceding `start()` measures from construction time,
/// which is caller-error territory. Calling [`result`](Self::result) before
/// any `stop()` returns zero.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    start: Instant,
    interval: Duration,
}

impl Stopwatch {
    /// Create a stopwatch with the start anchor at "now" and a zero stored
    /// interval.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            interval: Duration::ZERO,
        }
    }

    /// Record the current monotonic time as the new start anchor.
    pub fn start(&mut self) {
        self.start = Instant::now();
    }

    /// Store the elapsed duration since the last `start()`.
    pub fn stop(&mut self) {
        self.interval = self.start.elapsed();
    }

    /// The stored interval converted to `unit`, truncating.
    ///
    /// Repeated calls with different units re-convert the same stored
    /// interval; no further `stop()` is needed.
    #[must_use]
    pub fn result(&self, unit: TimeUnit) -> u64 {
        match unit {
            TimeUnit::Hours => self.interval.as_secs() / 3600,
            TimeUnit::Minutes => self.interval.as_secs() / 60,
            TimeUnit::Seconds => self.interval.as_secs(),
            TimeUnit::Milliseconds => self.interval.as_millis() as u64,
            TimeUnit::Microseconds => self.interval.as_micros() as u64,
            TimeUnit::Nanoseconds => self.interval.as_nanos() as u64,
        }
    }

    /// The stored interval as a raw [`Duration`].
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.interval
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
