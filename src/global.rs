//! Process-wide logger singleton
//!
//! Applications that want one shared logger install it here with an explicit
//! [`init`] call; nothing is constructed before that, so there are no static
//! initialization order hazards. Access goes through [`with`], which locks
//! the logger for the duration of the closure. On an uninitialized global,
//! [`with`] is a silent no-op returning `None`.
//!
//! # Examples
//!
//! ```
//! use logkit::prelude::*;
//! use logkit::{global, log_info};
//!
//! global::init(Logger::new());
//! global::with(|logger| log_info!(logger, "started"));
//! global::shutdown();
//! ```

use crate::core::Logger;
use parking_lot::Mutex;

static GLOBAL: Mutex<Option<Logger>> = Mutex::new(None);

/// Install the process-wide logger, replacing any previous one.
pub fn init(logger: Logger) {
    *GLOBAL.lock() = Some(logger);
}

/// True iff a global logger is currently installed.
#[must_use]
pub fn is_initialized() -> bool {
    GLOBAL.lock().is_some()
}

/// Run `f` against the global logger, holding its lock for the duration.
///
/// Returns `None` without running `f` when no logger is installed.
pub fn with<R>(f: impl FnOnce(&mut Logger) -> R) -> Option<R> {
    GLOBAL.lock().as_mut().map(f)
}

/// Run `f` against the global logger without blocking.
///
/// Returns `None` without running `f` when no logger is installed or the
/// lock is currently held elsewhere.
pub fn try_with<R>(f: impl FnOnce(&mut Logger) -> R) -> Option<R> {
    let mut guard = GLOBAL.try_lock()?;
    guard.as_mut().map(f)
}

/// Remove and return the global logger; its file handle closes on drop.
pub fn shutdown() -> Option<Logger> {
    GLOBAL.lock().take()
}
