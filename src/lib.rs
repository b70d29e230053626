//! # Logkit
//!
//! A lightweight leveled logging library with console and file sinks,
//! ANSI color support, and a monotonic stopwatch.
//!
//! ## Features
//!
//! - **Leveled Output**: Info, Warning, Success, and Error lines with a
//!   replaceable enabled-level set
//! - **Dual Destinations**: colorized console output or a plain append-only
//!   log file, one active at a time
//! - **Token Protocol**: mixed text, numbers, and color markers joined into
//!   one line with precise spacing
//! - **Stopwatch**: monotonic start/stop timing reported in a chosen unit
//!
//! ## Example
//!
//! ```
//! use logkit::prelude::*;
//! use logkit::{log_info, log_warning};
//!
//! let mut logger = Logger::new();
//! log_info!(logger, "listening on port", 8080);
//! log_info!(logger, Color::Green, "ready", Color::Reset, "in", 12, "ms");
//! log_warning!(logger, "connection pool near capacity");
//! ```

pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Color, Destination, IntoToken, Label, LabelTable, LevelFilter, LogLevel, Logger,
        LoggerBuilder, LoggerError, Result, Sink, Stopwatch, TimeUnit, Timezone, Token,
        DEFAULT_FILE_PATH,
    };
}

pub use crate::core::{
    Color, Destination, IntoToken, Label, LabelTable, LevelFilter, LogLevel, Logger,
    LoggerBuilder, LoggerError, Result, Sink, Stopwatch, TimeUnit, Timezone, Token,
    DEFAULT_FILE_PATH,
};
