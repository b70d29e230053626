//! Logging macros with call-site capture.
//!
//! Each macro takes the logger as its first argument and converts the
//! remaining arguments through [`IntoToken`](crate::IntoToken), so plain
//! text, numbers, and [`Color`](crate::Color) markers mix freely in one
//! call. `log_warning!`, `log_error!`, and `log_success!` capture the call
//! site (`module_path!`, `file!`, `line!`) at compile time.
//!
//! # Examples
//!
//! ```
//! use logkit::prelude::*;
//! use logkit::{log_error, log_info};
//!
//! let mut logger = Logger::new();
//!
//! log_info!(logger, "server started");
//!
//! let port = 8080;
//! log_info!(logger, "listening on port", port);
//!
//! log_error!(logger, "bind failed on port", Color::Red, port, Color::Reset);
//! ```

/// Log an info line. No caller context is attached.
///
/// # Examples
///
/// ```
/// # use logkit::prelude::*;
/// # let mut logger = Logger::new();
/// use logkit::log_info;
/// log_info!(logger, "processed", 100, "items");
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.info([$($crate::IntoToken::into_token($arg)),+])
    };
}

/// Log a warning line prefixed with the calling module path.
///
/// # Examples
///
/// ```
/// # use logkit::prelude::*;
/// # let mut logger = Logger::new();
/// use logkit::log_warning;
/// log_warning!(logger, "retry", 3, "of", 5);
/// ```
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.warning(::core::module_path!(), [$($crate::IntoToken::into_token($arg)),+])
    };
}

/// Log an error line prefixed with `file: line: module:`.
///
/// # Examples
///
/// ```
/// # use logkit::prelude::*;
/// # let mut logger = Logger::new();
/// use logkit::log_error;
/// log_error!(logger, "connection refused");
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.error(
            ::core::file!(),
            ::core::module_path!(),
            ::core::line!(),
            [$($crate::IntoToken::into_token($arg)),+],
        )
    };
}

/// Log a success line carrying only the calling module path.
///
/// # Examples
///
/// ```
/// # use logkit::prelude::*;
/// # let mut logger = Logger::new();
/// use logkit::log_success;
/// log_success!(logger);
/// ```
#[macro_export]
macro_rules! log_success {
    ($logger:expr $(,)?) => {
        $logger.success(::core::module_path!())
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Color, Destination, Logger};
    use std::fs;
    use tempfile::TempDir;

    fn file_logger(path: &std::path::Path) -> Logger {
        Logger::builder()
            .destination(Destination::File)
            .file_path(path)
            .build()
            .expect("Failed to build logger")
    }

    #[test]
    fn test_log_info_macro_mixes_argument_types() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.log");
        let mut logger = file_logger(&path);

        log_info!(logger, "count", 42, Color::Green, "ok", Color::Reset);

        let content = fs::read_to_string(&path).expect("Failed to read log file");
        assert!(content.contains("count 42 ok"));
        assert!(!content.contains('\x1b'));
    }

    #[test]
    fn test_log_warning_macro_captures_module_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.log");
        let mut logger = file_logger(&path);

        log_warning!(logger, "low disk space");

        let content = fs::read_to_string(&path).expect("Failed to read log file");
        assert!(content.contains(module_path!()));
        assert!(content.contains("low disk space"));
    }

    #[test]
    fn test_log_error_macro_captures_file_and_line() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.log");
        let mut logger = file_logger(&path);

        log_error!(logger, "boom");
        let line = line!() - 1;

        let content = fs::read_to_string(&path).expect("Failed to read log file");
        assert!(content.contains(file!()));
        assert!(content.contains(&line.to_string()));
        assert!(content.contains("boom"));
    }

    #[test]
    fn test_log_success_macro() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.log");
        let mut logger = file_logger(&path);

        log_success!(logger);

        let content = fs::read_to_string(&path).expect("Failed to read log file");
        assert!(content.contains("[SUCCESS]: "));
        assert!(content.contains(module_path!()));
    }

    #[test]
    fn test_macros_accept_trailing_comma() {
        let mut logger = Logger::builder()
            .destination(Destination::None)
            .build()
            .expect("Failed to build logger");
        log_info!(logger, "a", 1,);
        log_warning!(logger, "b",);
        log_error!(logger, "c",);
        log_success!(logger,);
    }
}
