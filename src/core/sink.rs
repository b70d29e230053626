//! Output destination management
//!
//! The sink owns the active destination and the log file handle. Exactly one
//! destination is active at a time; switching is a side-effecting transition
//! that closes and opens resources, not an additive configuration.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default log file path, relative to the working directory.
pub const DEFAULT_FILE_PATH: &str = "log.txt";

/// The output target for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Destination {
    None,
    #[default]
    Console,
    File,
}

/// Owns the active [`Destination`] and, while it is `File`, the open handle.
///
/// Invariant: at most one file handle is open at any time, and only while
/// the destination is `File` and the last open succeeded.
#[derive(Debug)]
pub struct Sink {
    destination: Destination,
    file_path: PathBuf,
    file: Option<File>,
}

impl Sink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            destination: Destination::Console,
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            file: None,
        }
    }

    /// Switch the active destination.
    ///
    /// Any open file handle is closed first. Entering `File` opens the
    /// configured path in append mode, never truncating. If the open fails
    /// the error is returned and the sink stays observably closed: later
    /// file writes are dropped until the next `set_destination(File)`.
    pub fn set_destination(&mut self, destination: Destination) -> Result<()> {
        self.file = None;
        self.destination = destination;

        if destination == Destination::File {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
                .map_err(|e| LoggerError::file_open(self.file_path.display().to_string(), e))?;
            self.file = Some(file);
        }

        Ok(())
    }

    /// Set the path used on the NEXT transition into `File`.
    ///
    /// Changing the path while `File` is already active does not reopen the
    /// handle; call `set_destination(Destination::File)` again to apply it.
    pub fn set_file_path(&mut self, path: impl Into<PathBuf>) {
        self.file_path = path.into();
    }

    #[must_use]
    pub fn destination(&self) -> Destination {
        self.destination
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// True iff the file handle is currently open.
    #[must_use]
    pub fn is_file_open(&self) -> bool {
        self.file.is_some()
    }

    /// Write one rendered line to the active destination.
    ///
    /// Console routes `Error` lines to stderr and everything else to stdout.
    /// File writes are synchronous and unbuffered; if the handle is closed
    /// or the write fails, the line is lost for this call only.
    pub(crate) fn write_line(&mut self, level: LogLevel, line: &str) {
        match self.destination {
            Destination::None => {}
            Destination::Console => match level {
                LogLevel::Error => eprintln!("{}", line),
                _ => println!("{}", line),
            },
            Destination::File => {
                if let Some(file) = self.file.as_mut() {
                    let _ = writeln!(file, "{}", line);
                }
            }
        }
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_console_with_closed_file() {
        let sink = Sink::new();
        assert_eq!(sink.destination(), Destination::Console);
        assert!(!sink.is_file_open());
        assert_eq!(sink.file_path(), Path::new(DEFAULT_FILE_PATH));
    }

    #[test]
    fn test_switching_to_file_opens_handle() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut sink = Sink::new();
        sink.set_file_path(temp_dir.path().join("out.log"));

        sink.set_destination(Destination::File).expect("open failed");
        assert!(sink.is_file_open());
    }

    #[test]
    fn test_switching_away_closes_handle() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut sink = Sink::new();
        sink.set_file_path(temp_dir.path().join("out.log"));
        sink.set_destination(Destination::File).expect("open failed");

        sink.set_destination(Destination::Console).expect("switch failed");
        assert!(!sink.is_file_open());
        assert_eq!(sink.destination(), Destination::Console);
    }

    #[test]
    fn test_reopen_appends_rather_than_truncates() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.log");
        let mut sink = Sink::new();
        sink.set_file_path(&path);

        sink.set_destination(Destination::File).expect("open failed");
        sink.write_line(LogLevel::Info, "first");
        sink.set_destination(Destination::Console).expect("switch failed");

        sink.set_destination(Destination::File).expect("reopen failed");
        sink.write_line(LogLevel::Info, "second");

        let content = fs::read_to_string(&path).expect("Failed to read log file");
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_failed_open_leaves_sink_closed() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut sink = Sink::new();
        // A directory cannot be opened as a log file.
        sink.set_file_path(temp_dir.path());

        let result = sink.set_destination(Destination::File);
        assert!(result.is_err());
        assert_eq!(sink.destination(), Destination::File);
        assert!(!sink.is_file_open());

        // Writes to the failed sink are dropped without panicking.
        sink.write_line(LogLevel::Info, "lost");
    }

    #[test]
    fn test_path_change_does_not_reopen_active_handle() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let first = temp_dir.path().join("first.log");
        let second = temp_dir.path().join("second.log");

        let mut sink = Sink::new();
        sink.set_file_path(&first);
        sink.set_destination(Destination::File).expect("open failed");

        // Takes effect only on the next transition into File.
        sink.set_file_path(&second);
        sink.write_line(LogLevel::Info, "still first");

        let content = fs::read_to_string(&first).expect("Failed to read log file");
        assert_eq!(content, "still first\n");
        assert!(!second.exists());

        sink.set_destination(Destination::File).expect("reopen failed");
        sink.write_line(LogLevel::Info, "now second");
        let content = fs::read_to_string(&second).expect("Failed to read log file");
        assert_eq!(content, "now second\n");
    }

    #[test]
    fn test_none_destination_writes_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.log");
        let mut sink = Sink::new();
        sink.set_file_path(&path);

        sink.set_destination(Destination::None).expect("switch failed");
        sink.write_line(LogLevel::Info, "dropped");
        assert!(!path.exists());
    }
}
