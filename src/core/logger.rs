//! Main logger implementation
//!
//! [`Logger`] is a single owned context object bundling the level filter,
//! the output sink, the label table, and the timestamp timezone. The process
//! holds one and mutates it in place; for multi-threaded use wrap it in a
//! lock or use [`crate::global`].

use super::{
    color::Color,
    error::Result,
    formatter::{format_console, format_file},
    label::{Label, LabelTable},
    log_level::{LevelFilter, LogLevel},
    sink::{Destination, Sink},
    timestamp::Timezone,
    token::Token,
};
use std::path::PathBuf;

pub struct Logger {
    filter: LevelFilter,
    sink: Sink,
    labels: LabelTable,
    timezone: Timezone,
}

impl Logger {
    /// Defaults: destination Console, all levels enabled, file path
    /// `log.txt`, UTC timestamps.
    #[must_use]
    pub fn new() -> Self {
        Self {
            filter: LevelFilter::new(),
            sink: Sink::new(),
            labels: LabelTable::new(),
            timezone: Timezone::Utc,
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use logkit::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .destination(Destination::Console)
    ///     .levels([LogLevel::Error, LogLevel::Warning])
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Switch the active destination; see [`Sink::set_destination`].
    pub fn set_destination(&mut self, destination: Destination) -> Result<()> {
        self.sink.set_destination(destination)
    }

    /// Set the path used on the next transition into `Destination::File`.
    pub fn set_file_path(&mut self, path: impl Into<PathBuf>) {
        self.sink.set_file_path(path);
    }

    /// Replace the set of enabled levels.
    pub fn set_levels(&mut self, levels: impl IntoIterator<Item = LogLevel>) {
        self.filter.set_levels(levels);
    }

    #[must_use]
    pub fn destination(&self) -> Destination {
        self.sink.destination()
    }

    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.filter.is_enabled(level)
    }

    /// Log at `Info` with no caller context.
    pub fn info(&mut self, tokens: impl IntoIterator<Item = Token>) {
        if !self.filter.is_enabled(LogLevel::Info) {
            return;
        }
        let tokens: Vec<Token> = tokens.into_iter().collect();
        self.emit(LogLevel::Info, &tokens);
    }

    /// Log at `Warning`, prefixing the caller name.
    ///
    /// The caller is wrapped in a bold-white marker pair so it stands out
    /// on the console; in a file it appears plain.
    pub fn warning(&mut self, caller: &str, tokens: impl IntoIterator<Item = Token>) {
        if !self.filter.is_enabled(LogLevel::Warning) {
            return;
        }
        let mut assembled = vec![
            Token::Color(Color::WhiteBold),
            Token::content(caller),
            Token::Color(Color::Reset),
            Token::label(":"),
        ];
        assembled.extend(tokens);
        self.emit(LogLevel::Warning, &assembled);
    }

    /// Log at `Error`, prefixing the call site as `file: line: caller:`.
    pub fn error(
        &mut self,
        file: &str,
        caller: &str,
        line: u32,
        tokens: impl IntoIterator<Item = Token>,
    ) {
        if !self.filter.is_enabled(LogLevel::Error) {
            return;
        }
        let mut assembled = vec![
            Token::content(file),
            Token::label(":"),
            Token::content(line),
            Token::label(":"),
            Token::content(caller),
            Token::label(":"),
        ];
        assembled.extend(tokens);
        self.emit(LogLevel::Error, &assembled);
    }

    /// Log at `Success`: just the caller name, no variable arguments.
    pub fn success(&mut self, caller: &str) {
        if !self.filter.is_enabled(LogLevel::Success) {
            return;
        }
        self.emit(LogLevel::Success, &[Token::content(caller)]);
    }

    /// Render the token sequence for the active destination and write it.
    ///
    /// The filter has already passed by the time this runs. A file sink
    /// whose handle is closed degrades to a no-op for this call only; the
    /// timestamp is not even computed.
    fn emit(&mut self, level: LogLevel, tokens: &[Token]) {
        match self.sink.destination() {
            Destination::None => {}
            Destination::Console => {
                let line = format_console(&self.labels.lookup(level).console, tokens);
                self.sink.write_line(level, &line);
            }
            Destination::File => {
                if !self.sink.is_file_open() {
                    return;
                }
                let timestamp = self.timezone.now();
                let line = format_file(&timestamp, &self.labels.lookup(level).file, tokens);
                self.sink.write_line(level, &line);
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use logkit::prelude::*;
///
/// let logger = Logger::builder()
///     .destination(Destination::File)
///     .file_path("app.log")
///     .levels([LogLevel::Error])
///     .timezone(Timezone::Local)
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    destination: Destination,
    file_path: PathBuf,
    levels: Vec<LogLevel>,
    timezone: Timezone,
    labels: LabelTable,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    #[must_use]
    pub fn new() -> Self {
        Self {
            destination: Destination::Console,
            file_path: PathBuf::from(super::sink::DEFAULT_FILE_PATH),
            levels: vec![LogLevel::All],
            timezone: Timezone::Utc,
            labels: LabelTable::new(),
        }
    }

    /// Set the initial destination
    #[must_use = "builder methods return a new value"]
    pub fn destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Set the log file path
    #[must_use = "builder methods return a new value"]
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Set the enabled levels (replaces the default `{All}`)
    #[must_use = "builder methods return a new value"]
    pub fn levels(mut self, levels: impl IntoIterator<Item = LogLevel>) -> Self {
        self.levels = levels.into_iter().collect();
        self
    }

    /// Set the timezone used for file timestamps
    #[must_use = "builder methods return a new value"]
    pub fn timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }

    /// Replace the whole label table
    #[must_use = "builder methods return a new value"]
    pub fn labels(mut self, labels: LabelTable) -> Self {
        self.labels = labels;
        self
    }

    /// Override the label pair for one level
    #[must_use = "builder methods return a new value"]
    pub fn label(mut self, level: LogLevel, label: Label) -> Self {
        self.labels.set(level, label);
        self
    }

    /// Build the Logger
    ///
    /// Fails only when the initial destination is `File` and the log file
    /// cannot be opened.
    pub fn build(self) -> Result<Logger> {
        let mut logger = Logger::new();
        logger.labels = self.labels;
        logger.timezone = self.timezone;
        logger.set_levels(self.levels);
        logger.set_file_path(self.file_path);
        logger.set_destination(self.destination)?;
        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
