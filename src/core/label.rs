//! Level label table
//!
//! Maps each log level to the fixed textual prefix identifying it in output.
//! Console labels may embed ANSI escapes; file labels never do. File labels
//! are padded to equal width so file columns line up.

use super::log_level::LogLevel;

/// The console/file label pair for one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Console prefix, may embed color escapes. Ends in its own separator,
    /// so no space follows it.
    pub console: String,
    /// Plain file prefix, no escapes.
    pub file: String,
}

impl Label {
    pub fn new(console: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            console: console.into(),
            file: file.into(),
        }
    }

    /// The empty pair, used for levels without an entry.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            console: String::new(),
            file: String::new(),
        }
    }
}

/// Static mapping from level to label pair, immutable after construction.
///
/// Label text is configurable via [`crate::LoggerBuilder::labels`], which is
/// how deployments that call the warning level `DEBUG` customize the output
/// without a separate code path.
#[derive(Debug, Clone)]
pub struct LabelTable {
    info: Label,
    warning: Label,
    success: Label,
    error: Label,
    empty: Label,
}

impl LabelTable {
    /// Info carries no console label; the other levels get a bright bold
    /// colored tag followed by a reset and `:`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            info: Label::new("", "[INFO]:    "),
            warning: Label::new("\x1b[1;93m[WARNING]\x1b[0m:", "[WARNING]: "),
            success: Label::new("\x1b[1;92m[SUCCESS]\x1b[0m:", "[SUCCESS]: "),
            error: Label::new("\x1b[1;91m[ERROR]\x1b[0m:", "[ERROR]:   "),
            empty: Label::empty(),
        }
    }

    /// Replace the label pair for one level. `All` and `None` have no entry
    /// and are ignored.
    pub fn set(&mut self, level: LogLevel, label: Label) {
        match level {
            LogLevel::Info => self.info = label,
            LogLevel::Warning => self.warning = label,
            LogLevel::Success => self.success = label,
            LogLevel::Error => self.error = label,
            LogLevel::All | LogLevel::None => {}
        }
    }

    #[must_use]
    pub fn lookup(&self, level: LogLevel) -> &Label {
        match level {
            LogLevel::Info => &self.info,
            LogLevel::Warning => &self.warning,
            LogLevel::Success => &self.success,
            LogLevel::Error => &self.error,
            LogLevel::All | LogLevel::None => &self.empty,
        }
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::new()
    }
}
