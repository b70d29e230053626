//! Core logger types

pub mod color;
pub mod error;
pub mod formatter;
pub mod label;
pub mod log_level;
pub mod logger;
pub mod sink;
pub mod stopwatch;
pub mod timestamp;
pub mod token;

pub use color::Color;
pub use error::{LoggerError, Result};
pub use label::{Label, LabelTable};
pub use log_level::{LevelFilter, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use sink::{Destination, Sink, DEFAULT_FILE_PATH};
pub use stopwatch::{Stopwatch, TimeUnit};
pub use timestamp::Timezone;
pub use token::{IntoToken, Token};
