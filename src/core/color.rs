//! ANSI color escape table
//!
//! Named SGR escape sequences for console output. Callers can pass a
//! [`Color`] directly as a log argument to colorize the tokens that follow
//! it; the formatter suppresses colors when the destination is a file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named ANSI SGR escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Reset,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
    RedBold,
    GreenBold,
    YellowBold,
    BlueBold,
    PurpleBold,
    CyanBold,
    WhiteBold,
}

impl Color {
    /// The raw escape sequence for this color.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Color::Reset => "\x1b[0m",
            Color::Red => "\x1b[0;31m",
            Color::Green => "\x1b[0;32m",
            Color::Yellow => "\x1b[0;33m",
            Color::Blue => "\x1b[0;34m",
            Color::Purple => "\x1b[0;35m",
            Color::Cyan => "\x1b[0;36m",
            Color::White => "\x1b[0;37m",
            Color::RedBold => "\x1b[1;31m",
            Color::GreenBold => "\x1b[1;32m",
            Color::YellowBold => "\x1b[1;33m",
            Color::BlueBold => "\x1b[1;34m",
            Color::PurpleBold => "\x1b[1;35m",
            Color::CyanBold => "\x1b[1;36m",
            Color::WhiteBold => "\x1b[1;37m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
