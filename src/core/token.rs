//! Log line token model
//!
//! A rendered line is built from an ordered sequence of tokens. Content
//! tokens (text, numbers) participate in inter-token spacing; formatting
//! tokens (color markers, structural labels such as `":"`) do not.

use super::color::Color;

/// One unit of a rendered log line.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A plain value: consumes spacing, rendered to every destination.
    Content(String),
    /// A color marker: no spacing, suppressed on plain-text destinations.
    Color(Color),
    /// A structural separator: no spacing, rendered to every destination.
    Label(String),
}

impl Token {
    pub fn content(value: impl ToString) -> Self {
        Token::Content(value.to_string())
    }

    pub fn label(value: impl Into<String>) -> Self {
        Token::Label(value.into())
    }
}

/// Conversion into a [`Token`], used by the logging macros to forward
/// heterogeneous argument lists.
///
/// Plain values become [`Token::Content`]; a [`Color`] becomes a color
/// marker. There is deliberately no blanket `Display` impl so that colors
/// keep their formatting classification.
pub trait IntoToken {
    fn into_token(self) -> Token;
}

impl IntoToken for Token {
    fn into_token(self) -> Token {
        self
    }
}

impl IntoToken for Color {
    fn into_token(self) -> Token {
        Token::Color(self)
    }
}

impl IntoToken for &str {
    fn into_token(self) -> Token {
        Token::Content(self.to_string())
    }
}

impl IntoToken for String {
    fn into_token(self) -> Token {
        Token::Content(self)
    }
}

impl IntoToken for &String {
    fn into_token(self) -> Token {
        Token::Content(self.clone())
    }
}

impl IntoToken for char {
    fn into_token(self) -> Token {
        Token::Content(self.to_string())
    }
}

impl IntoToken for bool {
    fn into_token(self) -> Token {
        Token::Content(self.to_string())
    }
}

macro_rules! impl_into_token_for_numbers {
    ($($ty:ty),+) => {
        $(
            impl IntoToken for $ty {
                fn into_token(self) -> Token {
                    Token::Content(self.to_string())
                }
            }
        )+
    };
}

impl_into_token_for_numbers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
