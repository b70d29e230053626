//! Line formatter
//!
//! Builds one output line from a level label and an ordered token sequence.
//!
//! Spacing rule: a single space is written before a content token iff a
//! content token was already written on the line. Formatting tokens (color
//! markers, structural labels) never trigger or consume that state, so a
//! color abuts the text it modifies and `":"` glues to its neighbors.

use super::color::Color;
use super::token::Token;

/// Render a console line: label first with no following space, then the
/// tokens, then an unconditional color reset.
#[must_use]
pub fn format_console(label: &str, tokens: &[Token]) -> String {
    let mut line = String::with_capacity(label.len() + 16 * tokens.len());
    line.push_str(label);
    append_tokens(&mut line, tokens, true);
    line.push_str(Color::Reset.code());
    line
}

/// Render a file line: bracketed timestamp, plain label, then the tokens
/// with color markers suppressed entirely. No reset is needed since no
/// color was ever written.
#[must_use]
pub fn format_file(timestamp: &str, label: &str, tokens: &[Token]) -> String {
    let mut line = String::with_capacity(timestamp.len() + label.len() + 16 * tokens.len());
    line.push_str(timestamp);
    line.push_str(label);
    append_tokens(&mut line, tokens, false);
    line
}

fn append_tokens(line: &mut String, tokens: &[Token], with_colors: bool) {
    let mut wrote_content = false;
    for token in tokens {
        match token {
            Token::Content(text) => {
                if wrote_content {
                    line.push(' ');
                }
                line.push_str(text);
                wrote_content = true;
            }
            Token::Color(color) => {
                if with_colors {
                    line.push_str(color.code());
                }
            }
            Token::Label(text) => {
                line.push_str(text);
            }
        }
    }
}
