//! Syntax highlighting style decoded from `editor.<element>.style` values.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// Color and text attributes for one syntax element.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyntaxStyle {
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
}

impl SyntaxStyle {
    /// Decode a `colorHex,flagString` value.
    ///
    /// Total: a missing or garbled color token falls back to dark gray, and
    /// a missing flag token reads as no attributes. The flag token is
    /// scanned for the substrings `bold`, `italic`, and `underlined` in any
    /// order, with no delimiter required between them.
    pub fn decode(value: &str) -> Self {
        let mut tokens = value.split(',').map(str::trim).filter(|t| !t.is_empty());

        let color = tokens
            .next()
            .and_then(Color::from_hex)
            .unwrap_or(Color::DARK_GRAY);
        let flags = tokens.next().unwrap_or("");

        Self {
            color,
            bold: flags.contains("bold"),
            italic: flags.contains("italic"),
            underlined: flags.contains("underlined"),
        }
    }
}

impl Default for SyntaxStyle {
    fn default() -> Self {
        Self {
            color: Color::DARK_GRAY,
            bold: false,
            italic: false,
            underlined: false,
        }
    }
}
