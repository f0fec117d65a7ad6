//! RGB color type with the hex encoding used in preferences values.

use serde::{Deserialize, Serialize};

/// A color in RGB format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Neutral gray returned when a stored color cannot be read.
    pub const GRAY: Color = Color::new(128, 128, 128);

    /// Fallback for syntax style entries with an unreadable color token.
    pub const DARK_GRAY: Color = Color::new(64, 64, 64);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` or `RRGGBB` hex string.
    ///
    /// The whole token is parsed base-16 and masked to 24 bits, so short
    /// forms like `F00` read as `000F00`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let rgb = u32::from_str_radix(digits, 16).ok()? & 0x00FF_FFFF;
        Some(Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
    }

    /// Lowercase `#rrggbb` form written back into preferences values.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
