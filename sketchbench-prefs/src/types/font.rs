//! Font descriptor encoded as `name,styleFlags,size` in preferences values.

use serde::{Deserialize, Serialize};

/// A font request decoded from a preferences value such as
/// `Monospaced,plain,12`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FontSpec {
    pub family: String,
    pub bold: bool,
    pub italic: bool,
    /// Point size.
    pub size: u32,
}

impl FontSpec {
    /// Decode a `name,styleFlags,size` value.
    ///
    /// `styleFlags` toggles bold and italic by substring presence; anything
    /// else (typically `plain`) leaves both off. Returns `None` unless the
    /// value has exactly three comma fields and a numeric size.
    pub fn decode(value: &str) -> Option<Self> {
        let mut fields = value.split(',');
        let (Some(family), Some(flags), Some(size), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return None;
        };

        Some(Self {
            family: family.trim().to_string(),
            bold: flags.contains("bold"),
            italic: flags.contains("italic"),
            size: size.trim().parse().ok()?,
        })
    }

    /// Encode back to the `name,styleFlags,size` form.
    pub fn encode(&self) -> String {
        let flags = match (self.bold, self.italic) {
            (true, true) => "bolditalic",
            (true, false) => "bold",
            (false, true) => "italic",
            (false, false) => "plain",
        };
        format!("{},{},{}", self.family, flags, self.size)
    }
}
