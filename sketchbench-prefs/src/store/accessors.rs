//! Typed accessor/mutator pairs layered over the string table.
//!
//! Decoders that can fall back do so here: unreadable colors yield the gray
//! sentinel, unreadable fonts are restored from the defaults snapshot, and
//! every fallback is reported through `log::warn!`. The one deliberate
//! exception is [`Preferences::get_integer`], which propagates parse
//! failures instead of guessing.

use super::Preferences;
use crate::error::PrefsError;
use crate::types::{Color, FontSpec, SyntaxStyle};

impl Preferences {
    /// True iff `key` holds exactly the literal `true`.
    ///
    /// An unset key or any other stored value reads as false.
    pub fn get_boolean(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    pub fn set_boolean(&mut self, key: &str, value: bool) {
        self.set(key, if value { "true" } else { "false" });
    }

    /// Base-10 integer value for `key`.
    ///
    /// Unlike the other typed getters this one does not fall back: an unset
    /// key or unparseable value is returned to the caller as an error.
    pub fn get_integer(&self, key: &str) -> Result<i32, PrefsError> {
        let value = self
            .get(key)
            .ok_or_else(|| PrefsError::MissingKey(key.to_string()))?;
        value.parse().map_err(|source| PrefsError::InvalidInteger {
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
    }

    pub fn set_integer(&mut self, key: &str, value: i32) {
        self.set(key, value.to_string());
    }

    /// Color value for `key`, or the gray sentinel when unset or unreadable.
    pub fn get_color(&self, key: &str) -> Color {
        let Some(value) = self.get(key) else {
            return Color::GRAY;
        };
        Color::from_hex(value).unwrap_or_else(|| {
            log::warn!("Unreadable color '{value}' for {key}; using gray");
            Color::GRAY
        })
    }

    pub fn set_color(&mut self, key: &str, color: Color) {
        self.set(key, color.to_hex());
    }

    /// Font descriptor for `key`.
    ///
    /// A missing or undecodable value falls back to the factory default for
    /// the same key: the default is written back into the live table and
    /// decoded once more. Returns `None` only when no factory value exists
    /// or the factory value is itself unreadable.
    pub fn get_font(&mut self, key: &str) -> Option<FontSpec> {
        if let Some(font) = self.get(key).and_then(FontSpec::decode) {
            return Some(font);
        }

        let fallback = self.get_default(key)?.to_string();
        log::warn!("Restoring factory font for {key} (stored value unreadable)");
        self.set(key, fallback.as_str());
        FontSpec::decode(&fallback)
    }

    /// Replace only the size field of a stored `name,styleFlags,size` font
    /// encoding, leaving family and style flags untouched.
    ///
    /// Returns false (and stores nothing) when the current value does not
    /// have the three-field shape.
    pub fn set_font_size(&mut self, key: &str, size: u32) -> bool {
        let Some(value) = self.get(key).map(str::to_owned) else {
            return false;
        };
        let mut pieces: Vec<&str> = value.split(',').collect();
        if pieces.len() != 3 {
            return false;
        }
        let size = size.to_string();
        pieces[2] = size.as_str();
        self.set(key, pieces.join(","));
        true
    }

    /// Syntax style stored under `editor.<element>.style`.
    ///
    /// Total: a missing entry (or any garbled part of one) decodes to the
    /// dark-gray, attribute-free style.
    pub fn get_style(&self, element: &str) -> SyntaxStyle {
        let key = format!("editor.{element}.style");
        match self.get(&key) {
            Some(value) => SyntaxStyle::decode(value),
            None => {
                log::warn!("No style entry for {key}; using defaults");
                SyntaxStyle::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PREFS_FILE_NAME;
    use tempfile::TempDir;

    fn store() -> (TempDir, Preferences) {
        let dir = TempDir::new().expect("temp dir");
        let prefs = Preferences::init(Some(dir.path().join(PREFS_FILE_NAME)))
            .expect("init with no user file");
        (dir, prefs)
    }

    #[test]
    fn test_boolean_is_literal_true_only() {
        let (_dir, mut prefs) = store();

        assert!(!prefs.get_boolean("no.such.key"));

        prefs.set("flag", "true");
        assert!(prefs.get_boolean("flag"));

        for other in ["false", "True", "TRUE", "yes", "1", ""] {
            prefs.set("flag", other);
            assert!(!prefs.get_boolean("flag"), "'{other}' must read as false");
        }
    }

    #[test]
    fn test_set_boolean_round_trip() {
        let (_dir, mut prefs) = store();
        prefs.set_boolean("flag", true);
        assert_eq!(prefs.get("flag"), Some("true"));
        prefs.set_boolean("flag", false);
        assert_eq!(prefs.get("flag"), Some("false"));
        assert!(!prefs.get_boolean("flag"));
    }

    #[test]
    fn test_integer_parses() {
        let (_dir, mut prefs) = store();
        prefs.set_integer("editor.tabs.size", 4);
        assert_eq!(prefs.get_integer("editor.tabs.size").expect("stored"), 4);
        assert_eq!(prefs.get_integer("console.length").expect("factory"), 500);
    }

    #[test]
    fn test_integer_errors_propagate() {
        let (_dir, mut prefs) = store();

        match prefs.get_integer("no.such.key") {
            Err(PrefsError::MissingKey(key)) => assert_eq!(key, "no.such.key"),
            other => panic!("expected MissingKey, got {other:?}"),
        }

        prefs.set("serial.port", "COM1");
        match prefs.get_integer("serial.port") {
            Err(PrefsError::InvalidInteger { key, value, .. }) => {
                assert_eq!(key, "serial.port");
                assert_eq!(value, "COM1");
            }
            other => panic!("expected InvalidInteger, got {other:?}"),
        }
    }

    #[test]
    fn test_color_sentinel_and_round_trip() {
        let (_dir, mut prefs) = store();

        assert_eq!(prefs.get_color("no.such.key"), Color::GRAY);

        prefs.set("editor.fgcolor", "#FF0000");
        assert_eq!(prefs.get_color("editor.fgcolor"), Color::new(255, 0, 0));

        prefs.set("editor.fgcolor", "garbage");
        assert_eq!(prefs.get_color("editor.fgcolor"), Color::GRAY);

        prefs.set_color("editor.fgcolor", Color::new(0x12, 0x34, 0x56));
        assert_eq!(prefs.get("editor.fgcolor"), Some("#123456"));
        assert_eq!(prefs.get_color("editor.fgcolor"), Color::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_font_decodes_stored_value() {
        let (_dir, mut prefs) = store();
        let font = prefs.get_font("editor.font").expect("factory font");
        assert_eq!(font.family, "Monospaced");
        assert_eq!(font.size, 12);
    }

    #[test]
    fn test_font_fallback_restores_default_into_live_table() {
        let (_dir, mut prefs) = store();
        prefs.set("editor.font", "garbage");

        let font = prefs.get_font("editor.font").expect("fallback font");
        assert_eq!(font.family, "Monospaced");
        assert_eq!(prefs.get("editor.font"), prefs.get_default("editor.font"));
    }

    #[test]
    fn test_font_without_default_is_none() {
        let (_dir, mut prefs) = store();
        assert_eq!(prefs.get_font("no.such.font"), None);
    }

    #[test]
    fn test_set_font_size_keeps_family_and_flags() {
        let (_dir, mut prefs) = store();
        prefs.set("editor.font", "Monospaced,bold,12");

        assert!(prefs.set_font_size("editor.font", 14));
        assert_eq!(prefs.get("editor.font"), Some("Monospaced,bold,14"));

        prefs.set("editor.font", "malformed");
        assert!(!prefs.set_font_size("editor.font", 14));
        assert_eq!(prefs.get("editor.font"), Some("malformed"));
        assert!(!prefs.set_font_size("no.such.key", 14));
    }

    #[test]
    fn test_style_from_factory_entry() {
        let (_dir, prefs) = store();
        let style = prefs.get_style("keyword3");
        assert_eq!(style.color, Color::new(0x72, 0x8E, 0x00));
        assert!(style.bold);
        assert!(!style.italic);
    }

    #[test]
    fn test_style_flag_substrings() {
        let (_dir, mut prefs) = store();
        prefs.set("editor.custom.style", "336699,bolditalic");

        let style = prefs.get_style("custom");
        assert_eq!(style.color, Color::new(0x33, 0x66, 0x99));
        assert!(style.bold);
        assert!(style.italic);
        assert!(!style.underlined);
    }

    #[test]
    fn test_style_missing_entry_is_default() {
        let (_dir, prefs) = store();
        assert_eq!(prefs.get_style("nonexistent"), SyntaxStyle::default());
    }
}
