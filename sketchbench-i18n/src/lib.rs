//! UI language registry for the Sketchbench IDE.
//!
//! Translation of display strings happens in the GUI layer; this crate only
//! knows which locale identifiers the IDE ships translations for, so the
//! preferences subsystem can validate a stored identifier and downgrade to a
//! supported one when needed.

use serde::Serialize;
use std::fmt;

/// Identifier used when the user has never picked a language or the stored
/// identifier is not supported.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// One UI language the IDE ships translations for.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Language {
    /// English display name.
    pub name: &'static str,
    /// Native-script display name; empty when it matches `name`.
    pub native_name: &'static str,
    /// Locale identifier as stored in preferences; the empty string means
    /// "follow the operating system".
    pub code: &'static str,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.native_name.is_empty() {
            f.write_str(self.name)
        } else {
            write!(f, "{} ({})", self.native_name, self.name)
        }
    }
}

const fn lang(name: &'static str, native_name: &'static str, code: &'static str) -> Language {
    Language {
        name,
        native_name,
        code,
    }
}

/// Languages offered in the preferences dialog, in menu order.
pub const LANGUAGES: &[Language] = &[
    lang("System Default", "", ""),
    lang("Albanian", "shqip", "sq"),
    lang("Arabic", "العربية", "ar"),
    lang("Aragonese", "Aragonés", "an"),
    lang("Belarusian", "Беларуская мова", "be"),
    lang("Bulgarian", "български", "bg"),
    lang("Catalan", "Català", "ca"),
    lang("Chinese Simplified", "简体中文", "zh_CN"),
    lang("Chinese Traditional", "繁體中文", "zh_TW"),
    lang("Croatian", "Hrvatski", "hr_HR"),
    lang("Czech", "český", "cs_CZ"),
    lang("Danish", "Dansk", "da_DK"),
    lang("Dutch", "Nederlands", "nl"),
    lang("English", "English", "en"),
    lang("English (United Kingdom)", "English (United Kingdom)", "en_GB"),
    lang("Estonian", "Eesti", "et"),
    lang("Estonian (Estonia)", "Eesti keel", "et_EE"),
    lang("Filipino", "Pilipino", "fil"),
    lang("Finnish", "Suomi", "fi"),
    lang("French", "Français", "fr"),
    lang("Canadian French", "Canadienne-français", "fr_CA"),
    lang("Galician", "Galego", "gl"),
    lang("Georgian", "საქართველოს", "ka_GE"),
    lang("German", "Deutsch", "de_DE"),
    lang("Greek", "ελληνικά", "el_GR"),
    lang("Hebrew", "עברית", "he"),
    lang("Hindi", "हिंदी", "hi"),
    lang("Hungarian", "Magyar", "hu"),
    lang("Indonesian", "Bahasa Indonesia", "id"),
    lang("Italian", "Italiano", "it_IT"),
    lang("Japanese", "日本語", "ja_JP"),
    lang("Korean", "한국어", "ko_KR"),
    lang("Latvian", "Latviešu", "lv_LV"),
    lang("Lithuanian", "Lietuvių Kalba", "lt_LT"),
    lang("Norwegian Bokmål", "Norsk bokmål", "nb_NO"),
    lang("Persian", "فارسی", "fa"),
    lang("Polish", "Język Polski", "pl"),
    lang("Portuguese (Brazil)", "Português (Brazil)", "pt_BR"),
    lang("Portuguese (Portugal)", "Português (Portugal)", "pt_PT"),
    lang("Romanian", "Română", "ro"),
    lang("Russian", "Русский", "ru"),
    lang("Slovenian", "Slovenščina", "sl_SI"),
    lang("Spanish", "Español", "es"),
    lang("Swedish", "Svenska", "sv"),
    lang("Tamil", "தமிழ்", "ta"),
    lang("Turkish", "Türk", "tr"),
    lang("Ukrainian", "Український", "uk"),
    lang("Vietnamese", "Tiếng Việt", "vi"),
];

/// Error returned when a stored locale identifier is not in [`LANGUAGES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported UI language identifier '{}'", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

/// Look up a stored locale identifier.
///
/// Matching is exact and case-sensitive; `""` resolves to the system-default
/// entry.
pub fn resolve(code: &str) -> Result<&'static Language, UnknownLanguage> {
    LANGUAGES
        .iter()
        .find(|l| l.code == code)
        .ok_or_else(|| UnknownLanguage(code.to_string()))
}
