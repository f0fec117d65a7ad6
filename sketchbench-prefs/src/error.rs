//! Typed error variants for the sketchbench-prefs crate.
//!
//! These are used internally and exposed for consumers who want to match on
//! specific failure modes instead of opaque `anyhow` strings.

use std::fmt;

/// Errors produced by the preferences store.
///
/// `Preferences::init` and `Preferences::save` return `anyhow::Result` for
/// callers that just want to surface a message; `PrefsError` values coerce
/// through the `From` impl `anyhow` provides for any `std::error::Error`, so
/// they can still be recovered with `downcast_ref` when a caller needs to
/// distinguish, say, a corrupt defaults resource from a plain I/O failure.
#[derive(Debug)]
pub enum PrefsError {
    /// An I/O error occurred reading or writing the preferences file.
    Io(std::io::Error),

    /// The bundled factory defaults parsed to an empty table.
    CorruptDefaults,

    /// A typed accessor was asked for a key that is not set.
    MissingKey(String),

    /// A stored value could not be parsed as a base-10 integer.
    InvalidInteger {
        key: String,
        value: String,
        source: std::num::ParseIntError,
    },
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefsError::Io(e) => write!(f, "I/O error on preferences file: {e}"),
            PrefsError::CorruptDefaults => {
                write!(f, "bundled default settings are empty or unreadable")
            }
            PrefsError::MissingKey(key) => write!(f, "no preference stored for '{key}'"),
            PrefsError::InvalidInteger { key, value, .. } => {
                write!(f, "preference '{key}' holds '{value}', expected an integer")
            }
        }
    }
}

impl std::error::Error for PrefsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrefsError::Io(e) => Some(e),
            PrefsError::InvalidInteger { source, .. } => Some(source),
            PrefsError::CorruptDefaults | PrefsError::MissingKey(_) => None,
        }
    }
}

impl From<std::io::Error> for PrefsError {
    fn from(e: std::io::Error) -> Self {
        PrefsError::Io(e)
    }
}
