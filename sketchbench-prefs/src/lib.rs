//! Preferences storage for the Sketchbench IDE.
//!
//! This crate provides the typed key/value store behind the IDE's
//! Preferences dialog and the rest of the application. It includes:
//!
//! - Factory defaults overlaid with the user's saved entries
//! - Typed accessors (bool, int, color, font, syntax style) over plain
//!   string values
//! - `key=value` text-file persistence with runtime-key filtering
//! - Startup migration of known-obsolete values
//! - A mutex-guarded handle for multi-threaded hosts
//!
//! The store itself carries no GUI code; the dialog reads and writes it
//! through the accessors defined here.

pub mod error;
mod fixups;
pub mod format;
pub mod shared;
pub mod store;
mod types;

// Re-export main types for convenience
pub use error::PrefsError;
pub use shared::SharedPreferences;
pub use store::persistence::{default_prefs_path, settings_dir};
pub use store::{PREFS_FILE_NAME, Preferences, RUNTIME_PREFIX, VERSION};
pub use types::{Color, FontSpec, SyntaxStyle};
