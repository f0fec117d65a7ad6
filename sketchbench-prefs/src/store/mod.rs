//! The preferences store: factory defaults overlaid with user entries.
//!
//! # Sub-modules
//!
//! - [`accessors`] — typed get/set pairs layered over the string table
//! - [`persistence`] — `impl Preferences` init/save and path resolution

pub mod accessors;
pub mod persistence;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File name of the persisted preferences, shared by the bundled factory
/// copy and the per-user overlay.
pub const PREFS_FILE_NAME: &str = "preferences.txt";

/// Version string injected as `runtime.ide.version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Keys with this prefix describe the running process and are never
/// persisted.
pub const RUNTIME_PREFIX: &str = "runtime.";

/// The IDE's key/value preferences table.
///
/// Values are stored as strings; richer types are encoded and decoded at the
/// accessor boundary (see [`accessors`]). Construct one per process with
/// [`Preferences::init`] and hand it to collaborators by reference, or wrap
/// it in [`crate::SharedPreferences`] for multi-threaded hosts.
#[derive(Debug, Clone)]
pub struct Preferences {
    /// Live table: factory defaults overlaid with user-saved entries.
    current: HashMap<String, String>,
    /// Snapshot of the table taken before the user overlay was applied.
    defaults: HashMap<String, String>,
    /// Resolved location of the persisted file.
    path: PathBuf,
    /// When false, `save` is a no-op; lets callers batch mutations.
    save_enabled: bool,
}

impl Preferences {
    /// Raw string value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.current.get(key).map(String::as_str)
    }

    /// Raw string value for `key`, or `fallback` if unset.
    pub fn get_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.get(key).unwrap_or(fallback)
    }

    /// True iff `key` is present in the live table.
    pub fn has(&self, key: &str) -> bool {
        self.current.contains_key(key)
    }

    /// Upsert a string value.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.current.insert(key.to_string(), value.into());
    }

    /// Remove `key` from the live table; no-op if absent.
    pub fn unset(&mut self, key: &str) {
        self.current.remove(key);
    }

    /// Factory value for `key` from the init-time snapshot.
    ///
    /// The snapshot is immutable: later [`set`](Self::set) calls change only
    /// the live table.
    pub fn get_default(&self, key: &str) -> Option<&str> {
        self.defaults.get(key).map(String::as_str)
    }

    /// Independent copy of the live table; caller mutations do not affect
    /// the store.
    pub fn map(&self) -> HashMap<String, String> {
        self.current.clone()
    }

    /// Location the store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Enable or disable [`save`](Self::save); disabling lets callers batch
    /// mutations (bulk migration, tests) without flushing each step.
    pub fn set_save_enabled(&mut self, enabled: bool) {
        self.save_enabled = enabled;
    }
}
