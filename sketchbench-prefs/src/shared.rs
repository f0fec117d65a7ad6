//! Mutex-guarded handle for hosts that share the store across threads.
//!
//! The plain [`Preferences`] object assumes one logical thread of control
//! (the UI thread). Wrap it in [`SharedPreferences`] when background tasks
//! need access; compound sequences such as [`Preferences::get_font`] (read,
//! decode, rewrite) then run under a single lock acquisition and cannot lose
//! updates to a concurrent writer.

use crate::store::Preferences;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, thread-safe wrapper around [`Preferences`].
#[derive(Clone)]
pub struct SharedPreferences {
    inner: Arc<Mutex<Preferences>>,
}

impl SharedPreferences {
    pub fn new(prefs: Preferences) -> Self {
        Self {
            inner: Arc::new(Mutex::new(prefs)),
        }
    }

    /// Run `f` with exclusive access to the store.
    ///
    /// Use this for anything compound — a get followed by a dependent set,
    /// or the typed getters that may rewrite the table.
    pub fn with<R>(&self, f: impl FnOnce(&mut Preferences) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Owned string value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key).map(str::to_owned)
    }

    pub fn set(&self, key: &str, value: impl Into<String>) {
        self.inner.lock().set(key, value);
    }

    pub fn get_boolean(&self, key: &str) -> bool {
        self.inner.lock().get_boolean(key)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.inner.lock().save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PREFS_FILE_NAME;
    use tempfile::TempDir;

    fn shared() -> (TempDir, SharedPreferences) {
        let dir = TempDir::new().expect("temp dir");
        let prefs =
            Preferences::init(Some(dir.path().join(PREFS_FILE_NAME))).expect("init");
        (dir, SharedPreferences::new(prefs))
    }

    #[test]
    fn test_writes_visible_across_clones_and_threads() {
        let (_dir, shared) = shared();

        let writer = shared.clone();
        std::thread::spawn(move || {
            writer.set("thread.key", "from-thread");
        })
        .join()
        .expect("writer thread");

        assert_eq!(shared.get("thread.key").as_deref(), Some("from-thread"));
    }

    #[test]
    fn test_with_runs_compound_ops_atomically() {
        let (_dir, shared) = shared();

        let font = shared.with(|prefs| {
            prefs.set("editor.font", "garbage");
            prefs.get_font("editor.font")
        });
        assert_eq!(font.expect("fallback font").family, "Monospaced");
    }

    #[test]
    fn test_save_through_handle() {
        let (dir, shared) = shared();
        shared.set("custom.key", "1");
        shared.save().expect("save");
        assert!(dir.path().join(PREFS_FILE_NAME).exists());
    }
}
