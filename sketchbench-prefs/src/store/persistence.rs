//! Init and save for `Preferences`.
//!
//! Covers:
//! - `init` (factory defaults, runtime keys, user overlay, locale check,
//!   value fix-ups)
//! - `save` (`key=value` text I/O with atomic write)
//! - platform path helpers (`settings_dir`, `default_prefs_path`)

use super::{PREFS_FILE_NAME, Preferences, VERSION};
use crate::error::PrefsError;
use crate::{fixups, format};
use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Factory defaults shipped with the IDE.
const FACTORY_DEFAULTS: &str = include_str!("../../resources/preferences.txt");

/// Key holding the user's chosen UI language.
const LANGUAGE_KEY: &str = "editor.languages.current";

impl Preferences {
    /// Build the process-wide store.
    ///
    /// Loads the bundled factory defaults, injects the `runtime.*` keys,
    /// snapshots the result, then overlays the persisted user file at `path`
    /// (or the platform default location) if one exists. A corrupt defaults
    /// resource is fatal; an unreadable user file is logged and skipped so
    /// the IDE still starts with factory settings.
    pub fn init(path: Option<PathBuf>) -> Result<Self> {
        let path = path.unwrap_or_else(default_prefs_path);
        log::info!("Preferences path: {:?}", path);

        let mut current = HashMap::new();
        format::parse_into(&mut current, FACTORY_DEFAULTS);
        if current.is_empty() {
            return Err(PrefsError::CorruptDefaults.into());
        }

        // Process facts exposed to the rest of the IDE, never persisted.
        if let Some(install_dir) = install_dir() {
            current.insert(
                "runtime.ide.path".to_string(),
                install_dir.to_string_lossy().into_owned(),
            );
        }
        current.insert("runtime.ide.version".to_string(), VERSION.to_string());
        current.insert("runtime.os".to_string(), std::env::consts::OS.to_string());

        let defaults = current.clone();

        let mut prefs = Self {
            current,
            defaults,
            path,
            save_enabled: true,
        };

        if prefs.path.exists() {
            match fs::read_to_string(&prefs.path) {
                Ok(contents) => {
                    log::info!("Loading saved preferences from {:?}", prefs.path);
                    format::parse_into(&mut prefs.current, &contents);
                }
                Err(e) => {
                    log::error!(
                        "Error reading the preferences file. Please delete (or move) \
                         {:?} and restart. ({e})",
                        prefs.path,
                    );
                }
            }
        }

        prefs.check_language();
        fixups::apply(&mut prefs);

        Ok(prefs)
    }

    /// Resolve the stored UI language; an unsupported identifier downgrades
    /// to the fixed default and the stored key is rewritten to match.
    fn check_language(&mut self) {
        let code = self.get_or(LANGUAGE_KEY, "").to_string();
        match sketchbench_i18n::resolve(&code) {
            Ok(language) => log::debug!("UI language: {language}"),
            Err(e) => {
                log::warn!(
                    "{e}; falling back to '{}'",
                    sketchbench_i18n::DEFAULT_LANGUAGE_CODE
                );
                self.set(LANGUAGE_KEY, sketchbench_i18n::DEFAULT_LANGUAGE_CODE);
            }
        }
    }

    /// Write the live table to disk, sorted by key, skipping `runtime.*`.
    ///
    /// No-op while saving is disabled. The write is atomic from the caller's
    /// perspective: a temp file in the target directory is renamed over the
    /// destination.
    pub fn save(&self) -> Result<()> {
        if !self.save_enabled {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(PrefsError::Io)?;
        }

        let text = format::to_sorted_lines(&self.current);

        let temp_path = self.path.with_extension("txt.tmp");
        fs::write(&temp_path, text).map_err(PrefsError::Io)?;
        fs::rename(&temp_path, &self.path).map_err(PrefsError::Io)?;

        Ok(())
    }
}

/// Platform-standard location of the persisted preferences file.
pub fn default_prefs_path() -> PathBuf {
    settings_dir().join(PREFS_FILE_NAME)
}

/// Per-user settings directory for the IDE.
pub fn settings_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("sketchbench")
        } else {
            PathBuf::from(".")
        }
    }
    #[cfg(not(target_os = "windows"))]
    {
        // XDG convention on all platforms: ~/.config/sketchbench
        if let Some(home_dir) = dirs::home_dir() {
            home_dir.join(".config").join("sketchbench")
        } else {
            PathBuf::from(".")
        }
    }
}

/// Directory the running executable was installed to.
fn install_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
}
