//! Settings store
//!
//! Holds the three persisted policy values behind a lock, with optional
//! JSON file persistence. Opening against an absent file seeds the
//! documented first-activation defaults. Every read failure falls back to
//! those defaults so a broken settings file degrades to "filtering uses
//! the installed policy", never a failed listing.

use crate::error::{Result, ServerError};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tagveil_core::RawPolicySettings;

/// Shared store for the persisted policy settings.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    inner: Arc<RwLock<RawPolicySettings>>,
    path: Option<PathBuf>,
}

impl SettingsStore {
    /// Memory-only store seeded with the installed defaults.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(RwLock::new(RawPolicySettings::default())),
            path: None,
        }
    }

    /// File-backed store.
    ///
    /// An absent file is created with the installed defaults (first
    /// activation). An unreadable or malformed file yields the defaults
    /// without overwriting it.
    pub fn open(path: PathBuf) -> Self {
        let settings = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "malformed settings file, using defaults"
                    );
                    RawPolicySettings::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let defaults = RawPolicySettings::default();
                if let Err(e) = persist(&path, &defaults) {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "could not seed settings file"
                    );
                }
                defaults
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "could not read settings file, using defaults"
                );
                RawPolicySettings::default()
            }
        };
        Self {
            inner: Arc::new(RwLock::new(settings)),
            path: Some(path),
        }
    }

    /// Current settings.
    ///
    /// A poisoned lock yields the defaults (fail open).
    pub fn load(&self) -> RawPolicySettings {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Replace the settings, persisting first when file-backed.
    pub fn save(&self, settings: RawPolicySettings) -> Result<()> {
        if let Some(path) = &self.path {
            persist(path, &settings)?;
        }
        match self.inner.write() {
            Ok(mut guard) => {
                *guard = settings;
                Ok(())
            }
            Err(_) => Err(ServerError::settings("settings lock poisoned")),
        }
    }
}

fn persist(path: &Path, settings: &RawPolicySettings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json)
        .map_err(|e| ServerError::settings(format!("write {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_store_starts_with_defaults() {
        let store = SettingsStore::in_memory();
        assert_eq!(store.load(), RawPolicySettings::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = SettingsStore::in_memory();
        let updated = RawPolicySettings {
            mode: "inclusive".to_string(),
            excluded_tags: String::new(),
            included_tags: "public, featured".to_string(),
        };
        store.save(updated.clone()).unwrap();
        assert_eq!(store.load(), updated);
    }

    #[test]
    fn test_open_seeds_defaults_into_absent_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.json");

        let store = SettingsStore::open(path.clone());
        assert_eq!(store.load(), RawPolicySettings::default());

        // First activation wrote the defaults to disk.
        let text = std::fs::read_to_string(&path).unwrap();
        let on_disk: RawPolicySettings = serde_json::from_str(&text).unwrap();
        assert_eq!(on_disk, RawPolicySettings::default());
    }

    #[test]
    fn test_open_reads_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.json");
        let existing = RawPolicySettings {
            mode: "inclusive".to_string(),
            excluded_tags: "private".to_string(),
            included_tags: "public".to_string(),
        };
        std::fs::write(&path, serde_json::to_string(&existing).unwrap()).unwrap();

        let store = SettingsStore::open(path);
        assert_eq!(store.load(), existing);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = SettingsStore::open(path.clone());
        assert_eq!(store.load(), RawPolicySettings::default());

        // The broken file was not overwritten.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_save_persists_to_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.json");
        let store = SettingsStore::open(path.clone());

        let updated = RawPolicySettings {
            mode: "inclusive".to_string(),
            ..RawPolicySettings::default()
        };
        store.save(updated.clone()).unwrap();

        let reopened = SettingsStore::open(path);
        assert_eq!(reopened.load(), updated);
    }
}
