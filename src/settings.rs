//! Persisted plugin settings.
//!
//! The settings object is the sole persisted entity: per-built-in editor
//! toggles plus the ordered list of user-defined custom editors. It is
//! loaded once at activation, lives in memory for the activation's
//! duration, and is written back through the host's [`SettingsStore`]
//! after every mutation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::editors::BUILT_IN_EDITORS;
use crate::error::{Error, Result};
use crate::host::SettingsStore;

/// Directory inside the vault holding the demo host's settings file.
pub const SETTINGS_DIR: &str = ".vault-opener";
const SETTINGS_FILENAME: &str = "settings.json";

// ─────────────────────────────────────────────────────────────────────────────
// Settings Types
// ─────────────────────────────────────────────────────────────────────────────

/// Per-editor enable/group flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorToggles {
    pub enabled: bool,
    pub grouped: bool,
}

/// A user-defined editor configuration. Fully user-owned and stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomEditor {
    pub id: String,
    pub name: String,
    pub app_name: String,
    pub command: String,
    pub enabled: bool,
    pub grouped: bool,
}

impl Default for CustomEditor {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            app_name: String::new(),
            command: String::new(),
            enabled: false,
            grouped: false,
        }
    }
}

/// The persisted settings object.
///
/// Serializes to the wire shape
/// `{ "builtInEditors": { id: {enabled, grouped} }, "customEditors": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginSettings {
    pub built_in_editors: BTreeMap<String, EditorToggles>,
    pub custom_editors: Vec<CustomEditor>,
}

impl PluginSettings {
    /// Ensure every built-in editor id has a toggles entry.
    ///
    /// Missing entries are inserted with defaults (disabled, ungrouped);
    /// existing entries are left untouched. Settings-shape drift is never
    /// an error.
    pub fn backfill_builtins(&mut self) {
        for editor in BUILT_IN_EDITORS {
            self.built_in_editors.entry(editor.id.to_string()).or_default();
        }
    }

    /// Toggles for a built-in editor id, defaulting when absent.
    pub fn toggles(&self, id: &str) -> EditorToggles {
        self.built_in_editors.get(id).copied().unwrap_or_default()
    }

    pub fn custom_mut(&mut self, id: &str) -> Option<&mut CustomEditor> {
        self.custom_editors.iter_mut().find(|e| e.id == id)
    }

    /// Remove the custom editor with the given id. Order and identity of
    /// the remaining entries are preserved.
    pub fn remove_custom(&mut self, id: &str) -> bool {
        let before = self.custom_editors.len();
        self.custom_editors.retain(|e| e.id != id);
        self.custom_editors.len() != before
    }

    /// Generate a fresh custom editor id.
    ///
    /// Millisecond timestamp, bumped while it collides with an existing id,
    /// so ids are unique at creation time and effectively never reused.
    pub fn next_custom_id(&self) -> String {
        let mut stamp = chrono::Utc::now().timestamp_millis();
        loop {
            let id = format!("custom-{stamp}");
            if self.custom_editors.iter().all(|e| e.id != id) {
                return id;
            }
            stamp += 1;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings through the host's store, falling back to defaults.
///
/// A missing or unreadable settings object is not an error: the plugin
/// starts from defaults and the next mutation persists them. Built-in
/// entries are always back-filled after load.
pub fn load_settings(store: &dyn SettingsStore) -> PluginSettings {
    let mut settings = match store.load() {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            debug!("No persisted settings, using defaults");
            PluginSettings::default()
        }
        Err(e) => {
            warn!("Failed to load settings: {}, using defaults", e);
            PluginSettings::default()
        }
    };
    settings.backfill_builtins();
    settings
}

// ─────────────────────────────────────────────────────────────────────────────
// File-backed Store
// ─────────────────────────────────────────────────────────────────────────────

/// A [`SettingsStore`] backed by a JSON file.
///
/// Used by the demo host; real hosts persist the settings object through
/// their own storage. Saves are atomic (temp file + rename).
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The conventional location inside a vault directory.
    pub fn in_vault(vault_root: &Path) -> Self {
        Self::new(vault_root.join(SETTINGS_DIR).join(SETTINGS_FILENAME))
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Option<PluginSettings>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(settings) => Ok(Some(settings)),
            Err(e) => {
                warn!("Failed to parse {:?}: {}", self.path, e);
                Ok(None)
            }
        }
    }

    fn save(&self, settings: &PluginSettings) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::settings("settings path has no parent directory"))?;

        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| Error::settings(format!("Failed to create settings dir: {e}")))?;
        }

        let content = serde_json::to_string_pretty(settings)?;

        // Atomic write: write to temp, then rename
        let temp_path = dir.join(".settings.json.tmp");
        std::fs::write(&temp_path, content)
            .map_err(|e| Error::settings(format!("Failed to write temp file: {e}")))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::settings(format!("Failed to rename temp file: {e}")))?;

        debug!("Saved settings to {:?}", self.path);
        Ok(())
    }
}
