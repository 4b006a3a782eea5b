//! Plugin facade.
//!
//! Owns the in-memory settings object for the activation's duration and
//! wires the host collaborators into the registry, menu contributor, and
//! launch dispatcher. Persistence is the source of truth for the next
//! activation; there is no explicit teardown.

use std::sync::Arc;

use tracing::info;

use crate::commands::register_commands;
use crate::editors::{enabled_editors, Editor};
use crate::host::{CommandRegistry, Menu, Notifier, SettingsStore, Target, Vault};
use crate::launch::Launcher;
use crate::menu::contribute;
use crate::settings::{load_settings, PluginSettings};
use crate::settings_ui::{apply_change, settings_items, Refresh, SettingItem, SettingsChange};
use crate::Result;

pub struct Plugin {
    settings: PluginSettings,
    store: Arc<dyn SettingsStore>,
    launcher: Arc<Launcher>,
}

impl Plugin {
    /// Activate the plugin: load settings (back-filling built-in entries)
    /// and register one palette command per currently-enabled editor.
    pub fn activate(
        store: Arc<dyn SettingsStore>,
        vault: Arc<dyn Vault>,
        notifier: Arc<dyn Notifier>,
        registry: &mut dyn CommandRegistry,
    ) -> Self {
        let settings = load_settings(store.as_ref());
        let launcher = Arc::new(Launcher::new(Arc::clone(&vault), Arc::clone(&notifier)));

        register_commands(registry, &settings, &vault, &notifier, &launcher);

        info!(
            "Plugin activated with {} enabled editors",
            enabled_editors(&settings).len()
        );

        Self {
            settings,
            store,
            launcher,
        }
    }

    /// Host callback for file/folder context menu construction.
    ///
    /// `None` means the menu is for the vault root. Reads the current
    /// settings on every call, so newly enabled editors show up
    /// immediately.
    pub fn on_file_menu(&self, menu: &mut dyn Menu, target: Option<&Target>) {
        contribute(menu, target, &self.settings, &self.launcher);
    }

    /// Apply a settings-UI change and persist the whole settings object.
    pub fn apply_settings_change(&mut self, change: SettingsChange) -> Result<Refresh> {
        let refresh = apply_change(&mut self.settings, change);
        self.store.save(&self.settings)?;
        Ok(refresh)
    }

    /// Current settings controls for the host to render.
    pub fn settings_items(&self) -> Vec<SettingItem> {
        settings_items(&self.settings)
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    /// Currently enabled editors, merged shape.
    pub fn editors(&self) -> Vec<Editor> {
        enabled_editors(&self.settings)
    }

    pub fn launcher(&self) -> &Arc<Launcher> {
        &self.launcher
    }
}
