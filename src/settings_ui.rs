//! Settings view model.
//!
//! Builds the list of configurable setting items (rendered by the host)
//! and applies control changes to the in-memory settings object. Every
//! change is persisted immediately by the caller; changes that affect
//! dependent control state (enable toggles, add, delete) request a full
//! re-render.
//!
//! Field contents are not validated: an empty command or app name is
//! permitted and simply fails at launch time.

use crate::editors::BUILT_IN_EDITORS;
use crate::settings::{CustomEditor, PluginSettings};

// ─────────────────────────────────────────────────────────────────────────────
// Setting Items
// ─────────────────────────────────────────────────────────────────────────────

/// Value carried by a setting control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    Text(String),
    /// A button-like control (add/delete).
    Action,
}

/// One renderable setting control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingItem {
    pub key: String,
    pub label: String,
    pub description: String,
    pub value: SettingValue,
    pub section: String,
    /// Rendered greyed-out; the host ignores interaction.
    pub disabled: bool,
}

impl SettingItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: String::new(),
            value: SettingValue::Action,
            section: String::new(),
            disabled: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn value(mut self, value: SettingValue) -> Self {
        self.value = value;
        self
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Generate the full settings item list for the current settings state.
pub fn settings_items(settings: &PluginSettings) -> Vec<SettingItem> {
    let mut items = Vec::new();

    // ─────────────────────────────────────────────────────────
    // Built-in Editors
    // ─────────────────────────────────────────────────────────
    for editor in BUILT_IN_EDITORS {
        let toggles = settings.toggles(editor.id);
        items.push(
            SettingItem::new(format!("builtin.{}.enabled", editor.id), editor.name)
                .description(format!("Show \"Open in {}\" in menus", editor.name))
                .value(SettingValue::Bool(toggles.enabled))
                .section("Editors"),
        );
        items.push(
            SettingItem::new(format!("builtin.{}.grouped", editor.id), "Group")
                .description("Move into the \"Open in External Editor\" submenu")
                .value(SettingValue::Bool(toggles.grouped))
                .section("Editors")
                // Group state only matters for enabled editors
                .disabled(!toggles.enabled),
        );
    }

    // ─────────────────────────────────────────────────────────
    // Custom Editors
    // ─────────────────────────────────────────────────────────
    items.push(
        SettingItem::new("custom.add", "Add custom editor")
            .description("Add an editor not in the built-in list")
            .value(SettingValue::Action)
            .section("Custom editors"),
    );

    for editor in &settings.custom_editors {
        let section = format!("Custom editor: {}", display_name(editor));
        items.push(
            SettingItem::new(format!("custom.{}.name", editor.id), "Name")
                .value(SettingValue::Text(editor.name.clone()))
                .section(&section),
        );
        items.push(
            SettingItem::new(format!("custom.{}.appName", editor.id), "macOS app name")
                .description("Application name passed to open -a")
                .value(SettingValue::Text(editor.app_name.clone()))
                .section(&section),
        );
        items.push(
            SettingItem::new(format!("custom.{}.command", editor.id), "Command")
                .description("CLI command invoked on Windows and Linux")
                .value(SettingValue::Text(editor.command.clone()))
                .section(&section),
        );
        items.push(
            SettingItem::new(format!("custom.{}.enabled", editor.id), "Enabled")
                .value(SettingValue::Bool(editor.enabled))
                .section(&section),
        );
        items.push(
            SettingItem::new(format!("custom.{}.grouped", editor.id), "Group")
                .value(SettingValue::Bool(editor.grouped))
                .section(&section)
                .disabled(!editor.enabled),
        );
        items.push(
            SettingItem::new(format!("custom.{}.delete", editor.id), "Delete")
                .value(SettingValue::Action)
                .section(&section),
        );
    }

    items
}

fn display_name(editor: &CustomEditor) -> &str {
    if editor.name.is_empty() {
        "(unnamed)"
    } else {
        &editor.name
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Change Application
// ─────────────────────────────────────────────────────────────────────────────

/// Editable text field of a custom editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomField {
    Name,
    AppName,
    Command,
}

/// A single control change coming from the settings UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsChange {
    BuiltInEnabled { id: String, enabled: bool },
    BuiltInGrouped { id: String, grouped: bool },
    AddCustomEditor,
    CustomField {
        id: String,
        field: CustomField,
        value: String,
    },
    CustomEnabled { id: String, enabled: bool },
    CustomGrouped { id: String, grouped: bool },
    RemoveCustomEditor { id: String },
}

/// Whether the host must rebuild the settings controls after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    None,
    /// Dependent control state changed (e.g. a group toggle's disabled
    /// state); rebuild everything.
    Full,
}

/// Apply a control change to the in-memory settings object.
///
/// The caller persists the settings afterwards; this function only
/// mutates. Changes naming an unknown id are ignored (the UI and the
/// settings can only drift apart if the host replays stale events).
pub fn apply_change(settings: &mut PluginSettings, change: SettingsChange) -> Refresh {
    match change {
        SettingsChange::BuiltInEnabled { id, enabled } => {
            settings.built_in_editors.entry(id).or_default().enabled = enabled;
            Refresh::Full
        }
        SettingsChange::BuiltInGrouped { id, grouped } => {
            settings.built_in_editors.entry(id).or_default().grouped = grouped;
            Refresh::None
        }
        SettingsChange::AddCustomEditor => {
            let id = settings.next_custom_id();
            settings.custom_editors.push(CustomEditor {
                id,
                ..Default::default()
            });
            Refresh::Full
        }
        SettingsChange::CustomField { id, field, value } => {
            if let Some(editor) = settings.custom_mut(&id) {
                match field {
                    CustomField::Name => editor.name = value,
                    CustomField::AppName => editor.app_name = value,
                    CustomField::Command => editor.command = value,
                }
            }
            Refresh::None
        }
        SettingsChange::CustomEnabled { id, enabled } => {
            if let Some(editor) = settings.custom_mut(&id) {
                editor.enabled = enabled;
            }
            Refresh::Full
        }
        SettingsChange::CustomGrouped { id, grouped } => {
            if let Some(editor) = settings.custom_mut(&id) {
                editor.grouped = grouped;
            }
            Refresh::None
        }
        SettingsChange::RemoveCustomEditor { id } => {
            settings.remove_custom(&id);
            Refresh::Full
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_custom(settings: &mut PluginSettings) -> String {
        apply_change(settings, SettingsChange::AddCustomEditor);
        settings.custom_editors.last().unwrap().id.clone()
    }

    #[test]
    fn test_enable_toggle_requests_full_refresh() {
        let mut settings = PluginSettings::default();
        settings.backfill_builtins();

        let refresh = apply_change(
            &mut settings,
            SettingsChange::BuiltInEnabled {
                id: "zed".to_string(),
                enabled: true,
            },
        );

        assert_eq!(refresh, Refresh::Full);
        assert!(settings.toggles("zed").enabled);
    }

    #[test]
    fn test_group_toggle_no_refresh() {
        let mut settings = PluginSettings::default();
        settings.backfill_builtins();

        let refresh = apply_change(
            &mut settings,
            SettingsChange::BuiltInGrouped {
                id: "zed".to_string(),
                grouped: true,
            },
        );

        assert_eq!(refresh, Refresh::None);
        assert!(settings.toggles("zed").grouped);
    }

    #[test]
    fn test_add_custom_editor_blank_with_fresh_id() {
        let mut settings = PluginSettings::default();

        let first = add_custom(&mut settings);
        let second = add_custom(&mut settings);

        assert_ne!(first, second);
        let editor = &settings.custom_editors[0];
        assert!(editor.name.is_empty());
        assert!(editor.command.is_empty());
        assert!(!editor.enabled);
    }

    #[test]
    fn test_custom_field_updates() {
        let mut settings = PluginSettings::default();
        let id = add_custom(&mut settings);

        for (field, value) in [
            (CustomField::Name, "Helix"),
            (CustomField::AppName, "Helix"),
            (CustomField::Command, "hx"),
        ] {
            let refresh = apply_change(
                &mut settings,
                SettingsChange::CustomField {
                    id: id.clone(),
                    field,
                    value: value.to_string(),
                },
            );
            assert_eq!(refresh, Refresh::None);
        }

        let editor = &settings.custom_editors[0];
        assert_eq!(editor.name, "Helix");
        assert_eq!(editor.app_name, "Helix");
        assert_eq!(editor.command, "hx");
    }

    #[test]
    fn test_remove_custom_editor_preserves_others() {
        let mut settings = PluginSettings::default();
        let a = add_custom(&mut settings);
        let b = add_custom(&mut settings);
        let c = add_custom(&mut settings);

        let refresh = apply_change(
            &mut settings,
            SettingsChange::RemoveCustomEditor { id: b },
        );

        assert_eq!(refresh, Refresh::Full);
        let ids: Vec<&str> = settings
            .custom_editors
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec![a.as_str(), c.as_str()]);
    }

    #[test]
    fn test_change_with_unknown_id_is_ignored() {
        let mut settings = PluginSettings::default();

        apply_change(
            &mut settings,
            SettingsChange::CustomEnabled {
                id: "ghost".to_string(),
                enabled: true,
            },
        );

        assert!(settings.custom_editors.is_empty());
    }

    #[test]
    fn test_items_group_toggle_disabled_while_editor_disabled() {
        let mut settings = PluginSettings::default();
        settings.backfill_builtins();

        let items = settings_items(&settings);
        let group = items
            .iter()
            .find(|i| i.key == "builtin.zed.grouped")
            .unwrap();
        assert!(group.disabled);

        apply_change(
            &mut settings,
            SettingsChange::BuiltInEnabled {
                id: "zed".to_string(),
                enabled: true,
            },
        );

        let items = settings_items(&settings);
        let group = items
            .iter()
            .find(|i| i.key == "builtin.zed.grouped")
            .unwrap();
        assert!(!group.disabled);
    }

    #[test]
    fn test_items_include_custom_editor_block() {
        let mut settings = PluginSettings::default();
        let id = add_custom(&mut settings);
        apply_change(
            &mut settings,
            SettingsChange::CustomField {
                id: id.clone(),
                field: CustomField::Name,
                value: "Helix".to_string(),
            },
        );

        let items = settings_items(&settings);
        let keys: Vec<&str> = items
            .iter()
            .filter(|i| i.key.starts_with(&format!("custom.{id}")))
            .map(|i| i.key.rsplit('.').next().unwrap())
            .collect();

        assert_eq!(
            keys,
            vec!["name", "appName", "command", "enabled", "grouped", "delete"]
        );
        assert!(items
            .iter()
            .any(|i| i.section == "Custom editor: Helix"));
    }

    #[test]
    fn test_items_empty_fields_permitted() {
        // No validation: a blank custom editor still renders controls
        let mut settings = PluginSettings::default();
        add_custom(&mut settings);

        let items = settings_items(&settings);
        assert!(items.iter().any(|i| i.section.contains("(unnamed)")));
    }
}
