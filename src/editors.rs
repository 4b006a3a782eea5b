//! Editor registry.
//!
//! Built-in editor descriptors are immutable templates; their enable/group
//! flags come from the persisted settings at read time. Custom editors are
//! fully user-owned. [`enabled_editors`] merges both into the common
//! descriptor shape consumed by the menu contributor and the launcher.

use crate::settings::PluginSettings;

/// Built-in editor template with fixed identity and commands.
#[derive(Debug, Clone)]
pub struct BuiltInEditor {
    pub id: &'static str,
    pub name: &'static str,
    /// macOS application name, passed to `open -a`.
    pub app_name: &'static str,
    /// CLI command token, invoked directly on Windows/Linux.
    pub command: &'static str,
}

/// Built-in editors, in menu declaration order.
pub const BUILT_IN_EDITORS: &[BuiltInEditor] = &[
    BuiltInEditor {
        id: "vscode",
        name: "Visual Studio Code",
        app_name: "Visual Studio Code",
        command: "code",
    },
    BuiltInEditor {
        id: "cursor",
        name: "Cursor",
        app_name: "Cursor",
        command: "cursor",
    },
    BuiltInEditor {
        id: "zed",
        name: "Zed",
        app_name: "Zed",
        command: "zed",
    },
    BuiltInEditor {
        id: "sublime",
        name: "Sublime Text",
        app_name: "Sublime Text",
        command: "subl",
    },
    BuiltInEditor {
        id: "intellij",
        name: "IntelliJ IDEA",
        app_name: "IntelliJ IDEA",
        command: "idea",
    },
];

/// Merged editor descriptor with settings flags applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    pub id: String,
    pub name: String,
    pub app_name: String,
    pub command: String,
    pub grouped: bool,
}

/// All currently enabled editors.
///
/// Built-ins come first in declaration order, then custom editors in
/// stored list order. Returns an empty vec when nothing is enabled.
pub fn enabled_editors(settings: &PluginSettings) -> Vec<Editor> {
    let builtins = BUILT_IN_EDITORS.iter().filter_map(|editor| {
        let toggles = settings.toggles(editor.id);
        toggles.enabled.then(|| Editor {
            id: editor.id.to_string(),
            name: editor.name.to_string(),
            app_name: editor.app_name.to_string(),
            command: editor.command.to_string(),
            grouped: toggles.grouped,
        })
    });

    let customs = settings
        .custom_editors
        .iter()
        .filter(|e| e.enabled)
        .map(|e| Editor {
            id: e.id.clone(),
            name: e.name.clone(),
            app_name: e.app_name.clone(),
            command: e.command.clone(),
            grouped: e.grouped,
        });

    builtins.chain(customs).collect()
}

/// Find an enabled editor by id.
pub fn find_enabled(settings: &PluginSettings, id: &str) -> Option<Editor> {
    enabled_editors(settings).into_iter().find(|e| e.id == id)
}
