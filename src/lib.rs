//! vault-opener
//!
//! A host-application plugin that opens vault files and folders in an
//! external code editor, via context menus and command-palette entries.
//! The host supplies menus, notifications, path resolution, and settings
//! persistence through the traits in [`host`]; this crate supplies the
//! editor registry, the menu contributor, the launch dispatcher, and the
//! settings view model.

// Module declarations
pub mod commands;
pub mod editors;
pub mod error;
pub mod host;
pub mod launch;
pub mod logging;
pub mod menu;
pub mod plugin;
pub mod settings;
pub mod settings_ui;

/// Prelude for common imports used throughout the crate
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export the main entry points
pub use editors::{enabled_editors, BuiltInEditor, Editor, BUILT_IN_EDITORS};
pub use error::{Error, Result};
pub use host::{
    Command, CommandRegistry, DirVault, Menu, Notifier, SettingsStore, Target, Vault,
};
pub use launch::{build_command, Launcher, OsFamily};
pub use plugin::Plugin;
pub use settings::{CustomEditor, EditorToggles, FileSettingsStore, PluginSettings};
pub use settings_ui::{Refresh, SettingItem, SettingsChange};
