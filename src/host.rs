//! Host application collaborators.
//!
//! The plugin itself renders no widgets, stores no files, and shows no
//! notifications. Everything user-facing is delegated to the host through
//! the traits in this module: menus, vault path resolution, notifications,
//! command-palette registration, and settings persistence. Tests and the
//! demo binary provide their own implementations.

use std::path::PathBuf;

use crate::error::Result;
use crate::settings::PluginSettings;

// ─────────────────────────────────────────────────────────────────────────────
// Targets
// ─────────────────────────────────────────────────────────────────────────────

/// A file or folder inside the vault, identified by its vault-relative path.
///
/// Menu events that carry no target mean "the vault root"; those are modeled
/// as `Option<&Target>` at the call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(String),
    Folder(String),
}

impl Target {
    /// The vault-relative path of this target.
    pub fn vault_path(&self) -> &str {
        match self {
            Target::File(path) | Target::Folder(path) => path,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Menus
// ─────────────────────────────────────────────────────────────────────────────

/// Click handler attached to a menu entry.
///
/// Captures the editor descriptor and target at contribution time; it is
/// not re-evaluated when the menu is shown.
pub type ClickHandler = Box<dyn FnOnce() + Send>;

/// A context menu (or submenu) the host lets us add entries to.
///
/// Two capabilities, both typed: plain entries and submenu-producing
/// entries. No downcasting is needed on either side.
pub trait Menu {
    /// Add a clickable entry.
    fn add_entry(&mut self, title: &str, icon: &str, on_click: ClickHandler);

    /// Add an entry that opens a submenu, and return that submenu
    /// so further entries can be added to it.
    fn add_submenu(&mut self, title: &str, icon: &str) -> &mut dyn Menu;
}

// ─────────────────────────────────────────────────────────────────────────────
// Vault
// ─────────────────────────────────────────────────────────────────────────────

/// Path resolution and workspace state supplied by the host.
pub trait Vault: Send + Sync {
    /// Resolve a vault-relative path to an absolute filesystem path.
    fn absolute_path(&self, vault_path: &str) -> PathBuf;

    /// The vault's root storage path.
    fn root_path(&self) -> PathBuf;

    /// The file currently open in the host, if any.
    fn active_file(&self) -> Option<Target>;
}

/// A vault backed by a plain directory. Used by the demo binary; real hosts
/// supply their own resolution.
#[derive(Debug, Clone)]
pub struct DirVault {
    root: PathBuf,
}

impl DirVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Vault for DirVault {
    fn absolute_path(&self, vault_path: &str) -> PathBuf {
        self.root.join(vault_path)
    }

    fn root_path(&self) -> PathBuf {
        self.root.clone()
    }

    fn active_file(&self) -> Option<Target> {
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────────────────────────

/// Transient user-facing messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

// ─────────────────────────────────────────────────────────────────────────────
// Command Palette
// ─────────────────────────────────────────────────────────────────────────────

/// A command-palette entry.
pub struct Command {
    pub id: String,
    pub name: String,
    pub action: Box<dyn Fn() + Send + Sync>,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

/// Command registration, available only during activation.
pub trait CommandRegistry {
    fn register(&mut self, command: Command);
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Persistence
// ─────────────────────────────────────────────────────────────────────────────

/// Key-value persistence for the plugin settings object.
///
/// `load` returns `Ok(None)` when nothing has been persisted yet (first
/// activation); the caller falls back to defaults.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore: Send + Sync {
    fn load(&self) -> Result<Option<PluginSettings>>;
    fn save(&self, settings: &PluginSettings) -> Result<()>;
}
