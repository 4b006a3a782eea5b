//! Command-palette registration.
//!
//! One command per enabled editor, registered once at activation. Editors
//! enabled afterwards do not get a command until the next activation; that
//! matches the host's registration lifecycle and is intentional.

use std::sync::Arc;

use tracing::info;

use crate::editors::enabled_editors;
use crate::host::{Command, CommandRegistry, Notifier, Vault};
use crate::launch::Launcher;
use crate::settings::PluginSettings;

/// Register one "open current file" command per enabled editor.
///
/// Each command checks for an active file first; with none open it
/// notifies instead of launching.
pub fn register_commands(
    registry: &mut dyn CommandRegistry,
    settings: &PluginSettings,
    vault: &Arc<dyn Vault>,
    notifier: &Arc<dyn Notifier>,
    launcher: &Arc<Launcher>,
) {
    let editors = enabled_editors(settings);
    info!("Registering {} editor commands", editors.len());

    for editor in editors {
        let id = format!("open-in-{}", editor.id);
        let name = format!("Open current file in {}", editor.name);

        let vault = Arc::clone(vault);
        let notifier = Arc::clone(notifier);
        let launcher = Arc::clone(launcher);

        registry.register(Command {
            id,
            name,
            action: Box::new(move || match vault.active_file() {
                Some(target) => {
                    Arc::clone(&launcher).open_detached(editor.clone(), Some(target));
                }
                None => notifier.notify("No active file to open"),
            }),
        });
    }
}
