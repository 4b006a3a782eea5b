//! Launch dispatcher.
//!
//! Builds one OS-specific shell command string per launch and executes it
//! as an asynchronous child process. A launch is fire-and-forget from the
//! host's perspective: the outcome surfaces as a transient notification and
//! never propagates to the caller. No retries, no timeout; a hung external
//! process is not guarded against.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error};

use crate::editors::Editor;
use crate::error::{Error, Result};
use crate::host::{Notifier, Target, Vault};

// ─────────────────────────────────────────────────────────────────────────────
// OS Families
// ─────────────────────────────────────────────────────────────────────────────

/// Operating-system family selecting the command shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    MacOs,
    Windows,
    /// Linux and other Unix-likes.
    Other,
}

impl OsFamily {
    /// The family of the running host.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            OsFamily::MacOs
        } else if cfg!(windows) {
            OsFamily::Windows
        } else {
            OsFamily::Other
        }
    }

    /// Shell used to execute the built command string.
    fn shell(self) -> (&'static str, &'static str) {
        match self {
            OsFamily::Windows => ("cmd", "/C"),
            OsFamily::MacOs | OsFamily::Other => ("sh", "-c"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Command Construction
// ─────────────────────────────────────────────────────────────────────────────

/// Build the shell command string for opening `path` with `editor`.
///
/// macOS goes through the system `open -a` facility with the application
/// name; Windows and Linux invoke the editor's command token directly.
/// The path (and the application name on macOS) are quoted to tolerate
/// embedded spaces.
pub fn build_command(editor: &Editor, family: OsFamily, path: &Path) -> String {
    let path = path.display();
    match family {
        OsFamily::MacOs => format!("open -a \"{}\" \"{}\"", editor.app_name, path),
        OsFamily::Windows | OsFamily::Other => format!("{} \"{}\"", editor.command, path),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Launcher
// ─────────────────────────────────────────────────────────────────────────────

/// Executes editor launches against the host's vault and notification
/// collaborators.
pub struct Launcher {
    vault: Arc<dyn Vault>,
    notifier: Arc<dyn Notifier>,
    family: OsFamily,
}

impl Launcher {
    pub fn new(vault: Arc<dyn Vault>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_family(vault, notifier, OsFamily::current())
    }

    /// Launcher pinned to a specific OS family.
    pub fn with_family(
        vault: Arc<dyn Vault>,
        notifier: Arc<dyn Notifier>,
        family: OsFamily,
    ) -> Self {
        Self {
            vault,
            notifier,
            family,
        }
    }

    /// Open `target` (or the vault root when absent) in `editor`.
    ///
    /// Awaits process completion, then notifies success or failure. Errors
    /// are fully recovered here; this function never fails the caller.
    pub async fn open(&self, editor: &Editor, target: Option<&Target>) {
        let path = match target {
            Some(target) => self.vault.absolute_path(target.vault_path()),
            None => self.vault.root_path(),
        };

        let command = build_command(editor, self.family, &path);
        debug!("Launching {}: {}", editor.name, command);

        match self.run(editor, &command).await {
            Ok(()) => {
                self.notifier.notify(&format!("Opened in {}", editor.name));
            }
            Err(e) => {
                error!("Launch failed: {}", e);
                self.notifier.notify(&format!(
                    "Failed to open in {}. Is it installed?",
                    editor.name
                ));
            }
        }
    }

    /// Spawn `open` on a background task.
    ///
    /// Menu click handlers and palette commands go through here so menu
    /// construction never blocks on the child process.
    pub fn open_detached(self: Arc<Self>, editor: Editor, target: Option<Target>) {
        tokio::spawn(async move {
            self.open(&editor, target.as_ref()).await;
        });
    }

    async fn run(&self, editor: &Editor, command: &str) -> Result<()> {
        let (shell, flag) = self.family.shell();

        let output = tokio::process::Command::new(shell)
            .arg(flag)
            .arg(command)
            .output()
            .await
            .map_err(|e| Error::launch(&editor.name, e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(Error::launch(
                &editor.name,
                format!(
                    "exit code {:?}: {}",
                    output.status.code(),
                    stderr.trim()
                ),
            ))
        }
    }
}
