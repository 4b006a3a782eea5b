//! vault-opener demo host.
//!
//! A minimal host over a plain directory vault: settings live in
//! `<vault>/.vault-opener/settings.json`, notifications go to stderr.
//! Real hosts embed the library and supply their own collaborators.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use vault_opener::prelude::*;
use vault_opener::{
    Command, CommandRegistry, DirVault, FileSettingsStore, Notifier, Plugin, Target,
};

/// Open vault notes and folders in an external code editor
#[derive(Parser, Debug)]
#[command(name = "vault-opener")]
#[command(about = "Open vault notes and folders in an external code editor", long_about = None)]
struct Args {
    /// Path to the vault directory
    #[arg(value_name = "VAULT")]
    vault: PathBuf,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// List enabled editors
    Editors,
    /// Open a vault-relative path (or the vault root) in an editor
    Open {
        /// Vault-relative path; omit to open the vault root
        path: Option<String>,

        /// Editor id; defaults to the first enabled editor
        #[arg(long)]
        editor: Option<String>,
    },
}

/// Notifier printing transient messages to stderr.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("• {message}");
    }
}

/// The demo host has no command palette; registrations are accepted
/// and dropped.
#[derive(Default)]
struct NullRegistry;

impl CommandRegistry for NullRegistry {
    fn register(&mut self, _command: Command) {}
}

#[tokio::main]
async fn main() -> Result<()> {
    vault_opener::logging::init()?;

    let args = Args::parse();

    if !args.vault.is_dir() {
        eprintln!("❌ Not a vault directory: {}", args.vault.display());
        std::process::exit(1);
    }

    let vault = Arc::new(DirVault::new(&args.vault));
    let store = Arc::new(FileSettingsStore::in_vault(&args.vault));
    let notifier = Arc::new(StderrNotifier);
    let mut registry = NullRegistry;

    let plugin = Plugin::activate(store, vault, notifier, &mut registry);

    match args.command {
        CliCommand::Editors => {
            let editors = plugin.editors();
            if editors.is_empty() {
                eprintln!("No editors enabled. Edit .vault-opener/settings.json in the vault.");
                return Ok(());
            }
            for editor in editors {
                let group = if editor.grouped { " [grouped]" } else { "" };
                println!("{:<12} {}{}", editor.id, editor.name, group);
            }
        }
        CliCommand::Open { path, editor } => {
            let editor = match editor {
                Some(id) => plugin
                    .editors()
                    .into_iter()
                    .find(|e| e.id == id)
                    .ok_or_else(|| Error::unknown_editor(id))?,
                None => plugin
                    .editors()
                    .into_iter()
                    .next()
                    .ok_or_else(|| Error::settings("no editors enabled"))?,
            };

            let target = path.map(|p| {
                if args.vault.join(&p).is_dir() {
                    Target::Folder(p)
                } else {
                    Target::File(p)
                }
            });

            info!("Opening {:?} in {}", target, editor.name);
            plugin.launcher().open(&editor, target.as_ref()).await;
        }
    }

    Ok(())
}
