//! Plugin error types

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types organized by domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Settings Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Settings error: {message}")]
    Settings { message: String },

    // ─────────────────────────────────────────────────────────────
    // Launch Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to launch {editor}: {reason}")]
    Launch { editor: String, reason: String },

    #[error("No enabled editor with id: {id}")]
    UnknownEditor { id: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings {
            message: message.into(),
        }
    }

    pub fn launch(editor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Launch {
            editor: editor.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_editor(id: impl Into<String>) -> Self {
        Self::UnknownEditor { id: id.into() }
    }

    /// Check if this is a recoverable error.
    ///
    /// Launch failures are always recovered locally (a notification is
    /// shown instead of propagating); only settings persistence failures
    /// are surfaced to the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Launch { .. } | Error::UnknownEditor { .. }
        )
    }
}
