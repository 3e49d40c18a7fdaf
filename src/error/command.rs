use thiserror::Error;

use crate::{error::store::StoreError, middleware::capability::Capability};

/// Rejections on the admin command path.
///
/// Every variant is surfaced synchronously to the invoking member as an ephemeral
/// reply built by `reply_text`. None of them are logged at error level except
/// `Store`, which indicates the bot itself failed.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The invoking member lacks a capability required by the operation.
    #[error("User {user_id} lacks the {} capability", .capability.name())]
    PermissionDenied {
        /// Discord ID of the rejected member
        user_id: u64,
        /// The missing capability
        capability: Capability,
    },

    /// A command argument was malformed (empty template, non-text channel, ...).
    #[error("{0}")]
    Validation(String),

    /// The command is guild-scoped but was invoked outside a guild.
    #[error("This command must be used in a server.")]
    GuildOnly,

    /// Persisting the mutation failed; the in-memory table is left unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CommandError {
    /// Text shown to the invoking member when the command is rejected.
    pub fn reply_text(&self) -> String {
        match self {
            Self::PermissionDenied { capability, .. } => {
                format!("Missing permissions ({}).", capability.name())
            }
            Self::Validation(reason) => reason.clone(),
            Self::GuildOnly => self.to_string(),
            Self::Store(_) => {
                "Failed to save the welcome configuration, please try again.".to_string()
            }
        }
    }
}
