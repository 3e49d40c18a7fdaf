//! Error types for the welcome bot.
//!
//! Each concern owns its own error enum (`ConfigError`, `StoreError`, `CommandError`,
//! `DeliveryError`). `AppError` aggregates the ones that can abort startup or the bot
//! client, so `main` can propagate everything with `?`.
//!
//! Errors raised on the admin command path are converted into user-facing replies by
//! `CommandError::reply_text`. Errors raised on the join-event path never leave the
//! delivery router.

pub mod command;
pub mod config;
pub mod delivery;
pub mod store;

use thiserror::Error;

use crate::error::{config::ConfigError, store::StoreError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion so startup code can use `?`
/// across configuration, storage and Discord client errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Welcome store error that could not be recovered from at startup.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Failure to install the global tracing subscriber.
    #[error("Failed to initialize logging: {0}")]
    LoggingErr(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
