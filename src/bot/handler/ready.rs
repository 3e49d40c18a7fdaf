//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. Global slash commands are synced here so the command
//! list always matches this build.

use serenity::all::{Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// A failed command sync is logged and does not stop the bot; previously registered
/// commands stay available.
///
/// # Arguments
/// - `ctx` - Discord context for the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::register_all()).await {
        Ok(commands) => tracing::info!("Synced {} global application commands", commands.len()),
        Err(e) => tracing::error!("Failed to sync global application commands: {}", e),
    }
}
