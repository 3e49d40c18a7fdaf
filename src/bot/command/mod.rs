//! Slash command registration and dispatch.
//!
//! - `welcome` - the `/welcome*` configuration commands
//! - `general` - `/ping`, `/hello`, `/test` and `/server_stats`
//! - `option` - typed access to resolved command options
//! - `respond` - interaction reply helpers

pub mod general;
pub mod option;
pub mod respond;
pub mod welcome;

use serenity::all::{CommandInteraction, Context, CreateCommand, GuildId, Permissions};

use crate::{error::command::CommandError, middleware::capability::Actor, state::AppState};

/// All global slash commands, in registration order.
pub fn register_all() -> Vec<CreateCommand> {
    vec![
        welcome::register_set(),
        welcome::register_set_channel(),
        welcome::register_toggle(),
        welcome::register_show(),
        welcome::register_preview(),
        welcome::register_help(),
        general::register_ping(),
        general::register_hello(),
        general::register_test(),
        general::register_server_stats(),
    ]
}

/// Routes a slash command to its handler by name.
///
/// Handlers answer the interaction themselves; a failure to send that answer is logged
/// here.
pub async fn dispatch(state: &AppState, ctx: &Context, command: &CommandInteraction) {
    let result = match command.data.name.as_str() {
        "welcome_set" => welcome::run_set(state, ctx, command).await,
        "welcome_set_channel" => welcome::run_set_channel(state, ctx, command).await,
        "welcome_toggle" => welcome::run_toggle(state, ctx, command).await,
        "welcome_show" => welcome::run_show(state, ctx, command).await,
        "welcome" => welcome::run_preview(state, ctx, command).await,
        "welcome_help" => welcome::run_help(ctx, command).await,
        "ping" => general::run_ping(ctx, command).await,
        "hello" => general::run_hello(ctx, command).await,
        "test" => general::run_test(ctx, command).await,
        "server_stats" => general::run_server_stats(ctx, command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            return;
        }
    };

    if let Err(e) = result {
        tracing::error!(
            "Failed to respond to /{} (interaction {}): {}",
            command.data.name,
            command.id,
            e
        );
    }
}

/// Guild the command was invoked in.
///
/// # Returns
/// - `Ok(GuildId)` - Invoked inside a guild
/// - `Err(CommandError::GuildOnly)` - Invoked in a direct message
pub fn require_guild(command: &CommandInteraction) -> Result<GuildId, CommandError> {
    command.guild_id.ok_or(CommandError::GuildOnly)
}

/// The invoking member with the permissions Discord resolved for this channel.
///
/// Outside a guild there is no member and the actor holds no permissions.
pub fn actor(command: &CommandInteraction) -> Actor {
    let permissions = command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .unwrap_or_else(Permissions::empty);

    Actor::new(command.user.id.get(), permissions)
}

/// Guild name from the cache, falling back to the guild ID.
pub fn guild_name(ctx: &Context, guild_id: GuildId) -> String {
    ctx.cache
        .guild(guild_id)
        .map(|guild| guild.name.clone())
        .unwrap_or_else(|| guild_id.to_string())
}
