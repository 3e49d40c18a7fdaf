//! Interaction reply helpers.
//!
//! Every slash command answers with exactly one interaction response. Errors are always
//! answered ephemerally so only the invoker sees them.

use serenity::all::{
    CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::error::command::CommandError;

/// Discord's limit for a single embed field value.
pub const EMBED_FIELD_LIMIT: usize = 1024;

async fn send(
    ctx: &Context,
    command: &CommandInteraction,
    message: CreateInteractionResponseMessage,
) -> Result<(), serenity::Error> {
    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
}

/// Replies with a message visible to the whole channel.
pub async fn message(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), serenity::Error> {
    send(
        ctx,
        command,
        CreateInteractionResponseMessage::new().content(content),
    )
    .await
}

/// Replies with a message only the invoker can see.
pub async fn ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), serenity::Error> {
    send(
        ctx,
        command,
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
    .await
}

pub async fn embed(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
    ephemeral: bool,
) -> Result<(), serenity::Error> {
    send(
        ctx,
        command,
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .ephemeral(ephemeral),
    )
    .await
}

/// Replies to a failed command with its user-facing text.
///
/// Store failures are the only command errors logged at error level; denials and
/// validation failures are routine.
pub async fn error(
    ctx: &Context,
    command: &CommandInteraction,
    error: &CommandError,
) -> Result<(), serenity::Error> {
    match error {
        CommandError::Store(e) => tracing::error!(
            "/{} by user {} failed to persist: {}",
            command.data.name,
            command.user.id,
            e
        ),
        other => tracing::debug!(
            "/{} by user {} rejected: {}",
            command.data.name,
            command.user.id,
            other
        ),
    }

    ephemeral(ctx, command, error.reply_text()).await
}

/// Fits `text` into an embed field, truncating on a character boundary.
///
/// Empty text is shown as `(empty)` since Discord rejects empty field values.
pub fn field_value(text: &str) -> String {
    if text.is_empty() {
        return "(empty)".to_string();
    }
    if text.chars().count() <= EMBED_FIELD_LIMIT {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(EMBED_FIELD_LIMIT - 1).collect();
    truncated.push('…');
    truncated
}
