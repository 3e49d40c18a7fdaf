use std::str::FromStr;

use serenity::all::{Context, CreateAllowedMentions, CreateMessage, Message};

use crate::{bot::command::general, state::AppState};

/// Text commands recognised after the configured prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PrefixCommand {
    /// `echo <text>` repeats the text back
    Echo(String),
    /// `ping` replies with gateway latency
    Ping,
}

impl FromStr for PrefixCommand {
    type Err = ();

    /// Parses the text following the prefix
    fn from_str(body: &str) -> Result<Self, Self::Err> {
        let (name, args) = body
            .split_once(char::is_whitespace)
            .map(|(name, args)| (name, args.trim()))
            .unwrap_or((body, ""));

        match name {
            "echo" if !args.is_empty() => Ok(PrefixCommand::Echo(args.to_string())),
            "ping" => Ok(PrefixCommand::Ping),
            _ => Err(()),
        }
    }
}

/// Handle message creation in a channel
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some(body) = message.content.strip_prefix(state.command_prefix.as_str()) else {
        return;
    };
    let Ok(command) = body.parse::<PrefixCommand>() else {
        return;
    };

    let reply = match command {
        // Echoed text must not ping anyone
        PrefixCommand::Echo(text) => CreateMessage::new()
            .content(text)
            .allowed_mentions(CreateAllowedMentions::new()),
        PrefixCommand::Ping => CreateMessage::new().content(general::pong(&ctx).await),
    };

    if let Err(e) = message.channel_id.send_message(&ctx.http, reply).await {
        tracing::error!(
            "Failed to reply to prefix command in channel {}: {}",
            message.channel_id,
            e
        );
    }
}
