//! `/welcome*` slash commands.
//!
//! Each handler extracts its options, calls `WelcomeService` and turns the result into
//! a single interaction response.

use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateEmbed, GuildId, PartialChannel,
};

use crate::{
    bot::{
        command::{actor, guild_name, option, require_guild, respond},
        messenger::{is_text_capable, SerenityMessenger},
    },
    error::command::CommandError,
    model::{
        channel::{ChannelHandle, ChannelRef},
        member::WelcomeRecipient,
        welcome::Destination,
    },
    service::{
        delivery::WelcomeMessenger,
        welcome::{WelcomeService, MAX_MESSAGE_LENGTH},
    },
    state::AppState,
};

/// Embed color for welcome configuration replies.
const WELCOME_COLOR: u32 = 0x2ECC71;

const NOT_CONFIGURED: &str = "No welcome configuration set for this server.";

const HELP_TEXT: &str = "\
Welcome configuration guide:

Placeholders you can use in messages:
- {user} mentions the new member
- {name} is the new member's display name
- {guild} is the server name

Common commands:
- `/welcome_set message: Welcome {user} to {guild}!` sets the welcome text and enables messages.
- `/welcome_set_channel channel:#general` posts welcome messages to #general. Omit `channel` to DM new members.
- `/welcome_toggle enabled:false` disables welcome messages for this server.
- `/welcome_show` shows the current configuration.
- `/welcome` previews the message for yourself or another member.

Tips:
- Messages are limited to 2000 characters.
- Changing settings requires the Manage Server permission.";

pub fn register_set() -> CreateCommand {
    CreateCommand::new("welcome_set")
        .description("Set the server welcome message")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "message",
                "Welcome text; supports {user}, {name} and {guild}",
            )
            .required(true)
            .max_length(MAX_MESSAGE_LENGTH as u16),
        )
}

pub fn register_set_channel() -> CreateCommand {
    CreateCommand::new("welcome_set_channel")
        .description("Set channel for welcome messages (omit for DM)")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "Channel to post welcome messages in",
            )
            .channel_types(vec![ChannelType::Text, ChannelType::News])
            .required(false),
        )
}

pub fn register_toggle() -> CreateCommand {
    CreateCommand::new("welcome_toggle")
        .description("Enable or disable welcome messages")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Boolean,
                "enabled",
                "Whether new members are welcomed",
            )
            .required(true),
        )
}

pub fn register_show() -> CreateCommand {
    CreateCommand::new("welcome_show").description("Show the current welcome configuration")
}

pub fn register_preview() -> CreateCommand {
    CreateCommand::new("welcome")
        .description("Preview the welcome message as it would appear to a new user")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "member",
                "Member to preview for (defaults to you)",
            )
            .required(false),
        )
}

pub fn register_help() -> CreateCommand {
    CreateCommand::new("welcome_help").description("Show help for configuring welcome messages")
}

pub async fn run_set(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), serenity::Error> {
    let options = command.data.options();
    let message = option::string(&options, "message").unwrap_or_default();

    let result = match require_guild(command) {
        Ok(guild_id) => {
            WelcomeService::new(&state.store)
                .set_message(guild_id.get(), message, &actor(command))
                .await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => respond::message(ctx, command, "Welcome message updated.").await,
        Err(e) => respond::error(ctx, command, &e).await,
    }
}

pub async fn run_set_channel(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), serenity::Error> {
    let options = command.data.options();
    let channel = option::channel(&options, "channel").map(channel_ref);

    let result = match require_guild(command) {
        Ok(guild_id) => {
            WelcomeService::new(&state.store)
                .set_destination(guild_id.get(), channel.as_ref(), &actor(command))
                .await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => {
            let target = match &channel {
                Some(channel) => format!("#{}", channel.name),
                None => "DMs".to_string(),
            };
            respond::message(
                ctx,
                command,
                format!("Welcome messages will be sent to {}.", target),
            )
            .await
        }
        Err(e) => respond::error(ctx, command, &e).await,
    }
}

pub async fn run_toggle(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), serenity::Error> {
    let options = command.data.options();

    let result = match (require_guild(command), option::boolean(&options, "enabled")) {
        (Err(e), _) => Err(e),
        (Ok(_), None) => Err(CommandError::Validation(
            "Missing required option `enabled`.".to_string(),
        )),
        (Ok(guild_id), Some(enabled)) => {
            WelcomeService::new(&state.store)
                .set_enabled(guild_id.get(), enabled, &actor(command))
                .await
        }
    };

    match result {
        Ok(config) => {
            let status = if config.enabled { "enabled" } else { "disabled" };
            respond::message(ctx, command, format!("Welcome messages {}.", status)).await
        }
        Err(e) => respond::error(ctx, command, &e).await,
    }
}

pub async fn run_show(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), serenity::Error> {
    let guild_id = match require_guild(command) {
        Ok(guild_id) => guild_id,
        Err(e) => return respond::error(ctx, command, &e).await,
    };

    let Some(config) = WelcomeService::new(&state.store)
        .show(guild_id.get())
        .await
    else {
        return respond::ephemeral(ctx, command, NOT_CONFIGURED).await;
    };

    let channel = destination_label(ctx, guild_id, config.destination).await;
    let embed = CreateEmbed::new()
        .title(format!("Welcome Config for {}", guild_name(ctx, guild_id)))
        .color(WELCOME_COLOR)
        .field("Enabled", config.enabled.to_string(), true)
        .field("Channel", channel, true)
        .field("Message", respond::field_value(&config.message), false);

    respond::embed(ctx, command, embed, false).await
}

pub async fn run_preview(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), serenity::Error> {
    let guild_id = match require_guild(command) {
        Ok(guild_id) => guild_id,
        Err(e) => return respond::error(ctx, command, &e).await,
    };

    let options = command.data.options();
    let recipient = match option::user(&options, "member") {
        Some((user, member)) => {
            let display_name = member
                .and_then(|member| member.nick.as_deref())
                .unwrap_or_else(|| user.display_name());
            WelcomeRecipient::new(user.id.get(), display_name)
        }
        None => {
            let display_name = command
                .member
                .as_ref()
                .map(|member| member.display_name())
                .unwrap_or_else(|| command.user.display_name());
            WelcomeRecipient::new(command.user.id.get(), display_name)
        }
    };

    let Some(preview) = WelcomeService::new(&state.store)
        .preview(guild_id.get(), &guild_name(ctx, guild_id), &recipient)
        .await
    else {
        return respond::ephemeral(ctx, command, NOT_CONFIGURED).await;
    };

    let destination = destination_label(ctx, guild_id, preview.destination).await;
    let embed = CreateEmbed::new()
        .title("Welcome Preview")
        .color(WELCOME_COLOR)
        .field("Destination", destination, true)
        .field("Enabled", preview.enabled.to_string(), true)
        .field("Preview", respond::field_value(&preview.rendered), false);

    respond::embed(ctx, command, embed, true).await
}

pub async fn run_help(ctx: &Context, command: &CommandInteraction) -> Result<(), serenity::Error> {
    respond::ephemeral(ctx, command, HELP_TEXT).await
}

/// Converts a resolved channel option into the service's channel reference.
fn channel_ref(channel: &PartialChannel) -> ChannelRef {
    ChannelRef {
        id: channel.id.get(),
        name: channel
            .name
            .clone()
            .unwrap_or_else(|| channel.id.to_string()),
        text_capable: is_text_capable(channel.kind),
    }
}

async fn destination_label(ctx: &Context, guild_id: GuildId, destination: Destination) -> String {
    let channel = match destination {
        Destination::DirectMessage => None,
        Destination::Channel(channel_id) => {
            SerenityMessenger::new(ctx)
                .resolve_channel(guild_id.get(), channel_id)
                .await
        }
    };

    describe_destination(destination, channel.as_ref())
}

/// Human-readable destination: `DMs`, a channel mention, or a missing-channel marker.
fn describe_destination(destination: Destination, resolved: Option<&ChannelHandle>) -> String {
    match (destination, resolved) {
        (Destination::DirectMessage, _) => "DMs".to_string(),
        (Destination::Channel(_), Some(channel)) => format!("<#{}>", channel.id),
        (Destination::Channel(channel_id), None) => format!("(missing channel {})", channel_id),
    }
}
