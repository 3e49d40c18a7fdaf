//! General purpose slash commands and the gateway latency helper.

use std::time::Duration;

use serenity::all::{
    ChannelType, CommandInteraction, Context, CreateCommand, CreateEmbed, CreateEmbedFooter,
    GuildId,
};

use crate::{
    bot::command::{require_guild, respond},
    state::ShardManagerContainer,
};

const STATS_COLOR: u32 = 0x5865F2;

pub fn register_ping() -> CreateCommand {
    CreateCommand::new("ping").description("Check bot latency")
}

pub fn register_hello() -> CreateCommand {
    CreateCommand::new("hello").description("The bot says hello")
}

pub fn register_test() -> CreateCommand {
    CreateCommand::new("test").description("Basic test command to verify slash functionality")
}

pub fn register_server_stats() -> CreateCommand {
    CreateCommand::new("server_stats").description("Show basic server statistics")
}

/// Heartbeat latency of the shard serving `ctx`, once measured.
pub async fn gateway_latency(ctx: &Context) -> Option<Duration> {
    let shard_manager = ctx.data.read().await.get::<ShardManagerContainer>()?.clone();
    let runners = shard_manager.runners.lock().await;

    runners.get(&ctx.shard_id)?.latency
}

/// `Pong!` reply shared by the slash and prefix commands.
pub async fn pong(ctx: &Context) -> String {
    format_pong(gateway_latency(ctx).await)
}

fn format_pong(latency: Option<Duration>) -> String {
    let latency = latency.map_or_else(
        || "N/A".to_string(),
        |latency| format!("{} ms", latency.as_millis()),
    );

    format!("Pong! `{}`", latency)
}

pub async fn run_ping(ctx: &Context, command: &CommandInteraction) -> Result<(), serenity::Error> {
    respond::message(ctx, command, pong(ctx).await).await
}

pub async fn run_hello(ctx: &Context, command: &CommandInteraction) -> Result<(), serenity::Error> {
    respond::message(ctx, command, format!("Hello, <@{}>! 👋", command.user.id)).await
}

pub async fn run_test(ctx: &Context, command: &CommandInteraction) -> Result<(), serenity::Error> {
    respond::message(
        ctx,
        command,
        format!("Test OK, received from <@{}>", command.user.id),
    )
    .await
}

pub async fn run_server_stats(
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), serenity::Error> {
    let guild_id = match require_guild(command) {
        Ok(guild_id) => guild_id,
        Err(e) => return respond::error(ctx, command, &e).await,
    };

    match server_stats_embed(ctx, guild_id) {
        Some(embed) => respond::embed(ctx, command, embed, false).await,
        None => {
            respond::ephemeral(
                ctx,
                command,
                "Server statistics are not available yet, try again shortly.",
            )
            .await
        }
    }
}

/// Builds the statistics embed from the cached guild.
///
/// Bot and human counts only cover members present in the cache.
fn server_stats_embed(ctx: &Context, guild_id: GuildId) -> Option<CreateEmbed> {
    let guild = ctx.cache.guild(guild_id)?;

    let total = guild.member_count;
    let bots = guild.members.values().filter(|member| member.user.bot).count() as u64;
    let text_channels = guild
        .channels
        .values()
        .filter(|channel| matches!(channel.kind, ChannelType::Text | ChannelType::News))
        .count();
    let voice_channels = guild
        .channels
        .values()
        .filter(|channel| matches!(channel.kind, ChannelType::Voice | ChannelType::Stage))
        .count();
    let created = chrono::DateTime::from_timestamp(guild_id.created_at().unix_timestamp(), 0)
        .map(|created| created.date_naive().to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let mut embed = CreateEmbed::new()
        .title(format!("{} Server Stats", guild.name))
        .color(STATS_COLOR)
        .field("Total Members", total.to_string(), true)
        .field("Humans", total.saturating_sub(bots).to_string(), true)
        .field("Bots", bots.to_string(), true)
        .field("Text Channels", text_channels.to_string(), true)
        .field("Voice Channels", voice_channels.to_string(), true)
        .field("Roles", guild.roles.len().to_string(), true)
        .field("Owner", format!("<@{}>", guild.owner_id), true)
        .footer(CreateEmbedFooter::new(format!("Created: {}", created)));
    if let Some(icon) = guild.icon_url() {
        embed = embed.thumbnail(icon);
    }

    Some(embed)
}
