//! Serenity implementation of `WelcomeMessenger`.

use serenity::{
    all::{ChannelId, ChannelType, Context, CreateMessage, UserId},
    async_trait,
    http::HttpError,
};

use crate::{
    error::delivery::DeliveryError, model::channel::ChannelHandle,
    service::delivery::WelcomeMessenger,
};

/// Discord JSON error code for "Cannot send messages to this user".
const CANNOT_MESSAGE_USER: isize = 50007;

pub struct SerenityMessenger<'a> {
    ctx: &'a Context,
}

impl<'a> SerenityMessenger<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    /// Looks up the guild owning a channel, from the cache first and then the REST API.
    async fn channel_guild(&self, channel_id: ChannelId) -> Option<u64> {
        let cached = self
            .ctx
            .cache
            .channel(channel_id)
            .map(|channel| channel.guild_id.get());
        if cached.is_some() {
            return cached;
        }

        match channel_id.to_channel(&self.ctx.http).await {
            Ok(channel) => channel.guild().map(|channel| channel.guild_id.get()),
            Err(e) => {
                tracing::debug!("Failed to fetch channel {}: {}", channel_id, e);
                None
            }
        }
    }
}

#[async_trait]
impl WelcomeMessenger for SerenityMessenger<'_> {
    async fn resolve_channel(&self, guild_id: u64, channel_id: u64) -> Option<ChannelHandle> {
        // Zero is not a valid snowflake and would panic in ChannelId::new
        if channel_id == 0 {
            return None;
        }

        let owner = self.channel_guild(ChannelId::new(channel_id)).await?;
        if owner != guild_id {
            tracing::debug!(
                "Channel {} belongs to guild {}, not guild {}",
                channel_id,
                owner,
                guild_id
            );
            return None;
        }

        Some(ChannelHandle {
            id: channel_id,
            guild_id,
        })
    }

    async fn send_direct_message(&self, user_id: u64, text: &str) -> Result<(), DeliveryError> {
        UserId::new(user_id)
            .direct_message(&self.ctx.http, CreateMessage::new().content(text))
            .await
            .map(|_| ())
            .map_err(classify)
    }

    async fn send_to_channel(
        &self,
        channel: &ChannelHandle,
        text: &str,
    ) -> Result<(), DeliveryError> {
        ChannelId::new(channel.id)
            .send_message(&self.ctx.http, CreateMessage::new().content(text))
            .await
            .map(|_| ())
            .map_err(classify)
    }
}

/// Whether members can post ordinary messages in a channel of this kind.
pub fn is_text_capable(kind: ChannelType) -> bool {
    matches!(kind, ChannelType::Text | ChannelType::News)
}

/// Maps a Serenity send error onto a delivery failure kind.
fn classify(error: serenity::Error) -> DeliveryError {
    if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &error {
        if response.error.code == CANNOT_MESSAGE_USER {
            return DeliveryError::DirectMessagesClosed;
        }
        match response.status_code.as_u16() {
            403 => return DeliveryError::Forbidden,
            404 => return DeliveryError::NotFound,
            _ => {}
        }
    }

    DeliveryError::Transport(error.to_string())
}
