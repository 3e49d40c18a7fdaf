//! Welcome message delivery on member join.
//!
//! Delivery is best-effort and fire-and-forget: each join yields at most one send
//! attempt, with no retry and no queueing. Every failure is turned into a
//! `DeliveryOutcome` and logged here; nothing is propagated to the caller because a join
//! event has no requester to report to.

use serenity::async_trait;

use crate::{
    data::welcome::WelcomeStore,
    error::delivery::DeliveryError,
    model::{
        channel::ChannelHandle,
        member::MemberJoin,
        welcome::{Destination, WelcomeConfig},
    },
    service::template::render_welcome,
};

/// Send primitives provided by the chat platform.
#[async_trait]
pub trait WelcomeMessenger: Send + Sync {
    /// Resolves a channel inside a guild.
    ///
    /// # Returns
    /// - `Some(ChannelHandle)` - Channel exists and belongs to `guild_id`
    /// - `None` - Channel was deleted, is unknown, or belongs to another guild
    async fn resolve_channel(&self, guild_id: u64, channel_id: u64) -> Option<ChannelHandle>;

    /// Sends `text` as a direct message to a user.
    async fn send_direct_message(&self, user_id: u64, text: &str) -> Result<(), DeliveryError>;

    /// Sends `text` to a resolved channel.
    async fn send_to_channel(&self, channel: &ChannelHandle, text: &str)
        -> Result<(), DeliveryError>;
}

/// Why a join produced no send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The guild never configured welcome messages.
    NotConfigured,
    /// Welcome messages are turned off for the guild.
    Disabled,
    /// The configured channel no longer resolves.
    ChannelMissing(u64),
}

/// Result of handling one join event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The message was accepted by the platform.
    Delivered(Destination),
    /// No send was attempted.
    Skipped(SkipReason),
    /// The single send attempt failed and was discarded.
    Failed {
        destination: Destination,
        error: DeliveryError,
    },
}

/// Routes rendered welcome messages to a direct message or a guild channel.
pub struct WelcomeDelivery<'a> {
    store: &'a WelcomeStore,
    messenger: &'a dyn WelcomeMessenger,
}

impl<'a> WelcomeDelivery<'a> {
    pub fn new(store: &'a WelcomeStore, messenger: &'a dyn WelcomeMessenger) -> Self {
        Self { store, messenger }
    }

    /// Handles a member join using the guild's current configuration.
    ///
    /// # Arguments
    /// - `join` - The join event
    ///
    /// # Returns
    /// - `DeliveryOutcome` - What happened; already logged, never an error
    pub async fn deliver(&self, join: &MemberJoin) -> DeliveryOutcome {
        let config = self.store.get(join.guild_id).await;

        self.deliver_with(config.as_ref(), join).await
    }

    /// Handles a member join using an explicit configuration snapshot.
    pub async fn deliver_with(
        &self,
        config: Option<&WelcomeConfig>,
        join: &MemberJoin,
    ) -> DeliveryOutcome {
        let outcome = self.route(config, join).await;

        match &outcome {
            DeliveryOutcome::Delivered(destination) => tracing::info!(
                "Delivered welcome for user {} in guild {} via {:?}",
                join.recipient.user_id,
                join.guild_id,
                destination
            ),
            DeliveryOutcome::Skipped(reason) => tracing::debug!(
                "Skipped welcome for user {} in guild {}: {:?}",
                join.recipient.user_id,
                join.guild_id,
                reason
            ),
            // Discarded by policy: no retry, no report to the guild
            DeliveryOutcome::Failed { destination, error } => tracing::warn!(
                "Failed to deliver welcome for user {} in guild {} via {:?}: {}",
                join.recipient.user_id,
                join.guild_id,
                destination,
                error
            ),
        }

        outcome
    }

    async fn route(&self, config: Option<&WelcomeConfig>, join: &MemberJoin) -> DeliveryOutcome {
        let Some(config) = config else {
            return DeliveryOutcome::Skipped(SkipReason::NotConfigured);
        };
        if !config.enabled {
            return DeliveryOutcome::Skipped(SkipReason::Disabled);
        }

        let text = render_welcome(&config.message, &join.guild_name, &join.recipient);

        let result = match config.destination {
            Destination::DirectMessage => {
                self.messenger
                    .send_direct_message(join.recipient.user_id, &text)
                    .await
            }
            Destination::Channel(channel_id) => {
                let Some(channel) = self
                    .messenger
                    .resolve_channel(join.guild_id, channel_id)
                    .await
                else {
                    return DeliveryOutcome::Skipped(SkipReason::ChannelMissing(channel_id));
                };

                self.messenger.send_to_channel(&channel, &text).await
            }
        };

        match result {
            Ok(()) => DeliveryOutcome::Delivered(config.destination),
            Err(error) => DeliveryOutcome::Failed {
                destination: config.destination,
                error,
            },
        }
    }
}
