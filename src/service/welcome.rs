//! Admin operations over guild welcome configuration.
//!
//! Mutating operations require the `ManageGuild` capability and are written through the
//! `WelcomeStore`. `show` and `preview` are read-only and never touch the backend.

use crate::{
    data::welcome::WelcomeStore,
    error::command::CommandError,
    middleware::capability::{Actor, Capability, CapabilityGuard},
    model::{
        channel::ChannelRef,
        member::WelcomeRecipient,
        welcome::{Destination, WelcomeConfig, WelcomePreview, WelcomeUpdate},
    },
    service::template::render_welcome,
};

/// Longest template accepted, matching Discord's message length limit.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

pub struct WelcomeService<'a> {
    store: &'a WelcomeStore,
}

impl<'a> WelcomeService<'a> {
    pub fn new(store: &'a WelcomeStore) -> Self {
        Self { store }
    }

    /// Sets the welcome template and re-enables welcome messages.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to configure
    /// - `message` - New template
    /// - `actor` - Invoking member
    ///
    /// # Returns
    /// - `Ok(WelcomeConfig)` - Stored configuration after the change
    /// - `Err(CommandError::PermissionDenied)` - Actor lacks `ManageGuild`
    /// - `Err(CommandError::Validation)` - Template is blank or too long
    /// - `Err(CommandError::Store)` - Persisting failed; nothing changed
    pub async fn set_message(
        &self,
        guild_id: u64,
        message: &str,
        actor: &Actor,
    ) -> Result<WelcomeConfig, CommandError> {
        self.authorize(actor)?;
        validate_message(message)?;

        self.apply(guild_id, WelcomeUpdate::Message(message.to_string()), actor)
            .await
    }

    /// Sets the delivery channel, or switches to direct messages when `channel` is `None`.
    ///
    /// # Returns
    /// - `Ok(WelcomeConfig)` - Stored configuration after the change
    /// - `Err(CommandError::PermissionDenied)` - Actor lacks `ManageGuild`
    /// - `Err(CommandError::Validation)` - Channel cannot receive messages
    /// - `Err(CommandError::Store)` - Persisting failed; nothing changed
    pub async fn set_destination(
        &self,
        guild_id: u64,
        channel: Option<&ChannelRef>,
        actor: &Actor,
    ) -> Result<WelcomeConfig, CommandError> {
        self.authorize(actor)?;

        let destination = match channel {
            Some(channel) => {
                validate_channel(channel)?;
                Destination::Channel(channel.id)
            }
            None => Destination::DirectMessage,
        };

        self.apply(guild_id, WelcomeUpdate::Destination(destination), actor)
            .await
    }

    /// Turns welcome messages on or off.
    pub async fn set_enabled(
        &self,
        guild_id: u64,
        enabled: bool,
        actor: &Actor,
    ) -> Result<WelcomeConfig, CommandError> {
        self.authorize(actor)?;

        self.apply(guild_id, WelcomeUpdate::Enabled(enabled), actor)
            .await
    }

    /// Current configuration of a guild, if any.
    pub async fn show(&self, guild_id: u64) -> Option<WelcomeConfig> {
        self.store.get(guild_id).await
    }

    /// Renders the guild's welcome message for `recipient` without delivering it.
    ///
    /// # Returns
    /// - `Some(WelcomePreview)` - Guild is configured
    /// - `None` - Guild has no welcome configuration
    pub async fn preview(
        &self,
        guild_id: u64,
        guild_name: &str,
        recipient: &WelcomeRecipient,
    ) -> Option<WelcomePreview> {
        let config = self.store.get(guild_id).await?;

        Some(WelcomePreview {
            enabled: config.enabled,
            destination: config.destination,
            rendered: render_welcome(&config.message, guild_name, recipient),
        })
    }

    fn authorize(&self, actor: &Actor) -> Result<(), CommandError> {
        CapabilityGuard::new(actor)
            .require(&[Capability::ManageGuild])
            .inspect_err(|e| tracing::debug!("Rejected welcome command: {}", e))
    }

    async fn apply(
        &self,
        guild_id: u64,
        update: WelcomeUpdate,
        actor: &Actor,
    ) -> Result<WelcomeConfig, CommandError> {
        let config = self
            .store
            .upsert(guild_id, |config| config.apply(&update))
            .await?;

        tracing::info!(
            "User {} updated welcome config for guild {}: {:?}",
            actor.user_id,
            guild_id,
            update
        );

        Ok(config)
    }
}

/// Checks a template is non-blank and fits in a single Discord message.
fn validate_message(message: &str) -> Result<(), CommandError> {
    if message.trim().is_empty() {
        return Err(CommandError::Validation(
            "Welcome message cannot be empty.".to_string(),
        ));
    }

    let length = message.chars().count();
    if length > MAX_MESSAGE_LENGTH {
        return Err(CommandError::Validation(format!(
            "Welcome message is {} characters long; the limit is {}.",
            length, MAX_MESSAGE_LENGTH
        )));
    }

    Ok(())
}

fn validate_channel(channel: &ChannelRef) -> Result<(), CommandError> {
    if !channel.text_capable {
        return Err(CommandError::Validation(format!(
            "#{} is not a text channel; pick a text or announcement channel.",
            channel.name
        )));
    }

    Ok(())
}
