//! Domain models for per-guild welcome configuration.
//!
//! `WelcomeConfig` is the immutable record the rest of the bot works with. Updates are
//! expressed as `WelcomeUpdate` values and applied with `WelcomeConfig::apply`, which
//! returns a new record. `StoredWelcomeConfig` is the on-disk shape and is converted to
//! and from the domain model at the store boundary.

use serde::{Deserialize, Serialize};

/// Template used when a guild has never set its own message.
pub const DEFAULT_WELCOME_MESSAGE: &str = "Welcome {user} to {guild}!";

/// Where a welcome message is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Direct message to the joining member.
    DirectMessage,
    /// A channel in the guild, by Discord channel ID.
    Channel(u64),
}

impl Destination {
    /// Builds a destination from the nullable `channel_id` of the stored document.
    pub fn from_channel_id(channel_id: Option<u64>) -> Self {
        match channel_id {
            Some(id) => Self::Channel(id),
            None => Self::DirectMessage,
        }
    }

    /// Channel ID for channel destinations, `None` for direct messages.
    pub fn channel_id(&self) -> Option<u64> {
        match self {
            Self::DirectMessage => None,
            Self::Channel(id) => Some(*id),
        }
    }
}

/// Welcome configuration of a single guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeConfig {
    /// Discord guild ID owning this configuration.
    pub guild_id: u64,
    /// Whether member joins trigger a welcome message.
    pub enabled: bool,
    /// Delivery target for the rendered message.
    pub destination: Destination,
    /// Message template with `{user}`, `{name}` and `{guild}` placeholders.
    pub message: String,
}

/// A single admin-requested change to a welcome configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WelcomeUpdate {
    /// Replace the template. Also re-enables welcome messages.
    Message(String),
    /// Replace the delivery target.
    Destination(Destination),
    /// Turn welcome messages on or off.
    Enabled(bool),
}

impl WelcomeConfig {
    /// Record used for a guild that has no stored configuration yet.
    pub fn with_defaults(guild_id: u64) -> Self {
        Self {
            guild_id,
            enabled: true,
            destination: Destination::DirectMessage,
            message: DEFAULT_WELCOME_MESSAGE.to_string(),
        }
    }

    /// Returns a new record with `update` applied; `self` is consumed, never mutated in place.
    pub fn apply(self, update: &WelcomeUpdate) -> Self {
        match update {
            WelcomeUpdate::Message(message) => Self {
                enabled: true,
                message: message.clone(),
                ..self
            },
            WelcomeUpdate::Destination(destination) => Self {
                destination: *destination,
                ..self
            },
            WelcomeUpdate::Enabled(enabled) => Self {
                enabled: *enabled,
                ..self
            },
        }
    }

    /// Converts a stored record to the domain model at the store boundary.
    ///
    /// # Arguments
    /// - `guild_id` - Guild ID parsed from the document key
    /// - `stored` - The record as read from the document
    ///
    /// # Returns
    /// - `WelcomeConfig` - The converted domain model
    pub fn from_stored(guild_id: u64, stored: StoredWelcomeConfig) -> Self {
        Self {
            guild_id,
            enabled: stored.enabled,
            destination: Destination::from_channel_id(stored.channel_id),
            message: stored.message,
        }
    }

    /// Converts the domain model into its on-disk shape.
    pub fn to_stored(&self) -> StoredWelcomeConfig {
        StoredWelcomeConfig {
            enabled: self.enabled,
            channel_id: self.destination.channel_id(),
            message: self.message.clone(),
        }
    }
}

/// On-disk shape of one guild entry: `{ "enabled", "channel_id", "message" }`.
///
/// Missing fields fall back to the same defaults as `WelcomeConfig::with_defaults`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredWelcomeConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub channel_id: Option<u64>,
    #[serde(default = "default_message")]
    pub message: String,
}

fn default_enabled() -> bool {
    true
}

fn default_message() -> String {
    DEFAULT_WELCOME_MESSAGE.to_string()
}

/// Result of rendering a guild's welcome message without delivering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomePreview {
    /// Whether joins currently trigger delivery.
    pub enabled: bool,
    /// Where the message would be sent.
    pub destination: Destination,
    /// The fully rendered message text.
    pub rendered: String,
}
