//! Channel models exchanged with the Discord layer.

/// A channel as referenced by an admin command argument, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRef {
    /// Discord channel ID.
    pub id: u64,
    /// Channel name, used in confirmation replies.
    pub name: String,
    /// Whether the channel accepts regular messages (text or announcement channel).
    pub text_capable: bool,
}

/// A channel resolved within a guild and ready to receive a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHandle {
    /// Discord channel ID.
    pub id: u64,
    /// Guild owning the channel.
    pub guild_id: u64,
}
