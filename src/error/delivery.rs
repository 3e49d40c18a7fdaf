use thiserror::Error;

/// Failure of a single send primitive during welcome delivery.
///
/// Returned by `WelcomeMessenger` implementations so the delivery router can
/// discard failures through an explicit branch. Never shown to any user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The bot lacks permission to post in the target channel.
    #[error("Missing permission to deliver the welcome message")]
    Forbidden,

    /// The member does not accept direct messages from the bot.
    #[error("Member does not accept direct messages")]
    DirectMessagesClosed,

    /// The target disappeared between resolution and send.
    #[error("Delivery target no longer exists")]
    NotFound,

    /// Network or gateway failure.
    #[error("Transport failure: {0}")]
    Transport(String),
}
