//! Domain models describing the member a welcome message is rendered for.

/// The member a welcome message addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeRecipient {
    /// Discord user ID, used for direct-message delivery.
    pub user_id: u64,
    /// Mention token substituted for `{user}`, e.g. `<@123>`.
    pub mention: String,
    /// Display name substituted for `{name}`.
    pub display_name: String,
}

impl WelcomeRecipient {
    /// Builds a recipient whose mention token is Discord's `<@id>` form.
    pub fn new(user_id: u64, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            mention: format!("<@{}>", user_id),
            display_name: display_name.into(),
        }
    }
}

/// A member joined a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberJoin {
    /// Guild the member joined.
    pub guild_id: u64,
    /// Guild name substituted for `{guild}`.
    pub guild_name: String,
    /// The joining member.
    pub recipient: WelcomeRecipient,
}
