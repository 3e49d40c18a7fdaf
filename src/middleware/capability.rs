use serenity::all::Permissions;

use crate::error::command::CommandError;

/// Capabilities an admin operation can require from the invoking member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Manage the guild's settings, backed by Discord's `MANAGE_GUILD` permission.
    ManageGuild,
}

impl Capability {
    /// Name shown to members in permission-denied replies.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ManageGuild => "manage_guild",
        }
    }

    fn granted_by(&self, permissions: Permissions) -> bool {
        if permissions.contains(Permissions::ADMINISTRATOR) {
            return true;
        }

        match self {
            Self::ManageGuild => permissions.contains(Permissions::MANAGE_GUILD),
        }
    }
}

/// The member invoking an admin command, with their resolved guild permissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: u64,
    pub permissions: Permissions,
}

impl Actor {
    pub fn new(user_id: u64, permissions: Permissions) -> Self {
        Self {
            user_id,
            permissions,
        }
    }
}

pub struct CapabilityGuard<'a> {
    actor: &'a Actor,
}

impl<'a> CapabilityGuard<'a> {
    pub fn new(actor: &'a Actor) -> Self {
        Self { actor }
    }

    /// Checks that the actor holds every listed capability.
    ///
    /// # Arguments
    /// - `capabilities` - Capabilities required by the operation
    ///
    /// # Returns
    /// - `Ok(())` - Actor holds all capabilities
    /// - `Err(CommandError::PermissionDenied)` - First missing capability
    pub fn require(&self, capabilities: &[Capability]) -> Result<(), CommandError> {
        for capability in capabilities {
            if !capability.granted_by(self.actor.permissions) {
                return Err(CommandError::PermissionDenied {
                    user_id: self.actor.user_id,
                    capability: *capability,
                });
            }
        }

        Ok(())
    }
}
