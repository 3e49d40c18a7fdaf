use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serenity::{all::Permissions, async_trait};

use crate::{
    data::{backend::MemoryBackend, welcome::WelcomeStore},
    error::{command::CommandError, delivery::DeliveryError},
    middleware::capability::{Actor, Capability},
    model::{
        channel::{ChannelHandle, ChannelRef},
        member::{MemberJoin, WelcomeRecipient},
        welcome::{Destination, WelcomeConfig, WelcomeUpdate, DEFAULT_WELCOME_MESSAGE},
    },
    service::{
        delivery::{DeliveryOutcome, SkipReason, WelcomeDelivery, WelcomeMessenger},
        welcome::{WelcomeService, MAX_MESSAGE_LENGTH},
    },
};


const GUILD_ID: u64 = 1_000;
const CHANNEL_ID: u64 = 2_000;

/// A message handed to the recording messenger.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Sent {
    Direct { user_id: u64, text: String },
    Channel { channel_id: u64, text: String },
}

/// Messenger double that records every send and resolves only registered channels.
#[derive(Default)]
struct RecordingMessenger {
    /// channel ID -> owning guild ID
    channels: Mutex<HashMap<u64, u64>>,
    sent: Mutex<Vec<Sent>>,
    failure: Mutex<Option<DeliveryError>>,
}

impl RecordingMessenger {
    fn with_channel(self, guild_id: u64, channel_id: u64) -> Self {
        self.channels.lock().unwrap().insert(channel_id, guild_id);
        self
    }

    fn failing_with(self, error: DeliveryError) -> Self {
        *self.failure.lock().unwrap() = Some(error);
        self
    }

    fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, sent: Sent) -> Result<(), DeliveryError> {
        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }
        self.sent.lock().unwrap().push(sent);
        Ok(())
    }
}

#[async_trait]
impl WelcomeMessenger for RecordingMessenger {
    async fn resolve_channel(&self, guild_id: u64, channel_id: u64) -> Option<ChannelHandle> {
        let owner = *self.channels.lock().unwrap().get(&channel_id)?;
        (owner == guild_id).then_some(ChannelHandle {
            id: channel_id,
            guild_id,
        })
    }

    async fn send_direct_message(&self, user_id: u64, text: &str) -> Result<(), DeliveryError> {
        self.record(Sent::Direct {
            user_id,
            text: text.to_string(),
        })
    }

    async fn send_to_channel(
        &self,
        channel: &ChannelHandle,
        text: &str,
    ) -> Result<(), DeliveryError> {
        self.record(Sent::Channel {
            channel_id: channel.id,
            text: text.to_string(),
        })
    }
}

fn admin() -> Actor {
    Actor::new(1, Permissions::MANAGE_GUILD)
}

fn member_actor() -> Actor {
    Actor::new(2, Permissions::SEND_MESSAGES | Permissions::VIEW_CHANNEL)
}

fn alice() -> WelcomeRecipient {
    WelcomeRecipient {
        user_id: 42,
        mention: "@Alice".to_string(),
        display_name: "Alice".to_string(),
    }
}

fn join(recipient: WelcomeRecipient) -> MemberJoin {
    MemberJoin {
        guild_id: GUILD_ID,
        guild_name: "Rustaceans".to_string(),
        recipient,
    }
}

fn text_channel(id: u64) -> ChannelRef {
    ChannelRef {
        id,
        name: "general".to_string(),
        text_capable: true,
    }
}

fn memory_store() -> (Arc<MemoryBackend>, WelcomeStore) {
    let backend = Arc::new(MemoryBackend::new());
    let store = WelcomeStore::empty(backend.clone());
    (backend, store)
}
