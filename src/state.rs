//! Shared state for the Discord event handlers.
//!
//! `AppState` is owned by the event handler and borrowed by every event module.
//! `ShardManagerContainer` is inserted into the client's `TypeMap` to expose gateway
//! latency.

use std::sync::Arc;

use serenity::{gateway::ShardManager, prelude::TypeMapKey};

use crate::data::welcome::WelcomeStore;

#[derive(Clone)]
pub struct AppState {
    /// Welcome configuration shared by the command and join-event paths.
    pub store: Arc<WelcomeStore>,

    /// Prefix for text commands such as `!ping`.
    pub command_prefix: String,
}

impl AppState {
    pub fn new(store: Arc<WelcomeStore>, command_prefix: String) -> Self {
        Self {
            store,
            command_prefix,
        }
    }
}

pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}
