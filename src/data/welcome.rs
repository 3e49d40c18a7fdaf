//! Welcome configuration store.
//!
//! This module provides `WelcomeStore`, the single source of truth for per-guild welcome
//! configuration. The full table is held in memory and every mutation is written through
//! to a `WelcomeBackend` before it becomes visible to readers, so the in-memory table and
//! the persisted document always match after a successful mutation.
//!
//! # Concurrency
//!
//! Readers take a shared lock on the table and always observe complete records. All
//! mutations are funnelled through one writer lock that spans read-modify-write-persist,
//! so two mutations for the same guild are applied in call order and neither is lost.
//! One global writer is used rather than one per guild because every persist rewrites
//! the whole document.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{Mutex, RwLock};

use crate::{
    data::backend::WelcomeBackend,
    error::store::StoreError,
    model::welcome::{StoredWelcomeConfig, WelcomeConfig},
};

pub struct WelcomeStore {
    backend: Arc<dyn WelcomeBackend>,
    table: RwLock<BTreeMap<u64, WelcomeConfig>>,
    writer: Mutex<()>,
}

impl WelcomeStore {
    /// Creates a store with an empty table; nothing is written until the first mutation.
    pub fn empty(backend: Arc<dyn WelcomeBackend>) -> Self {
        Self::with_table(backend, BTreeMap::new())
    }

    fn with_table(backend: Arc<dyn WelcomeBackend>, table: BTreeMap<u64, WelcomeConfig>) -> Self {
        Self {
            backend,
            table: RwLock::new(table),
            writer: Mutex::new(()),
        }
    }

    /// Loads the full table from the backend.
    ///
    /// # Arguments
    /// - `backend` - Persistence backend to read from and write through to
    ///
    /// # Returns
    /// - `Ok(WelcomeStore)` - Loaded store; empty if the backend holds no document
    /// - `Err(StoreError::Corrupt)` - Document exists but is not a valid welcome table
    /// - `Err(StoreError::Io)` - Document could not be read
    pub async fn load(backend: Arc<dyn WelcomeBackend>) -> Result<Self, StoreError> {
        let table = match backend.read().await? {
            Some(bytes) => decode(&bytes, &backend.location())?,
            None => BTreeMap::new(),
        };

        Ok(Self::with_table(backend, table))
    }

    /// Location of the backing document, for diagnostics.
    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Returns the configuration of a guild, if one was ever created.
    pub async fn get(&self, guild_id: u64) -> Option<WelcomeConfig> {
        self.table.read().await.get(&guild_id).cloned()
    }

    /// Number of guilds with a stored configuration.
    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.is_empty()
    }

    /// Applies `mutator` to a guild's configuration and writes the table through.
    ///
    /// The mutator receives the current record, or the default record if the guild has
    /// none, and returns the complete replacement. The replacement is persisted first and
    /// only then swapped into the in-memory table; if persisting fails the table is left
    /// untouched.
    ///
    /// # Arguments
    /// - `guild_id` - Guild whose configuration is changed
    /// - `mutator` - Pure function producing the new record from the current one
    ///
    /// # Returns
    /// - `Ok(WelcomeConfig)` - The record now stored for the guild
    /// - `Err(StoreError)` - Encoding or writing the document failed
    pub async fn upsert<F>(&self, guild_id: u64, mutator: F) -> Result<WelcomeConfig, StoreError>
    where
        F: FnOnce(WelcomeConfig) -> WelcomeConfig + Send,
    {
        let _writer = self.writer.lock().await;

        let (updated, bytes) = {
            let table = self.table.read().await;
            let current = table
                .get(&guild_id)
                .cloned()
                .unwrap_or_else(|| WelcomeConfig::with_defaults(guild_id));

            let updated = WelcomeConfig {
                guild_id,
                ..mutator(current)
            };

            let bytes = encode(
                table
                    .values()
                    .filter(|config| config.guild_id != guild_id)
                    .chain(std::iter::once(&updated)),
            )?;

            (updated, bytes)
        };

        self.backend.write(&bytes).await?;

        self.table.write().await.insert(guild_id, updated.clone());

        Ok(updated)
    }

    /// Writes the current table to the backend.
    pub async fn persist(&self) -> Result<(), StoreError> {
        let _writer = self.writer.lock().await;

        let bytes = {
            let table = self.table.read().await;
            encode(table.values())?
        };

        self.backend.write(&bytes).await
    }
}

/// Parses a persisted document into the in-memory table.
///
/// Keys must be decimal guild IDs; anything else is reported as corruption.
fn decode(bytes: &[u8], location: &str) -> Result<BTreeMap<u64, WelcomeConfig>, StoreError> {
    let document: BTreeMap<u64, StoredWelcomeConfig> =
        serde_json::from_slice(bytes).map_err(|e| StoreError::Corrupt {
            location: location.to_string(),
            reason: e.to_string(),
        })?;

    Ok(document
        .into_iter()
        .map(|(guild_id, stored)| (guild_id, WelcomeConfig::from_stored(guild_id, stored)))
        .collect())
}

/// Encodes records as a 4-space indented JSON object keyed by guild ID.
///
/// Keys are emitted in ascending numeric order so equal tables encode to equal bytes.
fn encode<'a>(records: impl Iterator<Item = &'a WelcomeConfig>) -> Result<Vec<u8>, StoreError> {
    let document: BTreeMap<u64, StoredWelcomeConfig> = records
        .map(|config| (config.guild_id, config.to_stored()))
        .collect();

    let mut bytes = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    document.serialize(&mut serializer)?;

    Ok(bytes)
}
