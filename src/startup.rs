use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    data::{backend::FileBackend, welcome::WelcomeStore},
    error::{store::StoreError, AppError},
};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info` when unset or unparsable.
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::LoggingErr)` - A global subscriber was already set
pub fn init_logging() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::LoggingErr(e.to_string()))
}

/// Opens the welcome store at the configured path.
///
/// A corrupt document is not fatal: the store starts empty and the file is left as-is
/// until the next successful mutation overwrites it.
///
/// # Arguments
/// - `config` - Application configuration containing the store path
///
/// # Returns
/// - `Ok(Arc<WelcomeStore>)` - Loaded (or empty) store
/// - `Err(AppError::StoreErr)` - The directory could not be created or the document
///   could not be read
pub async fn open_welcome_store(config: &Config) -> Result<Arc<WelcomeStore>, AppError> {
    if let Some(parent) = config
        .welcome_store_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let backend = Arc::new(FileBackend::new(&config.welcome_store_path));

    let store = match WelcomeStore::load(backend.clone()).await {
        Ok(store) => store,
        Err(StoreError::Corrupt { location, reason }) => {
            tracing::warn!(
                "Welcome store at {} is corrupt, starting with an empty table: {}",
                location,
                reason
            );
            WelcomeStore::empty(backend)
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        "Loaded welcome configuration for {} guild(s) from {}",
        store.len().await,
        store.location()
    );

    Ok(Arc::new(store))
}
