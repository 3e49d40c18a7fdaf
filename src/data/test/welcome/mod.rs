use std::sync::Arc;

use serenity::async_trait;

use crate::{
    data::{
        backend::{FileBackend, MemoryBackend, WelcomeBackend},
        welcome::WelcomeStore,
    },
    error::store::StoreError,
    model::welcome::{Destination, WelcomeConfig, WelcomeUpdate, DEFAULT_WELCOME_MESSAGE},
};
use test_utils::{builder::TestBuilder, fixture};

mod load;
mod persist;
mod upsert;

/// Backend that yields to the scheduler in the middle of every write and can be told to
/// fail, used to force interleaving and to exercise persist failures.
#[derive(Default)]
struct FlakyBackend {
    inner: MemoryBackend,
    fail_writes: std::sync::atomic::AtomicBool,
}

impl FlakyBackend {
    fn fail_writes(&self, fail: bool) {
        self.fail_writes
            .store(fail, std::sync::atomic::Ordering::SeqCst);
    }
}

#[async_trait]
impl WelcomeBackend for FlakyBackend {
    fn location(&self) -> String {
        "flaky".to_string()
    }

    async fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        self.inner.read().await
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), StoreError> {
        tokio::task::yield_now().await;
        if self.fail_writes.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(StoreError::Io {
                path: "flaky".into(),
                source: std::io::Error::other("disk full"),
            });
        }
        tokio::task::yield_now().await;
        self.inner.write(bytes).await
    }
}
