use super::*;

/// Tests first mutation creates the record from defaults.
///
/// Expected: Ok with defaults merged with the mutation, visible through `get`
#[tokio::test]
async fn creates_record_from_defaults() -> Result<(), StoreError> {
    let store = WelcomeStore::empty(Arc::new(MemoryBackend::new()));

    let stored = store
        .upsert(1, |config| {
            config.apply(&WelcomeUpdate::Destination(Destination::Channel(9)))
        })
        .await?;

    assert_eq!(
        stored,
        WelcomeConfig {
            guild_id: 1,
            enabled: true,
            destination: Destination::Channel(9),
            message: DEFAULT_WELCOME_MESSAGE.to_string(),
        }
    );
    assert_eq!(store.get(1).await, Some(stored));

    Ok(())
}

/// Tests every successful mutation is written through.
///
/// Expected: Ok with the backend document matching the in-memory record after each call
#[tokio::test]
async fn writes_through_on_every_mutation() -> Result<(), StoreError> {
    let backend = Arc::new(MemoryBackend::new());
    let store = WelcomeStore::empty(backend.clone());

    store
        .upsert(1, |c| c.apply(&WelcomeUpdate::Message("Hi {user}".to_string())))
        .await?;
    assert_eq!(backend.write_count(), 1);

    store
        .upsert(1, |c| c.apply(&WelcomeUpdate::Enabled(false)))
        .await?;
    assert_eq!(backend.write_count(), 2);

    let document: serde_json::Value =
        serde_json::from_slice(&backend.document().unwrap()).unwrap();
    assert_eq!(
        document,
        serde_json::json!({
            "1": { "enabled": false, "channel_id": null, "message": "Hi {user}" }
        })
    );

    Ok(())
}

/// Tests the mutator cannot move a record to another guild.
///
/// Expected: Ok with the record stored under the requested guild ID
#[tokio::test]
async fn keeps_requested_guild_id() -> Result<(), StoreError> {
    let store = WelcomeStore::empty(Arc::new(MemoryBackend::new()));

    let stored = store
        .upsert(1, |c| WelcomeConfig { guild_id: 2, ..c })
        .await?;

    assert_eq!(stored.guild_id, 1);
    assert!(store.get(2).await.is_none());

    Ok(())
}

/// Tests a failed persist leaves the in-memory table unchanged.
///
/// Expected: Err(StoreError::Io) and `get` still returns the previous record
#[tokio::test]
async fn failed_persist_does_not_apply() -> Result<(), StoreError> {
    let backend = Arc::new(FlakyBackend::default());
    let store = WelcomeStore::empty(backend.clone());

    store
        .upsert(1, |c| c.apply(&WelcomeUpdate::Message("first".to_string())))
        .await?;

    backend.fail_writes(true);
    let result = store
        .upsert(1, |c| c.apply(&WelcomeUpdate::Message("second".to_string())))
        .await;

    assert!(matches!(result, Err(StoreError::Io { .. })));
    assert_eq!(store.get(1).await.unwrap().message, "first");

    backend.fail_writes(false);
    store
        .upsert(1, |c| c.apply(&WelcomeUpdate::Message("third".to_string())))
        .await?;
    assert_eq!(store.get(1).await.unwrap().message, "third");

    Ok(())
}

/// Tests sequential mutations on one guild apply in program order.
///
/// Expected: Ok with the final record equal to applying all updates in order
#[tokio::test]
async fn sequential_mutations_apply_in_order() -> Result<(), StoreError> {
    let store = WelcomeStore::empty(Arc::new(FlakyBackend::default()));
    let updates = [
        WelcomeUpdate::Message("a".to_string()),
        WelcomeUpdate::Enabled(false),
        WelcomeUpdate::Destination(Destination::Channel(3)),
        WelcomeUpdate::Message("b".to_string()),
        WelcomeUpdate::Destination(Destination::DirectMessage),
        WelcomeUpdate::Enabled(false),
    ];

    for update in &updates {
        store.upsert(1, |c| c.apply(update)).await?;
    }

    let expected = updates
        .iter()
        .fold(WelcomeConfig::with_defaults(1), |config, update| {
            config.apply(update)
        });
    assert_eq!(store.get(1).await, Some(expected));

    Ok(())
}

/// Tests concurrent read-modify-write mutations never lose an update.
///
/// Each task appends one character to the current template while the backend yields
/// mid-write, so a stale read would drop characters.
///
/// Expected: Ok with every append present in memory and on the backend
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_mutations_are_serialized() -> Result<(), StoreError> {
    let backend = Arc::new(FlakyBackend::default());
    let store = Arc::new(WelcomeStore::empty(backend.clone()));

    store
        .upsert(1, |c| c.apply(&WelcomeUpdate::Message(String::new())))
        .await?;

    let mut handles = Vec::new();
    for _ in 0..32 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .upsert(1, |c| {
                    let appended = format!("{}x", c.message);
                    c.apply(&WelcomeUpdate::Message(appended))
                })
                .await
        }));
    }
    for handle in handles {
        handle.await.expect("upsert task panicked")?;
    }

    let config = store.get(1).await.unwrap();
    assert_eq!(config.message, "x".repeat(32));

    let reloaded = WelcomeStore::load(backend).await?;
    assert_eq!(reloaded.get(1).await, Some(config));

    Ok(())
}

/// Tests mutations on different guilds are all kept in the document.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_guilds_are_all_persisted() -> Result<(), StoreError> {
    let backend = Arc::new(FlakyBackend::default());
    let store = Arc::new(WelcomeStore::empty(backend.clone()));

    let mut handles = Vec::new();
    for guild_id in 1..=16u64 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .upsert(guild_id, |c| {
                    c.apply(&WelcomeUpdate::Destination(Destination::Channel(guild_id * 10)))
                })
                .await
        }));
    }
    for handle in handles {
        handle.await.expect("upsert task panicked")?;
    }

    let reloaded = WelcomeStore::load(backend).await?;
    assert_eq!(reloaded.len().await, 16);
    for guild_id in 1..=16u64 {
        assert_eq!(
            reloaded.get(guild_id).await.unwrap().destination,
            Destination::Channel(guild_id * 10)
        );
    }

    Ok(())
}
