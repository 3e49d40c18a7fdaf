use super::*;

/// Tests a persisted table reloads identically from disk.
///
/// Expected: Ok with the same key set and field values after reload
#[tokio::test]
async fn round_trips_through_file() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = WelcomeStore::empty(Arc::new(FileBackend::new(test.store_path())));

    store
        .upsert(10, |c| c.apply(&WelcomeUpdate::Message("Hi {name}".to_string())))
        .await?;
    store
        .upsert(20, |c| {
            c.apply(&WelcomeUpdate::Destination(Destination::Channel(5)))
                .apply(&WelcomeUpdate::Enabled(false))
        })
        .await?;

    let reloaded = WelcomeStore::load(Arc::new(FileBackend::new(test.store_path()))).await?;

    assert_eq!(reloaded.len().await, 2);
    assert_eq!(reloaded.get(10).await, store.get(10).await);
    assert_eq!(reloaded.get(20).await, store.get(20).await);

    Ok(())
}

/// Tests the document format on disk.
///
/// Expected: string guild keys, `channel_id` null for DMs, integer for channels
#[tokio::test]
async fn writes_documented_format() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = WelcomeStore::empty(Arc::new(FileBackend::new(test.store_path())));

    store
        .upsert(1, |c| c.apply(&WelcomeUpdate::Message("Hi {user}".to_string())))
        .await?;
    store
        .upsert(2, |c| c.apply(&WelcomeUpdate::Destination(Destination::Channel(42))))
        .await?;

    assert_eq!(
        test.read_store_json().await,
        fixture::welcome::document_value(&[
            fixture::welcome::entry(1).message("Hi {user}"),
            fixture::welcome::entry(2).channel_id(42),
        ])
    );

    Ok(())
}

/// Tests persisting an unchanged table produces identical bytes.
///
/// Expected: Ok with byte-identical documents before and after `persist`
#[tokio::test]
async fn persist_is_deterministic() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = WelcomeStore::empty(Arc::new(FileBackend::new(test.store_path())));

    for guild_id in [30u64, 4, 1000, 7] {
        store
            .upsert(guild_id, |c| c.apply(&WelcomeUpdate::Enabled(guild_id % 2 == 0)))
            .await?;
    }
    let before = test.read_store_file().await.unwrap();

    store.persist().await?;

    assert_eq!(test.read_store_file().await.unwrap(), before);

    Ok(())
}

/// Tests the document is indented with four spaces.
#[tokio::test]
async fn uses_four_space_indent() -> Result<(), StoreError> {
    let backend = Arc::new(MemoryBackend::new());
    let store = WelcomeStore::empty(backend.clone());

    store
        .upsert(1, |c| c.apply(&WelcomeUpdate::Enabled(true)))
        .await?;

    let text = String::from_utf8(backend.document().unwrap()).unwrap();
    assert!(text.starts_with("{\n    \"1\": {\n        \"enabled\": true,"));

    Ok(())
}
