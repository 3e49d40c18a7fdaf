use super::*;

/// Tests loading with no stored document.
///
/// Expected: Ok with an empty table
#[tokio::test]
async fn absent_document_loads_empty() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();

    let store = WelcomeStore::load(Arc::new(FileBackend::new(test.store_path()))).await?;

    assert!(store.is_empty().await);
    assert!(store.get(1).await.is_none());

    Ok(())
}

/// Tests loading a valid document from disk.
///
/// Expected: Ok with the guild's record converted to the domain model
#[tokio::test]
async fn loads_existing_document() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_store_document(fixture::welcome::document(&[
            fixture::welcome::entry(1).channel_id(42).message("Hi {user}"),
            fixture::welcome::entry(2).enabled(false),
        ]))
        .build()
        .await
        .unwrap();

    let store = WelcomeStore::load(Arc::new(FileBackend::new(test.store_path()))).await?;

    assert_eq!(store.len().await, 2);
    assert_eq!(
        store.get(1).await,
        Some(WelcomeConfig {
            guild_id: 1,
            enabled: true,
            destination: Destination::Channel(42),
            message: "Hi {user}".to_string(),
        })
    );
    let second = store.get(2).await.unwrap();
    assert!(!second.enabled);
    assert_eq!(second.destination, Destination::DirectMessage);

    Ok(())
}

/// Tests fields missing from a stored entry take their defaults.
#[tokio::test]
async fn partial_entry_gets_defaults() -> Result<(), StoreError> {
    let backend = Arc::new(MemoryBackend::with_document(
        fixture::welcome::PARTIAL_FIELDS_DOCUMENT,
    ));

    let store = WelcomeStore::load(backend).await?;
    let config = store.get(5).await.unwrap();

    assert!(config.enabled);
    assert_eq!(config.destination, Destination::Channel(77));
    assert_eq!(config.message, DEFAULT_WELCOME_MESSAGE);

    Ok(())
}

/// Tests malformed documents are reported as corruption.
///
/// Expected: Err(StoreError::Corrupt) for truncated JSON, wrong top-level shape and
/// non-numeric keys
#[tokio::test]
async fn malformed_documents_are_corrupt() {
    for document in [
        fixture::welcome::TRUNCATED_DOCUMENT,
        fixture::welcome::WRONG_SHAPE_DOCUMENT,
        fixture::welcome::NON_NUMERIC_KEY_DOCUMENT,
        "",
    ] {
        let backend = Arc::new(MemoryBackend::with_document(document));

        match WelcomeStore::load(backend).await {
            Err(StoreError::Corrupt { location, .. }) => assert_eq!(location, "memory"),
            Err(other) => panic!("Expected Corrupt for {:?}, got: {:?}", document, other),
            Ok(_) => panic!("Expected Corrupt for {:?}, got a store", document),
        }
    }
}
