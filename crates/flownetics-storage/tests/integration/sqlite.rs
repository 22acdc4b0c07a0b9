//! SQLite-specific behaviour: on-disk persistence and schema idempotence.

use flownetics_storage::{DocumentStore, SqliteStore};

#[tokio::test]
async fn test_data_survives_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("site.db").display());

    {
        let store = SqliteStore::connect(&url).await.unwrap();
        store.insert_subscription("keep@example.com").await.unwrap();
        store.pool().close().await;
    }

    let reopened = SqliteStore::connect(&url).await.unwrap();
    assert!(
        reopened
            .find_subscription("keep@example.com")
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_migrate_is_idempotent() {
    let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
    store.migrate().await.unwrap();
    store.migrate().await.unwrap();
    assert_eq!(store.stats().await.unwrap().blogs, 0);
}

#[tokio::test]
async fn test_bad_url_is_an_error() {
    assert!(SqliteStore::connect("postgres://nope").await.is_err());
}
