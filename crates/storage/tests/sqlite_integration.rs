use storage::repository::{KeyValueRepository, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_missing_slot_reads_as_none() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_missing?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get_value("progress").await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_put_overwrites_slot() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.put_value("progress", r#"{"2025-09-13":[false,false]}"#)
        .await
        .unwrap();
    repo.put_value("progress", r#"{"2025-09-13":[true,false]}"#)
        .await
        .unwrap();

    let value = repo.get_value("progress").await.unwrap();
    assert_eq!(value.as_deref(), Some(r#"{"2025-09-13":[true,false]}"#));
    assert_eq!(repo.get_value("other").await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_migrate_is_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.put_value("progress", "{}").await.unwrap();
    repo.migrate().await.expect("second migrate");

    assert_eq!(repo.get_value("progress").await.unwrap().as_deref(), Some("{}"));
}

#[tokio::test]
async fn sqlite_storage_survives_reconnect() {
    let path = std::env::temp_dir().join(format!(
        "study-dashboard-storage-{}.sqlite3",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}?mode=rwc", path.display());

    {
        let storage = Storage::sqlite(&url).await.expect("open");
        storage
            .key_values
            .put_value("progress", r#"{"2025-09-14":[true]}"#)
            .await
            .unwrap();
    }

    let reopened = Storage::sqlite(&url).await.expect("reopen");
    let value = reopened.key_values.get_value("progress").await.unwrap();
    assert_eq!(value.as_deref(), Some(r#"{"2025-09-14":[true]}"#));

    let _ = std::fs::remove_file(&path);
}
