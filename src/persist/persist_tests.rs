use super::*;

#[test]
fn test_memory_store_round_trip() {
    let store = MemorySnapshotStore::new();
    assert!(store.read("cafe_menu").is_none());

    store.write("cafe_menu", "[]").unwrap();
    assert_eq!(store.read("cafe_menu").as_deref(), Some("[]"));

    store.write("cafe_menu", "[1]").unwrap();
    assert_eq!(store.read("cafe_menu").as_deref(), Some("[1]"));
}

#[test]
fn test_fs_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsSnapshotStore::new(dir.path().join("blobs")).unwrap();

    assert!(store.read("cafe_user").is_none());

    store.write("cafe_user", r#"{"id":"user_123"}"#).unwrap();
    assert_eq!(
        store.read("cafe_user").as_deref(),
        Some(r#"{"id":"user_123"}"#)
    );

    // Keys are independent files.
    store.write("cafe_orders", "[]").unwrap();
    assert!(dir.path().join("blobs").join("cafe_user.json").exists());
    assert!(dir.path().join("blobs").join("cafe_orders.json").exists());
}

#[test]
fn test_fs_store_overwrites_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsSnapshotStore::new(dir.path()).unwrap();

    store.write("cafe_menu", "[1,2,3]").unwrap();
    store.write("cafe_menu", "[]").unwrap();
    assert_eq!(store.read("cafe_menu").as_deref(), Some("[]"));
}
