use super::*;

// =============================================================================
// MemoryTokenStore
// =============================================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.get(), None);
    assert!(!store.is_present());
}

#[test]
fn memory_store_set_then_clear() {
    let store = MemoryTokenStore::new();
    store.set("tok-1").unwrap();
    assert_eq!(store.get().as_deref(), Some("tok-1"));
    store.set("tok-2").unwrap();
    assert_eq!(store.get().as_deref(), Some("tok-2"));
    store.clear().unwrap();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_clear_when_empty_is_ok() {
    let store = MemoryTokenStore::new();
    assert!(store.clear().is_ok());
}

// =============================================================================
// FileTokenStore
// =============================================================================

#[test]
fn file_store_uses_fixed_key_as_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path());
    assert_eq!(store.path(), dir.path().join("authToken"));
}

#[test]
fn file_store_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("nested"));
    assert_eq!(store.get(), None);

    store.set("abc123").unwrap();
    assert_eq!(store.get().as_deref(), Some("abc123"));

    // A second handle on the same directory sees the write.
    let other = FileTokenStore::new(dir.path().join("nested"));
    assert_eq!(other.get().as_deref(), Some("abc123"));

    store.clear().unwrap();
    assert_eq!(other.get(), None);
}

#[test]
fn file_store_treats_blank_file_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(TOKEN_KEY), "  \n").unwrap();
    let store = FileTokenStore::new(dir.path());
    assert_eq!(store.get(), None);
}

#[test]
fn file_store_clear_missing_file_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path());
    assert!(store.clear().is_ok());
}
