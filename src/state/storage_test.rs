use super::*;

#[test]
fn memory_storage_set_get_roundtrip() {
    let storage = MemoryStorage::new();
    storage.set("token", "tok1");
    assert_eq!(storage.get("token"), Some("tok1".to_owned()));
}

#[test]
fn memory_storage_set_replaces_previous_value() {
    let storage = MemoryStorage::new();
    storage.set("token", "tok1");
    storage.set("token", "tok2");
    assert_eq!(storage.get("token"), Some("tok2".to_owned()));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_is_noop_when_absent() {
    let storage = MemoryStorage::new();
    storage.remove("missing");
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_clones_share_backing_map() {
    let storage = MemoryStorage::new();
    let alias = storage.clone();
    storage.set("userType", "seeker");
    assert_eq!(alias.get("userType"), Some("seeker".to_owned()));
    alias.remove("userType");
    assert_eq!(storage.get("userType"), None);
}

#[test]
fn browser_storage_is_empty_outside_the_browser() {
    let storage = BrowserStorage;
    storage.set("token", "tok1");
    assert_eq!(storage.get("token"), None);
}
