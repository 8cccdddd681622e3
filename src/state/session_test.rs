use super::*;
use crate::state::storage::MemoryStorage;

fn user(name: &str) -> UserInfo {
    UserInfo {
        user_name: Some(name.to_owned()),
        ..UserInfo::default()
    }
}

fn verified_user(name: &str) -> UserInfo {
    UserInfo {
        user_name: Some(name.to_owned()),
        email_verified_at: Some("2024-06-01 10:00:00".to_owned()),
        ..UserInfo::default()
    }
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_with_empty_storage_yields_empty_snapshot() {
    let store = SessionStore::initialize(MemoryStorage::new());
    assert_eq!(*store.snapshot(), Session::default());
    assert!(!store.snapshot().is_authenticated());
}

#[test]
fn initialize_with_malformed_identity_yields_empty_snapshot() {
    let storage = MemoryStorage::new();
    storage.set(USER_INFO_KEY, "{not json");
    storage.set(USER_TYPE_KEY, "seeker");
    storage.set(TOKEN_KEY, "tok1");

    let store = SessionStore::initialize(storage);
    assert_eq!(*store.snapshot(), Session::default());
}

#[test]
fn initialize_restores_a_persisted_session() {
    let storage = MemoryStorage::new();
    let mut writer = SessionStore::initialize(storage.clone());
    writer.set_credentials(user("u1"), Role::Seeker, EmailVerified::No, Some("tok1".to_owned()));

    let reader = SessionStore::initialize(storage);
    assert_eq!(reader.snapshot(), writer.snapshot());
    assert_eq!(reader.snapshot().role, Some(Role::Seeker));
    assert_eq!(reader.snapshot().token.as_deref(), Some("tok1"));
}

#[test]
fn initialize_treats_unknown_role_tag_as_no_role() {
    let storage = MemoryStorage::new();
    storage.set(USER_INFO_KEY, &serde_json::to_string(&user("u1")).unwrap());
    storage.set(USER_TYPE_KEY, "admin");

    let store = SessionStore::initialize(storage);
    assert!(store.snapshot().is_authenticated());
    assert_eq!(store.snapshot().role, None);
    assert_eq!(store.snapshot().email_verified, EmailVerified::Unknown);
}

// =============================================================
// set_credentials
// =============================================================

#[test]
fn set_credentials_writes_through_to_storage() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::initialize(storage.clone());
    store.set_credentials(user("u1"), Role::Employer, EmailVerified::Yes, Some("tok1".to_owned()));

    assert_eq!(storage.get(USER_TYPE_KEY), Some("employer".to_owned()));
    assert_eq!(storage.get(EMAIL_VERIFIED_KEY), Some("yes".to_owned()));
    assert_eq!(storage.get(TOKEN_KEY), Some("tok1".to_owned()));
    let persisted: UserInfo = serde_json::from_str(&storage.get(USER_INFO_KEY).unwrap()).unwrap();
    assert_eq!(persisted.user_name.as_deref(), Some("u1"));
}

#[test]
fn set_credentials_without_token_keeps_previous_token() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::initialize(storage.clone());
    store.set_credentials(user("u1"), Role::Seeker, EmailVerified::No, Some("tok1".to_owned()));
    store.set_credentials(user("u1"), Role::Seeker, EmailVerified::Yes, None);

    assert_eq!(store.snapshot().token.as_deref(), Some("tok1"));
    assert_eq!(storage.get(TOKEN_KEY), Some("tok1".to_owned()));
}

#[test]
fn set_credentials_replaces_verification_flag_as_part_of_the_unit() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::initialize(storage.clone());
    store.set_credentials(user("u1"), Role::Seeker, EmailVerified::Yes, Some("tok1".to_owned()));
    store.set_credentials(user("u1"), Role::Seeker, EmailVerified::Unknown, None);

    assert_eq!(store.snapshot().email_verified, EmailVerified::Unknown);
    assert_eq!(storage.get(EMAIL_VERIFIED_KEY), None);
}

#[test]
fn sequences_of_mutations_match_a_fresh_read_of_storage() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::initialize(storage.clone());

    store.set_credentials(user("u1"), Role::Seeker, EmailVerified::No, Some("tok1".to_owned()));
    store.set_credentials(user("u2"), Role::Employer, EmailVerified::Yes, None);
    store.clear_credentials();
    store.set_credentials(user("u3"), Role::Seeker, EmailVerified::Unknown, Some("tok3".to_owned()));

    let fresh = SessionStore::initialize(storage);
    assert_eq!(fresh.snapshot(), store.snapshot());
}

// =============================================================
// clear_credentials
// =============================================================

#[test]
fn clear_credentials_removes_every_key() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::initialize(storage.clone());
    store.set_credentials(user("u1"), Role::Seeker, EmailVerified::Yes, Some("tok1".to_owned()));
    store.clear_credentials();

    assert_eq!(*store.snapshot(), Session::default());
    assert!(storage.is_empty());
}

#[test]
fn clear_credentials_is_idempotent() {
    let mut store = SessionStore::initialize(MemoryStorage::new());
    store.clear_credentials();
    let first = store.snapshot().clone();
    store.clear_credentials();
    assert_eq!(*store.snapshot(), first);
    assert_eq!(first, Session::default());
}

// =============================================================
// update_email_verification
// =============================================================

#[test]
fn update_email_verification_changes_only_the_flag() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::initialize(storage.clone());
    store.set_credentials(user("u1"), Role::Seeker, EmailVerified::No, Some("tok1".to_owned()));
    store.update_email_verification(EmailVerified::Yes);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.identity.as_ref().unwrap().user_name.as_deref(), Some("u1"));
    assert_eq!(snapshot.role, Some(Role::Seeker));
    assert_eq!(snapshot.email_verified, EmailVerified::Yes);
    assert_eq!(snapshot.token.as_deref(), Some("tok1"));
    assert_eq!(storage.get(EMAIL_VERIFIED_KEY), Some("yes".to_owned()));
}

#[test]
fn update_email_verification_is_ignored_while_logged_out() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::initialize(storage.clone());
    store.update_email_verification(EmailVerified::Yes);

    assert_eq!(*store.snapshot(), Session::default());
    assert!(storage.is_empty());
}

// =============================================================
// tags and derivation
// =============================================================

#[test]
fn role_tags_roundtrip() {
    assert_eq!(Role::from_tag(Role::Seeker.as_tag()), Some(Role::Seeker));
    assert_eq!(Role::from_tag(Role::Employer.as_tag()), Some(Role::Employer));
    assert_eq!(Role::from_tag("root"), None);
}

#[test]
fn email_verified_tags_roundtrip() {
    assert_eq!(EmailVerified::from_tag(Some("yes")), EmailVerified::Yes);
    assert_eq!(EmailVerified::from_tag(Some("no")), EmailVerified::No);
    assert_eq!(EmailVerified::from_tag(Some("maybe")), EmailVerified::Unknown);
    assert_eq!(EmailVerified::from_tag(None), EmailVerified::Unknown);
}

#[test]
fn derive_email_verified_follows_verified_at() {
    assert_eq!(derive_email_verified(&verified_user("u1")), EmailVerified::Yes);
    assert_eq!(derive_email_verified(&user("u1")), EmailVerified::No);
}
