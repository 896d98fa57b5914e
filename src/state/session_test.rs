use super::*;
use crate::state::storage::MemoryTokenStore;
use crate::test_support::{StubTransport, client_with_tokens, user_json};
use serde_json::json;

fn user(first: &str) -> User {
    User { id: Some("u-1".to_owned()), first_name: Some(first.to_owned()), ..User::default() }
}

fn setup(tokens: MemoryTokenStore) -> (Arc<StubTransport>, ApiClient, Session, Arc<dyn TokenStore>) {
    let stub = StubTransport::new();
    let tokens: Arc<dyn TokenStore> = Arc::new(tokens);
    let api = client_with_tokens(&stub, tokens.clone());
    let session = Session::new(tokens.clone());
    (stub, api, session, tokens)
}

// =============================================================================
// restore
// =============================================================================

#[tokio::test]
async fn new_session_is_anonymous_and_loading() {
    let (_, _, session, _) = setup(MemoryTokenStore::new());
    assert!(session.loading());
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn restore_without_token_makes_no_request() {
    let (stub, api, session, _) = setup(MemoryTokenStore::new());
    session.restore(&api).await;
    assert!(!session.loading());
    assert!(!session.is_logged_in());
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn restore_with_token_refetches_profile() {
    let (stub, api, session, tokens) = setup(MemoryTokenStore::with_token("tok"));
    stub.push_json(200, user_json());

    session.restore(&api).await;

    assert!(!session.loading());
    assert!(session.is_logged_in());
    assert_eq!(session.user().unwrap().email.as_deref(), Some("asha@example.com"));
    assert!(stub.last_request().url.ends_with("/auth/me"));
    assert_eq!(stub.last_request().header("Authorization"), Some("Bearer tok"));
    assert!(tokens.is_present());
}

#[tokio::test]
async fn restore_failure_clears_token_and_stays_anonymous() {
    let (stub, api, session, tokens) = setup(MemoryTokenStore::with_token("expired"));
    stub.push_json(401, json!({ "message": "Token expired" }));

    session.restore(&api).await;

    assert!(!session.loading());
    assert!(!session.is_logged_in());
    assert!(!tokens.is_present());
    assert!(!api.is_authenticated());
}

// =============================================================================
// login / logout
// =============================================================================

#[tokio::test]
async fn login_persists_token_and_clears_error() {
    let (_, api, session, _) = setup(MemoryTokenStore::new());
    session.set_error(Some("previous".to_owned()));

    session.login(user("Asha"), "fresh").unwrap();

    assert!(session.is_logged_in());
    assert!(api.is_authenticated());
    assert_eq!(session.error(), None);
}

#[tokio::test]
async fn next_request_after_login_carries_new_token() {
    let (stub, api, session, _) = setup(MemoryTokenStore::new());
    session.login(user("Asha"), "fresh").unwrap();
    stub.push_json(200, json!({ "items": [] }));

    api.get_cart().await.unwrap();
    assert_eq!(stub.last_request().header("Authorization"), Some("Bearer fresh"));
}

#[tokio::test]
async fn logout_clears_locally_even_when_remote_fails() {
    let (stub, api, session, _) = setup(MemoryTokenStore::new());
    session.login(user("Asha"), "tok").unwrap();
    stub.push_network_failure("connection refused");

    session.logout(&api).await.unwrap();

    assert!(!session.is_logged_in());
    assert!(!api.is_authenticated());
    assert_eq!(stub.last_request().header("Authorization"), Some("Bearer tok"));
}

#[tokio::test]
async fn logout_after_server_error_still_clears() {
    let (stub, api, session, _) = setup(MemoryTokenStore::new());
    session.login(user("Asha"), "tok").unwrap();
    stub.push_json(500, json!({}));

    session.logout(&api).await.unwrap();
    assert!(!session.is_logged_in());
    assert!(!api.is_authenticated());
}

// =============================================================================
// shared state
// =============================================================================

#[test]
fn clones_observe_the_same_session() {
    let session = Session::new(Arc::new(MemoryTokenStore::new()));
    let other = session.clone();
    session.login(user("Asha"), "tok").unwrap();
    assert!(other.is_logged_in());
}

#[test]
fn update_user_replaces_record_only() {
    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let session = Session::new(tokens.clone());
    session.login(user("Asha"), "tok").unwrap();

    session.update_user(user("Ash"));

    assert_eq!(session.user().unwrap().first_name.as_deref(), Some("Ash"));
    assert_eq!(tokens.get().as_deref(), Some("tok"));
}

#[test]
fn update_user_does_not_log_in_an_anonymous_session() {
    let session = Session::new(Arc::new(MemoryTokenStore::new()));
    session.update_user(user("Asha"));
    assert!(!session.is_logged_in());
}
