use super::*;
use crate::test_support::{StubTransport, client};

#[test]
#[should_panic(expected = "without a session provider")]
fn session_without_provider_panics() {
    let stub = StubTransport::new();
    let (api, _) = client(&stub);
    let _ = Scope::new(api).session();
}

#[test]
fn try_session_is_none_without_provider() {
    let stub = StubTransport::new();
    let (api, _) = client(&stub);
    assert!(Scope::new(api).try_session().is_none());
}

#[test]
fn with_session_shares_token_store_with_client() {
    let stub = StubTransport::new();
    let (api, tokens) = client(&stub);
    let scope = Scope::with_session(api);

    scope.session().login(crate::net::types::User::default(), "tok").unwrap();

    assert!(scope.api().is_authenticated());
    assert!(crate::state::storage::TokenStore::is_present(tokens.as_ref()));
}

#[test]
fn provide_session_installs_given_instance() {
    let stub = StubTransport::new();
    let (api, _) = client(&stub);
    let session = Session::new(api.tokens().clone());
    let scope = Scope::new(api).provide_session(session.clone());

    session.set_error(Some("x".to_owned()));
    assert_eq!(scope.session().error().as_deref(), Some("x"));
}
