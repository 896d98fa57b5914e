use super::*;
use crate::test_support::{StubTransport, client, user_json};
use serde_json::json;
use std::sync::Arc;

fn page(stub: &Arc<StubTransport>) -> LoginPage {
    let (api, _) = client(stub);
    LoginPage::new(Scope::with_session(api))
}

#[test]
fn validate_login_input_trims_and_requires_both() {
    assert_eq!(validate_login_input(" a@b.in ", "pw"), Ok("a@b.in".to_owned()));
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("a@b.in", ""), Err("Enter your email and password."));
}

#[tokio::test]
async fn successful_login_populates_session() {
    let stub = StubTransport::new();
    stub.push_json(200, json!({ "token": "jwt", "user": user_json() }));
    let mut page = page(&stub).redirect_after_login("/checkout");

    let user = page.submit("asha@example.com", "secret123").await.unwrap();

    assert_eq!(user.display_name(), "Asha Rao");
    assert!(page.scope.session().is_logged_in());
    assert!(page.scope.api().is_authenticated());
    assert_eq!(page.redirect_to(), "/checkout");
    assert_eq!(page.error(), None);
}

#[tokio::test]
async fn response_without_token_is_invalid() {
    let stub = StubTransport::new();
    stub.push_json(200, json!({ "user": user_json() }));
    let mut page = page(&stub);

    let err = page.submit("asha@example.com", "secret123").await.unwrap_err();

    assert_eq!(err.message(), INVALID_LOGIN_RESPONSE);
    assert_eq!(page.error(), Some(INVALID_LOGIN_RESPONSE));
    assert!(!page.scope.session().is_logged_in());
}

#[tokio::test]
async fn non_object_body_is_invalid_response() {
    for body in ["null", "[]", ""] {
        let stub = StubTransport::new();
        stub.push_raw(200, body);
        let mut page = page(&stub);

        let err = page.submit("a@b.c", "pw").await.unwrap_err();
        assert_eq!(err.message(), INVALID_LOGIN_RESPONSE, "body {body:?}");
        assert!(!page.scope.session().is_logged_in());
    }
}

#[tokio::test]
async fn rejected_credentials_show_server_message() {
    let stub = StubTransport::new();
    stub.push_json(401, json!({ "message": "Invalid email or password" }));
    let mut page = page(&stub);

    let err = page.submit("asha@example.com", "wrong").await.unwrap_err();
    assert_eq!(err.message(), "Invalid email or password");
}

#[tokio::test]
async fn later_success_clears_previous_error() {
    let stub = StubTransport::new();
    stub.push_json(401, json!({ "message": "Invalid email or password" }));
    stub.push_json(200, json!({ "token": "jwt", "user": user_json() }));
    let mut page = page(&stub);

    let _ = page.submit("asha@example.com", "wrong").await;
    assert!(page.error().is_some());
    page.submit("asha@example.com", "right").await.unwrap();
    assert_eq!(page.error(), None);
}
