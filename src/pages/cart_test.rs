use super::*;
use crate::net::request::Method;
use crate::test_support::{StubTransport, cart_json, client};
use serde_json::json;
use std::sync::Arc;

async fn loaded_page(stub: &Arc<StubTransport>, items: usize) -> CartPage {
    let (api, _) = client(stub);
    let page = CartPage::new(Scope::with_session(api));
    stub.push_json(200, cart_json(items));
    page.load().await;
    page
}

fn item_count(page: &CartPage) -> usize {
    page.state().ready().map_or(0, |cart| cart.items.len())
}

#[tokio::test]
async fn load_decodes_cart_totals() {
    let stub = StubTransport::new();
    let page = loaded_page(&stub, 2).await;

    let cart = page.state().ready().cloned().unwrap();
    assert_eq!(cart.items.len(), 2);
    assert_eq!(cart.total.to_string(), "₹211.05");
    assert_eq!(cart.shipping_label(), "Free");
}

#[tokio::test]
async fn quantity_update_uses_returned_cart() {
    let stub = StubTransport::new();
    let page = loaded_page(&stub, 2).await;
    stub.push_json(200, json!({ "success": true, "cart": cart_json(3) }));

    page.set_quantity("ci-0", 5).await.unwrap();

    assert_eq!(item_count(&page), 3);
    let last = stub.last_request();
    assert_eq!(last.method, Method::Put);
    assert!(last.url.ends_with("/cart/update/ci-0"));
    assert_eq!(stub.requests().len(), 2);
}

#[tokio::test]
async fn zero_quantity_removes_line() {
    let stub = StubTransport::new();
    let page = loaded_page(&stub, 2).await;
    stub.push_json(200, json!({ "cart": cart_json(1) }));

    page.set_quantity("ci-1", 0).await.unwrap();

    let last = stub.last_request();
    assert_eq!(last.method, Method::Delete);
    assert!(last.url.ends_with("/cart/remove/ci-1"));
    assert_eq!(item_count(&page), 1);
}

#[tokio::test]
async fn mutation_without_cart_reloads() {
    let stub = StubTransport::new();
    let page = loaded_page(&stub, 2).await;
    stub.push_json(200, json!({ "success": true }));
    stub.push_json(200, cart_json(1));

    page.remove("ci-0").await.unwrap();

    assert_eq!(stub.requests().len(), 3);
    assert!(stub.last_request().url.ends_with("/cart"));
    assert_eq!(item_count(&page), 1);
}

#[tokio::test]
async fn failed_mutation_keeps_current_cart() {
    let stub = StubTransport::new();
    let page = loaded_page(&stub, 2).await;
    stub.push_json(409, json!({ "message": "Only 1 left" }));

    let err = page.set_quantity("ci-0", 4).await.unwrap_err();

    assert_eq!(err.message(), "Only 1 left");
    assert_eq!(item_count(&page), 2);
}

#[tokio::test]
async fn clear_reloads_the_cart() {
    let stub = StubTransport::new();
    let page = loaded_page(&stub, 2).await;
    stub.push_raw(204, "");
    stub.push_json(200, json!({ "items": [] }));

    page.clear().await.unwrap();
    assert!(page.state().ready().unwrap().is_empty());
}

#[tokio::test]
async fn coupon_rejected_by_server_reports_message() {
    let stub = StubTransport::new();
    let page = loaded_page(&stub, 1).await;
    stub.push_json(200, json!({ "success": false, "message": "Coupon expired" }));

    let err = page.apply_coupon("OLD").await.unwrap_err();
    assert_eq!(err.message(), "Coupon expired");
}

#[tokio::test]
async fn coupon_success_returns_confirmation() {
    let stub = StubTransport::new();
    let page = loaded_page(&stub, 1).await;
    stub.push_json(200, json!({ "success": true, "message": "10% off applied", "cart": cart_json(1) }));

    let message = page.apply_coupon(" SAVE10 ").await.unwrap();
    assert_eq!(message.as_deref(), Some("10% off applied"));
    assert_eq!(stub.last_request().body.as_deref(), Some(r#"{"code":"SAVE10"}"#));
}

#[tokio::test]
async fn blank_coupon_is_rejected_locally() {
    let stub = StubTransport::new();
    let page = loaded_page(&stub, 1).await;

    assert!(page.apply_coupon("  ").await.is_err());
    assert_eq!(stub.requests().len(), 1);
}
