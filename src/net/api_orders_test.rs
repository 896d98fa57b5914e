use super::*;
use crate::net::request::Method;
use crate::net::types::{Address, PaymentMethod};
use crate::test_support::{StubTransport, client, order_json};

#[test]
fn orders_query_keeps_page_then_limit() {
    let query = OrderQuery { page: Some(2), limit: Some(10), status: None };
    assert_eq!(orders_request(&query).path, "/orders?page=2&limit=10");
}

#[test]
fn orders_without_filters_has_no_query() {
    assert_eq!(orders_request(&OrderQuery::default()).path, "/orders");
}

#[test]
fn orders_status_filter_only() {
    let query = OrderQuery { status: Some("shipped".to_owned()), ..OrderQuery::default() };
    assert_eq!(orders_request(&query).path, "/orders?status=shipped");
}

#[test]
fn cancel_order_defaults_reason_to_empty_string() {
    let req = cancel_order_request("o-7", None);
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/orders/o-7/cancel");
    assert_eq!(req.body_json(), Some(json!({ "reason": "" })));

    let req = cancel_order_request("o-7", Some("changed my mind"));
    assert_eq!(req.body_json(), Some(json!({ "reason": "changed my mind" })));
}

#[test]
fn order_lookup_paths() {
    assert_eq!(order_request("o-1").path, "/orders/o-1");
    assert_eq!(track_order_request("o-1").path, "/orders/o-1/track");
}

#[test]
fn create_order_serializes_camel_case_and_skips_absent_fields() {
    let order = CreateOrderRequest {
        shipping_address: Address {
            first_name: "Asha".to_owned(),
            last_name: "Rao".to_owned(),
            address1: "12 MG Road".to_owned(),
            city: "Pune".to_owned(),
            state: "MH".to_owned(),
            zip_code: "411001".to_owned(),
            country: "India".to_owned(),
            ..Address::default()
        },
        payment_method: PaymentMethod::Cod,
        ..CreateOrderRequest::default()
    };
    let body = create_order_request(&order).body_json().unwrap();

    assert_eq!(body["paymentMethod"], "cod");
    assert_eq!(body["shippingAddress"]["zipCode"], "411001");
    assert!(body.get("billingAddress").is_none());
    assert!(body.get("paymentDetails").is_none());
    assert!(body.get("notes").is_none());
}

#[tokio::test]
async fn get_orders_decodes_list() {
    let stub = StubTransport::new();
    stub.push_json(200, json!({ "orders": [order_json("1", "pending"), order_json("2", "delivered")], "total": 2 }));
    let (api, _) = client(&stub);

    let list = api.get_orders(&OrderQuery::default()).await.unwrap();
    assert_eq!(list.orders.len(), 2);
    assert_eq!(list.orders[0].reference(), "ORD-1");
    assert_eq!(list.orders[1].total.to_string(), "₹52.50");
}

#[tokio::test]
async fn track_order_decodes_timeline() {
    let stub = StubTransport::new();
    stub.push_json(
        200,
        json!({
            "orderNumber": "ORD-1",
            "status": "shipped",
            "carrier": "BlueDart",
            "timeline": [
                { "status": "placed", "description": "Order placed", "timestamp": "2026-01-01T09:00:00Z" },
                { "status": "shipped", "description": "Left warehouse", "timestamp": "2026-01-02T09:00:00Z", "location": "Pune" }
            ]
        }),
    );
    let (api, _) = client(&stub);

    let tracking = api.track_order("1").await.unwrap();
    assert_eq!(tracking.status, "shipped");
    assert_eq!(tracking.timeline.len(), 2);
    assert_eq!(tracking.timeline[1].location.as_deref(), Some("Pune"));
}

#[tokio::test]
async fn cancel_rejected_by_server_keeps_status() {
    let stub = StubTransport::new();
    stub.push_json(409, json!({ "message": "Order already shipped" }));
    let (api, _) = client(&stub);

    let err = api.cancel_order("1", None).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_string(), "Order already shipped");
}
