//! Shared fixtures for unit tests: a scripted transport and sample payloads.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::net::api::ApiClient;
use crate::net::error::TransportError;
use crate::net::transport::{HttpRequest, HttpResponse, Transport};
use crate::state::storage::{MemoryTokenStore, TokenStore};

pub(crate) const TEST_BASE_URL: &str = "http://api.test/api";

// =============================================================================
// StubTransport
// =============================================================================

/// Records every request and replays scripted responses in order.
#[derive(Default)]
pub(crate) struct StubTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn push_json(&self, status: u16, body: Value) {
        self.push_raw(status, &body.to_string());
    }

    pub(crate) fn push_raw(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
    }

    pub(crate) fn push_network_failure(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Unreachable(message.to_owned())));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Unreachable("no scripted response".to_owned())))
    }
}

/// Client over `stub` with an empty in-memory token store.
pub(crate) fn client(stub: &Arc<StubTransport>) -> (ApiClient, Arc<MemoryTokenStore>) {
    let tokens = Arc::new(MemoryTokenStore::new());
    let client = client_with_tokens(stub, tokens.clone());
    (client, tokens)
}

pub(crate) fn client_with_tokens(stub: &Arc<StubTransport>, tokens: Arc<dyn TokenStore>) -> ApiClient {
    ApiClient::with_transport(TEST_BASE_URL, stub.clone(), tokens)
}

// =============================================================================
// SAMPLE PAYLOADS
// =============================================================================

pub(crate) fn user_json() -> Value {
    json!({
        "id": "u-1",
        "email": "asha@example.com",
        "firstName": "Asha",
        "lastName": "Rao"
    })
}

pub(crate) fn product_json(id: &str, price: f64) -> Value {
    json!({
        "id": id,
        "name": format!("Product {id}"),
        "description": "Roasted almonds",
        "price": price,
        "rating": 4.5,
        "reviewCount": 12,
        "image": "/img/p.png",
        "category": "nuts",
        "inStock": true
    })
}

pub(crate) fn cart_json(item_count: usize) -> Value {
    let items: Vec<Value> = (0..item_count)
        .map(|i| {
            json!({
                "id": format!("ci-{i}"),
                "productId": format!("p-{i}"),
                "name": format!("Item {i}"),
                "price": 100.5,
                "quantity": 2
            })
        })
        .collect();
    json!({
        "items": items,
        "subtotal": 201.0,
        "shipping": 0,
        "tax": 10.05,
        "total": 211.05,
        "itemCount": item_count
    })
}

pub(crate) fn order_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "orderNumber": format!("ORD-{id}"),
        "status": status,
        "items": [{ "productId": "p-1", "name": "Item", "price": 50, "quantity": 1 }],
        "subtotal": 50,
        "shipping": 0,
        "tax": 2.5,
        "total": 52.5,
        "createdAt": "2026-01-02T10:00:00Z"
    })
}
