//! Newsletter subscription endpoints.

#[cfg(test)]
#[path = "api_newsletter_test.rs"]
mod api_newsletter_test;

use serde_json::{Map, Value};

use super::api::ApiClient;
use super::error::ApiError;
use super::request::RequestDescriptor;
use super::types::Ack;

pub(crate) fn subscribe_request(email: &str) -> RequestDescriptor {
    RequestDescriptor::post("/newsletter/subscribe", &serde_json::json!({ "email": email }))
}

/// `token` is the unsubscribe token from the mail footer; sent only when non-empty.
pub(crate) fn unsubscribe_request(email: &str, token: Option<&str>) -> RequestDescriptor {
    let mut body = Map::new();
    body.insert("email".to_owned(), Value::String(email.to_owned()));
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        body.insert("token".to_owned(), Value::String(token.to_owned()));
    }
    RequestDescriptor::post("/newsletter/unsubscribe", &Value::Object(body))
}

impl ApiClient {
    /// `POST /newsletter/subscribe`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn subscribe_newsletter(&self, email: &str) -> Result<Ack, ApiError> {
        self.request_json(subscribe_request(email)).await
    }

    /// `POST /newsletter/unsubscribe`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn unsubscribe_newsletter(&self, email: &str, token: Option<&str>) -> Result<Ack, ApiError> {
        self.request_json(unsubscribe_request(email, token)).await
    }
}
