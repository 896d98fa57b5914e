//! REST request core shared by every endpoint helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each `api_*` module maps typed parameters to a `RequestDescriptor` and
//! hands it to [`ApiClient::request`]. This is the only place that touches
//! headers, URLs, status codes or response bodies.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged here and returned to the caller unchanged. There
//! are no retries and nothing is swallowed; pages decide what to show.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiError, TransportError};
use super::request::RequestDescriptor;
use super::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::config::ApiConfig;
use crate::state::storage::TokenStore;

/// Message used when an error response carries no usable `message`.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// Cheap-to-clone handle; clones share the transport and token store.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Build a client backed by `reqwest` using the configured base URL and timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(config.timeouts)?;
        Ok(Self::with_transport(&config.base_url, Arc::new(transport), tokens))
    }

    #[must_use]
    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), transport, tokens }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token store this client derives `Authorization` from.
    #[must_use]
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Whether a token is currently persisted. No network call.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_present()
    }

    /// Turn a descriptor into a concrete request using the token persisted right now.
    pub(crate) fn prepare(&self, descriptor: &RequestDescriptor) -> HttpRequest {
        let mut headers = vec![("Content-Type", "application/json".to_owned())];
        if let Some(token) = self.tokens.get() {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        HttpRequest {
            method: descriptor.method,
            url: format!("{}{}", self.base_url, descriptor.path),
            headers,
            body: descriptor.body.clone(),
        }
    }

    /// Perform one call and return the response body as untyped JSON.
    ///
    /// # Errors
    ///
    /// `Network` when the transport fails, `Api` for a non-success status,
    /// `Decode` when a success body is not JSON.
    pub async fn request(&self, descriptor: RequestDescriptor) -> Result<Value, ApiError> {
        let request = self.prepare(&descriptor);
        tracing::debug!(method = descriptor.method.as_str(), path = %descriptor.path, "api request");

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(method = descriptor.method.as_str(), path = %descriptor.path, error = %e, "api transport failed");
                return Err(ApiError::Network(e));
            }
        };

        interpret_response(response).inspect_err(|e| {
            tracing::error!(
                method = descriptor.method.as_str(),
                path = %descriptor.path,
                status = e.status(),
                error = %e,
                "api request failed"
            );
        })
    }

    /// Perform one call and decode the body into a typed response contract.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::request`]; a body that does not fit `T` is `Decode`.
    pub async fn request_json<T: DeserializeOwned>(&self, descriptor: RequestDescriptor) -> Result<T, ApiError> {
        let path = descriptor.path.clone();
        let value = self.request(descriptor).await?;
        decode(&path, value)
    }

    /// Like [`ApiClient::request_json`], but an empty success body yields
    /// `T::default()` instead of a decode failure.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::request_json`].
    pub async fn request_json_or_default<T: DeserializeOwned + Default>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, ApiError> {
        let path = descriptor.path.clone();
        let value = self.request(descriptor).await?;
        if value.is_null() {
            return Ok(T::default());
        }
        decode(&path, value)
    }
}

fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        tracing::error!(path = %path, error = %e, "api response did not match contract");
        ApiError::Decode(e)
    })
}

pub(crate) fn interpret_response(response: HttpResponse) -> Result<Value, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Api { status: response.status, message: error_message_from_body(&response.body) });
    }
    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&response.body)?)
}

/// Extract `message` from a JSON error body, or fall back to the fixed default.
pub(crate) fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|value| value.get("message"))
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned(), ToOwned::to_owned)
}
