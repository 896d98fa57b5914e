//! Normalized errors for the REST client.
//!
//! ERROR HANDLING
//! ==============
//! The request layer produces exactly one of these per failed call and never
//! recovers on its own. Pages are the only place errors become view state,
//! which is why `Api` displays as the bare server message.

/// Failure below HTTP: the request never produced a status line.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request or connect timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The HTTP client failed after connecting (TLS, connection reset, body read).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// No connection could be made (refused, DNS failure, unroutable host).
    #[error("{0}")]
    Unreachable(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

/// Errors returned by every API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The transport failed before a response arrived. The cause is kept.
    #[error("network error: {0}")]
    Network(#[source] TransportError),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A success payload did not match the expected response contract.
    #[error("unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::Network(err)
    }
}

impl ApiError {
    /// HTTP status for `Api` errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Whether the server rejected the credentials attached to the request.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message suitable for display, or `fallback` when the error text is empty.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() { fallback.to_owned() } else { message }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
