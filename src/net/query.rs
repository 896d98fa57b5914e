//! Query-string construction for list/search endpoints.
//!
//! Keys keep the order they were pushed in, absent values are skipped, and
//! values are form-urlencoded (spaces become `+`). Keys are static names
//! chosen by the endpoint helpers and are emitted as-is.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::fmt::Display;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value`.
    #[must_use]
    pub fn push(mut self, key: &'static str, value: impl Display) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Append `key=value` only when a value is present.
    #[must_use]
    pub fn push_opt<V: Display>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as `k1=v1&k2=v2`, without a leading `?`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| {
                let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
                format!("{key}={encoded}")
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append the query to `path`, adding `?` only when there is something to add.
    #[must_use]
    pub fn apply_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_owned()
        } else {
            format!("{path}?{}", self.encode())
        }
    }
}
