//! Request descriptors built by the per-endpoint helpers.
//!
//! DESIGN
//! ======
//! A descriptor is the whole contract of a domain call: method, path (with
//! identifiers already embedded) and the serialized JSON body. Headers are
//! not part of it; they are derived from the token store at send time.

use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

/// One API call: relative path, method, optional serialized JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub path: String,
    pub method: Method,
    pub body: Option<String>,
}

impl RequestDescriptor {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Self::default() }
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self { path: path.into(), method: Method::Delete, body: None }
    }

    /// `POST` without a body.
    #[must_use]
    pub fn post_empty(path: impl Into<String>) -> Self {
        Self { path: path.into(), method: Method::Post, body: None }
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: &Value) -> Self {
        Self { path: path.into(), method: Method::Post, body: Some(body.to_string()) }
    }

    #[must_use]
    pub fn put(path: impl Into<String>, body: &Value) -> Self {
        Self { path: path.into(), method: Method::Put, body: Some(body.to_string()) }
    }

    /// Parse the body back into JSON. Test and logging helper.
    #[must_use]
    pub fn body_json(&self) -> Option<Value> {
        self.body.as_deref().and_then(|raw| serde_json::from_str(raw).ok())
    }
}
