//! Auth endpoints: register, login, logout, and the profile used to restore
//! a session on startup.

#[cfg(test)]
#[path = "api_auth_test.rs"]
mod api_auth_test;

use serde_json::json;

use super::api::ApiClient;
use super::error::ApiError;
use super::request::RequestDescriptor;
use super::types::{Ack, AuthResponse, RegisterRequest, User};

pub(crate) fn register_request(req: &RegisterRequest) -> RequestDescriptor {
    RequestDescriptor::post("/auth/register", &json!(req))
}

pub(crate) fn login_request(email: &str, password: &str) -> RequestDescriptor {
    RequestDescriptor::post("/auth/login", &json!({ "email": email, "password": password }))
}

pub(crate) fn logout_request() -> RequestDescriptor {
    RequestDescriptor::post_empty("/auth/logout")
}

pub(crate) fn current_user_request() -> RequestDescriptor {
    RequestDescriptor::get("/auth/me")
}

impl ApiClient {
    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.request_json_or_default(register_request(req)).await
    }

    /// `POST /auth/login`. Use [`AuthResponse::into_session`] to check that
    /// both token and user came back.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.request_json_or_default(login_request(email, password)).await
    }

    /// `POST /auth/logout`. Only the remote half; the session clears the token.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn logout(&self) -> Result<Ack, ApiError> {
        self.request_json_or_default(logout_request()).await
    }

    /// `GET /auth/me`: the full profile behind the persisted token.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.request_json(current_user_request()).await
    }
}
