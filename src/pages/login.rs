//! Email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::ActionError;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::state::scope::Scope;

pub const INVALID_LOGIN_RESPONSE: &str = "Invalid login response from server.";
pub const LOGIN_FALLBACK: &str = "Login failed. Please check your credentials.";
const DEFAULT_REDIRECT: &str = "/";

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok(email.to_owned())
}

pub struct LoginPage {
    scope: Scope,
    redirect_to: String,
    error: Option<String>,
}

impl LoginPage {
    #[must_use]
    pub fn new(scope: Scope) -> Self {
        Self { scope, redirect_to: DEFAULT_REDIRECT.to_owned(), error: None }
    }

    /// Where to go after a successful login, e.g. the page that required it.
    #[must_use]
    pub fn redirect_after_login(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = path.into();
        self
    }

    #[must_use]
    pub fn redirect_to(&self) -> &str {
        &self.redirect_to
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sign in and populate the session.
    ///
    /// # Errors
    ///
    /// The message shown on the form; it is also kept in [`LoginPage::error`].
    pub async fn submit(&mut self, email: &str, password: &str) -> Result<User, ActionError> {
        self.error = None;
        let result = self.attempt(email, password).await;
        if let Err(e) = &result {
            self.error = Some(e.message().to_owned());
        }
        result
    }

    async fn attempt(&self, email: &str, password: &str) -> Result<User, ActionError> {
        let email = validate_login_input(email, password).map_err(ActionError::new)?;
        let response = self
            .scope
            .api()
            .login(&email, password)
            .await
            .map_err(|e| match e {
                ApiError::Decode(_) => ActionError::new(INVALID_LOGIN_RESPONSE),
                e => ActionError::from_api(&e, LOGIN_FALLBACK),
            })?;
        let (user, token) = response
            .into_session()
            .map_err(|_| ActionError::new(INVALID_LOGIN_RESPONSE))?;
        self.scope
            .session()
            .login(user.clone(), &token)
            .map_err(|e| ActionError::new(e.to_string()))?;
        Ok(user)
    }
}
