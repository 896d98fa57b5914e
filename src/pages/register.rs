//! Account registration.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use super::ActionError;
use crate::net::error::ApiError;
use crate::net::types::{RegisterRequest, User};
use crate::state::scope::Scope;

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Client-side checks, in the order the form reports them.
    ///
    /// # Errors
    ///
    /// The first failed check as display text.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        if self.password != self.confirm_password {
            return Err(PASSWORD_MISMATCH);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(PASSWORD_TOO_SHORT);
        }
        let phone = self.phone.trim();
        Ok(RegisterRequest {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            phone: (!phone.is_empty()).then(|| phone.to_owned()),
        })
    }
}

pub struct RegisterPage {
    scope: Scope,
    error: Option<String>,
}

impl RegisterPage {
    #[must_use]
    pub fn new(scope: Scope) -> Self {
        Self { scope, error: None }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate, register, and log straight in when the server returns a session.
    ///
    /// # Errors
    ///
    /// A validation message, the server's message, or the registration fallback.
    pub async fn submit(&mut self, form: &RegisterForm) -> Result<User, ActionError> {
        self.error = None;
        let result = self.attempt(form).await;
        if let Err(e) = &result {
            self.error = Some(e.message().to_owned());
        }
        result
    }

    async fn attempt(&self, form: &RegisterForm) -> Result<User, ActionError> {
        let request = form.validate().map_err(ActionError::new)?;
        let response = self
            .scope
            .api()
            .register(&request)
            .await
            .map_err(|e| match e {
                ApiError::Decode(_) => ActionError::new(REGISTER_FALLBACK),
                e => ActionError::from_api(&e, REGISTER_FALLBACK),
            })?;
        let fallback_message = response.message.clone().filter(|m| !m.trim().is_empty());
        let (user, token) = response
            .into_session()
            .map_err(|_| ActionError::new(fallback_message.unwrap_or_else(|| REGISTER_FALLBACK.to_owned())))?;
        self.scope
            .session()
            .login(user.clone(), &token)
            .map_err(|e| ActionError::new(e.to_string()))?;
        Ok(user)
    }
}
