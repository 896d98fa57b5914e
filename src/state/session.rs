//! Who is logged in, mirrored to the persisted token.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Session` is created at startup and handed to every page through the
//! `Scope`. Clones share state, so a login on one page is observed by all of
//! them. The token store is shared with the `ApiClient`, which is how a login
//! here changes the `Authorization` header of the next request.
//!
//! TRANSITIONS
//! ===========
//! Anonymous (`user = None`) and Authenticated (`user = Some`). `restore`
//! runs once at startup; `login`, `logout` and `update_user` are the only
//! other mutators of the user record.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::storage::{StoreError, TokenStore};
use crate::net::api::ApiClient;
use crate::net::types::User;

/// Point-in-time view of the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Clone)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
    tokens: Arc<dyn TokenStore>,
}

impl Session {
    /// Anonymous session, `loading` until [`Session::restore`] completes.
    #[must_use]
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        let state = SessionState { user: None, loading: true, error: None };
        Self { state: Arc::new(RwLock::new(state)), tokens }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.read().clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.read().is_logged_in()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.read().loading
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    pub fn set_error(&self, message: Option<String>) {
        self.write().error = message;
    }

    /// Startup restore. With a persisted token the profile is re-fetched;
    /// if that fails the token is dropped and the session stays anonymous.
    /// Always ends with `loading == false`.
    pub async fn restore(&self, api: &ApiClient) {
        if self.tokens.is_present() {
            match api.current_user().await {
                Ok(user) => {
                    tracing::debug!(user = ?user.id, "session restored");
                    self.write().user = Some(user);
                }
                Err(e) => {
                    if e.is_unauthorized() {
                        tracing::debug!("persisted token rejected; clearing it");
                    } else {
                        tracing::warn!(error = %e, "session restore failed; clearing token");
                    }
                    if let Err(e) = self.tokens.clear() {
                        tracing::warn!(error = %e, "failed to clear persisted token");
                    }
                    self.write().user = None;
                }
            }
        }
        self.write().loading = false;
    }

    /// Persist `token` and become Authenticated as `user`.
    ///
    /// # Errors
    ///
    /// Returns the store error if the token cannot be persisted; the session
    /// is left unchanged in that case.
    pub fn login(&self, user: User, token: &str) -> Result<(), StoreError> {
        self.tokens.set(token)?;
        tracing::debug!(user = ?user.id, "session login");
        let mut state = self.write();
        state.user = Some(user);
        state.error = None;
        Ok(())
    }

    /// Best-effort remote logout, then unconditional local teardown.
    ///
    /// # Errors
    ///
    /// Returns the store error if the persisted token cannot be removed. The
    /// in-memory user is cleared regardless.
    pub async fn logout(&self, api: &ApiClient) -> Result<(), StoreError> {
        if let Err(e) = api.logout().await {
            tracing::warn!(error = %e, "remote logout failed");
        }
        let cleared = self.tokens.clear();
        self.write().user = None;
        tracing::debug!("session logout");
        cleared
    }

    /// Replace the user record. Token and classification are untouched.
    pub fn update_user(&self, user: User) {
        let mut state = self.write();
        if state.user.is_some() {
            state.user = Some(user);
        }
    }
}
