//! Composition root handed to every page.
//!
//! Pages never reach for globals: they receive a `Scope` holding the API
//! client and, when the app provides one, the session. Asking for the
//! session from a scope built without it is a wiring bug and panics.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use super::session::Session;
use crate::net::api::ApiClient;

#[derive(Clone)]
pub struct Scope {
    api: ApiClient,
    session: Option<Session>,
}

impl Scope {
    /// Scope with no session provider.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api, session: None }
    }

    /// Scope with a fresh session sharing the client's token store.
    #[must_use]
    pub fn with_session(api: ApiClient) -> Self {
        let session = Session::new(api.tokens().clone());
        Self { api, session: Some(session) }
    }

    /// Install `session` as this scope's provider.
    #[must_use]
    pub fn provide_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub fn try_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The session provided to this scope.
    ///
    /// # Panics
    ///
    /// Panics when the scope was built without a session provider.
    #[must_use]
    pub fn session(&self) -> &Session {
        match &self.session {
            Some(session) => session,
            None => panic!("Scope::session called on a scope without a session provider; build it with Scope::with_session"),
        }
    }
}
