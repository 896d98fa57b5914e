//! Storefront client: typed REST API access, session state, and headless
//! page controllers for the storefront web API.
//!
//! ARCHITECTURE
//! ============
//! `net` owns the wire (one request function plus thin per-endpoint
//! callers), `state` owns the session and the shared Loading/Error/Ready
//! view model, and `pages` composes both into route-level screens.
//! `config` turns environment variables into typed client settings.

pub mod config;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ApiConfig;
pub use net::api::ApiClient;
pub use net::error::ApiError;
pub use state::scope::Scope;
pub use state::session::Session;
pub use state::storage::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use state::view::{PageLoader, ViewState};
