//! Headless route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its `PageLoader`s and the actions a user can trigger on
//! it. Pages are the recovery boundary: every `ApiError` that reaches them
//! becomes either view state or an `ActionError` carrying display text.

pub mod cart;
pub mod checkout;
pub mod home;
pub mod login;
pub mod orders;
pub mod product_detail;
pub mod products;
pub mod register;


use crate::net::error::ApiError;
use crate::state::scope::Scope;

/// A failed page action, as the text the user should see.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ActionError(pub String);

impl ActionError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The error's own message, or `fallback` when it has none.
    pub(crate) fn from_api(e: &ApiError, fallback: &str) -> Self {
        Self(e.message_or(fallback))
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Result of an add-to-cart action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddToCartOutcome {
    Added,
    /// Nobody is logged in; nothing was sent.
    NeedsLogin,
}

pub const ADD_TO_CART_FALLBACK: &str = "Failed to add to cart";

/// Add-to-cart as every product surface does it: anonymous visitors are sent
/// to log in instead of hitting the API.
pub(crate) async fn add_to_cart_if_logged_in(
    scope: &Scope,
    product_id: &str,
    quantity: u32,
    variant: Option<&str>,
) -> Result<AddToCartOutcome, ActionError> {
    if !scope.session().is_logged_in() {
        return Ok(AddToCartOutcome::NeedsLogin);
    }
    scope
        .api()
        .add_to_cart(product_id, Some(quantity.max(1)), variant)
        .await
        .map(|_| AddToCartOutcome::Added)
        .map_err(|e| ActionError::from_api(&e, ADD_TO_CART_FALLBACK))
}
