//! Cart page: view the cart and change its lines.
//!
//! Every mutation answers with the updated cart when the server includes it;
//! otherwise the page reloads so what is shown never drifts from the server.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use super::ActionError;
use crate::net::error::ApiError;
use crate::net::types::{Cart, CartUpdate};
use crate::state::scope::Scope;
use crate::state::view::{PageLoader, ViewState};

pub const CART_FALLBACK: &str = "Failed to load cart";
pub const UPDATE_QUANTITY_FALLBACK: &str = "Failed to update quantity";
pub const REMOVE_ITEM_FALLBACK: &str = "Failed to remove item";
pub const CLEAR_CART_FALLBACK: &str = "Failed to clear cart";
pub const COUPON_FALLBACK: &str = "Failed to apply coupon";

pub struct CartPage {
    scope: Scope,
    cart: PageLoader<Cart>,
}

impl CartPage {
    #[must_use]
    pub fn new(scope: Scope) -> Self {
        Self { scope, cart: PageLoader::new(CART_FALLBACK) }
    }

    pub async fn load(&self) -> bool {
        self.cart.load(self.scope.api().get_cart()).await
    }

    pub async fn retry(&self) -> bool {
        self.cart.retry(self.scope.api().get_cart()).await
    }

    #[must_use]
    pub fn state(&self) -> ViewState<Cart> {
        self.cart.state()
    }

    /// Set a line's quantity; 0 removes the line.
    ///
    /// # Errors
    ///
    /// The server message, or a fixed fallback.
    pub async fn set_quantity(&self, item_id: &str, quantity: u32) -> Result<(), ActionError> {
        if quantity == 0 {
            return self.remove(item_id).await;
        }
        let update = self.scope.api().update_cart_item(item_id, quantity).await;
        self.apply(update, UPDATE_QUANTITY_FALLBACK).await
    }

    /// # Errors
    ///
    /// The server message, or a fixed fallback.
    pub async fn remove(&self, item_id: &str) -> Result<(), ActionError> {
        let update = self.scope.api().remove_from_cart(item_id).await;
        self.apply(update, REMOVE_ITEM_FALLBACK).await
    }

    /// # Errors
    ///
    /// The server message, or a fixed fallback.
    pub async fn clear(&self) -> Result<(), ActionError> {
        self.scope
            .api()
            .clear_cart()
            .await
            .map_err(|e| ActionError::from_api(&e, CLEAR_CART_FALLBACK))?;
        self.load().await;
        Ok(())
    }

    /// Apply a coupon code. Returns the server's confirmation text, if any.
    ///
    /// # Errors
    ///
    /// A blank code is rejected locally; otherwise the server message or a fallback.
    pub async fn apply_coupon(&self, code: &str) -> Result<Option<String>, ActionError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ActionError::new("Enter a coupon code"));
        }
        let update = self.scope.api().apply_coupon(code).await;
        let message = update.as_ref().ok().and_then(|u| u.message.clone());
        self.apply(update, COUPON_FALLBACK).await?;
        Ok(message)
    }

    async fn apply(&self, update: Result<CartUpdate, ApiError>, fallback: &str) -> Result<(), ActionError> {
        let update = update.map_err(|e| ActionError::from_api(&e, fallback))?;
        if update.success == Some(false) {
            return Err(ActionError::new(update.message.unwrap_or_else(|| fallback.to_owned())));
        }
        match update.cart {
            Some(cart) => self.cart.set_ready(cart),
            None => {
                self.load().await;
            }
        }
        Ok(())
    }
}
