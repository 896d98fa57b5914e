//! Single product page.

#[cfg(test)]
#[path = "product_detail_test.rs"]
mod product_detail_test;

use super::{ActionError, AddToCartOutcome, add_to_cart_if_logged_in};
use crate::net::types::Product;
use crate::state::scope::Scope;
use crate::state::view::{PageLoader, ViewState};

pub const PRODUCT_FALLBACK: &str = "Failed to load product";

pub struct ProductDetailPage {
    scope: Scope,
    product_id: String,
    product: PageLoader<Product>,
}

impl ProductDetailPage {
    #[must_use]
    pub fn new(scope: Scope, product_id: impl Into<String>) -> Self {
        Self { scope, product_id: product_id.into(), product: PageLoader::new(PRODUCT_FALLBACK) }
    }

    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub async fn load(&self) -> bool {
        self.product.load(self.scope.api().get_product_by_id(&self.product_id)).await
    }

    pub async fn retry(&self) -> bool {
        self.product.retry(self.scope.api().get_product_by_id(&self.product_id)).await
    }

    #[must_use]
    pub fn state(&self) -> ViewState<Product> {
        self.product.state()
    }

    /// Add this product to the cart. Anonymous visitors get `NeedsLogin`.
    ///
    /// # Errors
    ///
    /// The server message, or `"Failed to add to cart"`.
    pub async fn add_to_cart(&self, quantity: u32, variant: Option<&str>) -> Result<AddToCartOutcome, ActionError> {
        add_to_cart_if_logged_in(&self.scope, &self.product_id, quantity, variant).await
    }
}
