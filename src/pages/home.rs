//! Home page sections.
//!
//! Best sellers, the category carousel and featured testimonials load
//! independently: one section failing leaves the others untouched.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use super::{ActionError, AddToCartOutcome, add_to_cart_if_logged_in};
use crate::net::api_testimonials::TestimonialQuery;
use crate::net::error::ApiError;
use crate::net::types::{Category, Product, Testimonial};
use crate::state::scope::Scope;
use crate::state::view::{PageLoader, ViewState};

pub const BEST_SELLERS_FALLBACK: &str = "Failed to load best sellers";
pub const CATEGORIES_FALLBACK: &str = "Failed to load categories";
pub const TESTIMONIALS_FALLBACK: &str = "Failed to load testimonials";
pub const SUBSCRIBE_FALLBACK: &str = "Failed to subscribe. Please try again.";
pub const SUBSCRIBE_SUCCESS: &str = "Thank you for subscribing!";

pub struct HomePage {
    scope: Scope,
    best_sellers: PageLoader<Vec<Product>>,
    categories: PageLoader<Vec<Category>>,
    testimonials: PageLoader<Vec<Testimonial>>,
}

impl HomePage {
    #[must_use]
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            best_sellers: PageLoader::new(BEST_SELLERS_FALLBACK),
            categories: PageLoader::new(CATEGORIES_FALLBACK),
            testimonials: PageLoader::new(TESTIMONIALS_FALLBACK),
        }
    }

    async fn fetch_best_sellers(&self) -> Result<Vec<Product>, ApiError> {
        Ok(self.scope.api().get_best_sellers(None).await?.products)
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(self.scope.api().get_all_categories().await?.categories)
    }

    async fn fetch_testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        Ok(self.scope.api().get_testimonials(TestimonialQuery::featured(None)).await?.testimonials)
    }

    /// Load every section concurrently.
    pub async fn load(&self) {
        tokio::join!(self.load_best_sellers(), self.load_categories(), self.load_testimonials());
    }

    pub async fn load_best_sellers(&self) -> bool {
        self.best_sellers.load(self.fetch_best_sellers()).await
    }

    pub async fn load_categories(&self) -> bool {
        self.categories.load(self.fetch_categories()).await
    }

    pub async fn load_testimonials(&self) -> bool {
        self.testimonials.load(self.fetch_testimonials()).await
    }

    #[must_use]
    pub fn best_sellers(&self) -> ViewState<Vec<Product>> {
        self.best_sellers.state()
    }

    #[must_use]
    pub fn categories(&self) -> ViewState<Vec<Category>> {
        self.categories.state()
    }

    #[must_use]
    pub fn testimonials(&self) -> ViewState<Vec<Testimonial>> {
        self.testimonials.state()
    }

    /// Quick-add one unit of a best seller.
    ///
    /// # Errors
    ///
    /// The server message, or `"Failed to add to cart"`.
    pub async fn add_to_cart(&self, product_id: &str) -> Result<AddToCartOutcome, ActionError> {
        add_to_cart_if_logged_in(&self.scope, product_id, 1, None).await
    }

    /// Newsletter form. A blank email does nothing and returns `Ok(None)`;
    /// otherwise the confirmation text to show.
    ///
    /// # Errors
    ///
    /// The server message, or the subscribe fallback.
    pub async fn subscribe(&self, email: &str) -> Result<Option<String>, ActionError> {
        let email = email.trim();
        if email.is_empty() {
            return Ok(None);
        }
        let ack = self
            .scope
            .api()
            .subscribe_newsletter(email)
            .await
            .map_err(|e| ActionError::from_api(&e, SUBSCRIBE_FALLBACK))?;
        let message = ack.message.filter(|m| !m.trim().is_empty());
        Ok(Some(message.unwrap_or_else(|| SUBSCRIBE_SUCCESS.to_owned())))
    }
}
