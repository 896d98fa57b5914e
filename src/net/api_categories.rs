//! Category endpoints.

#[cfg(test)]
#[path = "api_categories_test.rs"]
mod api_categories_test;

use super::api::ApiClient;
use super::error::ApiError;
use super::query::QueryParams;
use super::request::RequestDescriptor;
use super::types::{Category, CategoryList};

pub const DEFAULT_FEATURED_CATEGORIES_LIMIT: u32 = 6;

pub(crate) fn all_categories_request() -> RequestDescriptor {
    RequestDescriptor::get("/categories")
}

pub(crate) fn category_request(slug: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!("/categories/{slug}"))
}

pub(crate) fn featured_categories_request(limit: Option<u32>) -> RequestDescriptor {
    let params = QueryParams::new().push("limit", limit.unwrap_or(DEFAULT_FEATURED_CATEGORIES_LIMIT));
    RequestDescriptor::get(params.apply_to("/categories/featured"))
}

impl ApiClient {
    /// `GET /categories`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn get_all_categories(&self) -> Result<CategoryList, ApiError> {
        self.request_json_or_default(all_categories_request()).await
    }

    /// `GET /categories/{slug}`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn get_category_by_slug(&self, slug: &str) -> Result<Category, ApiError> {
        self.request_json(category_request(slug)).await
    }

    /// `GET /categories/featured?limit=N`, six when `limit` is `None`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn get_featured_categories(&self, limit: Option<u32>) -> Result<CategoryList, ApiError> {
        self.request_json_or_default(featured_categories_request(limit)).await
    }
}
