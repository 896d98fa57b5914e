//! Product catalog endpoints.

#[cfg(test)]
#[path = "api_products_test.rs"]
mod api_products_test;

use super::api::ApiClient;
use super::error::ApiError;
use super::query::QueryParams;
use super::request::RequestDescriptor;
use super::types::{Product, ProductList};

pub const DEFAULT_BEST_SELLERS_LIMIT: u32 = 6;

/// Optional list filters, emitted in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub category: Option<String>,
}

impl ProductQuery {
    fn params(&self, base: QueryParams) -> QueryParams {
        base.push_opt("page", self.page)
            .push_opt("limit", self.limit)
            .push_opt("sort", self.sort.as_deref())
            .push_opt("category", self.category.as_deref())
    }
}

pub(crate) fn all_products_request(query: &ProductQuery) -> RequestDescriptor {
    RequestDescriptor::get(query.params(QueryParams::new()).apply_to("/products"))
}

pub(crate) fn product_request(id: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!("/products/{id}"))
}

pub(crate) fn products_by_category_request(slug: &str, query: &ProductQuery) -> RequestDescriptor {
    let path = format!("/products/category/{slug}");
    RequestDescriptor::get(query.params(QueryParams::new()).apply_to(&path))
}

pub(crate) fn best_sellers_request(limit: Option<u32>) -> RequestDescriptor {
    let params = QueryParams::new().push("limit", limit.unwrap_or(DEFAULT_BEST_SELLERS_LIMIT));
    RequestDescriptor::get(params.apply_to("/products/best-sellers"))
}

pub(crate) fn search_products_request(q: &str, query: &ProductQuery) -> RequestDescriptor {
    let params = query.params(QueryParams::new().push("q", q));
    RequestDescriptor::get(params.apply_to("/products/search"))
}

impl ApiClient {
    /// `GET /products`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn get_all_products(&self, query: &ProductQuery) -> Result<ProductList, ApiError> {
        self.request_json_or_default(all_products_request(query)).await
    }

    /// `GET /products/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn get_product_by_id(&self, id: &str) -> Result<Product, ApiError> {
        self.request_json(product_request(id)).await
    }

    /// `GET /products/category/{slug}`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn get_products_by_category(&self, slug: &str, query: &ProductQuery) -> Result<ProductList, ApiError> {
        self.request_json_or_default(products_by_category_request(slug, query)).await
    }

    /// `GET /products/best-sellers?limit=N`, six when `limit` is `None`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn get_best_sellers(&self, limit: Option<u32>) -> Result<ProductList, ApiError> {
        self.request_json_or_default(best_sellers_request(limit)).await
    }

    /// `GET /products/search?q=...`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn search_products(&self, q: &str, query: &ProductQuery) -> Result<ProductList, ApiError> {
        self.request_json_or_default(search_products_request(q, query)).await
    }
}
