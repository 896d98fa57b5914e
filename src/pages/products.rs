//! Catalog listing with category filter, sort, and search.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::api_products::ProductQuery;
use crate::net::error::ApiError;
use crate::net::types::{Category, Product};
use crate::state::scope::Scope;
use crate::state::view::{PageLoader, ViewState};

pub const PRODUCTS_FALLBACK: &str = "Failed to load products";

/// Category value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Products plus the category list shown in the filter bar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub total: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilters {
    pub category: Option<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ProductFilters {
    fn query(&self) -> ProductQuery {
        ProductQuery {
            page: self.page,
            limit: self.limit,
            sort: self.sort.clone(),
            category: self.category.clone(),
        }
    }
}

pub struct ProductsPage {
    scope: Scope,
    filters: ProductFilters,
    catalog: PageLoader<Catalog>,
}

impl ProductsPage {
    #[must_use]
    pub fn new(scope: Scope) -> Self {
        Self { scope, filters: ProductFilters::default(), catalog: PageLoader::new(PRODUCTS_FALLBACK) }
    }

    #[must_use]
    pub fn filters(&self) -> &ProductFilters {
        &self.filters
    }

    /// Select a category by slug; `"all"` or blank clears the filter.
    pub fn set_category(&mut self, slug: &str) {
        let slug = slug.trim();
        self.filters.category = (!slug.is_empty() && slug != ALL_CATEGORIES).then(|| slug.to_owned());
        self.filters.page = None;
    }

    pub fn set_sort(&mut self, sort: Option<&str>) {
        self.filters.sort = sort.map(ToOwned::to_owned);
    }

    /// A non-blank term switches the listing to search results.
    pub fn set_search(&mut self, term: &str) {
        let term = term.trim();
        self.filters.search = (!term.is_empty()).then(|| term.to_owned());
        self.filters.page = None;
    }

    pub fn set_page(&mut self, page: u32) {
        self.filters.page = Some(page);
    }

    async fn fetch(&self) -> Result<Catalog, ApiError> {
        let api = self.scope.api();
        let query = self.filters.query();
        let products = async {
            match &self.filters.search {
                Some(term) => api.search_products(term, &query).await,
                None => api.get_all_products(&query).await,
            }
        };
        let (products, categories) = tokio::try_join!(products, api.get_all_categories())?;
        Ok(Catalog { total: products.total, products: products.products, categories: categories.categories })
    }

    /// Fetch products and categories together; either failing fails the page.
    pub async fn load(&self) -> bool {
        self.catalog.load(self.fetch()).await
    }

    pub async fn retry(&self) -> bool {
        self.catalog.retry(self.fetch()).await
    }

    #[must_use]
    pub fn state(&self) -> ViewState<Catalog> {
        self.catalog.state()
    }
}
