//! Order history page.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use crate::net::api_orders::OrderQuery;
use crate::net::error::ApiError;
use crate::net::types::Order;
use crate::state::scope::Scope;
use crate::state::view::{PageLoader, ViewState};

pub const ORDERS_FALLBACK: &str = "Failed to load orders";

/// Visual classification of an order status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Other,
}

impl StatusTone {
    /// Case-insensitive; unknown statuses are `Other`.
    #[must_use]
    pub fn classify(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "shipped" => Self::Shipped,
            "delivered" => Self::Delivered,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Other,
        }
    }
}

impl Order {
    #[must_use]
    pub fn status_tone(&self) -> StatusTone {
        StatusTone::classify(&self.status)
    }
}

pub struct OrdersPage {
    scope: Scope,
    query: OrderQuery,
    orders: PageLoader<Vec<Order>>,
}

impl OrdersPage {
    #[must_use]
    pub fn new(scope: Scope) -> Self {
        Self::with_query(scope, OrderQuery::default())
    }

    #[must_use]
    pub fn with_query(scope: Scope, query: OrderQuery) -> Self {
        Self { scope, query, orders: PageLoader::new(ORDERS_FALLBACK) }
    }

    async fn fetch(&self) -> Result<Vec<Order>, ApiError> {
        Ok(self.scope.api().get_orders(&self.query).await?.orders)
    }

    pub async fn load(&self) -> bool {
        self.orders.load(self.fetch()).await
    }

    pub async fn retry(&self) -> bool {
        self.orders.retry(self.fetch()).await
    }

    #[must_use]
    pub fn state(&self) -> ViewState<Vec<Order>> {
        self.orders.state()
    }
}
