//! Order endpoints: placement, history, cancellation and tracking.

#[cfg(test)]
#[path = "api_orders_test.rs"]
mod api_orders_test;

use serde_json::json;

use super::api::ApiClient;
use super::error::ApiError;
use super::query::QueryParams;
use super::request::RequestDescriptor;
use super::types::{CreateOrderRequest, Order, OrderList, OrderTracking, OrderUpdate};

/// Filters for `GET /orders`. Absent fields are left off the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<String>,
}

impl OrderQuery {
    pub(crate) fn params(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("page", self.page)
            .push_opt("limit", self.limit)
            .push_opt("status", self.status.as_deref())
    }
}

pub(crate) fn create_order_request(order: &CreateOrderRequest) -> RequestDescriptor {
    RequestDescriptor::post("/orders", &json!(order))
}

pub(crate) fn orders_request(query: &OrderQuery) -> RequestDescriptor {
    RequestDescriptor::get(query.params().apply_to("/orders"))
}

pub(crate) fn order_request(id: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!("/orders/{id}"))
}

pub(crate) fn cancel_order_request(id: &str, reason: Option<&str>) -> RequestDescriptor {
    RequestDescriptor::post(format!("/orders/{id}/cancel"), &json!({ "reason": reason.unwrap_or_default() }))
}

pub(crate) fn track_order_request(id: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!("/orders/{id}/track"))
}

impl ApiClient {
    /// `POST /orders`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn create_order(&self, order: &CreateOrderRequest) -> Result<OrderUpdate, ApiError> {
        self.request_json(create_order_request(order)).await
    }

    /// `GET /orders` with optional paging and status filter.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn get_orders(&self, query: &OrderQuery) -> Result<OrderList, ApiError> {
        self.request_json_or_default(orders_request(query)).await
    }

    /// `GET /orders/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn get_order_by_id(&self, id: &str) -> Result<Order, ApiError> {
        self.request_json(order_request(id)).await
    }

    /// `POST /orders/{id}/cancel`. The reason is sent as `""` when absent.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn cancel_order(&self, id: &str, reason: Option<&str>) -> Result<OrderUpdate, ApiError> {
        self.request_json(cancel_order_request(id, reason)).await
    }

    /// `GET /orders/{id}/track`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn track_order(&self, id: &str) -> Result<OrderTracking, ApiError> {
        self.request_json(track_order_request(id)).await
    }
}
