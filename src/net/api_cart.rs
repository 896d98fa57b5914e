//! Cart endpoints. All of them act on the signed-in customer's cart, so the
//! server expects the bearer token.

#[cfg(test)]
#[path = "api_cart_test.rs"]
mod api_cart_test;

use serde_json::{Map, Value, json};

use super::api::ApiClient;
use super::error::ApiError;
use super::request::RequestDescriptor;
use super::types::{Ack, Cart, CartUpdate};

/// Quantity used when the caller does not specify one.
pub const DEFAULT_QUANTITY: u32 = 1;

pub(crate) fn cart_request() -> RequestDescriptor {
    RequestDescriptor::get("/cart")
}

/// `variant` is only sent when it is present and non-empty.
pub(crate) fn add_to_cart_request(product_id: &str, quantity: Option<u32>, variant: Option<&str>) -> RequestDescriptor {
    let mut body = Map::new();
    body.insert("productId".to_owned(), Value::String(product_id.to_owned()));
    body.insert("quantity".to_owned(), Value::from(quantity.unwrap_or(DEFAULT_QUANTITY)));
    if let Some(variant) = variant.filter(|v| !v.is_empty()) {
        body.insert("variant".to_owned(), Value::String(variant.to_owned()));
    }
    RequestDescriptor::post("/cart/add", &Value::Object(body))
}

pub(crate) fn update_cart_item_request(item_id: &str, quantity: u32) -> RequestDescriptor {
    RequestDescriptor::put(format!("/cart/update/{item_id}"), &json!({ "quantity": quantity }))
}

pub(crate) fn remove_from_cart_request(item_id: &str) -> RequestDescriptor {
    RequestDescriptor::delete(format!("/cart/remove/{item_id}"))
}

pub(crate) fn clear_cart_request() -> RequestDescriptor {
    RequestDescriptor::delete("/cart/clear")
}

pub(crate) fn apply_coupon_request(code: &str) -> RequestDescriptor {
    RequestDescriptor::post("/cart/coupon", &json!({ "code": code }))
}

impl ApiClient {
    /// `GET /cart`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn get_cart(&self) -> Result<Cart, ApiError> {
        self.request_json(cart_request()).await
    }

    /// `POST /cart/add`. `quantity` defaults to 1.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn add_to_cart(
        &self,
        product_id: &str,
        quantity: Option<u32>,
        variant: Option<&str>,
    ) -> Result<CartUpdate, ApiError> {
        self.request_json(add_to_cart_request(product_id, quantity, variant)).await
    }

    /// `PUT /cart/update/{itemId}`. A quantity of 0 removes the line server-side.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn update_cart_item(&self, item_id: &str, quantity: u32) -> Result<CartUpdate, ApiError> {
        self.request_json(update_cart_item_request(item_id, quantity)).await
    }

    /// `DELETE /cart/remove/{itemId}`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn remove_from_cart(&self, item_id: &str) -> Result<CartUpdate, ApiError> {
        self.request_json(remove_from_cart_request(item_id)).await
    }

    /// `DELETE /cart/clear`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn clear_cart(&self) -> Result<Ack, ApiError> {
        self.request_json_or_default(clear_cart_request()).await
    }

    /// `POST /cart/coupon`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn apply_coupon(&self, code: &str) -> Result<CartUpdate, ApiError> {
        self.request_json(apply_coupon_request(code)).await
    }
}
