//! Checkout: shipping form plus order placement over the current cart.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use super::ActionError;
use crate::net::types::{Address, Cart, CreateOrderRequest, Order, PaymentDetails, PaymentMethod};
use crate::state::scope::Scope;
use crate::state::view::{PageLoader, ViewState};

pub const CHECKOUT_CART_FALLBACK: &str = "Failed to load cart";
pub const PLACE_ORDER_FALLBACK: &str = "Failed to place order";

const DEFAULT_COUNTRY: &str = "India";

/// Where the checkout flow should go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Stay on the checkout form.
    Continue,
    /// The cart is empty; send the user back to it.
    RedirectToCart,
    /// The order was accepted. Carries the order when the server returned it.
    OrderPlaced(Option<Order>),
}

/// Shipping and payment fields as the user fills them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub payment_method: PaymentMethod,
    pub payment_details: Option<PaymentDetails>,
    pub notes: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

impl CheckoutForm {
    #[must_use]
    pub fn to_order_request(&self) -> CreateOrderRequest {
        let shipping_address = Address {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: non_empty(&self.email),
            phone: non_empty(&self.phone),
            address1: self.address.trim().to_owned(),
            address2: None,
            city: self.city.trim().to_owned(),
            state: self.state.trim().to_owned(),
            zip_code: self.pincode.trim().to_owned(),
            country: DEFAULT_COUNTRY.to_owned(),
        };
        CreateOrderRequest {
            shipping_address,
            billing_address: None,
            payment_method: self.payment_method,
            payment_details: self.payment_details.clone(),
            notes: self.notes.as_deref().and_then(non_empty),
        }
    }
}

pub struct CheckoutPage {
    scope: Scope,
    cart: PageLoader<Cart>,
}

impl CheckoutPage {
    #[must_use]
    pub fn new(scope: Scope) -> Self {
        Self { scope, cart: PageLoader::new(CHECKOUT_CART_FALLBACK) }
    }

    /// Load the cart under review. An empty cart means there is nothing to
    /// check out.
    pub async fn load(&self) -> CheckoutOutcome {
        self.cart.load(self.scope.api().get_cart()).await;
        self.next_step()
    }

    pub async fn retry(&self) -> CheckoutOutcome {
        self.cart.retry(self.scope.api().get_cart()).await;
        self.next_step()
    }

    fn next_step(&self) -> CheckoutOutcome {
        match self.cart.with_ready(Cart::is_empty) {
            Some(true) => CheckoutOutcome::RedirectToCart,
            _ => CheckoutOutcome::Continue,
        }
    }

    #[must_use]
    pub fn state(&self) -> ViewState<Cart> {
        self.cart.state()
    }

    /// Submit the order built from `form`.
    ///
    /// # Errors
    ///
    /// The server's message when it declines or fails the order, else
    /// `"Failed to place order"`.
    pub async fn place_order(&self, form: &CheckoutForm) -> Result<CheckoutOutcome, ActionError> {
        if self.next_step() == CheckoutOutcome::RedirectToCart {
            return Ok(CheckoutOutcome::RedirectToCart);
        }
        let response = self
            .scope
            .api()
            .create_order(&form.to_order_request())
            .await
            .map_err(|e| ActionError::from_api(&e, PLACE_ORDER_FALLBACK))?;

        if response.success == Some(true) {
            tracing::debug!(order = ?response.order.as_ref().map(Order::reference), "order placed");
            Ok(CheckoutOutcome::OrderPlaced(response.order))
        } else {
            let message = response
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| PLACE_ORDER_FALLBACK.to_owned());
            Err(ActionError::new(message))
        }
    }
}
