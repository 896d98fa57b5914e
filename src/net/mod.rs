//! REST access to the storefront API.

pub mod api;
pub mod api_auth;
pub mod api_cart;
pub mod api_categories;
pub mod api_contact;
pub mod api_newsletter;
pub mod api_orders;
pub mod api_products;
pub mod api_testimonials;
pub mod error;
pub mod query;
pub mod request;
pub mod transport;
pub mod types;

pub use api_orders::OrderQuery;
pub use api_products::ProductQuery;
pub use api_testimonials::TestimonialQuery;
