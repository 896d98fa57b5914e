//! Customer testimonial endpoints.

#[cfg(test)]
#[path = "api_testimonials_test.rs"]
mod api_testimonials_test;

use serde_json::json;

use super::api::ApiClient;
use super::error::ApiError;
use super::query::QueryParams;
use super::request::RequestDescriptor;
use super::types::{NewTestimonial, TestimonialList, TestimonialSubmission};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestimonialQuery {
    pub limit: Option<u32>,
    pub featured: Option<bool>,
}

impl TestimonialQuery {
    /// Featured testimonials only, as shown on the home page.
    #[must_use]
    pub fn featured(limit: Option<u32>) -> Self {
        Self { limit, featured: Some(true) }
    }

    pub(crate) fn params(self) -> QueryParams {
        QueryParams::new()
            .push_opt("limit", self.limit)
            .push_opt("featured", self.featured)
    }
}

pub(crate) fn testimonials_request(query: TestimonialQuery) -> RequestDescriptor {
    RequestDescriptor::get(query.params().apply_to("/testimonials"))
}

pub(crate) fn submit_testimonial_request(testimonial: &NewTestimonial) -> RequestDescriptor {
    RequestDescriptor::post("/testimonials", &json!(testimonial))
}

impl ApiClient {
    /// `GET /testimonials`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn get_testimonials(&self, query: TestimonialQuery) -> Result<TestimonialList, ApiError> {
        self.request_json_or_default(testimonials_request(query)).await
    }

    /// `POST /testimonials`. Requires a signed-in customer.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn submit_testimonial(&self, testimonial: &NewTestimonial) -> Result<TestimonialSubmission, ApiError> {
        self.request_json(submit_testimonial_request(testimonial)).await
    }
}
