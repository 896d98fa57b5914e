//! Contact form and FAQ endpoints.

#[cfg(test)]
#[path = "api_contact_test.rs"]
mod api_contact_test;

use serde_json::json;

use super::api::ApiClient;
use super::error::ApiError;
use super::query::QueryParams;
use super::request::RequestDescriptor;
use super::types::{ContactForm, ContactReceipt, FaqList};

pub(crate) fn contact_request(form: &ContactForm) -> RequestDescriptor {
    RequestDescriptor::post("/contact", &json!(form))
}

pub(crate) fn faqs_request(category: Option<&str>) -> RequestDescriptor {
    RequestDescriptor::get(QueryParams::new().push_opt("category", category).apply_to("/contact/faq"))
}

impl ApiClient {
    /// `POST /contact`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn submit_contact_form(&self, form: &ContactForm) -> Result<ContactReceipt, ApiError> {
        self.request_json(contact_request(form)).await
    }

    /// `GET /contact/faq`, optionally narrowed to one category.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request layer.
    pub async fn get_faqs(&self, category: Option<&str>) -> Result<FaqList, ApiError> {
        self.request_json_or_default(faqs_request(category)).await
    }
}
