use super::*;
use crate::test_support::{StubTransport, client, product_json};
use serde_json::json;
use std::sync::Arc;

fn page(stub: &Arc<StubTransport>) -> ProductsPage {
    let (api, _) = client(stub);
    ProductsPage::new(Scope::with_session(api))
}

fn categories() -> serde_json::Value {
    json!({ "categories": [{ "id": 1, "name": "Nuts", "slug": "nuts" }] })
}

#[test]
fn all_category_clears_filter() {
    let stub = StubTransport::new();
    let mut page = page(&stub);
    page.set_category("nuts");
    assert_eq!(page.filters().category.as_deref(), Some("nuts"));
    page.set_category(ALL_CATEGORIES);
    assert_eq!(page.filters().category, None);
}

#[tokio::test]
async fn load_fetches_products_and_categories() {
    let stub = StubTransport::new();
    // Both requests start before either reply is consumed, in join order.
    stub.push_json(200, json!({ "products": [product_json("p1", 10.0)], "total": 1 }));
    stub.push_json(200, categories());
    let mut page = page(&stub);
    page.set_category("nuts");
    page.set_sort(Some("price_asc"));

    page.load().await;

    let catalog = page.state().ready().cloned().unwrap();
    assert_eq!(catalog.products.len(), 1);
    assert_eq!(catalog.categories.len(), 1);
    assert_eq!(catalog.total, Some(1));
    let urls: Vec<String> = stub.requests().into_iter().map(|r| r.url).collect();
    assert!(urls[0].ends_with("/products?sort=price_asc&category=nuts"));
    assert!(urls[1].ends_with("/categories"));
}

#[tokio::test]
async fn search_term_switches_endpoint() {
    let stub = StubTransport::new();
    stub.push_json(200, json!({ "products": [], "query": "kaju katli" }));
    stub.push_json(200, categories());
    let mut page = page(&stub);
    page.set_search("  kaju katli ");

    page.load().await;

    assert!(stub.requests()[0].url.ends_with("/products/search?q=kaju+katli"));
    assert!(page.state().ready().unwrap().products.is_empty());
}

#[tokio::test]
async fn null_lists_load_as_empty_catalog() {
    let stub = StubTransport::new();
    stub.push_json(200, json!({ "products": null }));
    stub.push_raw(200, "");
    let page = page(&stub);

    page.load().await;

    let catalog = page.state().ready().cloned().unwrap();
    assert!(catalog.products.is_empty());
    assert!(catalog.categories.is_empty());
}

#[tokio::test]
async fn either_request_failing_fails_the_page() {
    let stub = StubTransport::new();
    stub.push_json(200, json!({ "products": [] }));
    stub.push_json(500, json!({ "message": "Categories unavailable" }));
    let page = page(&stub);

    page.load().await;
    assert_eq!(page.state(), ViewState::Error("Categories unavailable".to_owned()));
}
