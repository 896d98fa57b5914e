use super::*;
use crate::net::error::ApiError;

fn api_error(message: &str) -> ApiError {
    ApiError::Api { status: 500, message: message.to_owned() }
}

// =============================================================================
// transitions
// =============================================================================

#[test]
fn new_loader_starts_loading() {
    let loader: PageLoader<u32> = PageLoader::new("Failed to load");
    assert_eq!(loader.state(), ViewState::Loading);
    assert!(loader.is_loading());
}

#[tokio::test]
async fn load_success_goes_ready() {
    let loader = PageLoader::new("Failed to load orders");
    assert!(loader.load(async { Ok::<_, ApiError>(vec![1, 2]) }).await);
    assert_eq!(loader.state(), ViewState::Ready(vec![1, 2]));
}

#[tokio::test]
async fn load_failure_keeps_thrown_message() {
    let loader: PageLoader<u32> = PageLoader::new("Failed to load orders");
    loader.load(async { Err(api_error("Out of stock")) }).await;
    assert_eq!(loader.state(), ViewState::Error("Out of stock".to_owned()));
}

#[tokio::test]
async fn blank_error_message_uses_page_fallback() {
    let loader: PageLoader<u32> = PageLoader::new("Failed to load orders");
    loader.load(async { Err(api_error("  ")) }).await;
    assert_eq!(loader.error().as_deref(), Some("Failed to load orders"));
}

#[tokio::test]
async fn retry_after_error_resolves_independently() {
    let loader = PageLoader::new("Failed to load");
    loader.load(async { Err::<u32, _>(api_error("boom")) }).await;
    assert!(loader.error().is_some());

    let ticket = loader.begin();
    assert!(loader.is_loading());
    assert!(loader.finish(ticket, Ok::<_, ApiError>(7)));
    assert_eq!(loader.state(), ViewState::Ready(7));

    loader.retry(async { Err::<u32, _>(api_error("again")) }).await;
    assert_eq!(loader.state(), ViewState::Error("again".to_owned()));
}

// =============================================================================
// staleness
// =============================================================================

#[test]
fn stale_ticket_is_ignored() {
    let loader = PageLoader::new("Failed to load");
    let first = loader.begin();
    let second = loader.begin();

    assert!(loader.finish(second, Ok::<_, ApiError>("new")));
    assert!(!loader.finish(first, Ok::<_, ApiError>("old")));
    assert_eq!(loader.state(), ViewState::Ready("new"));
}

#[test]
fn set_ready_supersedes_in_flight_load() {
    let loader = PageLoader::new("Failed to load");
    let ticket = loader.begin();
    loader.set_ready(3);
    assert!(!loader.finish(ticket, Err::<u32, _>(api_error("late"))));
    assert_eq!(loader.ready(), Some(3));
}

#[tokio::test]
async fn overlapping_retry_wins_over_slow_first_load() {
    let loader = PageLoader::new("Failed to load");
    let (tx, rx) = tokio::sync::oneshot::channel::<u32>();

    let slow = {
        let loader = loader.clone();
        async move { loader.load(async { Ok::<_, ApiError>(rx.await.unwrap_or(0)) }).await }
    };
    let fast = {
        let loader = loader.clone();
        async move {
            tokio::task::yield_now().await;
            let applied = loader.retry(async { Ok::<_, ApiError>(2) }).await;
            let _ = tx.send(1);
            applied
        }
    };

    let (slow_applied, fast_applied) = tokio::join!(slow, fast);
    assert!(!slow_applied);
    assert!(fast_applied);
    assert_eq!(loader.ready(), Some(2));
}

#[test]
fn view_state_accessors() {
    let ready: ViewState<u8> = ViewState::Ready(1);
    assert_eq!(ready.ready(), Some(&1));
    assert_eq!(ready.error(), None);
    let failed: ViewState<u8> = ViewState::Error("x".to_owned());
    assert_eq!(failed.error(), Some("x"));
    assert!(!failed.is_loading());
}
