//! Loading / Error / Ready view model shared by every page.
//!
//! DESIGN
//! ======
//! A `PageLoader` is a cloneable handle over one piece of page state. Each
//! load takes a ticket from a generation counter; a result whose ticket is no
//! longer current is dropped, so when a retry overlaps an older request the
//! last load started is the one that lands.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::fmt::Display;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// What a page shows for one fetched resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> ViewState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Identifies one load attempt. Only the most recent ticket may finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

struct LoaderInner<T> {
    state: ViewState<T>,
    generation: u64,
}

/// Owns a `ViewState` and drives it through fetches.
pub struct PageLoader<T> {
    inner: Arc<Mutex<LoaderInner<T>>>,
    fallback: &'static str,
}

impl<T> Clone for PageLoader<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner), fallback: self.fallback }
    }
}

impl<T> PageLoader<T> {
    /// New loader in `Loading`. `fallback` is shown when an error has no message.
    #[must_use]
    pub fn new(fallback: &'static str) -> Self {
        Self { inner: Arc::new(Mutex::new(LoaderInner { state: ViewState::Loading, generation: 0 })), fallback }
    }

    fn lock(&self) -> MutexGuard<'_, LoaderInner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Enter `Loading` and invalidate any load still in flight.
    pub fn begin(&self) -> LoadTicket {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state = ViewState::Loading;
        LoadTicket(inner.generation)
    }

    /// Apply a result. Returns `false` (and changes nothing) for a stale ticket.
    pub fn finish<E: Display>(&self, ticket: LoadTicket, result: Result<T, E>) -> bool {
        let mut inner = self.lock();
        if inner.generation != ticket.0 {
            tracing::debug!(ticket = ticket.0, current = inner.generation, "discarding stale load");
            return false;
        }
        inner.state = match result {
            Ok(value) => ViewState::Ready(value),
            Err(e) => ViewState::Error(message_or_fallback(&e, self.fallback)),
        };
        true
    }

    /// `begin`, await `fut`, `finish`.
    pub async fn load<F, E>(&self, fut: F) -> bool
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        let ticket = self.begin();
        let result = fut.await;
        self.finish(ticket, result)
    }

    /// Re-enter `Loading` and run the fetch again. The previous outcome has no
    /// bearing on this one.
    pub async fn retry<F, E>(&self, fut: F) -> bool
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.load(fut).await
    }

    /// Replace the state with `Ready(value)` outside a fetch, e.g. after a
    /// mutation returned fresh data. In-flight loads become stale.
    pub fn set_ready(&self, value: T) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state = ViewState::Ready(value);
    }

    /// Run `f` against the ready value, if there is one.
    pub fn with_ready<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.lock().state.ready().map(f)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lock().state.is_loading()
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.lock().state.error().map(ToOwned::to_owned)
    }
}

impl<T: Clone> PageLoader<T> {
    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ViewState<T> {
        self.lock().state.clone()
    }

    #[must_use]
    pub fn ready(&self) -> Option<T> {
        self.with_ready(Clone::clone)
    }
}

/// Display text of `e`, or `fallback` when that text is blank.
fn message_or_fallback(e: &impl Display, fallback: &str) -> String {
    let message = e.to_string();
    if message.trim().is_empty() { fallback.to_owned() } else { message }
}
