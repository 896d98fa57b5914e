//! Client-side state shared across pages.
//!
//! ARCHITECTURE
//! ============
//! `storage` persists the auth token, `session` mirrors it as the current
//! user, `scope` hands both to pages, and `view` is the Loading / Error /
//! Ready model every page is built on.

pub mod scope;
pub mod session;
pub mod storage;
pub mod view;
