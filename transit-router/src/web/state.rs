//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedRouter;

/// Shared application state.
///
/// The router and its cache are built once at startup and shared by every
/// request.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<CachedRouter>,
}

impl AppState {
    pub fn new(router: CachedRouter) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}
