//! Caching layer for route queries.
//!
//! Routes are pure functions of the (immutable) network, so answers can be
//! kept until evicted by capacity. The TTL only bounds memory held by rarely
//! repeated queries. "No route" answers are cached as well; queries naming
//! an unknown station bypass the cache so junk ids cannot fill it.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{Route, StationId};
use crate::planner::{RouteError, Router};

/// Cache key: (origin, destination).
type RouteKey = (StationId, StationId);

/// Cached query outcome.
type RouteEntry = Result<Arc<Route>, RouteError>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(3600),
            max_capacity: 10_000,
        }
    }
}

/// Router with cached route queries.
///
/// Everything other than route queries is passed straight through to the
/// wrapped [`Router`].
pub struct CachedRouter {
    router: Router,
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl CachedRouter {
    pub fn new(router: Router, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { router, routes }
    }

    /// Find a route, using the cache if available.
    pub async fn find_route(
        &self,
        origin: &StationId,
        destination: &StationId,
    ) -> Result<Arc<Route>, RouteError> {
        if !self.router.is_known(origin) || !self.router.is_known(destination) {
            return self.router.try_find_route(origin, destination).map(Arc::new);
        }

        let key = (origin.clone(), destination.clone());
        if let Some(cached) = self.routes.get(&key).await {
            debug!(%origin, %destination, "route cache hit");
            return cached;
        }

        let entry = self.router.try_find_route(origin, destination).map(Arc::new);
        self.routes.insert(key, entry.clone()).await;
        entry
    }

    /// Access the underlying router for queries that bypass the cache.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.routes.invalidate_all();
    }
}
