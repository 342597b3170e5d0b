//! Web layer for the route planner.
//!
//! Thin JSON endpoints over the router for map and list UIs.

mod config;
mod dto;
mod routes;
mod state;

pub use config::{
    BIND_ADDR_VAR, CACHE_CAPACITY_VAR, CACHE_TTL_VAR, ConfigError, NETWORK_PATH_VAR,
    STATIONS_PATH_VAR, ServerConfig,
};
pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
