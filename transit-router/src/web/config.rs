//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;

pub const STATIONS_PATH_VAR: &str = "TRANSIT_STATIONS_PATH";
pub const NETWORK_PATH_VAR: &str = "TRANSIT_NETWORK_PATH";
pub const BIND_ADDR_VAR: &str = "TRANSIT_BIND_ADDR";
pub const CACHE_TTL_VAR: &str = "TRANSIT_CACHE_TTL_SECS";
pub const CACHE_CAPACITY_VAR: &str = "TRANSIT_CACHE_CAPACITY";

/// Errors reading the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable is set but cannot be parsed
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Everything the binary needs to start serving.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub stations_path: PathBuf,
    pub network_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub cache: CacheConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            stations_path: PathBuf::from("data/stations.json"),
            network_path: PathBuf::from("data/network.json"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cache: CacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`. Unset variables keep their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(STATIONS_PATH_VAR) {
            config.stations_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(NETWORK_PATH_VAR) {
            config.network_path = PathBuf::from(path);
        }
        if let Some(addr) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = parse(BIND_ADDR_VAR, addr)?;
        }
        if let Some(secs) = lookup(CACHE_TTL_VAR) {
            config.cache.ttl = Duration::from_secs(parse(CACHE_TTL_VAR, secs)?);
        }
        if let Some(capacity) = lookup(CACHE_CAPACITY_VAR) {
            config.cache.max_capacity = parse(CACHE_CAPACITY_VAR, capacity)?;
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}
