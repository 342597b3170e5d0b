use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use transit_router::cache::CachedRouter;
use transit_router::data;
use transit_router::planner::CostConfig;
use transit_router::web::{AppState, ServerConfig, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Fail fast: malformed reference data stops startup
    let router = data::load_router(
        &config.stations_path,
        &config.network_path,
        CostConfig::default(),
    )?;
    info!(
        stations = router.stations().len(),
        edges = router.graph().edge_count(),
        interchanges = router.interchanges().len(),
        "route planner ready"
    );

    let state = AppState::new(CachedRouter::new(router, &config.cache));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "listening");
    info!("endpoints: GET /health, /api/route?from=&to=, /api/interchanges, /api/stations/search?q=, /api/stations/:id");

    axum::serve(listener, app).await?;
    Ok(())
}
