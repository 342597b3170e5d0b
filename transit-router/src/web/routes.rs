//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::domain::StationId;
use crate::planner::RouteError;

use super::dto::*;
use super::state::AppState;

const DEFAULT_SEARCH_LIMIT: usize = 10;
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/route", get(find_route))
        .route("/api/interchanges", get(interchanges))
        .route("/api/stations/search", get(search_stations))
        .route("/api/stations/:id", get(station))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Route between two stations.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResult>, AppError> {
    let origin = parse_station(&req.from, "from")?;
    let destination = parse_station(&req.to, "to")?;

    let route = state.router.find_route(&origin, &destination).await?;
    debug!(
        %origin,
        %destination,
        changes = route.changes,
        duration = %route.estimated_duration(),
        "route found"
    );
    Ok(Json(RouteResult::from_route(&route)))
}

/// Every station served by more than one line.
async fn interchanges(State(state): State<AppState>) -> Json<InterchangesResponse> {
    Json(InterchangesResponse {
        interchanges: state.router.router().interchanges(),
    })
}

/// Search stations by name or id.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);
    let stations = state
        .router
        .router()
        .search_stations(&req.q, limit)
        .into_iter()
        .map(StationInfo::from_station)
        .collect();

    Json(StationSearchResponse { stations })
}

/// A single station record.
async fn station(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StationInfo>, AppError> {
    state
        .router
        .router()
        .station(&id)
        .map(|s| Json(StationInfo::from_station(s)))
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown station: {id}"),
        })
}

fn parse_station(value: &str, param: &str) -> Result<StationId, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest {
            message: format!("missing '{param}' station"),
        });
    }
    StationId::parse(value).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::UnknownStation(_) | RouteError::NoRoute { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        debug!(%status, %message, "request rejected");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
