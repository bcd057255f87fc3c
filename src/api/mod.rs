//! HTTP API server

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod handlers;

/// Exact path of the catalog route; the default route payload points here.
pub const DEALS_ROUTE: &str = "/api/deals";

/// Build the API router.
///
/// The route table has one exact-path entry plus an explicit default:
/// every unmatched path, and every non-GET method on the catalog route,
/// resolves to the route pointer payload with status 200. The contract
/// never produces any other status code.
pub fn create_router() -> Router {
    Router::new()
        .route(
            DEALS_ROUTE,
            get(handlers::deals).fallback(handlers::route_index),
        )
        .fallback(handlers::route_index)
        .layer(CorsLayer::new().allow_origin(Any))
        .layer(TraceLayer::new_for_http())
}
