//! API handlers

use axum::Json;
use serde::Serialize;

use crate::api::DEALS_ROUTE;
use crate::catalog::{self, Listing};

/// Serve the full catalog in store order.
pub async fn deals() -> Json<&'static [Listing]> {
    Json(catalog::all())
}

/// Default route: anything outside the catalog route lands here and
/// receives a pointer to the catalog instead of an error status.
pub async fn route_index() -> Json<RouteIndex> {
    Json(RouteIndex { route: DEALS_ROUTE })
}

#[derive(Debug, Serialize)]
pub struct RouteIndex {
    pub route: &'static str,
}
