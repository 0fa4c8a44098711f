//! Route handlers for the map page.

pub mod health;
pub mod map;
pub mod regions;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // HTML page
        .route("/", get(map::map_page))
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/regions", get(regions::regions_api))
        .route("/api/regions.geojson", get(regions::geojson_api))
        .route("/api/click", post(map::click_api))
}
