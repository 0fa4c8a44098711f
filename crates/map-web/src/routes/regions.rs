//! Region dataset routes.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use region_core::Region;

use crate::state::AppState;

/// Region identifiers in dataset order.
pub async fn regions_api(State(state): State<AppState>) -> Json<Vec<Region>> {
    Json(state.boundaries.regions().to_vec())
}

/// The boundary feature collection, as loaded.
pub async fn geojson_api(State(state): State<AppState>) -> impl IntoResponse {
    let body: Bytes = state.geojson.clone();
    ([(header::CONTENT_TYPE, "application/geo+json")], body)
}
