//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    /// Regions in the loaded dataset.
    pub regions: usize,
    /// Entries in the region-link table.
    pub links: usize,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        regions: state.boundaries.len(),
        links: state.router.links().len(),
    })
}
