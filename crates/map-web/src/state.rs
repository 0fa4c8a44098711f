//! Application state shared across handlers.

use std::sync::Arc;

use axum::body::Bytes;
use region_core::{Boundaries, ClickRouter};

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    /// Region feature collection loaded at startup.
    pub boundaries: Arc<Boundaries>,
    /// The feature collection serialized once for `/api/regions.geojson`.
    pub geojson: Bytes,
    /// Click router over the region-link table.
    pub router: Arc<ClickRouter>,
}

impl AppState {
    /// Create new application state.
    pub fn new(boundaries: Boundaries, router: ClickRouter) -> Result<Self, serde_json::Error> {
        let geojson = Bytes::from(serde_json::to_vec(boundaries.collection())?);

        Ok(Self {
            boundaries: Arc::new(boundaries),
            geojson,
            router: Arc::new(router),
        })
    }
}
