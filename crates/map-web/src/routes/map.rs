//! Map page and click routing.

use askama::Template;
use axum::extract::State;
use axum::Json;
use region_core::{ClickEvent, REGION_FIELD};
use serde::Serialize;
use tracing::info;

use crate::state::AppState;

/// Map page template.
#[derive(Template)]
#[template(path = "map.html")]
pub struct MapTemplate {
    /// Feature property the map widget reads region names from.
    pub region_field: &'static str,
}

/// Where the page should navigate after a click.
#[derive(Debug, Serialize)]
pub struct ClickResponse {
    /// Redirect target, or `null` to stay on the page.
    pub href: Option<String>,
}

/// Render the map page.
pub async fn map_page() -> MapTemplate {
    MapTemplate {
        region_field: REGION_FIELD,
    }
}

/// Resolve a map click to a redirect target.
///
/// A `null` body is the widget's state before any click and never redirects.
pub async fn click_api(
    State(state): State<AppState>,
    Json(event): Json<Option<ClickEvent>>,
) -> Json<ClickResponse> {
    let navigation = state.router.handle(event.as_ref());

    let region = event.as_ref().and_then(ClickEvent::location);
    match navigation.target() {
        Some(url) => info!(region = ?region, url = %url, "Redirecting to region page"),
        None => info!(region = ?region, "No page for region"),
    }

    Json(ClickResponse {
        href: navigation.into_target(),
    })
}
