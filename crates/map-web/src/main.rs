//! Interactive map of Polish voivodeships.
//!
//! Serves a single page with a clickable region map. Clicking a region asks the
//! server for its tourist page and navigates there when one is configured.

mod config;
mod routes;
mod state;

use region_core::{Boundaries, ClickRouter, RegionLinks};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting map server");

    // Dataset is required; the server does not start without it
    let boundaries = Boundaries::load(&config.geojson_path)?;
    info!(
        path = %config.geojson_path.display(),
        regions = boundaries.len(),
        "Loaded region boundaries"
    );

    let links = RegionLinks::builtin();
    let unlinked = links.unlinked_keys(&boundaries);
    if !unlinked.is_empty() {
        warn!(keys = ?unlinked, "Link table entries match no region in the dataset");
    }

    let state = AppState::new(boundaries, ClickRouter::new(links))?;

    let app = routes::router()
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state);

    info!(addr = %config.addr, "Map server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
