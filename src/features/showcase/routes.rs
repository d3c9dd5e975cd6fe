use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::showcase::handlers;
use crate::features::showcase::services::ShowcaseService;

/// Create routes for the showcase feature
pub fn routes(service: Arc<ShowcaseService>) -> Router {
    Router::new()
        .route("/api/showcase", get(handlers::get_showcase))
        .with_state(service)
}
