use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::leads::handlers;
use crate::features::leads::services::LeadService;

/// Create routes for the leads feature
///
/// Note: This feature is public (no authentication required) as it backs the
/// contact form on the marketing site.
pub fn routes(service: Arc<LeadService>) -> Router {
    Router::new()
        .route("/api/lead", post(handlers::submit_lead))
        .with_state(service)
}
