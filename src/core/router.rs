use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::core::middleware::SecurityHeaders;
use crate::features::leads::{routes as leads_routes, LeadService};
use crate::features::showcase::{routes as showcase_routes, ShowcaseService};

/// Services shared by the API routes
#[derive(Clone)]
pub struct AppServices {
    pub lead_service: Arc<LeadService>,
    pub showcase_service: Arc<ShowcaseService>,
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// API routes with the body limit and security headers applied.
pub fn api_router(
    services: AppServices,
    security: SecurityHeaders,
    max_request_body_size: usize,
) -> Router {
    let routes = Router::new()
        .route("/health", get(health_check))
        .merge(leads_routes::routes(services.lead_service))
        .merge(showcase_routes::routes(services.showcase_service))
        .fallback(not_found);

    with_api_layers(routes, security, max_request_body_size)
}

/// Body limit plus one overriding header layer per security header.
///
/// Layers wrap the fallback too, so unknown paths get the headers.
pub fn with_api_layers(
    router: Router,
    security: SecurityHeaders,
    max_request_body_size: usize,
) -> Router {
    security.headers().into_iter().fold(
        router.layer(DefaultBodyLimit::max(max_request_body_size)),
        |router, (name, value)| router.layer(SetResponseHeaderLayer::overriding(name, value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use axum_test::TestServer;

    use crate::shared::test_helpers::{test_notify_config, MockEmailProvider};

    fn server(max_body: usize) -> TestServer {
        let services = AppServices {
            lead_service: Arc::new(
                LeadService::new(test_notify_config(), Arc::new(MockEmailProvider::new()))
                    .unwrap(),
            ),
            showcase_service: Arc::new(ShowcaseService::new()),
        };
        let security = SecurityHeaders::new("https://saykimcheese.test").unwrap();
        TestServer::new(api_router(services, security, max_body)).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = server(64 * 1024).get("/health").await;

        response.assert_status_ok();
        assert_eq!(response.header(header::X_FRAME_OPTIONS), "DENY");
    }

    #[tokio::test]
    async fn test_fallback() {
        let response = server(64 * 1024).post("/api/leads").await;

        response.assert_status_not_found();
        response.assert_text("Not found");
    }

    #[tokio::test]
    async fn test_security_headers_override_handler_values() {
        async fn framed() -> ([(header::HeaderName, &'static str); 1], &'static str) {
            ([(header::X_FRAME_OPTIONS, "SAMEORIGIN")], "framed")
        }

        let app = with_api_layers(
            Router::new().route("/framed", get(framed)),
            SecurityHeaders::new("https://saykimcheese.test").unwrap(),
            1024,
        );
        let server = TestServer::new(app).unwrap();

        let response = server.get("/framed").await;
        response.assert_status_ok();
        assert_eq!(
            response
                .headers()
                .get_all(header::X_FRAME_OPTIONS)
                .iter()
                .count(),
            1
        );
        assert_eq!(response.header(header::X_FRAME_OPTIONS), "DENY");
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let message = "m".repeat(4096);
        let response = server(1024)
            .post("/api/lead")
            .form(&[
                ("name", "Jane Doe"),
                ("email", "jane@example.com"),
                ("message", message.as_str()),
            ])
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(response.header(header::X_CONTENT_TYPE_OPTIONS), "nosniff");
    }
}
