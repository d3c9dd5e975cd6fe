use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::features::showcase::dtos::ShowcaseResponseDto;
use crate::features::showcase::services::ShowcaseService;
use crate::shared::types::ApiResponse;

/// Get the ingredient showcase
#[utoipa::path(
    get,
    path = "/api/showcase",
    responses(
        (status = 200, description = "Showcase catalog and current slide", body = ApiResponse<ShowcaseResponseDto>)
    ),
    tag = "showcase"
)]
pub async fn get_showcase(
    State(service): State<Arc<ShowcaseService>>,
) -> Json<ApiResponse<ShowcaseResponseDto>> {
    Json(ApiResponse::success(Some(service.snapshot(Utc::now())), None))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;

    use crate::features::showcase::dtos::ShowcaseResponseDto;
    use crate::features::showcase::{routes, ShowcaseService};
    use crate::shared::types::ApiResponse;

    #[tokio::test]
    async fn test_get_showcase() {
        let app = routes::routes(Arc::new(ShowcaseService::new()));
        let server = TestServer::new(app).expect("Failed to create test server");

        let response = server.get("/api/showcase").await;
        response.assert_status_ok();

        let body: ApiResponse<ShowcaseResponseDto> = response.json();
        assert!(body.success);

        let data = body.data.expect("showcase data");
        assert_eq!(data.interval_secs, 4);
        assert_eq!(data.images.len(), 4);
        assert!(data.current_index < data.images.len());
        assert_eq!(data.images[0].alt, "Artisan Cheeses");
    }
}
