use utoipa::{Modify, OpenApi};

use crate::features::leads::{dtos as leads_dtos, handlers as leads_handlers};
use crate::features::showcase::{
    dtos as showcase_dtos, handlers as showcase_handlers, models as showcase_models,
};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Leads (public)
        leads_handlers::submit_lead,
        // Showcase (public)
        showcase_handlers::get_showcase,
    ),
    components(
        schemas(
            // Leads
            leads_dtos::LeadFormDto,
            // Showcase
            showcase_models::ShowcaseImage,
            showcase_dtos::ShowcaseResponseDto,
            ApiResponse<showcase_dtos::ShowcaseResponseDto>,
        )
    ),
    tags(
        (name = "leads", description = "Event booking lead intake (public)"),
        (name = "showcase", description = "Rotating ingredient showcase (public)"),
    ),
    info(
        title = "Say Kimcheese API",
        version = "0.1.0",
        description = "API documentation for the Say Kimcheese marketing site",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
