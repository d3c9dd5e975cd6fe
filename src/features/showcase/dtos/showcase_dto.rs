use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::showcase::models::ShowcaseImage;

/// Catalog plus the rotation position at the time of the request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShowcaseResponseDto {
    /// Seconds each image stays on screen
    pub interval_secs: u64,
    pub current_index: usize,
    pub images: Vec<ShowcaseImage>,
}
