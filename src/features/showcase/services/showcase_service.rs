use chrono::{DateTime, Utc};

use crate::features::showcase::dtos::ShowcaseResponseDto;
use crate::features::showcase::models::{ShowcaseImage, ShowcaseRotation};
use crate::shared::constants::SHOWCASE_ROTATION_INTERVAL_SECS;

pub struct ShowcaseService {
    images: Vec<ShowcaseImage>,
    interval_secs: u64,
}

impl ShowcaseService {
    pub fn new() -> Self {
        Self {
            images: ShowcaseImage::catalog(),
            interval_secs: SHOWCASE_ROTATION_INTERVAL_SECS,
        }
    }

    /// Rotation as seen at `now`, counting interval ticks since the Unix epoch
    pub fn snapshot(&self, now: DateTime<Utc>) -> ShowcaseResponseDto {
        let elapsed = u64::try_from(now.timestamp()).unwrap_or(0);

        let mut rotation = ShowcaseRotation::new(self.images.len());
        rotation.advance(elapsed / self.interval_secs);

        ShowcaseResponseDto {
            interval_secs: self.interval_secs,
            current_index: rotation.current(),
            images: self.images.clone(),
        }
    }
}

impl Default for ShowcaseService {
    fn default() -> Self {
        Self::new()
    }
}
