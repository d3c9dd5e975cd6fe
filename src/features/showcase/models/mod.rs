mod rotation;
mod showcase_image;

pub use rotation::*;
pub use showcase_image::*;
