use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One image of the rotating ingredient showcase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShowcaseImage {
    pub src: String,
    pub alt: String,
    pub title: String,
    pub description: String,
}

impl ShowcaseImage {
    fn new(src: &str, alt: &str, title: &str, description: &str) -> Self {
        Self {
            src: src.to_string(),
            alt: alt.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// The ingredient images shown on the landing page, in display order
    pub fn catalog() -> Vec<Self> {
        vec![
            Self::new(
                "https://images.pexels.com/photos/4187779/pexels-photo-4187779.jpeg?auto=compress&cs=tinysrgb&w=1000&h=750",
                "Artisan Cheeses",
                "Premium Cheeses",
                "Aged brie, manchego, and gouda",
            ),
            Self::new(
                "https://images.pexels.com/photos/31709928/pexels-photo-31709928.jpeg?auto=compress&cs=tinysrgb&w=1000&h=750",
                "Cured Meats",
                "Cured Meats",
                "Prosciutto, salami, and chorizo",
            ),
            Self::new(
                "https://plus.unsplash.com/premium_photo-1671379041175-782d15092945?q=80&w=1000&h=750&auto=format&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
                "Fresh Fruits",
                "Seasonal Fruits",
                "Grapes, figs, and berries",
            ),
            Self::new(
                "https://images.pexels.com/photos/691142/pexels-photo-691142.jpeg?auto=compress&cs=tinysrgb&w=1000&h=750",
                "Artisan Crackers",
                "Artisan Crackers",
                "Handmade water crackers and crostini",
            ),
        ]
    }
}
