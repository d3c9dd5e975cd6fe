//! Ingredient showcase backing the rotating image on the landing page.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/showcase` | No | Image catalog and the slide currently on screen |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ShowcaseService;
