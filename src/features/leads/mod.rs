//! Lead intake feature for the event booking form.
//!
//! Visitors submit the contact form on the marketing site; accepted leads are
//! forwarded to the owner by email. Nothing is stored.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/lead` | No | Submit lead form (form-encoded) |
//!
//! ## Outcomes
//!
//! | Condition | Response |
//! |-----------|----------|
//! | Honeypot `company` filled | 200 `OK`, dropped silently |
//! | Validation failure | 400 `Invalid input` |
//! | Missing email settings | 500 `Server configuration error` |
//! | Delivered or delivery failed | 303 to `/thanks` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::LeadService;
