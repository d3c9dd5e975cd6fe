//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients and adapters for external services like transactional email.

pub mod email;
