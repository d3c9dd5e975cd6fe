//! Transactional email delivery.
//!
//! [`EmailProvider`] is the boundary the lead pipeline talks to; the Resend
//! HTTP API is the production implementation.

mod provider;
mod resend_client;

pub use provider::{EmailError, EmailProvider, OutgoingEmail, SentEmail};
pub use resend_client::ResendClient;
