use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppForm;
use crate::features::leads::dtos::LeadFormDto;
use crate::features::leads::services::LeadService;
use crate::shared::constants::{HONEYPOT_RESPONSE_BODY, LEAD_SUCCESS_REDIRECT};
use crate::shared::validation::validation_messages;

/// Submit the lead form
///
/// Public endpoint behind the contact form. Accepted leads are emailed to the
/// owner; the submitter is redirected to the thank-you page even when the
/// email could not be sent.
#[utoipa::path(
    post,
    path = "/api/lead",
    request_body(content = LeadFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Submission dropped by the honeypot", body = String),
        (status = 303, description = "Lead accepted, redirect to /thanks"),
        (status = 400, description = "Invalid input", body = String),
        (status = 500, description = "Server configuration error", body = String)
    ),
    tag = "leads"
)]
pub async fn submit_lead(
    State(service): State<Arc<LeadService>>,
    OriginalUri(uri): OriginalUri,
    AppForm(form): AppForm<LeadFormDto>,
) -> Result<Response> {
    if form.is_bot() {
        tracing::info!("Honeypot field filled, dropping submission");
        return Ok((StatusCode::OK, HONEYPOT_RESPONSE_BODY).into_response());
    }

    if let Err(e) = form.validate() {
        let errors = validation_messages(&e);
        tracing::warn!(
            timestamp = %Utc::now().to_rfc3339(),
            errors = ?errors,
            path = %uri.path(),
            "Form validation failed"
        );
        return Err(AppError::Validation(errors));
    }

    let submission = form.into_submission();
    service.notify(&submission).await?;

    Ok(Redirect::to(LEAD_SUCCESS_REDIRECT).into_response())
}
