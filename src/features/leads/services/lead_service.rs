use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::core::config::{LeadNotifyConfig, NotifySettings};
use crate::core::error::{AppError, Result};
use crate::features::leads::models::{LeadSubmission, NotificationMessage};
use crate::modules::email::{EmailError, EmailProvider, OutgoingEmail, SentEmail};
use crate::shared::constants::MAX_LOGGED_ERROR_CHARS;
use crate::shared::templates::{NotificationTemplates, TemplateError};

/// Why a notification did not go out. Never shown to the submitter.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Compose(#[from] TemplateError),

    #[error(transparent)]
    Send(#[from] EmailError),
}

impl DeliveryError {
    pub fn kind(&self) -> &'static str {
        match self {
            DeliveryError::Compose(_) => "TemplateError",
            DeliveryError::Send(e) => e.kind(),
        }
    }
}

/// Result of the notification step for an accepted lead
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered { message_id: String },
    Failed,
}

/// Service that forwards accepted leads to the site owner
pub struct LeadService {
    config: LeadNotifyConfig,
    templates: NotificationTemplates,
    provider: Arc<dyn EmailProvider>,
}

impl LeadService {
    pub fn new(
        config: LeadNotifyConfig,
        provider: Arc<dyn EmailProvider>,
    ) -> std::result::Result<Self, TemplateError> {
        let templates = NotificationTemplates::new(&config.subject_template)?;

        Ok(Self {
            config,
            templates,
            provider,
        })
    }

    /// Send the staff notification for an accepted lead.
    ///
    /// Fails only when delivery settings are missing; provider failures are
    /// logged and reported as [`DeliveryOutcome::Failed`].
    pub async fn notify(&self, submission: &LeadSubmission) -> Result<DeliveryOutcome> {
        let settings = self.config.settings().map_err(|missing| {
            tracing::error!(
                timestamp = %Utc::now().to_rfc3339(),
                missing = ?missing,
                "Server configuration error"
            );
            AppError::Configuration(missing)
        })?;

        match self.deliver(submission, &settings).await {
            Ok(sent) => {
                tracing::info!(
                    "Lead notification sent via {}: message_id={}",
                    self.provider.name(),
                    sent.id
                );
                Ok(DeliveryOutcome::Delivered {
                    message_id: sent.id,
                })
            }
            Err(e) => {
                self.log_delivery_failure(submission, &e);
                Ok(DeliveryOutcome::Failed)
            }
        }
    }

    async fn deliver(
        &self,
        submission: &LeadSubmission,
        settings: &NotifySettings<'_>,
    ) -> std::result::Result<SentEmail, DeliveryError> {
        let message = NotificationMessage::compose(submission, settings, &self.templates)?;
        let email: OutgoingEmail = message.into();

        Ok(self.provider.send(settings.api_key, &email).await?)
    }

    fn log_delivery_failure(&self, submission: &LeadSubmission, error: &DeliveryError) {
        let record = DeliveryFailureRecord::new(submission, error);

        tracing::error!(
            target: "lead_delivery",
            timestamp = %Utc::now().to_rfc3339(),
            provider = self.provider.name(),
            lead_email_domain = %record.email_domain,
            lead_name_length = record.name_length,
            lead_message_length = record.message_length,
            error_type = record.error_type,
            error_message = %record.error_message,
            "Email delivery failed"
        );
    }
}

/// Fields logged for a failed delivery: the email domain, lengths instead of
/// contents, and the error text cut to [`MAX_LOGGED_ERROR_CHARS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailureRecord<'a> {
    pub email_domain: &'a str,
    pub name_length: usize,
    pub message_length: usize,
    pub error_type: &'static str,
    pub error_message: String,
}

impl<'a> DeliveryFailureRecord<'a> {
    pub fn new(submission: &'a LeadSubmission, error: &DeliveryError) -> Self {
        Self {
            email_domain: submission.email_domain(),
            name_length: submission.name.chars().count(),
            message_length: submission.message_length(),
            error_type: error.kind(),
            error_message: error
                .to_string()
                .chars()
                .take(MAX_LOGGED_ERROR_CHARS)
                .collect(),
        }
    }
}
