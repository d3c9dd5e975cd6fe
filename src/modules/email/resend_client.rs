use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config::ResendConfig;
use crate::modules::email::{EmailError, EmailProvider, OutgoingEmail, SentEmail};

/// Resend send-email response
#[derive(Debug, Deserialize)]
struct ResendEmailResponse {
    id: String,
}

/// Resend error response
#[derive(Debug, Deserialize)]
struct ResendErrorResponse {
    #[serde(default)]
    message: String,
    #[serde(default)]
    name: String,
}

/// Client for the Resend transactional email API
pub struct ResendClient {
    http_client: reqwest::Client,
    api_url: String,
}

impl ResendClient {
    pub fn new(config: &ResendConfig) -> Result<Self, EmailError> {
        let http_client = reqwest::Client::builder()
            .user_agent("SayKimcheeseCore/1.0 (lead-notifications)")
            .timeout(config.timeout)
            .build()
            .map_err(|e| EmailError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn map_request_error(e: reqwest::Error) -> EmailError {
        if e.is_timeout() {
            EmailError::Timeout(e.to_string())
        } else {
            EmailError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl EmailProvider for ResendClient {
    async fn send(&self, api_key: &str, email: &OutgoingEmail) -> Result<SentEmail, EmailError> {
        let url = format!("{}/emails", self.api_url);

        tracing::debug!("Sending email via Resend to {} recipient(s)", email.to.len());

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await
            .map_err(Self::map_request_error)?;

        let status = response.status();

        if status.is_success() {
            let sent = response
                .json::<ResendEmailResponse>()
                .await
                .map_err(|e| EmailError::InvalidResponse(e.to_string()))?;

            return Ok(SentEmail { id: sent.id });
        }

        // Handle error responses
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ResendErrorResponse>(&body) {
            Ok(error_response) if !error_response.message.is_empty() => {
                if error_response.name.is_empty() {
                    error_response.message
                } else {
                    format!("{}: {}", error_response.name, error_response.message)
                }
            }
            _ => body,
        };

        Err(EmailError::Provider {
            status: status.as_u16(),
            message,
        })
    }

    fn name(&self) -> &'static str {
        "resend"
    }
}
