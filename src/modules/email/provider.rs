use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Plain-text email handed to a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
}

/// Provider acknowledgement of an accepted email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub id: String,
}

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Request to email provider timed out: {0}")]
    Timeout(String),

    #[error("Failed to reach email provider: {0}")]
    Transport(String),

    #[error("Email provider rejected the request ({status}): {message}")]
    Provider { status: u16, message: String },

    #[error("Invalid response from email provider: {0}")]
    InvalidResponse(String),
}

impl EmailError {
    /// Stable name of the failure class, safe to log
    pub fn kind(&self) -> &'static str {
        match self {
            EmailError::Client(_) => "ClientError",
            EmailError::Timeout(_) => "TimeoutError",
            EmailError::Transport(_) => "TransportError",
            EmailError::Provider { .. } => "ProviderError",
            EmailError::InvalidResponse(_) => "InvalidResponseError",
        }
    }
}

/// Email delivery boundary.
///
/// One call per email, no retries. Timeouts are the implementation's concern.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, api_key: &str, email: &OutgoingEmail) -> Result<SentEmail, EmailError>;

    /// Provider name for logs
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        assert_eq!(
            EmailError::Provider {
                status: 422,
                message: "Invalid `to` field".to_string()
            }
            .kind(),
            "ProviderError"
        );
        assert_eq!(
            EmailError::Timeout("deadline".to_string()).kind(),
            "TimeoutError"
        );
        assert_eq!(
            EmailError::Transport("refused".to_string()).kind(),
            "TransportError"
        );
    }

    #[test]
    fn test_provider_error_display() {
        let err = EmailError::Provider {
            status: 403,
            message: "API key is invalid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Email provider rejected the request (403): API key is invalid"
        );
    }
}
