use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::core::config::LeadNotifyConfig;
use crate::modules::email::{EmailError, EmailProvider, OutgoingEmail, SentEmail};

/// Email provider fake that counts calls and records what it was given
#[derive(Debug, Clone, Default)]
pub struct MockEmailProvider {
    pub send_count: Arc<AtomicUsize>,
    pub sent: Arc<Mutex<Vec<(String, OutgoingEmail)>>>,
    pub should_fail_send: bool,
}

impl MockEmailProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_send_failure(mut self) -> Self {
        self.should_fail_send = true;
        self
    }

    pub fn send_call_count(&self) -> usize {
        self.send_count.load(Ordering::SeqCst)
    }

    /// Emails passed to `send`, paired with the API key used
    pub fn sent_emails(&self) -> Vec<(String, OutgoingEmail)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailProvider for MockEmailProvider {
    async fn send(
        &self,
        api_key: &str,
        email: &OutgoingEmail,
    ) -> Result<SentEmail, EmailError> {
        self.send_count.fetch_add(1, Ordering::SeqCst);
        self.sent
            .lock()
            .unwrap()
            .push((api_key.to_string(), email.clone()));

        if self.should_fail_send {
            return Err(EmailError::Provider {
                status: 500,
                message: "Mock send failure ".repeat(20),
            });
        }

        Ok(SentEmail {
            id: format!("mock-message-{}", uuid::Uuid::now_v7()),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Fully configured notification settings
pub fn test_notify_config() -> LeadNotifyConfig {
    LeadNotifyConfig {
        api_key: Some("re_test_key".to_string()),
        notify_to: Some("owner@saykimcheese.com".to_string()),
        notify_from: Some("leads@saykimcheese.com".to_string()),
        subject_template: LeadNotifyConfig::DEFAULT_SUBJECT_TEMPLATE.to_string(),
    }
}
