use minijinja::context;

use crate::core::config::NotifySettings;
use crate::modules::email::OutgoingEmail;
use crate::shared::constants::FIELD_PLACEHOLDER;
use crate::shared::templates::{NotificationTemplates, TemplateError};

/// A validated, sanitized lead. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub event_date: Option<String>,
    pub message: Option<String>,
}

impl LeadSubmission {
    /// Domain part of the email, the only piece of it that is ever logged
    pub fn email_domain(&self) -> &str {
        self.email
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or("unknown")
    }

    pub fn message_length(&self) -> usize {
        self.message.as_deref().map_or(0, |m| m.chars().count())
    }
}

/// Staff notification derived from a [`LeadSubmission`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

impl NotificationMessage {
    pub fn compose(
        submission: &LeadSubmission,
        settings: &NotifySettings<'_>,
        templates: &NotificationTemplates,
    ) -> Result<Self, TemplateError> {
        let or_placeholder = |value: &Option<String>| {
            value
                .as_deref()
                .unwrap_or(FIELD_PLACEHOLDER)
                .to_string()
        };

        let ctx = context! {
            name => submission.name.as_str(),
            email => submission.email.as_str(),
            phone => or_placeholder(&submission.phone),
            event_date => or_placeholder(&submission.event_date),
            message => or_placeholder(&submission.message),
        };

        Ok(Self {
            from: settings.notify_from.to_string(),
            to: settings.notify_to.to_string(),
            subject: templates.render_subject(&ctx)?,
            text: templates.render_body(&ctx)?,
        })
    }
}

impl From<NotificationMessage> for OutgoingEmail {
    fn from(message: NotificationMessage) -> Self {
        Self {
            from: message.from,
            to: vec![message.to],
            subject: message.subject,
            text: message.text,
        }
    }
}
