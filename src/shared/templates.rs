//! Notification templates rendered with Jinja2 syntax.
//!
//! The body layout is fixed; the subject comes from configuration and is
//! checked once at startup so a typo fails the boot instead of a submission.

use minijinja::{Environment, Value};
use thiserror::Error;

/// Template name of the plain-text lead body
pub const LEAD_BODY_TEMPLATE: &str = "lead_body.txt";

const LEAD_BODY_SOURCE: &str = "Name: {{ name }}
Email: {{ email }}
Phone: {{ phone }}
Event Date: {{ event_date }}
Message: {{ message }}";

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Invalid template '{name}': {reason}")]
    Invalid { name: String, reason: String },

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

/// Compiled notification templates, shared across requests
pub struct NotificationTemplates {
    env: Environment<'static>,
    subject: String,
}

impl NotificationTemplates {
    pub fn new(subject_template: &str) -> Result<Self, TemplateError> {
        let mut env = Environment::new();
        env.add_template(LEAD_BODY_TEMPLATE, LEAD_BODY_SOURCE)
            .map_err(|e| TemplateError::Invalid {
                name: LEAD_BODY_TEMPLATE.to_string(),
                reason: e.to_string(),
            })?;

        env.render_str(subject_template, minijinja::context! { name => "check" })
            .map_err(|e| TemplateError::Invalid {
                name: "subject".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            env,
            subject: subject_template.to_string(),
        })
    }

    /// Render the subject line; newlines are folded so headers stay single-line
    pub fn render_subject(&self, context: &Value) -> Result<String, TemplateError> {
        let subject = self
            .env
            .render_str(&self.subject, context)
            .map_err(|e| TemplateError::RenderError(e.to_string()))?;

        Ok(subject.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    pub fn render_body(&self, context: &Value) -> Result<String, TemplateError> {
        let template = self
            .env
            .get_template(LEAD_BODY_TEMPLATE)
            .map_err(|e| TemplateError::RenderError(e.to_string()))?;

        template
            .render(context)
            .map_err(|e| TemplateError::RenderError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_render_body() {
        let templates = NotificationTemplates::new("New lead: {{ name }}").unwrap();
        let body = templates
            .render_body(&context! {
                name => "Jane",
                email => "jane@example.com",
                phone => "555-0100",
                event_date => "2026-12-01",
                message => "Hello",
            })
            .unwrap();

        assert_eq!(
            body,
            "Name: Jane\nEmail: jane@example.com\nPhone: 555-0100\nEvent Date: 2026-12-01\nMessage: Hello"
        );
    }

    #[test]
    fn test_render_subject_folds_whitespace() {
        let templates = NotificationTemplates::new("New lead: {{ name }}").unwrap();
        let subject = templates
            .render_subject(&context! { name => "Jane\r\nBcc: x@example.com" })
            .unwrap();

        assert_eq!(subject, "New lead: Jane Bcc: x@example.com");
    }

    #[test]
    fn test_subject_does_not_escape_html() {
        let templates = NotificationTemplates::new("{{ name }}").unwrap();
        let subject = templates
            .render_subject(&context! { name => "Tom & Jerry" })
            .unwrap();

        assert_eq!(subject, "Tom & Jerry");
    }

    #[test]
    fn test_invalid_subject_template_rejected() {
        let result = NotificationTemplates::new("New lead: {{ name");
        assert!(matches!(result, Err(TemplateError::Invalid { .. })));
    }
}
