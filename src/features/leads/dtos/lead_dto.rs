use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::leads::models::LeadSubmission;
use crate::shared::validation::sanitize_input;

/// Form body of the lead submission (`application/x-www-form-urlencoded`)
///
/// Every field is optional at the parsing layer so that a missing `name` or
/// `email` surfaces as a validation error rather than a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct LeadFormDto {
    /// Contact name
    #[validate(
        required(message = "Name is required"),
        length(min = 2, max = 100, message = "Name must be 2-100 characters")
    )]
    pub name: Option<String>,

    /// Contact email
    #[validate(
        required(message = "Email is required"),
        email(message = "Invalid email format"),
        length(max = 254, message = "Email must not exceed 254 characters")
    )]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "Phone must not exceed 20 characters"))]
    pub phone: Option<String>,

    /// Requested event date, free text as typed in the form
    #[validate(length(max = 10, message = "Event date must not exceed 10 characters"))]
    pub event_date: Option<String>,

    #[validate(length(max = 1000, message = "Message must not exceed 1000 characters"))]
    pub message: Option<String>,

    /// Honeypot, hidden from real visitors
    pub company: Option<String>,
}

impl LeadFormDto {
    /// True when the honeypot field carries any value
    pub fn is_bot(&self) -> bool {
        self.company.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Sanitizes every textual field into a [`LeadSubmission`].
    ///
    /// Call after [`Validate::validate`] succeeded.
    pub fn into_submission(self) -> LeadSubmission {
        let optional = |value: Option<String>| {
            value
                .map(|v| sanitize_input(&v))
                .filter(|v| !v.is_empty())
        };

        LeadSubmission {
            name: sanitize_input(self.name.as_deref().unwrap_or_default()),
            email: sanitize_input(self.email.as_deref().unwrap_or_default()),
            phone: optional(self.phone),
            event_date: optional(self.event_date),
            message: optional(self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> LeadFormDto {
        LeadFormDto {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_minimal_form() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_name_length_bounds() {
        let mut form = valid_form();
        form.name = Some("J".to_string());
        assert!(form.validate().is_err());

        form.name = Some("Jo".to_string());
        assert!(form.validate().is_ok());

        form.name = Some("a".repeat(100));
        assert!(form.validate().is_ok());

        form.name = Some("a".repeat(101));
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_name_length_counts_characters() {
        let mut form = valid_form();
        form.name = Some("é".repeat(100));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let mut form = valid_form();
        form.name = None;
        assert!(form.validate().is_err());

        let mut form = valid_form();
        form.email = None;
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_invalid_email() {
        for email in ["not-an-email", "jane@", "@example.com", ""] {
            let mut form = valid_form();
            form.email = Some(email.to_string());
            assert!(form.validate().is_err(), "email: {:?}", email);
        }
    }

    #[test]
    fn test_optional_field_limits() {
        let mut form = valid_form();
        form.phone = Some("1".repeat(21));
        assert!(form.validate().is_err());

        let mut form = valid_form();
        form.event_date = Some("2026-12-01".to_string());
        assert!(form.validate().is_ok());
        form.event_date = Some("2026-12-01T".to_string());
        assert!(form.validate().is_err());

        let mut form = valid_form();
        form.message = Some("m".repeat(1001));
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_is_bot() {
        let mut form = valid_form();
        assert!(!form.is_bot());

        form.company = Some(String::new());
        assert!(!form.is_bot());

        form.company = Some("Acme".to_string());
        assert!(form.is_bot());
    }

    #[test]
    fn test_into_submission_sanitizes() {
        let form = LeadFormDto {
            name: Some("  <b>Jane</b> ".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: Some("   ".to_string()),
            event_date: None,
            message: Some("<script>alert(1)</script>Hello".to_string()),
            company: None,
        };

        let submission = form.into_submission();
        assert_eq!(submission.name, "Jane");
        assert_eq!(submission.email, "jane@example.com");
        assert_eq!(submission.phone, None);
        assert_eq!(submission.event_date, None);
        assert_eq!(submission.message.as_deref(), Some("Hello"));
    }
}
