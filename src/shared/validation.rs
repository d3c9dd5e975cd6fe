//! Untrusted text cleanup for form input.
//!
//! The sanitizer is a pattern blacklist, not an HTML parser. It removes the
//! markup and URI schemes below, strips every remaining tag while keeping the
//! text between tags, and trims the result. Passes repeat until the text stops
//! changing, so sanitizing already sanitized text is a no-op.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationErrors;

lazy_static! {
    /// Dangerous markup, script URIs and CSS expressions, removed first.
    /// `.` does not cross newlines, so a block split over lines is left to
    /// the tag stripper.
    static ref DANGEROUS_PATTERNS: Vec<Regex> = [
        r"(?i)<script[^>]*>.*?</script>",
        r"(?i)javascript:",
        r"(?i)on\w+\s*=",
        r"(?i)<iframe[^>]*>.*?</iframe>",
        r"(?i)<object[^>]*>.*?</object>",
        r"(?i)<embed[^>]*>",
        r"(?i)<form[^>]*>.*?</form>",
        r"(?i)expression\s*\(",
        r"(?i)vbscript:",
        r"(?i)data:\s*text/html",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();

    /// Any remaining tag; inner text is preserved
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
}

fn sanitize_pass(input: &str) -> String {
    let mut sanitized = input.to_string();
    for pattern in DANGEROUS_PATTERNS.iter() {
        sanitized = pattern.replace_all(&sanitized, "").into_owned();
    }

    HTML_TAG.replace_all(&sanitized, "").trim().to_string()
}

/// Strips dangerous markup and all HTML tags from `input`, then trims it.
pub fn sanitize_input(input: &str) -> String {
    let mut current = sanitize_pass(input);
    // Every pass only removes text, so this terminates
    loop {
        let next = sanitize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Flattens field errors into their messages, sorted by field name.
///
/// Only the messages are kept; the offending values never leave this function.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect()
}
