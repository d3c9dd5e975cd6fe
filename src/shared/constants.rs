/// Origin allowed to post the lead form when `SITE_URL` is unset
pub const DEFAULT_SITE_URL: &str = "https://saykimcheese.com";

/// Where every accepted submission is sent after processing
pub const LEAD_SUCCESS_REDIRECT: &str = "/thanks";

/// Body returned to submissions that tripped the honeypot
pub const HONEYPOT_RESPONSE_BODY: &str = "OK";

/// Rendered in the notification for empty optional fields
pub const FIELD_PLACEHOLDER: &str = "-";

/// Provider error messages are cut to this many characters before logging
pub const MAX_LOGGED_ERROR_CHARS: usize = 100;

// =============================================================================
// SHOWCASE
// =============================================================================

/// Seconds each showcase image stays on screen
pub const SHOWCASE_ROTATION_INTERVAL_SECS: u64 = 4;
