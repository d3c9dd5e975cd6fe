use std::env;
use std::time::Duration;

use crate::shared::constants::DEFAULT_SITE_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub lead_notify: LeadNotifyConfig,
    pub resend: ResendConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub max_request_body_size: usize,
    /// Origin allowed to post the lead form (`Access-Control-Allow-Origin`)
    pub site_url: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Settings for the lead notification email.
///
/// The three delivery values are optional at startup: the service still boots
/// without them and every submission answers with a configuration error until
/// they are provided.
#[derive(Clone)]
pub struct LeadNotifyConfig {
    pub api_key: Option<String>,
    pub notify_to: Option<String>,
    pub notify_from: Option<String>,
    pub subject_template: String,
}

/// Delivery values of a fully configured [`LeadNotifyConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifySettings<'a> {
    pub api_key: &'a str,
    pub notify_to: &'a str,
    pub notify_from: &'a str,
}

/// Resend HTTP API client configuration
#[derive(Debug, Clone)]
pub struct ResendConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            lead_notify: LeadNotifyConfig::from_env()?,
            resend: ResendConfig::from_env()?,
        })
    }
}

/// Reads an environment variable, treating an empty value as unset
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 64 * 1024; // 64KB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        let site_url = non_empty_var("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string());

        Ok(Self {
            host,
            port,
            max_request_body_size,
            site_url,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Say Kimcheese API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Lead intake and showcase API for saykimcheese.com".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl LeadNotifyConfig {
    pub const API_KEY_VAR: &'static str = "RESEND_API_KEY";
    pub const NOTIFY_TO_VAR: &'static str = "LEAD_NOTIFY_TO";
    pub const NOTIFY_FROM_VAR: &'static str = "LEAD_NOTIFY_FROM";

    pub const DEFAULT_SUBJECT_TEMPLATE: &'static str = "New lead: {{ name }} — saykimcheese";

    pub fn from_env() -> Result<Self, String> {
        let subject_template = non_empty_var("LEAD_SUBJECT_TEMPLATE")
            .unwrap_or_else(|| Self::DEFAULT_SUBJECT_TEMPLATE.to_string());

        Ok(Self {
            api_key: non_empty_var(Self::API_KEY_VAR),
            notify_to: non_empty_var(Self::NOTIFY_TO_VAR),
            notify_from: non_empty_var(Self::NOTIFY_FROM_VAR),
            subject_template,
        })
    }

    /// Names of the delivery variables that are not set, in a stable order
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.api_key.is_none(), Self::API_KEY_VAR),
            (self.notify_to.is_none(), Self::NOTIFY_TO_VAR),
            (self.notify_from.is_none(), Self::NOTIFY_FROM_VAR),
        ]
        .into_iter()
        .filter_map(|(absent, name)| absent.then_some(name))
        .collect()
    }

    /// Returns the delivery values, or the names of the missing ones
    pub fn settings(&self) -> Result<NotifySettings<'_>, Vec<&'static str>> {
        match (&self.api_key, &self.notify_to, &self.notify_from) {
            (Some(api_key), Some(notify_to), Some(notify_from)) => Ok(NotifySettings {
                api_key,
                notify_to,
                notify_from,
            }),
            _ => Err(self.missing()),
        }
    }
}

// Hand-written so the API key never ends up in logs
impl std::fmt::Debug for LeadNotifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadNotifyConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("notify_to", &self.notify_to)
            .field("notify_from", &self.notify_from)
            .field("subject_template", &self.subject_template)
            .finish()
    }
}

impl ResendConfig {
    const DEFAULT_API_URL: &'static str = "https://api.resend.com";
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let api_url = non_empty_var("RESEND_API_URL")
            .unwrap_or_else(|| Self::DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env::var("RESEND_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "RESEND_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
