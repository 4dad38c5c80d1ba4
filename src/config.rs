//! Configuration management for the contact relay.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read first if present.

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use crate::render::{Branding, DEFAULT_BRAND_COLOR};
use std::env;
use std::net::SocketAddr;

/// Default Resend API base URL.
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Sender address Resend allows without a verified domain.
pub const DEFAULT_FROM_EMAIL: &str = "onboarding@resend.dev";

/// Display name used in the sender when `BUSINESS_NAME` is unset.
pub const DEFAULT_BUSINESS_NAME: &str = "Our Business";

/// Configuration for the contact relay.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resend API key. `None` puts the relay in log-only mode.
    pub resend_api_key: Option<String>,

    /// Resend API base URL
    pub resend_api_url: String,

    /// Address notifications are delivered to (required when a key is set)
    pub admin_email: Option<String>,

    /// Sender address used in the `from` header
    pub from_email: String,

    /// Business name shown as the sender display name
    pub business_name: String,

    /// Accent color for the notification header
    pub brand_color: String,

    /// Address the HTTP server listens on (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// HTTP request timeout in seconds for provider calls (default: 10)
    pub request_timeout: u64,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `RESEND_API_KEY`: Resend API key; unset or blank means log-only mode
    /// - `RESEND_API_URL`: API base URL (default: https://api.resend.com)
    /// - `CONTACT_ADMIN_EMAIL`: Notification recipient (required with `RESEND_API_KEY`)
    /// - `CONTACT_FROM_EMAIL`: Sender address (default: onboarding@resend.dev)
    /// - `BUSINESS_NAME`: Sender display name (default: "Our Business")
    /// - `BRAND_COLOR`: Notification header color (default: "#1d4ed8")
    /// - `BIND_ADDR`: Listen address (default: 0.0.0.0:3000)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let resend_api_key = env::var("RESEND_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let resend_api_url =
            env::var("RESEND_API_URL").unwrap_or_else(|_| defaults.resend_api_url.clone());
        if !resend_api_url.starts_with("http://") && !resend_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "RESEND_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let admin_email = match env::var("CONTACT_ADMIN_EMAIL") {
            Ok(val) if !val.trim().is_empty() => {
                Some(Self::parse_email("CONTACT_ADMIN_EMAIL", val)?)
            }
            _ => None,
        };
        if resend_api_key.is_some() && admin_email.is_none() {
            return Err(ConfigError::MissingVar("CONTACT_ADMIN_EMAIL".to_string()));
        }

        let from_email = match env::var("CONTACT_FROM_EMAIL") {
            Ok(val) => Self::parse_email("CONTACT_FROM_EMAIL", val)?,
            Err(_) => defaults.from_email.clone(),
        };

        let business_name = env::var("BUSINESS_NAME")
            .ok()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| defaults.business_name.clone());

        let brand_color = env::var("BRAND_COLOR").unwrap_or_else(|_| defaults.brand_color.clone());
        if !Self::is_css_color(&brand_color) {
            return Err(ConfigError::InvalidValue {
                var: "BRAND_COLOR".to_string(),
                reason: format!("Not a usable CSS color: {}", brand_color),
            });
        }

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(val) => val.parse::<SocketAddr>().map_err(|e| ConfigError::InvalidValue {
                var: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => defaults.bind_addr,
        };

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            resend_api_key,
            resend_api_url,
            admin_email,
            from_email,
            business_name,
            brand_color,
            bind_addr,
            request_timeout,
            log_level,
        })
    }

    /// Whether outbound email is configured.
    pub fn email_enabled(&self) -> bool {
        self.resend_api_key.is_some()
    }

    /// The `from` header, e.g. `Acme Plumbing <onboarding@resend.dev>`.
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.business_name, self.from_email)
    }

    /// Branding applied to rendered notifications.
    pub fn branding(&self) -> Branding {
        Branding {
            brand_color: self.brand_color.clone(),
        }
    }

    fn parse_email(var_name: &str, value: String) -> ConfigResult<String> {
        EmailAddress::new(value)
            .map(EmailAddress::into_inner)
            .map_err(|e| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: e.to_string(),
            })
    }

    /// The color lands inside a `style` attribute, so only allow characters
    /// that appear in hex, rgb()/hsl() and named colors.
    fn is_css_color(value: &str) -> bool {
        !value.trim().is_empty()
            && value.chars().all(|c| {
                c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ')
            })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resend_api_key: None,
            resend_api_url: DEFAULT_RESEND_API_URL.to_string(),
            admin_email: None,
            from_email: DEFAULT_FROM_EMAIL.to_string(),
            business_name: DEFAULT_BUSINESS_NAME.to_string(),
            brand_color: DEFAULT_BRAND_COLOR.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}
