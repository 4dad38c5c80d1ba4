//! HTTP client for the Resend transactional email API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication and maps
//! provider failures into [`EmailApiError`].

mod async_wrapper;
pub use async_wrapper::{AsyncEmailSender, AsyncResendClient};

use crate::config::Config;
use crate::error::{EmailApiError, EmailApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{OutboundEmail, SendEmailResponse};
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the Resend API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ResendClient {
    /// Base URL for the Resend API
    base_url: String,

    /// API key sent as a bearer token
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ResendClient {
    /// Create a ResendClient from configuration.
    ///
    /// Returns `None` when no API key is configured.
    pub fn new(config: &Config, metrics: Metrics) -> Option<Self> {
        let api_key = config.resend_api_key.clone()?;
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Some(Self {
            base_url: config.resend_api_url.clone(),
            api_key,
            agent: Arc::new(agent),
            metrics,
        })
    }

    /// Create a ResendClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Send a single email. One attempt, no retries.
    pub fn send_email(&self, email: &OutboundEmail) -> EmailApiResult<SendEmailResponse> {
        let url = self.build_url("/emails");
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!(to = ?email.to, subject = %email.subject, "POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(email)
            .map_err(Self::map_error);

        let response = match result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                timer.complete();
                response
            }
            Err(e) => {
                tracing::debug!("POST {} - Error: {:?}", url, e);
                timer.complete_with_error();
                return Err(e);
            }
        };

        // Only the status matters; an unreadable 2xx body still counts as sent.
        let receipt = response
            .into_string()
            .ok()
            .and_then(|body| serde_json::from_str::<SendEmailResponse>(&body).ok())
            .unwrap_or_default();

        Ok(receipt)
    }

    /// Map a ureq error to an EmailApiError.
    fn map_error(error: ureq::Error) -> EmailApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => EmailApiError::Unauthorized(message),
                    429 => EmailApiError::RateLimitExceeded(message),
                    _ => EmailApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    EmailApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    EmailApiError::Timeout
                } else {
                    EmailApiError::HttpError(transport.to_string())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = ResendClient::with_base_url(
            "https://api.resend.com".to_string(),
            "re_test".to_string(),
        );
        assert_eq!(client.build_url("/emails"), "https://api.resend.com/emails");
        assert_eq!(client.build_url("emails"), "https://api.resend.com/emails");

        let client_with_slash = ResendClient::with_base_url(
            "https://api.resend.com/".to_string(),
            "re_test".to_string(),
        );
        assert_eq!(
            client_with_slash.build_url("/emails"),
            "https://api.resend.com/emails"
        );
    }

    #[test]
    fn test_new_requires_api_key() {
        let config = Config::default();
        assert!(ResendClient::new(&config, Metrics::new()).is_none());

        let config = Config {
            resend_api_key: Some("re_test".to_string()),
            admin_email: Some("owner@acme.test".to_string()),
            ..Default::default()
        };
        let client = ResendClient::new(&config, Metrics::new()).unwrap();
        assert_eq!(client.build_url("/emails"), "https://api.resend.com/emails");
    }
}
