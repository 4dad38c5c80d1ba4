//! Error types for the contact relay.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ContactResponse;

/// Errors that can occur when talking to the email provider API.
#[derive(Error, Debug)]
pub enum EmailApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),
}

impl EmailApiError {
    /// HTTP status returned by the provider, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::Unauthorized(_) => Some(401),
            Self::RateLimitExceeded(_) => Some(429),
            _ => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Request-level failures surfaced to the caller as a generic 500.
///
/// The detail is only ever logged; the client sees [`GENERIC_FAILURE_MESSAGE`].
#[derive(Error, Debug)]
pub enum ContactError {
    /// The request body was not valid JSON
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Anything else that went wrong while handling the submission
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Message shown to the submitter when the request fails unexpectedly.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please call us directly.";

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Contact form error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ContactResponse::error(GENERIC_FAILURE_MESSAGE)),
        )
            .into_response()
    }
}

/// Convenience type alias for Results with EmailApiError
pub type EmailApiResult<T> = Result<T, EmailApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EmailApiError::Timeout;
        assert_eq!(err.to_string(), "Request timeout");

        let err = ConfigError::MissingVar("CONTACT_ADMIN_EMAIL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: CONTACT_ADMIN_EMAIL"
        );

        let err = ContactError::Internal("join error".to_string());
        assert_eq!(err.to_string(), "Internal error: join error");
    }

    #[test]
    fn test_api_error_variants() {
        let err = EmailApiError::ApiError {
            status: 422,
            message: "Invalid `to` field".to_string(),
        };
        assert!(err.to_string().contains("422"));
        assert!(err.to_string().contains("Invalid `to` field"));
        assert_eq!(err.status(), Some(422));
        assert_eq!(EmailApiError::Timeout.status(), None);
        assert_eq!(
            EmailApiError::Unauthorized("bad key".to_string()).status(),
            Some(401)
        );
    }

    #[test]
    fn test_contact_error_is_generic_500() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let response = ContactError::from(parse_err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
