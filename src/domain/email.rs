//! EmailAddress value object.

use super::errors::ValidationError;
use std::fmt;

/// A type-safe wrapper for configured email addresses.
///
/// Used for the admin recipient and the sender address. Submitter emails are
/// deliberately not run through this type: the contact form accepts any
/// non-blank value there.
///
/// # Example
///
/// ```
/// use contact_relay::domain::EmailAddress;
///
/// let email = EmailAddress::new("owner@example.com").unwrap();
/// assert_eq!(email.as_str(), "owner@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Validation Rules
    ///
    /// - Must contain exactly one '@' symbol
    /// - Must have a local part before '@'
    /// - Must have a domain part after '@' with at least one '.'
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        let trimmed = email.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(trimmed.to_string()))
    }

    fn is_valid(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || domain.contains('@') {
            return false;
        }

        if local.chars().any(char::is_whitespace) || domain.chars().any(char::is_whitespace) {
            return false;
        }

        // Domain must have at least one '.' and no empty labels
        domain.contains('.') && domain.split('.').all(|part| !part.is_empty())
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
