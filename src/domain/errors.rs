//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is invalid.
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
        }
    }
}

impl std::error::Error for ValidationError {}

/// The fields a submission cannot do without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Name,
    Email,
    Phone,
}

impl RequiredField {
    pub const ALL: [RequiredField; 3] = [Self::Name, Self::Email, Self::Phone];

    /// JSON key for this field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single reason a payload was not accepted as a contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldViolation {
    /// The payload was not a JSON object.
    NotAnObject,

    /// A required field was absent or `null`.
    Missing(RequiredField),

    /// A required field was present but not a string.
    NotAString(RequiredField),

    /// A required field was empty or whitespace only.
    Blank(RequiredField),
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "payload must be a JSON object"),
            Self::Missing(field) => write!(f, "{} is required", field),
            Self::NotAString(field) => write!(f, "{} must be a string", field),
            Self::Blank(field) => write!(f, "{} cannot be blank", field),
        }
    }
}
