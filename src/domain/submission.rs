//! ContactSubmission: a validated contact form payload.

use super::errors::{FieldViolation, RequiredField};
use serde::Serialize;
use serde_json::{Map, Value};

/// A contact form submission that passed validation.
///
/// Only obtainable through [`validate`] / [`ContactSubmission::new`], so
/// `name`, `email` and `phone` are always non-blank. Values are kept exactly
/// as submitted (not trimmed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    name: String,
    email: String,
    phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Check an arbitrary JSON value against the contact submission shape.
///
/// Every violated required field is reported, not just the first one.
/// Optional `service`/`message` values that are not strings, or are empty,
/// are treated as absent.
pub fn validate(value: &Value) -> Result<ContactSubmission, Vec<FieldViolation>> {
    let Some(object) = value.as_object() else {
        return Err(vec![FieldViolation::NotAnObject]);
    };

    let name = required_string(object, RequiredField::Name);
    let email = required_string(object, RequiredField::Email);
    let phone = required_string(object, RequiredField::Phone);

    match (name, email, phone) {
        (Ok(name), Ok(email), Ok(phone)) => Ok(ContactSubmission {
            name,
            email,
            phone,
            service: optional_string(object, "service"),
            message: optional_string(object, "message"),
        }),
        (name, email, phone) => Err([name.err(), email.err(), phone.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}

fn required_string(
    object: &Map<String, Value>,
    field: RequiredField,
) -> Result<String, FieldViolation> {
    match object.get(field.key()) {
        None | Some(Value::Null) => Err(FieldViolation::Missing(field)),
        Some(Value::String(s)) if s.trim().is_empty() => Err(FieldViolation::Blank(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(FieldViolation::NotAString(field)),
    }
}

fn optional_string(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::String(_)) | Some(Value::Null) | None => None,
        Some(other) => {
            tracing::debug!(field = key, value = %other, "Ignoring non-string optional field");
            None
        }
    }
}

impl ContactSubmission {
    /// Build a submission from its required parts.
    ///
    /// # Errors
    ///
    /// Returns every blank required field.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, Vec<FieldViolation>> {
        let fields = [
            (RequiredField::Name, name.into()),
            (RequiredField::Email, email.into()),
            (RequiredField::Phone, phone.into()),
        ];

        let violations: Vec<_> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| FieldViolation::Blank(*field))
            .collect();
        if !violations.is_empty() {
            return Err(violations);
        }

        let [(_, name), (_, email), (_, phone)] = fields;
        Ok(Self {
            name,
            email,
            phone,
            service: None,
            message: None,
        })
    }

    /// Set the requested service. Empty strings are dropped.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into()).filter(|s| !s.is_empty());
        self
    }

    /// Set the free-form message. Empty strings are dropped.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// The requested service, if one was given.
    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// The free-form message, if one was given.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl TryFrom<&Value> for ContactSubmission {
    type Error = Vec<FieldViolation>;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        validate(value)
    }
}
