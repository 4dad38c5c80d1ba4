//! Domain value objects and types.
//!
//! This module contains the validated contact submission and the type-safe
//! email address used for configured sender/recipient addresses. Both are
//! validated at construction time so invalid data cannot be represented.

pub mod email;
pub mod errors;
pub mod submission;

pub use email::EmailAddress;
pub use errors::{FieldViolation, RequiredField, ValidationError};
pub use submission::{validate, ContactSubmission};
