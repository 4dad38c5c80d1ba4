//! Wire models for the contact relay.
//!
//! This module contains the payload sent to the email provider and the JSON
//! bodies returned to the contact form.

pub mod email;
pub mod response;

pub use email::{OutboundEmail, SendEmailResponse};
pub use response::ContactResponse;
