//! Email payload exchanged with the Resend API.

use serde::{Deserialize, Serialize};

/// A single email as accepted by `POST /emails`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutboundEmail {
    /// Sender, e.g. `Acme Plumbing <onboarding@resend.dev>`
    pub from: String,

    /// Recipient addresses
    pub to: Vec<String>,

    pub subject: String,

    /// Rendered HTML body
    pub html: String,

    /// Address replies should go to (the submitter)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// Successful response from `POST /emails`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SendEmailResponse {
    /// Provider-assigned message ID
    pub id: String,
}
