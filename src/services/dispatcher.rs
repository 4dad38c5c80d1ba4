//! Best-effort email delivery.
//!
//! The dispatcher never fails: provider errors become
//! [`DeliveryOutcome::Failed`], which is logged here and left for the caller
//! to ignore or inspect.

use crate::client::AsyncEmailSender;
use crate::metrics::Metrics;
use crate::models::OutboundEmail;
use std::sync::Arc;

/// Result of a single delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The provider accepted the email.
    Delivered {
        /// Provider message ID (empty if the provider did not return one)
        id: String,
    },

    /// The provider rejected the email or could not be reached.
    Failed {
        /// HTTP status, when the provider answered
        status: Option<u16>,
        reason: String,
    },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

/// Sends notifications from a fixed sender to fixed recipients.
#[derive(Clone)]
pub struct EmailDispatcher {
    sender: Arc<dyn AsyncEmailSender>,
    from: String,
    recipients: Vec<String>,
    metrics: Metrics,
}

impl EmailDispatcher {
    pub fn new(
        sender: Arc<dyn AsyncEmailSender>,
        from: impl Into<String>,
        recipients: Vec<String>,
        metrics: Metrics,
    ) -> Self {
        Self {
            sender,
            from: from.into(),
            recipients,
            metrics,
        }
    }

    /// Attempt delivery once.
    ///
    /// `reply_to` is set so replies reach the person who filled in the form.
    pub async fn dispatch(
        &self,
        subject: &str,
        html: String,
        reply_to: Option<&str>,
    ) -> DeliveryOutcome {
        let email = OutboundEmail {
            from: self.from.clone(),
            to: self.recipients.clone(),
            subject: subject.to_string(),
            html,
            reply_to: reply_to.map(str::to_string),
        };

        match self.sender.send_email(&email).await {
            Ok(receipt) => {
                self.metrics.record_email_delivered();
                tracing::info!(id = %receipt.id, subject = %subject, "Notification email sent");
                DeliveryOutcome::Delivered { id: receipt.id }
            }
            Err(e) => {
                self.metrics.record_email_failed();
                let status = e.status();
                tracing::error!(status = ?status, error = %e, "Resend API error");
                DeliveryOutcome::Failed {
                    status,
                    reason: e.to_string(),
                }
            }
        }
    }
}
