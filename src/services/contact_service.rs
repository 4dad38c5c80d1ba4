//! Contact service layer.
//!
//! Business logic for a single contact form submission.

use super::dispatcher::{DeliveryOutcome, EmailDispatcher};
use crate::client::{AsyncEmailSender, AsyncResendClient, ResendClient};
use crate::config::Config;
use crate::domain::{validate, ContactSubmission, FieldViolation};
use crate::error::ContactError;
use crate::metrics::Metrics;
use crate::render::{render_notification, subject_line, Branding};
use async_trait::async_trait;
use std::sync::Arc;

/// Shown when required fields are missing.
pub const VALIDATION_MESSAGE: &str = "Please fill in your name, email, and phone number.";

/// Shown when the submission was only logged.
pub const PENDING_SETUP_MESSAGE: &str = "Inquiry received (email delivery pending setup)";

/// What the caller should be told about a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactReply {
    /// Delivery was attempted. The outcome is kept for logging and tests;
    /// it never changes what the submitter sees.
    Sent(DeliveryOutcome),

    /// No provider configured; the submission was logged instead.
    PendingSetup,

    /// The payload did not have the required fields.
    Rejected(Vec<FieldViolation>),
}

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Handle a raw request body.
    ///
    /// Validation failures are a normal reply; only a body that cannot be
    /// parsed as JSON is an error.
    async fn submit(&self, body: &[u8]) -> Result<ContactReply, ContactError>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    /// `None` when no API key is configured
    dispatcher: Option<EmailDispatcher>,
    branding: Branding,
    metrics: Metrics,
}

impl ContactServiceImpl {
    pub fn new(dispatcher: Option<EmailDispatcher>, branding: Branding, metrics: Metrics) -> Self {
        Self {
            dispatcher,
            branding,
            metrics,
        }
    }

    /// Wire up the Resend client from configuration.
    ///
    /// Without an API key (or admin recipient) the service runs in
    /// log-only mode.
    pub fn from_config(config: &Config, metrics: Metrics) -> Self {
        let dispatcher = ResendClient::new(config, metrics.clone()).and_then(|client| {
            let recipient = config.admin_email.clone()?;
            let sender = Arc::new(AsyncResendClient::new(client)) as Arc<dyn AsyncEmailSender>;
            Some(EmailDispatcher::new(
                sender,
                config.sender(),
                vec![recipient],
                metrics.clone(),
            ))
        });

        Self::new(dispatcher, config.branding(), metrics)
    }

    /// Whether submissions are emailed rather than only logged.
    pub fn email_enabled(&self) -> bool {
        self.dispatcher.is_some()
    }

    async fn deliver(
        &self,
        dispatcher: &EmailDispatcher,
        submission: &ContactSubmission,
    ) -> DeliveryOutcome {
        let subject = subject_line(submission);
        let html = render_notification(submission, &self.branding);
        dispatcher
            .dispatch(&subject, html, Some(submission.email()))
            .await
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn submit(&self, body: &[u8]) -> Result<ContactReply, ContactError> {
        self.metrics.record_submission_received();

        let value: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
            self.metrics.record_submission_malformed();
            ContactError::MalformedBody(e)
        })?;

        let submission = match validate(&value) {
            Ok(submission) => submission,
            Err(violations) => {
                self.metrics.record_submission_rejected();
                tracing::debug!(?violations, "Contact submission rejected");
                return Ok(ContactReply::Rejected(violations));
            }
        };

        let Some(dispatcher) = &self.dispatcher else {
            self.metrics.record_submission_logged();
            let logged = serde_json::to_string(&submission)
                .unwrap_or_else(|_| "<invalid json>".to_string());
            tracing::info!(submission = %logged, "RESEND_API_KEY not set. Form submission logged");
            return Ok(ContactReply::PendingSetup);
        };

        let outcome = self.deliver(dispatcher, &submission).await;
        if let DeliveryOutcome::Failed { .. } = &outcome {
            tracing::warn!(
                name = %submission.name(),
                email = %submission.email(),
                "Notification not delivered; submitter still sees success"
            );
        }

        Ok(ContactReply::Sent(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EmailApiError, EmailApiResult};
    use crate::models::{OutboundEmail, SendEmailResponse};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSender {
        fail: bool,
        sent: Mutex<Vec<OutboundEmail>>,
    }

    #[async_trait]
    impl AsyncEmailSender for RecordingSender {
        async fn send_email(&self, email: &OutboundEmail) -> EmailApiResult<SendEmailResponse> {
            self.sent.lock().unwrap().push(email.clone());
            if self.fail {
                Err(EmailApiError::Timeout)
            } else {
                Ok(SendEmailResponse {
                    id: "msg_1".to_string(),
                })
            }
        }
    }

    fn service(sender: Option<Arc<RecordingSender>>) -> (ContactServiceImpl, Metrics) {
        let metrics = Metrics::new();
        let dispatcher = sender.map(|s| {
            EmailDispatcher::new(
                s,
                "Acme <onboarding@resend.dev>",
                vec!["owner@acme.test".to_string()],
                metrics.clone(),
            )
        });
        let service = ContactServiceImpl::new(dispatcher, Branding::default(), metrics.clone());
        (service, metrics)
    }

    const VALID: &[u8] = br#"{"name":"Jo","email":"jo@x.com","phone":"555"}"#;

    #[tokio::test]
    async fn test_malformed_json_is_error() {
        let (service, metrics) = service(None);
        let result = service.submit(b"{not json").await;
        assert!(matches!(result, Err(ContactError::MalformedBody(_))));
        assert_eq!(metrics.submissions_malformed_total(), 1);
    }

    #[tokio::test]
    async fn test_empty_body_is_error() {
        let (service, _) = service(None);
        assert!(service.submit(b"").await.is_err());
    }

    #[tokio::test]
    async fn test_invalid_submission_is_rejected() {
        let sender = Arc::new(RecordingSender::default());
        let (service, metrics) = service(Some(sender.clone()));

        let reply = service.submit(br#"{"name":"Jo","email":" "}"#).await.unwrap();
        assert!(matches!(reply, ContactReply::Rejected(ref v) if v.len() == 2));
        assert_eq!(metrics.submissions_rejected_total(), 1);
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_validation_runs_before_credential_check() {
        let (service, metrics) = service(None);
        let reply = service.submit(b"[]").await.unwrap();
        assert_eq!(reply, ContactReply::Rejected(vec![FieldViolation::NotAnObject]));
        assert_eq!(metrics.submissions_logged_total(), 0);
    }

    #[tokio::test]
    async fn test_without_dispatcher_logs_only() {
        let (service, metrics) = service(None);
        assert!(!service.email_enabled());

        let reply = service.submit(VALID).await.unwrap();
        assert_eq!(reply, ContactReply::PendingSetup);
        assert_eq!(metrics.submissions_logged_total(), 1);
        assert_eq!(metrics.http_requests_total(), 0);
    }

    #[tokio::test]
    async fn test_sends_subject_html_and_reply_to() {
        let sender = Arc::new(RecordingSender::default());
        let (service, _) = service(Some(sender.clone()));

        let body = br#"{"name":"Jo <b>","email":"jo@x.com","phone":"555","service":"Repair"}"#;
        let reply = service.submit(body).await.unwrap();
        assert_eq!(
            reply,
            ContactReply::Sent(DeliveryOutcome::Delivered {
                id: "msg_1".to_string()
            })
        );

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "New Lead: Repair from Jo <b>");
        assert!(sent[0].html.contains("Jo &lt;b&gt;"));
        assert_eq!(sent[0].reply_to.as_deref(), Some("jo@x.com"));
    }

    #[tokio::test]
    async fn test_delivery_failure_still_replies_sent() {
        let sender = Arc::new(RecordingSender {
            fail: true,
            ..Default::default()
        });
        let (service, metrics) = service(Some(sender));

        let reply = service.submit(VALID).await.unwrap();
        assert!(matches!(
            reply,
            ContactReply::Sent(DeliveryOutcome::Failed { .. })
        ));
        assert_eq!(metrics.emails_failed_total(), 1);
    }

    #[test]
    fn test_from_config_without_key_is_log_only() {
        let service = ContactServiceImpl::from_config(&Config::default(), Metrics::new());
        assert!(!service.email_enabled());
    }

    #[test]
    fn test_from_config_with_key_sends_email() {
        let config = Config {
            resend_api_key: Some("re_test".to_string()),
            admin_email: Some("owner@acme.test".to_string()),
            ..Default::default()
        };
        let service = ContactServiceImpl::from_config(&config, Metrics::new());
        assert!(service.email_enabled());
    }
}
