use async_trait::async_trait;
use contact_relay::client::AsyncEmailSender;
use contact_relay::error::{EmailApiError, EmailApiResult};
use contact_relay::models::{OutboundEmail, SendEmailResponse};
use std::sync::{Arc, Mutex};

/// Mock email sender for testing.
///
/// Records every email it is asked to send and can be configured to fail
/// with a given provider status.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    fail_with_status: Arc<Mutex<Option<u16>>>,
}

#[allow(dead_code)]
impl MockEmailSender {
    /// Create a sender that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sender whose every call fails with `status`.
    pub fn failing(status: u16) -> Self {
        let sender = Self::new();
        *sender.fail_with_status.lock().unwrap() = Some(status);
        sender
    }

    /// Emails handed to the sender so far.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of send attempts.
    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl AsyncEmailSender for MockEmailSender {
    async fn send_email(&self, email: &OutboundEmail) -> EmailApiResult<SendEmailResponse> {
        self.sent.lock().unwrap().push(email.clone());

        let fail_with_status = *self.fail_with_status.lock().unwrap();
        match fail_with_status {
            Some(status) => Err(EmailApiError::ApiError {
                status,
                message: r#"{"message":"mock failure"}"#.to_string(),
            }),
            None => Ok(SendEmailResponse {
                id: format!("mock-{}", self.call_count()),
            }),
        }
    }
}
