//! Async wrapper around the synchronous ResendClient.
//!
//! This module provides an async interface to the synchronous ResendClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::ResendClient;
use crate::error::{EmailApiError, EmailApiResult};
use crate::models::{OutboundEmail, SendEmailResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Anything that can hand an email to a provider.
///
/// The contact service depends on this trait rather than on
/// [`ResendClient`] so tests can substitute a recording sender.
#[async_trait]
pub trait AsyncEmailSender: Send + Sync {
    async fn send_email(&self, email: &OutboundEmail) -> EmailApiResult<SendEmailResponse>;
}

/// Async wrapper around synchronous ResendClient.
#[derive(Clone)]
pub struct AsyncResendClient {
    client: Arc<ResendClient>,
}

impl AsyncResendClient {
    pub fn new(client: ResendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncEmailSender for AsyncResendClient {
    async fn send_email(&self, email: &OutboundEmail) -> EmailApiResult<SendEmailResponse> {
        let client = self.client.clone();
        let email = email.clone();

        tokio::task::spawn_blocking(move || client.send_email(&email))
            .await
            .map_err(|e| EmailApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
