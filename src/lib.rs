//! Contact Relay - a contact form endpoint that forwards submissions as HTML email.
//!
//! A single `POST /api/contact` handler validates a JSON submission, renders an
//! HTML notification and hands it to the Resend API. Delivery is best-effort:
//! provider failures are logged but the submitter always sees success. Without
//! an API key the relay runs in log-only mode.
//!
//! # Architecture
//!
//! - **domain**: Validated contact submission and email value object
//! - **render**: HTML escaping, notification body and subject line
//! - **client**: HTTP client for the Resend API
//! - **services**: Submission orchestration and best-effort dispatch
//! - **server**: axum router and request handlers
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **metrics**: Submission and provider call counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod render;
pub mod server;
pub mod services;

pub use client::{AsyncEmailSender, AsyncResendClient, ResendClient};
pub use config::Config;
pub use domain::{validate, ContactSubmission, FieldViolation};
pub use error::{ConfigError, ContactError, EmailApiError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{ContactResponse, OutboundEmail, SendEmailResponse};
pub use render::{escape_html, render_notification, subject_line, Branding};
pub use server::{router, AppState};
pub use services::{
    ContactReply, ContactService, ContactServiceImpl, DeliveryOutcome, EmailDispatcher,
};
