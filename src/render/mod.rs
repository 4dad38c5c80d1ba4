//! HTML notification rendering.
//!
//! Turns a validated [`ContactSubmission`](crate::domain::ContactSubmission)
//! into the subject line and HTML body of the notification email. Every
//! submitter-supplied value is escaped individually before interpolation.

pub mod escape;
pub mod notification;

pub use escape::escape_html;
pub use notification::{render_notification, subject_line, Branding, DEFAULT_BRAND_COLOR};
