//! Notification subject and HTML body.

use super::escape::escape_html;
use crate::domain::ContactSubmission;

/// Header color used when none is configured.
pub const DEFAULT_BRAND_COLOR: &str = "#1d4ed8";

/// Business-specific styling baked into every notification.
///
/// The business name is not part of the body; it only appears in the
/// sender display name (see `Config::sender`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    /// Header background color (any CSS color)
    pub brand_color: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            brand_color: DEFAULT_BRAND_COLOR.to_string(),
        }
    }
}

/// Subject line for the notification.
///
/// Not HTML, so nothing here is escaped.
pub fn subject_line(submission: &ContactSubmission) -> String {
    match submission.service() {
        Some(service) => format!("New Lead: {} from {}", service, submission.name()),
        None => format!("New Contact: {}", submission.name()),
    }
}

/// Render the HTML body for a submission.
///
/// The service and message blocks are left out entirely when absent.
pub fn render_notification(submission: &ContactSubmission, branding: &Branding) -> String {
    let name = escape_html(submission.name());
    let email = escape_html(submission.email());
    let phone = escape_html(submission.phone());

    let service_block = submission
        .service()
        .map(|service| {
            format!(
                r#"
        <div style="margin-bottom: 16px; padding: 12px 16px; background: #eff6ff; border-radius: 8px;">
          <p style="margin: 0 0 4px; color: #706d85; font-size: 13px;">Service Requested</p>
          <p style="margin: 0; font-weight: 600;">{}</p>
        </div>"#,
                escape_html(service)
            )
        })
        .unwrap_or_default();

    let message_block = submission
        .message()
        .map(|message| {
            format!(
                r#"
        <div style="padding: 16px; background: #f3f3f6; border-radius: 8px;">
          <p style="margin: 0 0 4px; color: #706d85; font-size: 13px;">Message</p>
          <p style="margin: 0; white-space: pre-wrap;">{}</p>
        </div>"#,
                escape_html(message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"
    <div style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 600px; margin: 0 auto;">
      <div style="background: {color}; padding: 20px 24px; border-radius: 12px 12px 0 0;">
        <h1 style="color: white; margin: 0; font-size: 18px;">New Contact Form Submission</h1>
      </div>
      <div style="border: 1px solid #e8e7ed; border-top: none; padding: 24px; border-radius: 0 0 12px 12px;">
        <div style="margin-bottom: 16px;">
          <p style="margin: 0 0 4px; color: #706d85; font-size: 13px;">Customer Details</p>
          <p style="margin: 4px 0; font-weight: 600;">{name}</p>
          <p style="margin: 4px 0;"><a href="mailto:{email}">{email}</a></p>
          <p style="margin: 4px 0;"><a href="tel:{phone}">{phone}</a></p>
        </div>{service_block}{message_block}
      </div>
    </div>"#,
        color = branding.brand_color,
    )
}
