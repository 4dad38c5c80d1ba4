//! Test doubles shared by the integration tests.

mod mock_email_sender;

#[allow(unused_imports)]
pub use mock_email_sender::MockEmailSender;
