//! Application service layer.
//!
//! Services contain the business logic for a contact submission: validation,
//! the log-only fallback, rendering and best-effort delivery. They sit between
//! the HTTP handlers and the provider client.

mod contact_service;
mod dispatcher;

pub use contact_service::{
    ContactReply, ContactService, ContactServiceImpl, PENDING_SETUP_MESSAGE, VALIDATION_MESSAGE,
};
pub use dispatcher::{DeliveryOutcome, EmailDispatcher};
