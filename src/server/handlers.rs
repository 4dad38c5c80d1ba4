//! Route handlers for the contact endpoint.

use super::AppState;
use crate::error::{ContactError, GENERIC_FAILURE_MESSAGE};
use crate::models::ContactResponse;
use crate::services::{ContactReply, PENDING_SETUP_MESSAGE, VALIDATION_MESSAGE};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::any::Any;

/// Submit the contact form.
///
/// POST /api/contact
///
/// The body is read as raw bytes so that a missing or wrong `Content-Type`
/// and invalid JSON both end up on the same generic 500 path.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            state.metrics.record_submission_received();
            state.metrics.record_submission_malformed();
            return ContactError::Internal(rejection.body_text()).into_response();
        }
    };

    match state.service.submit(&body).await {
        Ok(reply) => reply.into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

impl IntoResponse for ContactReply {
    fn into_response(self) -> Response {
        match self {
            // Delivery failures were already logged; the submitter sees success either way.
            ContactReply::Sent(_) => (StatusCode::OK, Json(ContactResponse::ok())).into_response(),
            ContactReply::PendingSetup => (
                StatusCode::OK,
                Json(ContactResponse::ok_with_message(PENDING_SETUP_MESSAGE)),
            )
                .into_response(),
            ContactReply::Rejected(_) => (
                StatusCode::BAD_REQUEST,
                Json(ContactResponse::error(VALIDATION_MESSAGE)),
            )
                .into_response(),
        }
    }
}

/// Turn a handler panic into the generic 500 body.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "Contact handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ContactResponse::error(GENERIC_FAILURE_MESSAGE)),
    )
        .into_response()
}
