use crate::server::AppState;
use crate::strapi::models::{ContactSubmission, SubmissionRecord};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info};

pub const SUCCESS_MESSAGE: &str = "Your message has been sent successfully!";
pub const MISSING_FIELDS: &str = "Missing required fields";
pub const PROCESSING_FAILED: &str = "Failed to process your request. Please try again.";

fn present(value: &Option<String>) -> bool {
    value.as_deref().map(|v| !v.is_empty()).unwrap_or(false)
}

fn reply(status: StatusCode, body: serde_json::Value) -> Response {
    (status, Json(body)).into_response()
}

/// `POST /api/contact`
///
/// Persisting to Strapi is best-effort: a failure there is logged and the
/// visitor still gets a success response.
pub async fn submit(State(state): State<AppState>, body: Bytes) -> Response {
    let submission: ContactSubmission = match serde_json::from_slice(&body) {
        Ok(submission) => submission,
        Err(e) => {
            error!("Contact form error: {}", e);
            return reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": PROCESSING_FAILED }),
            );
        }
    };

    if !present(&submission.name) || !present(&submission.email) || !present(&submission.message) {
        return reply(StatusCode::BAD_REQUEST, json!({ "error": MISSING_FIELDS }));
    }

    let record = SubmissionRecord::from_submission(&submission);

    if let Err(e) = state.strapi.create_contact_submission(&record).await {
        error!("Strapi submission failed: {}", e);
    }

    notify(&state.config.contact_email, &record);

    reply(
        StatusCode::OK,
        json!({ "success": true, "message": SUCCESS_MESSAGE }),
    )
}

/// No mail transport is configured; the notification is logged.
fn notify(to: &str, record: &SubmissionRecord) {
    info!(
        to = %to,
        from = %record.email,
        subject = %record.subject,
        "Email would be sent: New Contact Form from {}",
        record.name
    );
}
