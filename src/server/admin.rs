use crate::menu::SITE_NAME;
use crate::security::is_revalidation_authorized;
use crate::server::{AppError, AppState};
use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "site": SITE_NAME }))
}

#[derive(Debug, Default, Deserialize)]
struct RevalidateRequest {
    #[serde(default)]
    tags: Vec<String>,
}

/// `POST /api/revalidate` with an optional `{"tags": [...]}` body.
pub async fn revalidate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    if !is_revalidation_authorized(state.config.revalidate_secret.as_deref(), &headers) {
        warn!("Rejected revalidation request with missing or invalid secret");
        return Err(AppError::Unauthorized);
    }

    let request: RevalidateRequest = if body.is_empty() {
        RevalidateRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid revalidation request: {}", e)))?
    };

    let dropped = state.wordpress.revalidate(&request.tags)?;
    info!("Revalidation dropped {} cached responses", dropped);

    Ok(Json(json!({ "revalidated": true, "entries": dropped })))
}
