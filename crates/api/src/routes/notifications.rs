//! Tier notification routes.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use uuid::Uuid;

use tiercast_common::error::AppError;
use tiercast_common::types::{NotifyRequest, NotifyResponse};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/notifications/by-type", post(notify_by_type))
}

/// POST /api/notifications/by-type: notify every active user of a tier.
///
/// Per-user delivery failures are reported in `failed` with a 200 status.
async fn notify_by_type(
    State(state): State<AppState>,
    Json(req): Json<NotifyRequest>,
) -> Result<Json<NotifyResponse>, AppError> {
    let request_id = Uuid::new_v4();
    tracing::info!(
        request_id = %request_id,
        user_type = %req.user_type,
        "Notify-by-type request received"
    );

    let response = state.notify.notify_by_type(&req).await.map_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Notify-by-type request rejected");
        e
    })?;

    tracing::info!(
        request_id = %request_id,
        succeeded = response.succeeded.len(),
        failed = response.failed.len(),
        "Notify-by-type request completed"
    );

    Ok(Json(response))
}
