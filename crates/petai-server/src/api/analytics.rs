use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use petai_core::{AnalyticsStats, NewEvent};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct RecordAck {
    ok: bool,
}

// Analytics routes return bare payloads, not the `{data, meta}` envelope;
// dashboards read `totalEvents` at the top level. Errors still use `ApiError`.

/// Accepts one interaction event and answers `{"ok": true}`. Unknown event
/// kinds fail body deserialization and surface as `validation_error`.
pub(super) async fn record_event(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<NewEvent>, JsonRejection>,
) -> Result<Json<RecordAck>, ApiError> {
    let Json(new) = payload.map_err(|e| {
        tracing::debug!(error = %e, "rejected analytics payload");
        ApiError::new(req_id.0.clone(), "validation_error", e.body_text())
    })?;

    state.analytics.record(new).await.map_err(|e| {
        tracing::error!(error = %e, "failed to record analytics event");
        ApiError::new(req_id.0, "internal_error", "failed to record event")
    })?;

    Ok(Json(RecordAck { ok: true }))
}

pub(super) async fn stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<AnalyticsStats>, ApiError> {
    let stats = state.analytics.stats().await.map_err(|e| {
        tracing::error!(error = %e, "failed to read analytics log");
        ApiError::new(req_id.0, "internal_error", "failed to read analytics")
    })?;
    Ok(Json(stats))
}
