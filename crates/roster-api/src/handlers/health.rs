//! Health check handler.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = state.employee_service.store_healthy().await;

    Json(HealthResponse {
        status: if store_healthy { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.config.database.provider.clone(),
        store_healthy,
        started_at: state.started_at,
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
    })
}
