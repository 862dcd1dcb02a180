//! Operational handlers
//!
//! Service status plus liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use filmwise_service::{HealthResponse, ReadinessResponse, StatusResponse};

use crate::state::AppState;

/// GET /status
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse::available(
        state.config().app.env.as_str(),
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check: the database pool must hand out a connection
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let db_healthy = match state.service_context().pool().acquire().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check could not reach the database");
            false
        }
    };

    let response = ReadinessResponse::ready(db_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
