//! Health check handler.

use axum::extract::State;
use axum::Json;

use nca_models::HealthResponse;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Health check endpoint.
///
/// Reports 503 until the processor has been initialized.
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let processor_state = state.processor_state().await;
    if !processor_state.is_ready() {
        return Err(ApiError::service_unavailable("Processor not initialized yet."));
    }

    Ok(Json(HealthResponse::running(processor_state)))
}
