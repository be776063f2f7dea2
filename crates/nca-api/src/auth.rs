//! Shared-secret authentication and readiness guards.
//!
//! Both guards are request-part extractors, so they run before the
//! JSON body is parsed: an unauthenticated call is rejected no matter
//! what it sends.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracing::{error, warn};

use nca_media::VideoProcessor;

use crate::config::API_SECRET_KEY_VAR;
use crate::error::ApiError;
use crate::metrics;
use crate::security::api_keys_match;
use crate::state::AppState;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Proof that the request carried the configured shared secret.
#[derive(Debug, Clone, Copy)]
pub struct ApiKeyAuth;

#[async_trait]
impl FromRequestParts<AppState> for ApiKeyAuth {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.api_key.current() else {
            error!("{} is not set; rejecting request", API_SECRET_KEY_VAR);
            return Err(ApiError::misconfigured(API_SECRET_KEY_VAR));
        };

        let provided = parts
            .headers
            .get(API_KEY_HEADER)
            .map(|v| v.as_bytes())
            .unwrap_or_default();

        if api_keys_match(provided, expected.as_bytes()) {
            Ok(ApiKeyAuth)
        } else {
            warn!(
                path = %parts.uri.path(),
                header_present = !provided.is_empty(),
                "Rejected request with invalid API key"
            );
            metrics::record_auth_failure(parts.uri.path());
            Err(ApiError::unauthorized("Invalid API Key."))
        }
    }
}

/// The processor, extracted only while it is ready.
pub struct ReadyProcessor(pub Arc<dyn VideoProcessor>);

#[async_trait]
impl FromRequestParts<AppState> for ReadyProcessor {
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        state
            .ready_processor()
            .await
            .map(ReadyProcessor)
            .ok_or_else(|| ApiError::service_unavailable("NCA Toolkit processor is not initialized."))
    }
}
