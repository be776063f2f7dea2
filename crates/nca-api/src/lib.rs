//! Axum HTTP gateway for the NCA Toolkit worker.
//!
//! This crate provides:
//! - `GET /health` reporting processor readiness
//! - `POST /process-video` guarded by a shared-secret `X-API-KEY` header
//! - Explicit startup/shutdown lifecycle for the processor
//! - Request IDs, security headers and Prometheus metrics

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod security;
pub mod state;

pub use config::{ApiConfig, ApiKeySource};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
