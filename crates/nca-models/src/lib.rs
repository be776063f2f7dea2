//! Shared data models for the NCA Toolkit worker.
//!
//! This crate provides Serde-serializable types for:
//! - Video processing requests
//! - Processor lifecycle state
//! - Health and processing response bodies

pub mod processor_state;
pub mod request;
pub mod response;

// Re-export common types
pub use processor_state::ProcessorState;
pub use request::{ProcessingRequest, DEFAULT_OUTPUT_FORMAT, DEFAULT_PROMPT_TEXT};
pub use response::{HealthResponse, ProcessVideoResponse};
