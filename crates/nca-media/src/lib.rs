//! Video processing for the NCA Toolkit worker.
//!
//! This crate provides:
//! - The `VideoProcessor` seam the HTTP gateway calls into
//! - Media error types
//! - A placeholder processor returning a fixed WebM payload

pub mod error;
pub mod placeholder;
pub mod processor;

pub use error::{MediaError, MediaResult};
pub use placeholder::{PlaceholderProcessor, PLACEHOLDER_WEBM};
pub use processor::{ProcessedVideo, VideoProcessor};
