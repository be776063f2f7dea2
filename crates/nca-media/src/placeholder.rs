//! Placeholder processor.
//!
//! Stands in for real video editing. Every call returns the same tiny
//! WebM blob; the request contents are accepted but not used.

use async_trait::async_trait;
use nca_models::ProcessingRequest;
use tracing::debug;

use crate::error::MediaResult;
use crate::processor::{ProcessedVideo, VideoProcessor};

/// Minimal 1x1 transparent WebM clip.
pub static PLACEHOLDER_WEBM: &[u8] = include_bytes!("../assets/placeholder.webm");

/// Container format of [`PLACEHOLDER_WEBM`].
const PLACEHOLDER_FORMAT: &str = "webm";

/// Processor returning [`PLACEHOLDER_WEBM`] for every request.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderProcessor;

impl PlaceholderProcessor {
    /// Create a new placeholder processor.
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlaceholderProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoProcessor for PlaceholderProcessor {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    async fn initialize(&self) -> MediaResult<()> {
        debug!(bytes = PLACEHOLDER_WEBM.len(), "Placeholder payload loaded");
        Ok(())
    }

    async fn process(&self, request: &ProcessingRequest) -> MediaResult<ProcessedVideo> {
        debug!(
            requested_format = %request.output_format,
            "Returning placeholder payload"
        );
        Ok(ProcessedVideo::new(PLACEHOLDER_WEBM, PLACEHOLDER_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine};

    /// Standard padded encoding of the placeholder clip.
    const PLACEHOLDER_WEBM_BASE64: &str = "GkXfoEOKDBADACEQIEPjgDQoWJvAGChJAAAB9FOhAAAB9FMlSAEHOYlVSUwBzgYCgQIyJgIBAAIBAAECgEAAQJzggEBAAQBAEAABgWJkIMSAAAAAAFqJ/sDAAAAAAAAIwECQAUJgYGCgQEBAAEBAAAQECAgICAgICAQAAQECAgICAgICAAAK/gECQASJiYKCgQEBAAEBAAAQECAgICAgICAgICAgICAgICAgICAAAK/gECQAKiYiCgQEBAAEBAAAQECAgICAgICAgICAgICAgICAgICAgICAgICAQAAQECAgICAgICAgAAAK/gECQACJigKCgQEBAAEBAAAQECAgICAgICAgICAgICAgICAgICAgICAgICAgICAgICAgICAgAAA=";

    #[test]
    fn test_payload_is_webm() {
        assert_eq!(PLACEHOLDER_WEBM.len(), 290);
        // EBML magic prefix
        assert_eq!(&PLACEHOLDER_WEBM[..3], &[0x1a, 0x45, 0xdf]);
    }

    #[test]
    fn test_payload_bytes_are_pinned() {
        assert_eq!(STANDARD.encode(PLACEHOLDER_WEBM), PLACEHOLDER_WEBM_BASE64);
        assert_eq!(STANDARD.decode(PLACEHOLDER_WEBM_BASE64).unwrap(), PLACEHOLDER_WEBM);
    }

    #[tokio::test]
    async fn test_output_ignores_request() {
        let processor = PlaceholderProcessor::new();
        processor.initialize().await.unwrap();

        let first = processor.process(&ProcessingRequest::default()).await.unwrap();
        let second = processor
            .process(&ProcessingRequest {
                video_url: Some("http://x/v.mp4".to_string()),
                prompt_text: "hi".to_string(),
                output_format: "gif".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.bytes, PLACEHOLDER_WEBM);
        assert_eq!(first.format, "webm");
        assert!(!first.is_empty());
    }
}
