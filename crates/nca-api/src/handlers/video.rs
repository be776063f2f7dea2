//! Video processing handler.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use tracing::{error, info};

use nca_models::{ProcessVideoResponse, ProcessingRequest};

use crate::auth::{ApiKeyAuth, ReadyProcessor};
use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::security::sanitize_for_log;

/// Process a video and return it base64-encoded.
///
/// Guards run in order: secret configured, API key valid, processor
/// ready. The body is parsed only after all three pass. The current
/// processor ignores the request contents.
pub async fn process_video(
    _auth: ApiKeyAuth,
    ReadyProcessor(processor): ReadyProcessor,
    payload: Result<Json<ProcessingRequest>, JsonRejection>,
) -> ApiResult<Json<ProcessVideoResponse>> {
    let Json(request) = payload?;

    info!(
        video_url = %request.video_url.as_deref().map(sanitize_for_log).unwrap_or_default(),
        prompt_text = %sanitize_for_log(&request.prompt_text),
        output_format = %sanitize_for_log(&request.output_format),
        "Received request to process video"
    );

    let processed = processor.process(&request).await.map_err(|e| {
        error!(processor = processor.name(), "Error during video processing: {}", e);
        metrics::record_processing_failure(processor.name());
        ApiError::from(e)
    })?;

    metrics::record_video_processed(processor.name());
    info!(
        processor = processor.name(),
        format = %processed.format,
        bytes = processed.len(),
        "Video processing complete."
    );

    Ok(Json(ProcessVideoResponse::from_bytes(&processed.bytes)))
}
