//! Response bodies.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::processor_state::ProcessorState;

/// Status reported by a running worker.
pub const WORKER_RUNNING: &str = "worker running";

/// Health check body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub processor_status: ProcessorState,
}

impl HealthResponse {
    /// Body returned while the processor is ready.
    pub fn running(state: ProcessorState) -> Self {
        Self {
            status: WORKER_RUNNING.to_string(),
            processor_status: state,
        }
    }
}

/// Processed video, base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessVideoResponse {
    pub processed_video_base64: String,
}

impl ProcessVideoResponse {
    /// Encode raw video bytes (standard alphabet, padded).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            processed_video_base64: STANDARD.encode(bytes),
        }
    }

    /// Decode the payload back into bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.processed_video_base64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_body_shape() {
        let body = serde_json::to_value(HealthResponse::running(ProcessorState::Ready)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "worker running", "processor_status": "initialized"})
        );
    }

    #[test]
    fn test_process_response_encodes_padded() {
        let resp = ProcessVideoResponse::from_bytes(b"\x1aE\xdf");
        assert_eq!(resp.processed_video_base64, "GkXf");

        let resp = ProcessVideoResponse::from_bytes(b"ab");
        assert_eq!(resp.processed_video_base64, "YWI=");
        assert_eq!(resp.decode().unwrap(), b"ab");
    }
}
