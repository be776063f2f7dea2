//! Processor abstraction.

use async_trait::async_trait;
use nca_models::ProcessingRequest;

use crate::error::MediaResult;

/// Output of a processing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedVideo {
    /// Encoded video bytes
    pub bytes: Vec<u8>,
    /// Container format of `bytes`
    pub format: String,
}

impl ProcessedVideo {
    pub fn new(bytes: impl Into<Vec<u8>>, format: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            format: format.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A video processing backend.
///
/// `initialize` runs once during worker startup; a failure there aborts
/// startup. `process` is called once per authorized request.
#[async_trait]
pub trait VideoProcessor: Send + Sync {
    /// Get the processor name.
    fn name(&self) -> &'static str;

    /// Prepare tools or models before the worker accepts requests.
    async fn initialize(&self) -> MediaResult<()>;

    /// Process a single request.
    async fn process(&self, request: &ProcessingRequest) -> MediaResult<ProcessedVideo>;
}
