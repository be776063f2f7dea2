//! Application state and worker lifecycle.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info};

use nca_media::{MediaResult, VideoProcessor};
use nca_models::ProcessorState;

use crate::config::ApiConfig;

/// Shared application state.
///
/// Cloned into every handler. The processor state is written only by
/// [`AppState::start`] and [`AppState::stop`].
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    processor: Arc<dyn VideoProcessor>,
    processor_state: Arc<RwLock<ProcessorState>>,
}

impl AppState {
    /// Create state with an uninitialized processor.
    pub fn new(config: ApiConfig, processor: Arc<dyn VideoProcessor>) -> Self {
        Self {
            config,
            processor,
            processor_state: Arc::new(RwLock::new(ProcessorState::Uninitialized)),
        }
    }

    /// Create state and initialize the processor.
    ///
    /// Errors are fatal for the worker; callers should abort startup.
    pub async fn start(config: ApiConfig, processor: Arc<dyn VideoProcessor>) -> MediaResult<Self> {
        let state = Self::new(config, processor);
        state.initialize().await?;
        Ok(state)
    }

    /// Initialize the processor and mark it ready.
    pub async fn initialize(&self) -> MediaResult<()> {
        info!(processor = self.processor.name(), "Initializing NCA Toolkit processor...");

        if let Err(e) = self.processor.initialize().await {
            error!("Failed to initialize NCA Toolkit processor: {}", e);
            return Err(e);
        }

        *self.processor_state.write().await = ProcessorState::Ready;
        info!("NCA Toolkit processor initialized successfully.");
        Ok(())
    }

    /// Mark the processor uninitialized.
    pub async fn stop(&self) {
        info!("Shutting down NCA Toolkit worker.");
        *self.processor_state.write().await = ProcessorState::Uninitialized;
    }

    pub async fn processor_state(&self) -> ProcessorState {
        *self.processor_state.read().await
    }

    /// The processor, if it is ready to accept work.
    pub async fn ready_processor(&self) -> Option<Arc<dyn VideoProcessor>> {
        self.processor_state()
            .await
            .is_ready()
            .then(|| Arc::clone(&self.processor))
    }
}
