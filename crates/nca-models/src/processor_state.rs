//! Processor lifecycle state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Readiness of the video processor.
///
/// Transitions are `Uninitialized -> Ready` on startup and
/// `Ready -> Uninitialized` on shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorState {
    #[default]
    Uninitialized,
    /// Serialized as `initialized` to match the health payload
    #[serde(rename = "initialized")]
    Ready,
}

impl ProcessorState {
    pub fn is_ready(self) -> bool {
        matches!(self, ProcessorState::Ready)
    }

    /// Status label used in health responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessorState::Uninitialized => "uninitialized",
            ProcessorState::Ready => "initialized",
        }
    }
}

impl fmt::Display for ProcessorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
