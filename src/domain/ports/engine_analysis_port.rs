//! Engine audio analysis port definition.

use async_trait::async_trait;

use crate::domain::entities::{EngineAnalysis, RecordingClip};
use crate::domain::errors::ServiceError;

/// Port analysing a recorded engine clip.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EngineAnalysisPort: Send + Sync {
    /// Returns per-subsystem findings and an overall score for the clip.
    async fn analyze(&self, clip: &RecordingClip) -> Result<EngineAnalysis, ServiceError>;
}
