//! Engine analysis use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{EngineAnalysis, RecordingClip};
use crate::domain::errors::ServiceError;
use crate::domain::ports::EngineAnalysisPort;

/// Submits a recorded clip for engine health analysis.
#[derive(Clone)]
pub struct AnalyzeEngineUseCase {
    analysis_port: Arc<dyn EngineAnalysisPort>,
}

impl AnalyzeEngineUseCase {
    /// Creates new engine analysis use case.
    #[must_use]
    pub const fn new(analysis_port: Arc<dyn EngineAnalysisPort>) -> Self {
        Self { analysis_port }
    }

    /// Analyzes the clip.
    ///
    /// # Errors
    /// Returns error if the analysis service fails.
    pub async fn execute(&self, clip: &RecordingClip) -> Result<EngineAnalysis, ServiceError> {
        debug!(
            vin = %clip.vin,
            duration_secs = clip.duration.as_secs(),
            "Submitting engine recording"
        );

        let analysis = self.analysis_port.analyze(clip).await.map_err(|e| {
            warn!(error = %e, "Engine analysis failed");
            e
        })?;

        info!(
            vin = %clip.vin,
            score = analysis.overall_score.value(),
            findings = analysis.findings.len(),
            "Engine analysis complete"
        );

        Ok(analysis)
    }
}
