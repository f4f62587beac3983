//! Engine sound analysis results.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{Score, Vin};

/// An engine sound capture submitted for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingClip {
    /// Vehicle the clip belongs to.
    pub vin: Vin,
    /// Length of the capture.
    pub duration: Duration,
}

/// Health status of one engine subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingStatus {
    /// Operating normally.
    Good,
    /// Worth a closer look.
    Caution,
    /// Needs repair.
    Problem,
}

impl FindingStatus {
    /// Returns badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Caution => "Caution",
            Self::Problem => "Problem",
        }
    }
}

/// Per-subsystem analysis finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Subsystem name.
    pub label: String,
    /// Subsystem health.
    pub status: FindingStatus,
    /// Short explanation.
    pub detail: String,
}

impl Finding {
    /// Creates new finding.
    #[must_use]
    pub fn new(label: impl Into<String>, status: FindingStatus, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status,
            detail: detail.into(),
        }
    }
}

/// Result of analysing a recorded engine clip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineAnalysis {
    /// Overall mechanical health.
    pub overall_score: Score,
    /// One-line summary.
    pub summary: String,
    /// Per-subsystem findings.
    pub findings: Vec<Finding>,
}

impl EngineAnalysis {
    /// Returns number of findings with the given status.
    #[must_use]
    pub fn count(&self, status: FindingStatus) -> usize {
        self.findings.iter().filter(|f| f.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_by_status() {
        let analysis = EngineAnalysis {
            overall_score: Score::new(85),
            summary: "ok".to_string(),
            findings: vec![
                Finding::new("Engine Block", FindingStatus::Good, "No knocking detected"),
                Finding::new("Exhaust System", FindingStatus::Caution, "Minor rattle"),
                Finding::new("Belt System", FindingStatus::Good, "No squealing"),
            ],
        };

        assert_eq!(analysis.count(FindingStatus::Good), 2);
        assert_eq!(analysis.count(FindingStatus::Caution), 1);
        assert_eq!(analysis.count(FindingStatus::Problem), 0);
    }
}
