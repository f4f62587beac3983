//! Vehicle identity and combined audit report.

use serde::{Deserialize, Serialize};

use super::{Score, Vin};

/// Vehicle metadata resolved from a VIN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    /// Year, make, model and trim.
    pub description: String,
    /// Title brand, e.g. "Clean".
    pub title_status: String,
    /// Accidents found in records.
    pub accidents_on_record: u32,
}

/// Purchase recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    /// Overall score of 80 or more.
    SafeToBuy,
    /// Overall score from 60 to 79.
    ProceedWithCaution,
    /// Overall score below 60.
    NotRecommended,
}

impl Recommendation {
    /// Derives the recommendation from an overall score.
    #[must_use]
    pub const fn from_score(score: Score) -> Self {
        match score.grade() {
            super::Grade::Good => Self::SafeToBuy,
            super::Grade::Fair => Self::ProceedWithCaution,
            super::Grade::Poor => Self::NotRecommended,
        }
    }

    /// Returns display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SafeToBuy => "Safe to Buy",
            Self::ProceedWithCaution => "Proceed with Caution",
            Self::NotRecommended => "Not Recommended",
        }
    }
}

/// Tone of a highlight tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightTone {
    /// Favourable.
    Good,
    /// Informational.
    Info,
    /// Needs attention.
    Caution,
}

/// A key fact shown in the report grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// Tile title.
    pub label: &'static str,
    /// Tile value.
    pub value: String,
    /// Tile tone.
    pub tone: HighlightTone,
}

/// Combined audit report for one vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleReport {
    /// Audited VIN.
    pub vin: Vin,
    /// Resolved vehicle.
    pub vehicle: VehicleInfo,
    /// Engine analysis score.
    pub health_score: Score,
    /// Listing reliability score.
    pub listing_score: Score,
}

impl VehicleReport {
    /// Returns the rounded mean of health and listing scores.
    #[must_use]
    pub fn overall_score(&self) -> Score {
        Score::average(self.health_score, self.listing_score)
    }

    /// Returns the purchase recommendation.
    #[must_use]
    pub fn recommendation(&self) -> Recommendation {
        Recommendation::from_score(self.overall_score())
    }

    /// Returns the key highlight tiles.
    #[must_use]
    pub fn highlights(&self) -> Vec<Highlight> {
        let accidents = match self.vehicle.accidents_on_record {
            0 => "None".to_string(),
            n => format!("{n} found"),
        };
        let accident_tone = if self.vehicle.accidents_on_record == 0 {
            HighlightTone::Good
        } else {
            HighlightTone::Caution
        };
        let title_tone = if self.vehicle.title_status.eq_ignore_ascii_case("clean") {
            HighlightTone::Good
        } else {
            HighlightTone::Caution
        };

        vec![
            Highlight {
                label: "Engine Health",
                value: self.health_score.to_string(),
                tone: HighlightTone::Good,
            },
            Highlight {
                label: "Listing Reliability",
                value: self.listing_score.to_string(),
                tone: HighlightTone::Info,
            },
            Highlight {
                label: "Accident History",
                value: accidents,
                tone: accident_tone,
            },
            Highlight {
                label: "Title Status",
                value: self.vehicle.title_status.clone(),
                tone: title_tone,
            },
        ]
    }
}
