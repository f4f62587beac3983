//! Audit request DTOs.

use crate::domain::entities::{Score, Vin};

/// Listing verification request data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    /// Raw URL as typed by the user.
    pub url: String,
}

impl ListingRequest {
    /// Creates new listing request.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Report assembly request data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Audited VIN.
    pub vin: Vin,
    /// Engine analysis score.
    pub health_score: Score,
    /// Listing reliability score.
    pub listing_score: Score,
}

impl ReportRequest {
    /// Creates new report request.
    #[must_use]
    pub const fn new(vin: Vin, health_score: Score, listing_score: Score) -> Self {
        Self {
            vin,
            health_score,
            listing_score,
        }
    }
}
