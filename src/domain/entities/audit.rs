//! Past audit records.

use chrono::NaiveDate;

use super::{Recommendation, Score};

/// Summary of a completed audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    /// Record identifier.
    pub id: String,
    /// Year, make and model.
    pub vehicle: String,
    /// Audited VIN as recorded.
    pub vin: String,
    /// Audit date.
    pub date: NaiveDate,
    /// Engine health score.
    pub health_score: Score,
    /// Listing reliability score.
    pub listing_score: Score,
    /// Recommendation issued.
    pub recommendation: Recommendation,
}

impl AuditRecord {
    /// Returns date formatted like "Feb 18, 2026".
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}
