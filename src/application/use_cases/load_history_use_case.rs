//! Audit history use case implementation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::AuditRecord;
use crate::domain::errors::ServiceError;
use crate::domain::ports::AuditHistoryPort;

/// Loads recent audits, newest first.
#[derive(Clone)]
pub struct LoadHistoryUseCase {
    history_port: Arc<dyn AuditHistoryPort>,
}

impl LoadHistoryUseCase {
    /// Creates new history use case.
    #[must_use]
    pub const fn new(history_port: Arc<dyn AuditHistoryPort>) -> Self {
        Self { history_port }
    }

    /// Returns recent audits sorted by date, newest first.
    ///
    /// # Errors
    /// Returns error if the history source fails.
    pub async fn execute(&self) -> Result<Vec<AuditRecord>, ServiceError> {
        let mut audits = self.history_port.recent_audits().await.map_err(|e| {
            warn!(error = %e, "Failed to load audit history");
            e
        })?;

        audits.sort_by(|a, b| b.date.cmp(&a.date));
        debug!(count = audits.len(), "Audit history loaded");

        Ok(audits)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::entities::{Recommendation, Score};
    use crate::domain::ports::mocks::MockAuditHistoryPort;

    fn record(id: &str, month: u32, day: u32) -> AuditRecord {
        AuditRecord {
            id: id.to_string(),
            vehicle: "Vehicle".to_string(),
            vin: "1HGBH41JXMN109186".to_string(),
            date: NaiveDate::from_ymd_opt(2026, month, day).unwrap(),
            health_score: Score::new(80),
            listing_score: Score::new(80),
            recommendation: Recommendation::SafeToBuy,
        }
    }

    #[tokio::test]
    async fn test_sorted_newest_first() {
        let mut port = MockAuditHistoryPort::new();
        port.expect_recent_audits()
            .returning(|| Ok(vec![record("a", 1, 28), record("b", 2, 18), record("c", 2, 12)]));

        let audits = LoadHistoryUseCase::new(Arc::new(port))
            .execute()
            .await
            .unwrap();

        let ids: Vec<&str> = audits.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }
}
