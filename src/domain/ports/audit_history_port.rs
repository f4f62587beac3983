//! Audit history port definition.

use async_trait::async_trait;

use crate::domain::entities::AuditRecord;
use crate::domain::errors::ServiceError;

/// Port listing previously completed audits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditHistoryPort: Send + Sync {
    /// Returns recent audits, newest first.
    async fn recent_audits(&self) -> Result<Vec<AuditRecord>, ServiceError>;
}
