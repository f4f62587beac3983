//! Listing verification port definition.

use async_trait::async_trait;

use crate::domain::entities::{ListingReport, ListingUrl};
use crate::domain::errors::ServiceError;

/// Port cross-checking a listing against vehicle records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingVerificationPort: Send + Sync {
    /// Returns field-level match and mismatch records for the listing.
    async fn verify(&self, url: &ListingUrl) -> Result<ListingReport, ServiceError>;
}
