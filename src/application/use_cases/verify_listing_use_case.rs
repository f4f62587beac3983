//! Listing verification use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::ListingRequest;
use crate::domain::entities::{ListingReport, ListingUrl};
use crate::domain::errors::ServiceError;
use crate::domain::ports::ListingVerificationPort;

/// Cross-checks a listing against vehicle records.
#[derive(Clone)]
pub struct VerifyListingUseCase {
    verification_port: Arc<dyn ListingVerificationPort>,
}

impl VerifyListingUseCase {
    /// Creates new listing verification use case.
    #[must_use]
    pub const fn new(verification_port: Arc<dyn ListingVerificationPort>) -> Self {
        Self { verification_port }
    }

    /// Verifies the listing at the requested URL.
    ///
    /// # Errors
    /// Returns error if the URL is blank or the verification service fails.
    pub async fn execute(&self, request: ListingRequest) -> Result<ListingReport, ServiceError> {
        let url = ListingUrl::new(&request.url).map_err(|e| {
            warn!("Blank listing URL rejected");
            e
        })?;

        debug!(url = %url.as_str(), "Verifying listing");

        let report = self.verification_port.verify(&url).await.map_err(|e| {
            warn!(error = %e, "Listing verification failed");
            e
        })?;

        info!(
            url = %url.as_str(),
            verified = report.verified_count(),
            flagged = report.flagged_count(),
            reliability = report.reliability_score.value(),
            "Listing verified"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ListingCheck, Score};
    use crate::domain::ports::mocks::MockListingVerificationPort;

    #[tokio::test]
    async fn test_blank_url_never_reaches_port() {
        let mut port = MockListingVerificationPort::new();
        port.expect_verify().never();

        let use_case = VerifyListingUseCase::new(Arc::new(port));
        let result = use_case.execute(ListingRequest::new("   ")).await;

        assert_eq!(result, Err(ServiceError::EmptyListingUrl));
    }

    #[tokio::test]
    async fn test_url_is_trimmed_before_verification() {
        let mut port = MockListingVerificationPort::new();
        port.expect_verify()
            .withf(|url| url.as_str() == "https://example.com/car")
            .times(1)
            .returning(|url| {
                Ok(ListingReport {
                    url: url.clone(),
                    checks: vec![
                        ListingCheck::verified("Mileage", "45,200 mi"),
                        ListingCheck::flagged("Accident History", "No accidents", "1 accident"),
                    ],
                    reliability_score: Score::new(90),
                })
            });

        let use_case = VerifyListingUseCase::new(Arc::new(port));
        let report = use_case
            .execute(ListingRequest::new("  https://example.com/car "))
            .await
            .unwrap();

        assert_eq!(report.verified_count(), 1);
        assert_eq!(report.flagged_count(), 1);
    }
}
