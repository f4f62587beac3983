//! Report assembly use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::ReportRequest;
use crate::domain::entities::VehicleReport;
use crate::domain::errors::ServiceError;
use crate::domain::ports::VehicleLookupPort;

/// Combines vehicle lookup with audit scores into a report.
#[derive(Clone)]
pub struct BuildReportUseCase {
    lookup_port: Arc<dyn VehicleLookupPort>,
}

impl BuildReportUseCase {
    /// Creates new report use case.
    #[must_use]
    pub const fn new(lookup_port: Arc<dyn VehicleLookupPort>) -> Self {
        Self { lookup_port }
    }

    /// Builds the report for the requested VIN.
    ///
    /// # Errors
    /// Returns error if the vehicle lookup fails.
    pub async fn execute(&self, request: ReportRequest) -> Result<VehicleReport, ServiceError> {
        debug!(vin = %request.vin, "Looking up vehicle");

        let vehicle = self.lookup_port.lookup(&request.vin).await.map_err(|e| {
            warn!(vin = %request.vin, error = %e, "Vehicle lookup failed");
            e
        })?;

        let report = VehicleReport {
            vin: request.vin,
            vehicle,
            health_score: request.health_score,
            listing_score: request.listing_score,
        };

        info!(
            vin = %report.vin,
            overall = report.overall_score().value(),
            recommendation = report.recommendation().label(),
            "Report built"
        );

        Ok(report)
    }
}
