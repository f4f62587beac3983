//! In-process audit backend serving fixed demo data.

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use crate::domain::entities::{
    AuditRecord, EngineAnalysis, Finding, FindingStatus, ListingCheck, ListingReport, ListingUrl,
    Recommendation, RecordingClip, Score, VehicleInfo, Vin,
};
use crate::domain::errors::ServiceError;
use crate::domain::ports::{
    AuditHistoryPort, EngineAnalysisPort, ListingVerificationPort, VehicleLookupPort,
};

/// VIN filled in by the simulated scan.
pub const SCANNED_VIN: &str = "1HGBH41JXMN109186";

/// VINs offered as quick inserts on the entry screen.
pub const DEMO_VINS: [&str; 2] = ["1HGBH41JXMN109186", "5YJSA1DN5DFP14705"];

/// Listing URL offered as a quick insert.
pub const DEMO_LISTING_URL: &str = "https://www.cars.com/listing/2020-honda-accord";

/// Audit backend answering every request with the same demo data.
///
/// Nothing is looked up, recorded, or fetched; the clip duration and URL only
/// show up in logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoAuditBackend;

impl DemoAuditBackend {
    /// Creates new demo backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn demo_vehicle(vin: &Vin) -> VehicleInfo {
    let (description, title_status, accidents_on_record) = match vin.as_str() {
        "5YJSA1DN5DFP14705" => ("2013 Tesla Model S P85", "Clean", 0),
        "4T1B11HK5KU123456" => ("2019 Toyota Camry SE", "Clean", 1),
        "WBA5R1C57M7B12345" => ("2021 BMW 3 Series", "Clean", 0),
        _ => ("2020 Honda Accord EX-L", "Clean", 1),
    };

    VehicleInfo {
        description: description.to_string(),
        title_status: title_status.to_string(),
        accidents_on_record,
    }
}

fn demo_audit(
    id: &str,
    vehicle: &str,
    vin: &str,
    (year, month, day): (i32, u32, u32),
    scores: (u8, u8),
    recommendation: Recommendation,
) -> Option<AuditRecord> {
    Some(AuditRecord {
        id: id.to_string(),
        vehicle: vehicle.to_string(),
        vin: vin.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day)?,
        health_score: Score::new(scores.0),
        listing_score: Score::new(scores.1),
        recommendation,
    })
}

#[async_trait]
impl VehicleLookupPort for DemoAuditBackend {
    async fn lookup(&self, vin: &Vin) -> Result<VehicleInfo, ServiceError> {
        debug!(vin = %vin, "Demo vehicle lookup");
        Ok(demo_vehicle(vin))
    }
}

#[async_trait]
impl EngineAnalysisPort for DemoAuditBackend {
    async fn analyze(&self, clip: &RecordingClip) -> Result<EngineAnalysis, ServiceError> {
        debug!(
            vin = %clip.vin,
            duration_secs = clip.duration.as_secs(),
            "Demo engine analysis"
        );

        Ok(EngineAnalysis {
            overall_score: Score::new(85),
            summary: "Engine appears healthy. Minor noise detected in exhaust system.".to_string(),
            findings: vec![
                Finding::new("Engine Block", FindingStatus::Good, "No knocking detected"),
                Finding::new(
                    "Transmission",
                    FindingStatus::Good,
                    "Smooth operation confirmed",
                ),
                Finding::new(
                    "Exhaust System",
                    FindingStatus::Caution,
                    "Minor rattle detected",
                ),
                Finding::new("Belt System", FindingStatus::Good, "No squealing detected"),
                Finding::new(
                    "Cooling System",
                    FindingStatus::Good,
                    "Normal operating sounds",
                ),
            ],
        })
    }
}

#[async_trait]
impl ListingVerificationPort for DemoAuditBackend {
    async fn verify(&self, url: &ListingUrl) -> Result<ListingReport, ServiceError> {
        debug!(url = %url.as_str(), "Demo listing verification");

        Ok(ListingReport {
            url: url.clone(),
            checks: vec![
                ListingCheck::verified("Year / Make / Model", "2020 Honda Accord"),
                ListingCheck::verified("Mileage", "45,200 mi"),
                ListingCheck::verified("Title Status", "Clean"),
                ListingCheck::flagged(
                    "Accident History",
                    "No accidents",
                    "1 accident found in records",
                ),
                ListingCheck::verified("Service Records", "Full service history"),
                ListingCheck::verified("Number of Owners", "1 owner"),
            ],
            reliability_score: Score::new(90),
        })
    }
}

#[async_trait]
impl AuditHistoryPort for DemoAuditBackend {
    async fn recent_audits(&self) -> Result<Vec<AuditRecord>, ServiceError> {
        debug!("Demo audit history");

        let audits = [
            demo_audit(
                "1",
                "2020 Honda Accord EX-L",
                "1HGBH41JXMN109186",
                (2026, 2, 18),
                (85, 90),
                Recommendation::SafeToBuy,
            ),
            demo_audit(
                "2",
                "2019 Toyota Camry SE",
                "4T1B11HK5KU123456",
                (2026, 2, 12),
                (72, 65),
                Recommendation::ProceedWithCaution,
            ),
            demo_audit(
                "3",
                "2021 BMW 3 Series",
                "WBA5R1C57M7B12345",
                (2026, 1, 28),
                (92, 95),
                Recommendation::SafeToBuy,
            ),
        ];

        Ok(audits.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_demo_vins_are_valid() {
        for raw in DEMO_VINS.into_iter().chain([SCANNED_VIN]) {
            assert!(Vin::parse(raw).is_ok(), "{raw} should be a valid VIN");
        }
    }

    #[test]
    fn test_analysis_fixture() {
        let clip = RecordingClip {
            vin: Vin::parse(SCANNED_VIN).unwrap(),
            duration: Duration::from_secs(9),
        };
        let analysis = tokio_test::block_on(DemoAuditBackend::new().analyze(&clip)).unwrap();

        assert_eq!(analysis.overall_score, Score::new(85));
        assert_eq!(analysis.findings.len(), 5);
        assert_eq!(analysis.count(FindingStatus::Caution), 1);
    }

    #[test]
    fn test_listing_fixture() {
        let url = ListingUrl::new(DEMO_LISTING_URL).unwrap();
        let report = tokio_test::block_on(DemoAuditBackend::new().verify(&url)).unwrap();

        assert_eq!(report.verified_count(), 5);
        assert_eq!(report.flagged_count(), 1);
        assert_eq!(report.reliability_score, Score::new(90));
        assert_eq!(report.url, url);
    }

    #[test]
    fn test_lookup_falls_back_to_scanned_vehicle() {
        let backend = DemoAuditBackend::new();
        let tesla = Vin::parse("5YJSA1DN5DFP14705").unwrap();
        let unknown = Vin::parse("ZZZZZZZZZZZZZZZZZ").unwrap();

        let vehicle = tokio_test::block_on(backend.lookup(&tesla)).unwrap();
        assert_eq!(vehicle.accidents_on_record, 0);

        let vehicle = tokio_test::block_on(backend.lookup(&unknown)).unwrap();
        assert_eq!(vehicle.description, "2020 Honda Accord EX-L");
        assert_eq!(vehicle.accidents_on_record, 1);
    }

    #[test]
    fn test_history_fixture() {
        let audits = tokio_test::block_on(DemoAuditBackend::new().recent_audits()).unwrap();

        assert_eq!(audits.len(), 3);
        assert_eq!(audits[1].recommendation, Recommendation::ProceedWithCaution);
        assert_eq!(audits[0].display_date(), "Feb 18, 2026");
    }
}
