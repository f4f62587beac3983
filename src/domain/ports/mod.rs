mod audit_history_port;
mod engine_analysis_port;
mod listing_verification_port;
mod vehicle_lookup_port;

pub use audit_history_port::AuditHistoryPort;
pub use engine_analysis_port::EngineAnalysisPort;
pub use listing_verification_port::ListingVerificationPort;
pub use vehicle_lookup_port::VehicleLookupPort;
