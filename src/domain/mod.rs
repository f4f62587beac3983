//! Domain layer with core audit entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;

pub use entities::{Screen, Session, Vin};
pub use errors::{ServiceError, VinError};
pub use ports::{AuditHistoryPort, EngineAnalysisPort, ListingVerificationPort, VehicleLookupPort};
