//! Domain entity definitions.

mod analysis;
mod audit;
mod listing;
mod report;
mod score;
mod screen;
mod session;
mod vin;

pub use analysis::{EngineAnalysis, Finding, FindingStatus, RecordingClip};
pub use audit::AuditRecord;
pub use listing::{ListingCheck, ListingReport, ListingUrl};
pub use report::{Highlight, HighlightTone, Recommendation, VehicleInfo, VehicleReport};
pub use score::{Grade, Score};
pub use screen::{NavItem, Screen};
pub use session::Session;
pub use vin::{Vin, is_vin_char};
