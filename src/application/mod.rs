//! Application layer with the screen flow, use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Screen-flow state machine.
pub mod flow;
/// Use case implementations.
pub mod use_cases;

pub use dto::{ListingRequest, ReportRequest};
pub use flow::{FlowController, FlowEvent, Transition};
pub use use_cases::{
    AnalyzeEngineUseCase, BuildReportUseCase, LoadHistoryUseCase, VerifyListingUseCase,
};
