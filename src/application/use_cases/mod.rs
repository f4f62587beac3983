//! Use case implementations.

mod analyze_engine_use_case;
mod build_report_use_case;
mod load_history_use_case;
mod verify_listing_use_case;

pub use analyze_engine_use_case::AnalyzeEngineUseCase;
pub use build_report_use_case::BuildReportUseCase;
pub use load_history_use_case::LoadHistoryUseCase;
pub use verify_listing_use_case::VerifyListingUseCase;
