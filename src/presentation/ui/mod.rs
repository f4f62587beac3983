//! UI screens.

mod app;
mod backend;
mod context;
mod dashboard_report_screen;
mod engine_analysis_screen;
mod engine_recording_screen;
mod listing_verification_screen;
mod past_audits_screen;
mod splash_screen;
mod utils;
mod vin_entry_screen;
mod welcome_screen;

pub use app::App;
pub use context::{ScreenContext, ScreenTimer, TimerKind};
pub use dashboard_report_screen::{DashboardAction, DashboardReportScreen};
pub use engine_analysis_screen::{EngineAnalysisAction, EngineAnalysisScreen};
pub use engine_recording_screen::{EngineRecordingAction, EngineRecordingScreen, RecordingState};
pub use listing_verification_screen::{
    ListingVerificationAction, ListingVerificationScreen, ScanState,
};
pub use past_audits_screen::{PastAuditsAction, PastAuditsScreen};
pub use splash_screen::{SplashAction, SplashScreen};
pub use vin_entry_screen::{VinEntryAction, VinEntryScreen};
pub use welcome_screen::{WelcomeAction, WelcomeScreen};
