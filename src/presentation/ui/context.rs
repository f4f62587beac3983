//! Services every screen is built with.

use crate::infrastructure::config::TimingConfig;
use crate::infrastructure::scheduler::{Scheduler, TimerFired};
use crate::presentation::theme::Theme;

/// Purpose of a scheduled screen timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    SplashTick,
    SplashFinish,
    VinScan,
    RecordTick,
    WaveformRefresh,
    AnalysisDone,
    ListingScan,
}

pub type ScreenTimer = TimerFired<TimerKind>;

/// Scheduler, durations and theme shared by all screens.
#[derive(Clone)]
pub struct ScreenContext {
    pub scheduler: Scheduler<TimerKind>,
    pub timing: TimingConfig,
    pub theme: Theme,
    pub animations: bool,
}

impl ScreenContext {
    #[must_use]
    pub const fn new(
        scheduler: Scheduler<TimerKind>,
        timing: TimingConfig,
        theme: Theme,
        animations: bool,
    ) -> Self {
        Self {
            scheduler,
            timing,
            theme,
            animations,
        }
    }
}
