//! Screen-flow transition table.

use crate::domain::entities::{Screen, Session};

use super::FlowEvent;

/// Returns the screen `event` leads to from `from`, or `None` when the event
/// is not legal there.
#[must_use]
pub fn target(from: Screen, event: &FlowEvent) -> Option<Screen> {
    use FlowEvent as E;

    if let E::Jump(item) = event {
        return from.shows_nav_bar().then_some(item.target());
    }

    match from {
        Screen::Splash => match event {
            E::Complete => Some(Screen::Welcome),
            _ => None,
        },
        Screen::Welcome => match event {
            E::StartAudit => Some(Screen::VinEntry),
            E::LearnMore => Some(Screen::PastAudits),
            _ => None,
        },
        Screen::VinEntry => match event {
            E::Back => Some(Screen::Welcome),
            E::ProceedWithVin(_) => Some(Screen::EngineRecording),
            _ => None,
        },
        Screen::EngineRecording => match event {
            E::Back => Some(Screen::VinEntry),
            E::AnalysisComplete => Some(Screen::EngineAnalysis),
            _ => None,
        },
        Screen::EngineAnalysis => match event {
            E::Back => Some(Screen::EngineRecording),
            E::Proceed => Some(Screen::ListingVerification),
            _ => None,
        },
        Screen::ListingVerification => match event {
            E::Back => Some(Screen::EngineAnalysis),
            E::Proceed => Some(Screen::DashboardReport),
            _ => None,
        },
        Screen::DashboardReport => match event {
            E::Back => Some(Screen::ListingVerification),
            E::GoHome => Some(Screen::Welcome),
            _ => None,
        },
        Screen::PastAudits => match event {
            E::Back => Some(Screen::Welcome),
            E::StartNew => Some(Screen::VinEntry),
            _ => None,
        },
    }
}

/// Applies `event` to `session`.
///
/// Returns `None` when the event is not legal for the current screen.
/// Only `ProceedWithVin` sets the VIN and only `GoHome` clears it.
#[must_use]
pub fn apply(session: Session, event: FlowEvent) -> Option<Session> {
    let to = target(session.current_screen(), &event)?;

    let next = match event {
        FlowEvent::ProceedWithVin(vin) => session.with_vin(Some(vin)),
        FlowEvent::GoHome => session.with_vin(None),
        _ => session,
    };

    Some(next.with_screen(to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NavItem, Vin};
    use test_case::test_case;

    fn vin() -> Vin {
        Vin::parse("1HGBH41JXMN109186").unwrap()
    }

    #[test_case(Screen::Splash, FlowEvent::Complete, Screen::Welcome ; "splash_complete")]
    #[test_case(Screen::Welcome, FlowEvent::StartAudit, Screen::VinEntry ; "welcome_start_audit")]
    #[test_case(Screen::Welcome, FlowEvent::LearnMore, Screen::PastAudits ; "welcome_learn_more")]
    #[test_case(Screen::VinEntry, FlowEvent::Back, Screen::Welcome ; "vin_back")]
    #[test_case(Screen::VinEntry, FlowEvent::ProceedWithVin(vin()), Screen::EngineRecording ; "vin_proceed")]
    #[test_case(Screen::EngineRecording, FlowEvent::Back, Screen::VinEntry ; "recording_back")]
    #[test_case(Screen::EngineRecording, FlowEvent::AnalysisComplete, Screen::EngineAnalysis ; "recording_complete")]
    #[test_case(Screen::EngineAnalysis, FlowEvent::Back, Screen::EngineRecording ; "analysis_back")]
    #[test_case(Screen::EngineAnalysis, FlowEvent::Proceed, Screen::ListingVerification ; "analysis_proceed")]
    #[test_case(Screen::ListingVerification, FlowEvent::Back, Screen::EngineAnalysis ; "listing_back")]
    #[test_case(Screen::ListingVerification, FlowEvent::Proceed, Screen::DashboardReport ; "listing_proceed")]
    #[test_case(Screen::DashboardReport, FlowEvent::Back, Screen::ListingVerification ; "report_back")]
    #[test_case(Screen::DashboardReport, FlowEvent::GoHome, Screen::Welcome ; "report_go_home")]
    #[test_case(Screen::PastAudits, FlowEvent::Back, Screen::Welcome ; "history_back")]
    #[test_case(Screen::PastAudits, FlowEvent::StartNew, Screen::VinEntry ; "history_start_new")]
    fn test_table(from: Screen, event: FlowEvent, expected: Screen) {
        assert_eq!(target(from, &event), Some(expected));
    }

    #[test_case(Screen::Splash, FlowEvent::Back ; "splash_back")]
    #[test_case(Screen::Welcome, FlowEvent::Back ; "welcome_back")]
    #[test_case(Screen::VinEntry, FlowEvent::Proceed ; "vin_proceed_without_vin")]
    #[test_case(Screen::EngineAnalysis, FlowEvent::GoHome ; "analysis_go_home")]
    #[test_case(Screen::DashboardReport, FlowEvent::Proceed ; "report_proceed")]
    #[test_case(Screen::Splash, FlowEvent::Jump(NavItem::History) ; "jump_from_splash")]
    #[test_case(Screen::Welcome, FlowEvent::Jump(NavItem::Audit) ; "jump_from_welcome")]
    fn test_illegal_events(from: Screen, event: FlowEvent) {
        assert_eq!(target(from, &event), None);
        assert!(apply(Session::at(from, None), event).is_none());
    }

    #[test]
    fn test_jump_reaches_nav_targets_from_every_bar_screen() {
        for from in Screen::ALL.into_iter().filter(|s| s.shows_nav_bar()) {
            for item in NavItem::ALL {
                assert_eq!(target(from, &FlowEvent::Jump(item)), Some(item.target()));
            }
        }
    }

    #[test]
    fn test_only_proceed_and_go_home_touch_vin() {
        let with_vin = |screen| Session::at(screen, Some(vin()));

        let after = apply(with_vin(Screen::EngineAnalysis), FlowEvent::Back).unwrap();
        assert_eq!(after.vin(), Some(&vin()));

        let after = apply(
            with_vin(Screen::DashboardReport),
            FlowEvent::Jump(NavItem::Home),
        )
        .unwrap();
        assert_eq!(after.current_screen(), Screen::Welcome);
        assert_eq!(after.vin(), Some(&vin()));

        let after = apply(with_vin(Screen::DashboardReport), FlowEvent::GoHome).unwrap();
        assert_eq!(after.current_screen(), Screen::Welcome);
        assert!(after.vin().is_none());
    }
}
