use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::dto::{ListingRequest, ReportRequest};
use crate::application::use_cases::{
    AnalyzeEngineUseCase, BuildReportUseCase, LoadHistoryUseCase, VerifyListingUseCase,
};
use crate::domain::entities::{
    AuditRecord, EngineAnalysis, ListingReport, RecordingClip, VehicleReport,
};
use crate::domain::ports::{
    AuditHistoryPort, EngineAnalysisPort, ListingVerificationPort, VehicleLookupPort,
};

/// Service results delivered back to the UI loop.
#[derive(Debug)]
pub enum Action {
    EngineAnalyzed(EngineAnalysis),
    EngineAnalysisFailed(String),
    ListingVerified(ListingReport),
    ListingVerificationFailed(String),
    ReportBuilt(VehicleReport),
    ReportFailed(String),
    HistoryLoaded(Vec<AuditRecord>),
    HistoryLoadFailed(String),
}

#[derive(Debug)]
pub enum BackendCommand {
    AnalyzeEngine(RecordingClip),
    VerifyListing(ListingRequest),
    BuildReport(ReportRequest),
    LoadHistory,
}

pub struct Backend {
    analyze_engine: AnalyzeEngineUseCase,
    verify_listing: VerifyListingUseCase,
    build_report: BuildReportUseCase,
    load_history: LoadHistoryUseCase,
    command_rx: mpsc::UnboundedReceiver<BackendCommand>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Backend {
    pub fn new<S>(
        services: Arc<S>,
        command_rx: mpsc::UnboundedReceiver<BackendCommand>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self
    where
        S: EngineAnalysisPort
            + ListingVerificationPort
            + VehicleLookupPort
            + AuditHistoryPort
            + 'static,
    {
        Self {
            analyze_engine: AnalyzeEngineUseCase::new(services.clone()),
            verify_listing: VerifyListingUseCase::new(services.clone()),
            build_report: BuildReportUseCase::new(services.clone()),
            load_history: LoadHistoryUseCase::new(services),
            command_rx,
            action_tx,
        }
    }

    pub async fn run(mut self) {
        info!("Backend worker started");
        while let Some(command) = self.command_rx.recv().await {
            self.handle_command(command).await;
        }
        info!("Backend worker stopped");
    }

    async fn handle_command(&self, command: BackendCommand) {
        let action = match command {
            BackendCommand::AnalyzeEngine(clip) => {
                match self.analyze_engine.execute(&clip).await {
                    Ok(analysis) => {
                        debug!(score = %analysis.overall_score, "Engine analysis delivered");
                        Action::EngineAnalyzed(analysis)
                    }
                    Err(e) => {
                        warn!(error = %e, "Engine analysis failed");
                        Action::EngineAnalysisFailed(e.to_string())
                    }
                }
            }
            BackendCommand::VerifyListing(request) => {
                match self.verify_listing.execute(request).await {
                    Ok(report) => {
                        debug!(
                            flagged = report.flagged_count(),
                            "Listing verification delivered"
                        );
                        Action::ListingVerified(report)
                    }
                    Err(e) => {
                        warn!(error = %e, "Listing verification failed");
                        Action::ListingVerificationFailed(e.to_string())
                    }
                }
            }
            BackendCommand::BuildReport(request) => {
                match self.build_report.execute(request).await {
                    Ok(report) => {
                        debug!(vin = %report.vin, "Report delivered");
                        Action::ReportBuilt(report)
                    }
                    Err(e) => {
                        warn!(error = %e, "Report build failed");
                        Action::ReportFailed(e.to_string())
                    }
                }
            }
            BackendCommand::LoadHistory => match self.load_history.execute().await {
                Ok(audits) => {
                    debug!(count = audits.len(), "Audit history delivered");
                    Action::HistoryLoaded(audits)
                }
                Err(e) => {
                    warn!(error = %e, "Audit history failed");
                    Action::HistoryLoadFailed(e.to_string())
                }
            },
        };

        if self.action_tx.send(action).is_err() {
            debug!("UI loop gone, dropping backend result");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::entities::{Score, Vin};
    use crate::infrastructure::demo::DemoAuditBackend;

    fn spawn_backend() -> (
        mpsc::UnboundedSender<BackendCommand>,
        mpsc::UnboundedReceiver<Action>,
    ) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let backend = Backend::new(Arc::new(DemoAuditBackend::new()), command_rx, action_tx);
        tokio::spawn(backend.run());
        (command_tx, action_rx)
    }

    fn vin() -> Vin {
        Vin::parse("1HGBH41JXMN109186").unwrap()
    }

    #[tokio::test]
    async fn test_analyze_engine() {
        let (tx, mut rx) = spawn_backend();
        tx.send(BackendCommand::AnalyzeEngine(RecordingClip {
            vin: vin(),
            duration: Duration::from_secs(12),
        }))
        .unwrap();

        match rx.recv().await {
            Some(Action::EngineAnalyzed(analysis)) => {
                assert_eq!(analysis.overall_score, Score::new(85));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_listing_fails() {
        let (tx, mut rx) = spawn_backend();
        tx.send(BackendCommand::VerifyListing(ListingRequest::new("  ")))
            .unwrap();

        assert!(matches!(
            rx.recv().await,
            Some(Action::ListingVerificationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_build_report_and_history() {
        let (tx, mut rx) = spawn_backend();
        tx.send(BackendCommand::BuildReport(ReportRequest::new(
            vin(),
            Score::new(85),
            Score::new(90),
        )))
        .unwrap();
        tx.send(BackendCommand::LoadHistory).unwrap();

        match rx.recv().await {
            Some(Action::ReportBuilt(report)) => {
                assert_eq!(report.overall_score(), Score::new(88));
            }
            other => panic!("unexpected action: {other:?}"),
        }
        match rx.recv().await {
            Some(Action::HistoryLoaded(audits)) => assert_eq!(audits.len(), 3),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_stops_when_commands_close() {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (action_tx, _action_rx) = mpsc::unbounded_channel();
        let backend = Backend::new(Arc::new(DemoAuditBackend::new()), command_rx, action_tx);
        let handle = tokio::spawn(backend.run());

        drop(command_tx);
        assert!(handle.await.is_ok());
    }
}
