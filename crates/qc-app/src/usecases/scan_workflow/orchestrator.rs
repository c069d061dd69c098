//! Scan workflow orchestrator.
//!
//! Owns the workflow state, the active scan session and the in-memory copies of
//! settings and counters. Every user action becomes a [`ScanEvent`] fed to the
//! pure [`ScanStateMachine`]; the returned actions are executed here, in order,
//! and any follow-up events (scanner failure, validation answer) are fed back
//! until the machine settles.

use std::sync::Arc;

use qc_core::ports::{
    FeedbackPort, ScannerPort, WorkflowEvent, WorkflowEventPort,
};
use qc_core::scan::{ScanAction, ScanConfig, ScanEvent, ScanSession, ScanState, ScanStateMachine};
use qc_core::{Counters, Polarity, Settings};
use tracing::{debug, info, info_span, warn, Instrument};

use crate::deps::WorkflowDeps;
use crate::usecases::{
    FetchServerStats, GetSettings, UpdateCounters, UpdateSettings, ValidateTicket,
};

pub struct ScanWorkflow {
    scanner: Arc<dyn ScannerPort>,
    feedback: Arc<dyn FeedbackPort>,
    events: Arc<dyn WorkflowEventPort>,

    get_settings: GetSettings,
    update_settings: UpdateSettings,
    update_counters: UpdateCounters,
    validate_ticket: ValidateTicket,
    fetch_server_stats: FetchServerStats,

    scan_config: ScanConfig,
    state: ScanState,
    session: Option<ScanSession>,
    settings: Settings,
    counters: Counters,
}

impl ScanWorkflow {
    pub fn new(deps: WorkflowDeps) -> Self {
        let WorkflowDeps {
            scanner,
            validator,
            server_stats,
            settings,
            counters,
            feedback,
            events,
        } = deps;

        Self {
            scanner,
            feedback,
            events,
            get_settings: GetSettings::new(settings.clone()),
            update_settings: UpdateSettings::new(settings),
            update_counters: UpdateCounters::new(counters),
            validate_ticket: ValidateTicket::new(validator),
            fetch_server_stats: FetchServerStats::new(server_stats),
            scan_config: ScanConfig::default(),
            state: ScanState::Idle,
            session: None,
            settings: Settings::default(),
            counters: Counters::default(),
        }
    }

    pub fn with_scan_config(mut self, scan_config: ScanConfig) -> Self {
        self.scan_config = scan_config;
        self
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Load persisted settings and counters and publish the initial screen.
    ///
    /// Unreadable stores fall back to defaults with a notice; startup never fails.
    pub async fn initialize(&mut self) {
        let span = info_span!("usecase.scan_workflow.initialize");

        async {
            match self.get_settings.execute().await {
                Ok(settings) => self.settings = settings,
                Err(err) => {
                    warn!(error = %err, "Failed to load settings, using defaults");
                    self.notice(format!("No se pudo leer la configuración: {err}")).await;
                }
            }

            match self.update_counters.load().await {
                Ok(counters) => self.counters = counters,
                Err(err) => {
                    warn!(error = %err, "Failed to load counters, starting from zero");
                    self.notice(format!("No se pudieron leer los contadores: {err}")).await;
                }
            }

            self.events
                .emit(WorkflowEvent::EndpointChanged {
                    api_url: self.settings.api_url.clone(),
                })
                .await;
            self.events
                .emit(WorkflowEvent::CountersChanged {
                    counters: self.counters,
                })
                .await;
            self.events
                .emit(WorkflowEvent::StateChanged {
                    state: self.state.clone(),
                })
                .await;
        }
        .instrument(span)
        .await
    }

    pub async fn start_scanning(&mut self) {
        self.dispatch(ScanEvent::StartRequested).await;
    }

    pub async fn stop_scanning(&mut self) {
        self.dispatch(ScanEvent::StopRequested).await;
    }

    /// Wait for the next payload of the active session.
    ///
    /// Never resolves while no session is active. `None` means the session's
    /// stream ended; report it with [`ScanWorkflow::on_session_ended`].
    pub async fn next_decoded(&mut self) -> Option<String> {
        match self.session.as_mut() {
            Some(session) => session.next_decoded().await,
            None => std::future::pending().await,
        }
    }

    /// Handle a decoded payload: stop the scanner, validate, tally, show the result.
    ///
    /// Returns once the final card is shown. There is no timeout of its own;
    /// a hung request keeps the interim card up.
    pub async fn on_decoded(&mut self, payload: String) {
        self.dispatch(ScanEvent::Decoded { payload }).await;
    }

    pub async fn on_session_ended(&mut self) {
        if self.state.is_scanning() {
            self.notice("El escáner se ha desconectado").await;
        }
        self.dispatch(ScanEvent::SessionEnded).await;
    }

    pub async fn acknowledge(&mut self) {
        self.dispatch(ScanEvent::Acknowledged).await;
    }

    /// Save a new endpoint. Independent of the scan state.
    pub async fn save_endpoint(&mut self, api_url: &str) {
        match self.update_settings.set_endpoint(api_url).await {
            Ok(settings) => {
                self.settings = settings;
                self.events
                    .emit(WorkflowEvent::EndpointChanged {
                        api_url: self.settings.api_url.clone(),
                    })
                    .await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to save endpoint");
                self.notice(format!("No se pudo guardar la configuración: {err}"))
                    .await;
            }
        }
    }

    pub async fn reset_counters(&mut self) {
        if let Err(err) = self.update_counters.reset(&mut self.counters).await {
            warn!(error = %err, "Failed to persist counter reset");
            self.notice(format!("No se pudieron guardar los contadores: {err}"))
                .await;
        }
        self.events
            .emit(WorkflowEvent::CountersChanged {
                counters: self.counters,
            })
            .await;
    }

    pub async fn refresh_server_stats(&mut self) {
        match self.fetch_server_stats.execute(&self.settings).await {
            Ok(stats) => self.events.emit(WorkflowEvent::ServerStats { stats }).await,
            Err(err) => {
                warn!(error = %err, "Failed to fetch server stats");
                self.notice(format!("No se pudieron obtener las estadísticas: {err}"))
                    .await;
            }
        }
    }

    /// Release the scanner, whatever the state.
    pub async fn shutdown(&mut self) {
        self.release_scanner().await;
    }

    async fn dispatch(&mut self, event: ScanEvent) {
        let span = info_span!("usecase.scan_workflow.dispatch", event = event_name(&event));

        async {
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = self.state.clone();
                let (next, actions) = ScanStateMachine::transition(from.clone(), event);

                if next != from {
                    info!(from = ?from, to = ?next, "scan state transition");
                    self.state = next;
                    // Emitted before the actions run so the interim card is
                    // visible while the request is in flight.
                    self.events
                        .emit(WorkflowEvent::StateChanged {
                            state: self.state.clone(),
                        })
                        .await;
                }

                let follow_up = self.execute_actions(actions).await;
                pending_events.extend(follow_up);
            }
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&mut self, actions: Vec<ScanAction>) -> Vec<ScanEvent> {
        let mut follow_up = Vec::new();

        for action in actions {
            match action {
                ScanAction::StartScanner => {
                    if let Some(event) = self.start_scanner().await {
                        follow_up.push(event);
                    }
                }
                ScanAction::StopScanner => self.release_scanner().await,
                ScanAction::Validate { payload } => {
                    let report = self.validate_ticket.execute(&payload, &self.settings).await;
                    follow_up.push(report.into_event());
                }
                ScanAction::RecordOutcome { outcome } => {
                    if let Err(err) = self.update_counters.record(&mut self.counters, outcome).await
                    {
                        warn!(error = %err, "Failed to persist counters");
                        self.notice(format!("No se pudieron guardar los contadores: {err}"))
                            .await;
                    }
                    self.events
                        .emit(WorkflowEvent::CountersChanged {
                            counters: self.counters,
                        })
                        .await;
                }
                ScanAction::PlayFeedback { polarity } => self.play_feedback(polarity),
            }
        }

        follow_up
    }

    async fn start_scanner(&mut self) -> Option<ScanEvent> {
        if self.session.is_some() {
            debug!("scanner already active");
            return None;
        }

        match self.scanner.start(&self.scan_config).await {
            Ok(session) => {
                self.session = Some(session);
                None
            }
            Err(err) => {
                warn!(error = %err, "Failed to start scanner");
                self.notice(format!("No se pudo iniciar el escáner: {err}"))
                    .await;
                Some(ScanEvent::ScannerFailed)
            }
        }
    }

    /// Close the session and wait for the device to be released.
    async fn release_scanner(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.close();
        }
        if let Err(err) = self.scanner.stop().await {
            warn!(error = %err, "Failed to stop scanner");
        }
    }

    fn play_feedback(&self, polarity: Polarity) {
        if let Err(err) = self.feedback.play(polarity) {
            debug!(error = %err, ?polarity, "feedback tone skipped");
        }
    }

    async fn notice(&self, message: impl Into<String>) {
        self.events
            .emit(WorkflowEvent::Notice {
                message: message.into(),
            })
            .await;
    }
}

fn event_name(event: &ScanEvent) -> &'static str {
    match event {
        ScanEvent::StartRequested => "start_requested",
        ScanEvent::StopRequested => "stop_requested",
        ScanEvent::ScannerFailed => "scanner_failed",
        ScanEvent::SessionEnded => "session_ended",
        ScanEvent::Decoded { .. } => "decoded",
        ScanEvent::ValidationCompleted { .. } => "validation_completed",
        ScanEvent::ValidationFailed { .. } => "validation_failed",
        ScanEvent::Acknowledged => "acknowledged",
    }
}
