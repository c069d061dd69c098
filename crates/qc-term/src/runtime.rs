//! The terminal event loop.

use std::sync::Arc;

use anyhow::Context;
use qc_app::ScanWorkflow;
use qc_platform::{FeedResult, KeyboardWedgeScanner};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, info_span, Instrument};

use crate::commands::{UiCommand, HELP};
use crate::presenter::TerminalPresenter;

const HINT_NOT_SCANNING: &str = "! El escáner no está activo. Escribe 's' para iniciar.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Drives one [`ScanWorkflow`] from terminal input.
///
/// Single task: while a validation is in flight no input is read, which is
/// what keeps a second decode from starting a second request.
pub struct TerminalRuntime {
    workflow: ScanWorkflow,
    wedge: Option<Arc<KeyboardWedgeScanner>>,
    presenter: Arc<TerminalPresenter>,
}

impl TerminalRuntime {
    pub fn new(
        workflow: ScanWorkflow,
        wedge: Option<Arc<KeyboardWedgeScanner>>,
        presenter: Arc<TerminalPresenter>,
    ) -> Self {
        Self {
            workflow,
            wedge,
            presenter,
        }
    }

    pub fn workflow(&self) -> &ScanWorkflow {
        &self.workflow
    }

    /// Run until `quit` or end of input, then release the scanner.
    pub async fn run<R>(mut self, input: R) -> anyhow::Result<ScanWorkflow>
    where
        R: AsyncBufRead + Unpin,
    {
        let span = info_span!("term.runtime.run");

        async move {
            let mut lines = input.lines();
            self.workflow.initialize().await;

            loop {
                tokio::select! {
                    // Scans first: a decode queued behind typed input must not
                    // be overtaken by an acknowledge or quit.
                    biased;

                    decoded = self.workflow.next_decoded() => match decoded {
                        Some(payload) => self.workflow.on_decoded(payload).await,
                        None => self.workflow.on_session_ended().await,
                    },
                    line = lines.next_line() => {
                        let Some(line) = line.context("Failed to read terminal input")? else {
                            info!("input closed");
                            break;
                        };
                        if self.handle_line(&line).await == Flow::Quit {
                            break;
                        }
                    }
                }
            }

            self.workflow.shutdown().await;
            Ok::<_, anyhow::Error>(self.workflow)
        }
        .instrument(span)
        .await
    }

    async fn handle_line(&mut self, line: &str) -> Flow {
        let command = UiCommand::parse(line);
        debug!(?command, "terminal command");

        match command {
            UiCommand::Start => self.workflow.start_scanning().await,
            UiCommand::Stop => self.workflow.stop_scanning().await,
            UiCommand::Acknowledge => self.workflow.acknowledge().await,
            UiCommand::SetEndpoint(api_url) => self.workflow.save_endpoint(&api_url).await,
            UiCommand::ResetCounters => self.workflow.reset_counters().await,
            UiCommand::ServerStats => self.workflow.refresh_server_stats().await,
            UiCommand::Manual(payload) => {
                if self.workflow.state().is_scanning() {
                    self.workflow.on_decoded(payload).await;
                } else {
                    self.presenter.print(HINT_NOT_SCANNING).await;
                }
            }
            UiCommand::Help => self.presenter.print(HELP).await,
            UiCommand::Quit => return Flow::Quit,
            UiCommand::Text(text) => self.handle_text(&text).await,
        }
        Flow::Continue
    }

    async fn handle_text(&mut self, text: &str) {
        let Some(wedge) = &self.wedge else {
            self.presenter
                .print(&format!("! Comando desconocido: {text}. Escribe 'h' para ayuda."))
                .await;
            return;
        };

        if wedge.feed(text).await == FeedResult::Inactive {
            self.presenter.print(HINT_NOT_SCANNING).await;
        }
    }
}
