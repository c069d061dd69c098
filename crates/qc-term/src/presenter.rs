//! Terminal rendering of workflow events.

use std::fmt::Write as _;
use std::io::Write;

use async_trait::async_trait;
use qc_core::ports::{WorkflowEvent, WorkflowEventPort};
use qc_core::{Counters, ResultCard, ScanState, ServerStats};
use tokio::sync::Mutex;
use tracing::warn;

const RULE: &str = "────────────────────────────────────────";

/// What the terminal currently shows, rebuilt from events.
#[derive(Debug, Default)]
struct View {
    counters: Counters,
    api_url: String,
}

/// Renders [`WorkflowEvent`]s as plain text.
///
/// Output is appended, never redrawn in place, so the log of a gate session
/// stays readable when stdout is piped to a file.
pub struct TerminalPresenter {
    out: Mutex<Box<dyn Write + Send>>,
    view: Mutex<View>,
}

impl TerminalPresenter {
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            view: Mutex::new(View::default()),
        }
    }

    /// Write text that is not tied to an event (help, hints).
    pub async fn print(&self, text: &str) {
        self.write(&format!("{text}\n")).await;
    }

    async fn write(&self, text: &str) {
        let mut out = self.out.lock().await;
        if let Err(err) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            warn!(error = %err, "terminal write failed");
        }
    }
}

#[async_trait]
impl WorkflowEventPort for TerminalPresenter {
    async fn emit(&self, event: WorkflowEvent) {
        let text = {
            let mut view = self.view.lock().await;
            match event {
                WorkflowEvent::StateChanged { state } => render_state(&state, &view),
                WorkflowEvent::CountersChanged { counters } => {
                    view.counters = counters;
                    format!("{}\n", render_counters(&counters))
                }
                WorkflowEvent::EndpointChanged { api_url } => {
                    view.api_url = api_url;
                    format!("{}\n", render_endpoint(&view.api_url))
                }
                WorkflowEvent::ServerStats { stats } => render_server_stats(&stats),
                WorkflowEvent::Notice { message } => format!("! {message}\n"),
            }
        };
        self.write(&text).await;
    }
}

fn render_state(state: &ScanState, view: &View) -> String {
    let mut text = String::new();
    match state {
        ScanState::Idle => {
            let _ = writeln!(text, "{RULE}\n  ESCÁNER  (inactivo)");
            let _ = writeln!(text, "  {}", render_endpoint(&view.api_url));
            let _ = writeln!(text, "  {}", render_counters(&view.counters));
            let _ = writeln!(text, "  Escribe 's' para iniciar, 'h' para ayuda.");
        }
        ScanState::Scanning => {
            let _ = writeln!(text, "{RULE}\n  ESCÁNER  (escaneando)");
            let _ = writeln!(text, "  Acerca el código QR al lector...");
        }
        ScanState::Validating { .. } | ScanState::ShowingResult { .. } => {
            if let Some(card) = state.card() {
                text.push_str(&render_card(&card));
            }
        }
    }
    text
}

fn render_card(card: &ResultCard) -> String {
    let mut text = format!("{RULE}\n  {}\n", card.title());
    for line in card.lines() {
        let _ = writeln!(text, "  {line}");
    }
    if !card.is_pending() {
        let _ = writeln!(text, "  [Enter] Escanear otro");
    }
    text
}

fn render_counters(counters: &Counters) -> String {
    format!(
        "Válidos: {}  Inválidos: {}  Ya usados: {}  Total: {}",
        counters.valid,
        counters.invalid,
        counters.used,
        counters.total()
    )
}

fn render_endpoint(api_url: &str) -> String {
    if api_url.trim().is_empty() {
        "API: (sin configurar, usa 'c <url>')".to_string()
    } else {
        format!("API: {api_url}")
    }
}

fn render_server_stats(stats: &ServerStats) -> String {
    let mut text = format!(
        "Servidor: {} escaneados, {} pendientes, {} en total",
        stats.scanned, stats.pending, stats.total
    );
    if let Some(at) = &stats.timestamp {
        let _ = write!(text, " ({at})");
    }
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex as StdMutex};

    #[derive(Clone, Default)]
    struct Sink(Arc<StdMutex<Vec<u8>>>);

    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Sink {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[tokio::test]
    async fn idle_screen_shows_endpoint_and_counters() {
        let sink = Sink::default();
        let presenter = TerminalPresenter::with_writer(Box::new(sink.clone()));

        presenter
            .emit(WorkflowEvent::EndpointChanged {
                api_url: "https://x".into(),
            })
            .await;
        presenter
            .emit(WorkflowEvent::CountersChanged {
                counters: Counters {
                    valid: 2,
                    invalid: 1,
                    used: 0,
                },
            })
            .await;
        presenter
            .emit(WorkflowEvent::StateChanged {
                state: ScanState::Idle,
            })
            .await;

        let text = sink.text();
        assert!(text.contains("API: https://x"));
        assert!(text.contains("Válidos: 2  Inválidos: 1  Ya usados: 0  Total: 3"));
        assert!(text.contains("(inactivo)"));
    }

    #[tokio::test]
    async fn result_card_offers_to_scan_again() {
        let sink = Sink::default();
        let presenter = TerminalPresenter::with_writer(Box::new(sink.clone()));

        presenter
            .emit(WorkflowEvent::StateChanged {
                state: ScanState::ShowingResult {
                    card: ResultCard::Welcome {
                        guest_name: Some("Ana".into()),
                        message: Some("Mesa 3".into()),
                    },
                },
            })
            .await;

        let text = sink.text();
        assert!(text.contains("¡Bienvenido/a!"));
        assert!(text.contains("  Ana\n  Mesa 3\n"));
        assert!(text.contains("[Enter] Escanear otro"));
    }

    #[test]
    fn interim_card_has_no_prompt() {
        let text = render_card(&ResultCard::Validating);
        assert!(text.contains("Validando..."));
        assert!(!text.contains("[Enter]"));
    }

    #[test]
    fn unconfigured_endpoint_hints_at_command() {
        assert!(render_endpoint("  ").contains("sin configurar"));
    }

    #[tokio::test]
    async fn notices_are_marked() {
        let sink = Sink::default();
        let presenter = TerminalPresenter::with_writer(Box::new(sink.clone()));

        presenter
            .emit(WorkflowEvent::Notice {
                message: "Permiso denegado".into(),
            })
            .await;

        assert_eq!(sink.text(), "! Permiso denegado\n");
    }
}
