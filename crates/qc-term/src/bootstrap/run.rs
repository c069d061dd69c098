use std::sync::Arc;

use anyhow::Context;
use qc_core::config::AppConfig;
use tokio::io::BufReader;
use tracing::{error, info};

use super::tracing::init_tracing_subscriber;
use super::wiring::{resolve_paths, wire_workflow};
use crate::presenter::TerminalPresenter;
use crate::runtime::TerminalRuntime;

/// Launch-time choices that are not part of the config file.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Endpoint to save before the first screen, as if typed with `c <url>`.
    pub endpoint: Option<String>,
    pub verbose: bool,
}

/// Resolve paths, install tracing, wire the workflow and run it on stdin/stdout.
pub fn run_app(config: AppConfig, options: LaunchOptions) -> anyhow::Result<()> {
    let paths = resolve_paths(&config)?;
    init_tracing_subscriber(&paths.logs_dir, options.verbose)
        .context("Failed to initialize tracing")?;

    info!(version = env!("CARGO_PKG_VERSION"), "qrcheck starting");

    // One thread: the workflow is strictly sequential.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(async move {
        let presenter = Arc::new(TerminalPresenter::stdout());
        let mut wired = wire_workflow(&config, &paths, presenter.clone())?;

        if let Some(endpoint) = &options.endpoint {
            wired.workflow.save_endpoint(endpoint).await;
        }

        let terminal = TerminalRuntime::new(wired.workflow, wired.wedge, presenter);
        match terminal.run(BufReader::new(tokio::io::stdin())).await {
            Ok(workflow) => {
                info!(counters = ?workflow.counters(), "qrcheck stopped");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "terminal loop failed");
                Err(err)
            }
        }
    })
}
