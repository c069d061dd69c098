//! # qc-term
//!
//! Terminal adapter layer for QrCheck.
//!
//! - **bootstrap**: config loading, tracing, dependency wiring, launch
//! - **presenter**: renders workflow events to the terminal
//! - **commands**: parses typed input lines
//! - **runtime**: the input/scan event loop

pub mod bootstrap;
pub mod commands;
pub mod presenter;
pub mod runtime;

pub use bootstrap::{load_config, run_app, LaunchOptions};
pub use presenter::TerminalPresenter;
pub use runtime::TerminalRuntime;
