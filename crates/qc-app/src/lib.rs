//! qrcheck Application Orchestration Layer
//!
//! This crate contains the use cases and the scan workflow orchestrator.

pub mod app_paths;
pub mod deps;
pub mod usecases;

pub use deps::WorkflowDeps;
pub use usecases::ScanWorkflow;
