mod orchestrator;

pub use orchestrator::ScanWorkflow;
