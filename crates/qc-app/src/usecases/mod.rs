pub mod fetch_server_stats;
pub mod get_settings;
pub mod scan_workflow;
pub mod update_counters;
pub mod update_settings;
pub mod validate_ticket;

pub use fetch_server_stats::FetchServerStats;
pub use get_settings::GetSettings;
pub use scan_workflow::ScanWorkflow;
pub use update_counters::UpdateCounters;
pub use update_settings::UpdateSettings;
pub use validate_ticket::{ValidateTicket, ValidationReport};
