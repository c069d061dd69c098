pub mod counters;
pub mod fs;
pub mod http;
pub mod settings;

pub use counters::FileCounterStore;
pub use http::HttpValidationClient;
pub use settings::FileSettingsRepository;
