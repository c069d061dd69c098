use super::model::{Settings, CURRENT_SCHEMA_VERSION};

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            api_url: String::new(),
        }
    }
}
