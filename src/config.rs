use log::info;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Runtime configuration. Read once at startup and handed to the controller
/// explicitly; business logic never touches the process environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    /// Reads `DEEPSEARCH_API`, falling back to the local development
    /// endpoint when unset or blank.
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("DEEPSEARCH_API")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        info!("search endpoint: {}", api_base_url);
        Self { api_base_url }
    }
}
