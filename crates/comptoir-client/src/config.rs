// Runtime configuration
// Decision: One externally supplied value — the API base URL — read from the
// environment with a local-development default

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API
    pub api_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("COMPTOIR_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
