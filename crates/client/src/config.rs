/// Default API base URL, including the `/api/v1` route prefix.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the notes API.
    pub api_url: String,
    /// Timeout applied to every HTTP request, in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                          |
    /// |---------------------------|----------------------------------|
    /// | `NOTEKEEPER_API_URL`      | `http://localhost:3000/api/v1`   |
    /// | `NOTEKEEPER_TIMEOUT_SECS` | `10`                             |
    pub fn from_env() -> Self {
        let api_url = std::env::var("NOTEKEEPER_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.into());

        let timeout_secs = std::env::var("NOTEKEEPER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_url,
            timeout_secs,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
