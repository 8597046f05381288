/// Default backend address, matching the local development server.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the backend base address.
pub const API_BASE_URL_ENV: &str = "LONGVISION_API_BASE_URL";

/// Backend connection settings. One base address drives video processing,
/// artifact downloads, and feedback submission.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    /// Build a config from an explicit base address. Trailing slashes are
    /// stripped so URL joins stay stable.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let mut api_base_url = api_base_url.into();
        while api_base_url.ends_with('/') {
            api_base_url.pop();
        }
        Self { api_base_url }
    }

    /// Read the backend base address from the environment, falling back to
    /// the local default.
    pub fn from_env() -> Self {
        let base = std::env::var(API_BASE_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self::new(base)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
