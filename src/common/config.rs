/// Base URL used when `STOREPRESS_API_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Remote API location. The base URL is the only externally
/// significant environment-driven setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("STOREPRESS_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
