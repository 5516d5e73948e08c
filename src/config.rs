// src/config.rs
use std::time::Duration;

/// Connection settings for the ChemVis backend.
///
/// Constructed once at startup and handed to [`crate::api::ApiClient`];
/// nothing in the application mutates request defaults globally.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    /// Default configuration, with the backend host overridable
    /// through `CHEMVIS_API_URL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("CHEMVIS_API_URL") {
            if !url.is_empty() {
                config.base_url = url.trim_end_matches('/').to_string();
            }
        }
        config
    }
}
