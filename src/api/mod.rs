// src/api/mod.rs
use std::sync::RwLock;

use reqwest::header::SET_COOKIE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::ApiConfig;

mod models;

pub use models::{AnalysisResult, EquipmentRow, HistoryEntry};

/// Name of the session cookie issued by `/api/csrf/` and echoed back as
/// the `X-CSRFToken` header on mutating requests.
const CSRF_COOKIE: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status} for {endpoint}")]
    Status {
        endpoint: String,
        status: StatusCode,
    },
}

/// HTTP client for the ChemVis backend.
///
/// Wraps a cookie-holding `reqwest::Client` so the CSRF cookie set by
/// [`ApiClient::init_session`] rides along on every later request. The
/// matching header value is captured from the same response and attached
/// to mutating calls.
pub struct ApiClient {
    http: Client,
    base_url: String,
    csrf_token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            csrf_token: RwLock::new(None),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check_status(endpoint: &str, status: StatusCode) -> Result<(), ApiError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status,
            })
        }
    }

    /// One round trip to prime the CSRF session. Must settle before the
    /// first upload is attempted; an unprimed session is not an error
    /// here, the upload itself will be refused by the server.
    pub async fn init_session(&self) -> Result<(), ApiError> {
        let endpoint = self.endpoint("/api/csrf/");
        let response = self.http.get(&endpoint).send().await?;
        Self::check_status(&endpoint, response.status())?;

        let token = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(extract_csrf_token);

        if token.is_none() {
            tracing::warn!("CSRF response did not carry a {} cookie", CSRF_COOKIE);
        }

        *self.csrf_token.write().unwrap() = token;
        Ok(())
    }

    /// Whether a CSRF token is currently held for mutating requests.
    pub fn has_session(&self) -> bool {
        self.csrf_token.read().unwrap().is_some()
    }

    /// Fetch the full list of prior uploads, newest first (server order).
    pub async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        let endpoint = self.endpoint("/api/history/");
        let response = self.http.get(&endpoint).send().await?;
        Self::check_status(&endpoint, response.status())?;
        Ok(response.json().await?)
    }

    /// Submit one spreadsheet as a multipart form and decode the
    /// resulting analysis. Content validation is the server's job.
    pub async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<AnalysisResult, ApiError> {
        let endpoint = self.endpoint("/api/upload/");
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("text/csv")?;
        let form = Form::new().part("file", part);

        let mut request = self.http.post(&endpoint).multipart(form);
        if let Some(token) = self.csrf_token.read().unwrap().as_deref() {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request.send().await?;
        Self::check_status(&endpoint, response.status())?;
        Ok(response.json().await?)
    }

    /// Fetch the generated report for a dataset as an opaque payload.
    pub async fn download_report(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        let endpoint = self.endpoint(&format!("/api/report/{}/", id));
        let response = self.http.get(&endpoint).send().await?;
        Self::check_status(&endpoint, response.status())?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Pull the csrftoken value out of one `Set-Cookie` header line.
fn extract_csrf_token(header: &str) -> Option<String> {
    let first = header.split(';').next()?.trim();
    let (name, value) = first.split_once('=')?;
    if name == CSRF_COOKIE && !value.is_empty() {
        Some(value.to_string())
    } else {
        None
    }
}
