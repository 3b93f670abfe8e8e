use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};
use url::Url;

use super::{decode_utf8, SheetSource};
use crate::domain::error::{AppError, Result};
use crate::domain::roster_config::RosterConfig;

const ACCEPTED_CONTENT_TYPES: [&str; 2] = ["text/csv", "application/octet-stream"];

/// Fetches the published CSV export of a spreadsheet
pub struct SheetClient {
    client: reqwest::Client,
    url: Url,
}

impl SheetClient {
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, url))
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn from_config(config: &RosterConfig) -> Result<Self> {
        Self::new(
            config.export_url()?,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Reject responses that are clearly not a CSV export.
///
/// A private sheet answers with an HTML sign-in page instead of CSV.
fn check_content_type(content_type: Option<&str>) -> Result<()> {
    match content_type {
        Some(value) if !ACCEPTED_CONTENT_TYPES.iter().any(|t| value.contains(t)) => {
            Err(AppError::FetchError(format!(
                "Response is not CSV ({}). Make sure the sheet is shared so that anyone with the link can view it.",
                value
            )))
        }
        _ => Ok(()),
    }
}

#[async_trait]
impl SheetSource for SheetClient {
    async fn fetch_text(&self) -> Result<String> {
        debug!(url = %self.url, "Fetching roster export");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| AppError::FetchError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::FetchError(format!(
                "Failed to reach the spreadsheet: {}",
                status
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        check_content_type(content_type.as_deref())?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::FetchError(format!("Failed to read response body: {}", e)))?;

        info!(url = %self.url, bytes = bytes.len(), "Fetched roster export");
        Ok(decode_utf8(&bytes))
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
