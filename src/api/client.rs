//! HTTP client for the results dataset.
//!
//! The dataset is a single static JSON document; the client performs one
//! GET per load, checks the status, and decodes the array. Failures map
//! to [`ApiError`] so the UI can surface them in place of the grid.

use std::time::Duration;

use reqwest::{header, Client};
use tracing::{debug, instrument};

use super::error::{ApiError, Result};
use super::types::RowData;

/// The fixed URL of the Olympic winners dataset.
pub const DATA_URL: &str = "https://www.ag-grid.com/example-assets/olympic-winners.json";

/// Request timeout in seconds. A hung fetch must eventually turn into a
/// visible load error rather than spinning forever.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The results dataset client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ResultsClient {
    /// The HTTP client.
    client: Client,
    /// The dataset endpoint.
    url: String,
}

impl ResultsClient {
    /// Create a client pointed at the fixed public dataset URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_url(DATA_URL)
    }

    /// Create a client pointed at a custom endpoint.
    ///
    /// Used by the `--data-url` override and by tests.
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let client = Self::build_http_client()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Build the HTTP client with appropriate settings.
    fn build_http_client() -> Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(ApiError::Network)
    }

    /// The endpoint this client fetches from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the full dataset.
    ///
    /// Issues one GET against the endpoint and decodes the JSON array.
    /// No automatic retries; the caller decides whether to try again.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch_rows(&self) -> Result<Vec<RowData>> {
        debug!("Fetching results dataset");

        let response = self
            .client
            .get(&self.url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status, &self.url));
        }

        let rows: Vec<RowData> = response.json().await.map_err(|e| {
            if e.is_decode() {
                ApiError::InvalidResponse(format!("Failed to parse dataset: {}", e))
            } else {
                ApiError::Network(e)
            }
        })?;

        debug!("Fetched {} rows", rows.len());
        Ok(rows)
    }
}
