//! restcountries HTTP client.

use std::time::Duration;

use bytes::Bytes;
use cb_protocol::{decode_dataset, CountryRecord};
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::debug;

use crate::DatasetSource;

pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid endpoint URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches the full dataset with a single unauthenticated `GET`.
///
/// No query parameters, no pagination, no retry.
pub struct DatasetLoader {
    endpoint: String,
    http: Client,
}

/// Build an HTTP client. No timeout unless one is configured.
fn build_http_client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(1);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

impl DatasetLoader {
    /// Create a loader for the default restcountries endpoint.
    pub fn new() -> Result<Self, LoadError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, None)
    }

    /// Create a loader for a custom endpoint and optional request timeout.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, LoadError> {
        Ok(Self {
            endpoint: endpoint.into(),
            http: build_http_client(timeout)?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn parse_endpoint(&self) -> Result<Url, LoadError> {
        Url::parse(&self.endpoint).map_err(|e| LoadError::InvalidUrl {
            url: self.endpoint.clone(),
            reason: e.to_string(),
        })
    }

    /// Issue the request and decode the body.
    pub async fn fetch(&self) -> Result<Vec<CountryRecord>, LoadError> {
        let url = self.parse_endpoint()?;
        debug!(%url, "fetching country dataset");

        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LoadError::Status { status, body });
        }

        let body: Bytes = response.bytes().await?;
        debug!(bytes = body.len(), "dataset received");

        let records = decode_dataset(&body)?;
        debug!(count = records.len(), "dataset decoded");
        Ok(records)
    }
}

impl DatasetSource for DatasetLoader {
    async fn load(&self) -> Result<Vec<CountryRecord>, LoadError> {
        self.fetch().await
    }
}
