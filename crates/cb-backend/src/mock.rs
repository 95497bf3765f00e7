//! Mock dataset source for testing.
//!
//! Payloads go through the same [`decode_dataset`] path as the real loader,
//! so a malformed fixture fails exactly like a malformed server response.

use std::time::Duration;

use cb_protocol::{decode_dataset, CountryRecord};
use tokio::time::sleep;

use crate::restcountries::LoadError;
use crate::DatasetSource;

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// A JSON body, decoded like a real 200 response.
    Json(String),
    /// A non-success status with a body.
    Status { status: u16, body: String },
}

/// Configurable stand-in for [`crate::DatasetLoader`].
#[derive(Debug, Clone)]
pub struct MockDataset {
    pub response: MockResponse,
    /// Optional delay before answering (ms).
    pub delay_ms: Option<u64>,
}

impl MockDataset {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            response: MockResponse::Json(body.into()),
            delay_ms: None,
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            response: MockResponse::Status {
                status,
                body: body.into(),
            },
            delay_ms: None,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = Some(ms);
        self
    }
}

impl DatasetSource for MockDataset {
    async fn load(&self) -> Result<Vec<CountryRecord>, LoadError> {
        if let Some(ms) = self.delay_ms {
            sleep(Duration::from_millis(ms)).await;
        }

        match &self.response {
            MockResponse::Json(body) => Ok(decode_dataset(body.as_bytes())?),
            MockResponse::Status { status, body } => Err(LoadError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

/// Built-in fixtures for common scenarios.
pub mod fixtures {
    use super::*;

    /// A small dataset in upstream order, with a mix of present and missing fields.
    pub const SAMPLE_JSON: &str = r#"[
        {
            "name": {"common": "Germany", "official": "Federal Republic of Germany"},
            "flags": {"png": "https://flagcdn.com/w320/de.png", "svg": "https://flagcdn.com/de.svg"},
            "region": "Europe",
            "maps": {"googleMaps": "https://goo.gl/maps/mD9FBMq1nvXUBrkv6"},
            "area": 357114.0,
            "population": 83240525
        },
        {
            "name": {"common": "Canada", "official": "Canada"},
            "flags": {"png": "https://flagcdn.com/w320/ca.png"},
            "region": "Americas",
            "maps": {"googleMaps": "https://goo.gl/maps/jmEVLugreeqiZXxbA"},
            "area": 9984670.0,
            "population": 38005238
        },
        {
            "name": {"common": "Ghana", "official": "Republic of Ghana"},
            "region": "Africa",
            "area": 238533.0
        },
        {
            "name": {"common": "Bouvet Island", "official": "Bouvet Island"},
            "region": "Antarctic",
            "population": 0
        },
        {
            "name": {"common": "Austria", "official": "Republic of Austria"},
            "flags": {"png": "https://flagcdn.com/w320/at.png"},
            "region": "Europe",
            "maps": {"openStreetMaps": "https://www.openstreetmap.org/relation/16239"},
            "area": 83871.0,
            "population": 8917205
        }
    ]"#;

    /// A mock answering with [`SAMPLE_JSON`].
    pub fn sample() -> MockDataset {
        MockDataset::json(SAMPLE_JSON)
    }

    /// A mock whose records carry only the given common names.
    pub fn names(names: &[&str]) -> MockDataset {
        let entries: Vec<serde_json::Value> = names
            .iter()
            .map(|name| serde_json::json!({ "name": { "common": name, "official": name } }))
            .collect();
        MockDataset::json(serde_json::Value::Array(entries).to_string())
    }

    /// A mock whose payload cannot be decoded.
    pub fn undecodable() -> MockDataset {
        MockDataset::json(r#"{"status": 400, "message": "Bad Request"}"#)
    }

    /// A mock that answers with a server error.
    pub fn server_error() -> MockDataset {
        MockDataset::status(500, "Internal Server Error")
    }
}
