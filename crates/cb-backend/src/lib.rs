//! cb-backend: dataset loading for the country browser.
//!
//! This crate fetches the country dataset from the REST endpoint and decodes
//! it into [`cb_protocol::CountryRecord`]s. A mock source with canned
//! payloads lets every layer run without the network.

pub mod mock;
pub mod restcountries;

use std::future::Future;

use cb_protocol::CountryRecord;

pub use mock::{MockDataset, MockResponse};
pub use restcountries::{DatasetLoader, LoadError, DEFAULT_ENDPOINT};

/// Anything that can produce the full country dataset in one shot.
pub trait DatasetSource {
    /// Fetch and decode the whole dataset. All-or-nothing.
    fn load(&self) -> impl Future<Output = Result<Vec<CountryRecord>, LoadError>> + Send;
}
