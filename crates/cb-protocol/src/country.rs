//! The country record shared across crates.

use serde::{Deserialize, Serialize};

/// One decoded entry from the country dataset.
///
/// Only the two names are guaranteed; every other field may be missing
/// from the upstream data and is rendered with a placeholder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CountryRecord {
    pub common_name: String,
    pub official_name: String,
    pub flag_image_url: Option<String>,
    pub region: Option<String>,
    pub map_url: Option<String>,
    pub area_km2: Option<f64>,
    pub population: Option<u64>,
}

impl CountryRecord {
    /// Create a record with only the required names set.
    pub fn new(common_name: impl Into<String>, official_name: impl Into<String>) -> Self {
        Self {
            common_name: common_name.into(),
            official_name: official_name.into(),
            ..Default::default()
        }
    }

    pub fn with_flag(mut self, url: impl Into<String>) -> Self {
        self.flag_image_url = Some(url.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_map(mut self, url: impl Into<String>) -> Self {
        self.map_url = Some(url.into());
        self
    }

    pub fn with_area(mut self, km2: f64) -> Self {
        self.area_km2 = Some(km2);
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }
}
