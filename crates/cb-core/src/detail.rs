//! Detail lookup and field formatting for a selected country.

use cb_protocol::CountryRecord;

/// Placeholder for any missing field.
pub const NOT_AVAILABLE: &str = "N/A";
/// Placeholder for a missing map link.
pub const MAP_NOT_AVAILABLE: &str = "Map not available";

/// First record whose common name equals `name` exactly.
pub fn lookup<'a>(records: &'a [CountryRecord], name: &str) -> Option<&'a CountryRecord> {
    records.iter().find(|r| r.common_name == name)
}

/// Display-ready detail for one selected name.
///
/// Built from an optional record; every absent field carries its fixed
/// placeholder, so a name with no matching record still renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDetail {
    pub title: String,
    pub official_name: String,
    pub region: String,
    pub area: String,
    pub population: String,
    pub flag: String,
    pub map: String,
    pub found: bool,
}

impl CountryDetail {
    pub fn new(name: &str, record: Option<&CountryRecord>) -> Self {
        let text = |value: Option<&String>| {
            value
                .map(String::clone)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };

        Self {
            title: name.to_string(),
            official_name: text(record.map(|r| &r.official_name)),
            region: text(record.and_then(|r| r.region.as_ref())),
            area: record
                .and_then(|r| r.area_km2)
                .map(format_area)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            population: record
                .and_then(|r| r.population)
                .map(group_thousands)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            flag: text(record.and_then(|r| r.flag_image_url.as_ref())),
            map: record
                .and_then(|r| r.map_url.clone())
                .unwrap_or_else(|| MAP_NOT_AVAILABLE.to_string()),
            found: record.is_some(),
        }
    }

    /// Labelled rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("Official name", self.official_name.as_str()),
            ("Region", self.region.as_str()),
            ("Area", self.area.as_str()),
            ("Population", self.population.as_str()),
            ("Flag", self.flag.as_str()),
            ("Map", self.map.as_str()),
        ]
    }
}

/// Format an area in square kilometres, e.g. `357,114 km²` or `0.44 km²`.
pub fn format_area(km2: f64) -> String {
    if km2.is_finite() && km2 >= 0.0 && km2.fract() == 0.0 && km2 < u64::MAX as f64 {
        format!("{} km²", group_thousands(km2 as u64))
    } else {
        format!("{km2} km²")
    }
}

/// Insert thousands separators: `83240525` -> `83,240,525`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
