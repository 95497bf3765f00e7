//! restcountries v3.1 wire format.
//!
//! The upstream payload carries far more than the browser shows; unknown
//! fields are ignored. `name.common` and `name.official` are required, so a
//! single malformed entry fails the whole decode.

use serde::Deserialize;

use crate::country::CountryRecord;

/// A country object as served by the REST endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawCountry {
    pub name: RawName,
    #[serde(default)]
    pub flags: Option<RawFlags>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub maps: Option<RawMaps>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub population: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawName {
    pub common: String,
    pub official: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawFlags {
    pub png: Option<String>,
    pub svg: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawMaps {
    pub google_maps: Option<String>,
    pub open_street_maps: Option<String>,
}

impl From<RawCountry> for CountryRecord {
    fn from(raw: RawCountry) -> Self {
        let flag_image_url = raw.flags.and_then(|f| f.png.or(f.svg));
        let map_url = raw.maps.and_then(|m| m.google_maps.or(m.open_street_maps));
        Self {
            common_name: raw.name.common,
            official_name: raw.name.official,
            flag_image_url,
            region: raw.region.filter(|r| !r.is_empty()),
            map_url,
            area_km2: raw.area,
            population: raw.population,
        }
    }
}

/// Decode a full dataset payload into records, preserving upstream order.
pub fn decode_dataset(bytes: &[u8]) -> Result<Vec<CountryRecord>, serde_json::Error> {
    let raw: Vec<RawCountry> = serde_json::from_slice(bytes)?;
    Ok(raw.into_iter().map(CountryRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GERMANY: &str = r#"{
        "name": {"common": "Germany", "official": "Federal Republic of Germany", "nativeName": {}},
        "flags": {"png": "https://flagcdn.com/w320/de.png", "svg": "https://flagcdn.com/de.svg", "alt": "black red gold"},
        "region": "Europe",
        "maps": {"googleMaps": "https://goo.gl/maps/mD9FBMq1nvXUBrkv6", "openStreetMaps": "https://www.openstreetmap.org/relation/51477"},
        "area": 357114.0,
        "population": 83240525,
        "capital": ["Berlin"]
    }"#;

    #[test]
    fn decodes_full_entry() {
        let payload = format!("[{GERMANY}]");
        let records = decode_dataset(payload.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);

        let de = &records[0];
        assert_eq!(de.common_name, "Germany");
        assert_eq!(de.official_name, "Federal Republic of Germany");
        assert_eq!(
            de.flag_image_url.as_deref(),
            Some("https://flagcdn.com/w320/de.png")
        );
        assert_eq!(de.region.as_deref(), Some("Europe"));
        assert_eq!(
            de.map_url.as_deref(),
            Some("https://goo.gl/maps/mD9FBMq1nvXUBrkv6")
        );
        assert_eq!(de.area_km2, Some(357114.0));
        assert_eq!(de.population, Some(83240525));
    }

    #[test]
    fn names_only_entry_leaves_rest_empty() {
        let payload = r#"[{"name": {"common": "Chad", "official": "Republic of Chad"}}]"#;
        let records = decode_dataset(payload.as_bytes()).unwrap();
        assert_eq!(records[0], CountryRecord::new("Chad", "Republic of Chad"));
    }

    #[test]
    fn flag_falls_back_to_svg() {
        let payload = r#"[{"name": {"common": "Chad", "official": "Republic of Chad"},
                          "flags": {"svg": "https://flagcdn.com/td.svg"}}]"#;
        let records = decode_dataset(payload.as_bytes()).unwrap();
        assert_eq!(
            records[0].flag_image_url.as_deref(),
            Some("https://flagcdn.com/td.svg")
        );
    }

    #[test]
    fn map_falls_back_to_openstreetmap() {
        let payload = r#"[{"name": {"common": "Chad", "official": "Republic of Chad"},
                          "maps": {"openStreetMaps": "https://www.openstreetmap.org/relation/2361304"}}]"#;
        let records = decode_dataset(payload.as_bytes()).unwrap();
        assert_eq!(
            records[0].map_url.as_deref(),
            Some("https://www.openstreetmap.org/relation/2361304")
        );
    }

    #[test]
    fn empty_region_treated_as_missing() {
        let payload = r#"[{"name": {"common": "Antarctica", "official": "Antarctica"}, "region": ""}]"#;
        let records = decode_dataset(payload.as_bytes()).unwrap();
        assert!(records[0].region.is_none());
    }

    #[test]
    fn missing_name_fails_whole_payload() {
        let payload = format!(r#"[{GERMANY}, {{"region": "Europe"}}]"#);
        assert!(decode_dataset(payload.as_bytes()).is_err());
    }

    #[test]
    fn non_array_payload_fails() {
        let payload = r#"{"status": 400, "message": "Bad Request"}"#;
        assert!(decode_dataset(payload.as_bytes()).is_err());
    }

    #[test]
    fn empty_array_decodes_to_empty() {
        assert!(decode_dataset(b"[]").unwrap().is_empty());
    }

    #[test]
    fn preserves_upstream_order() {
        let payload = r#"[
            {"name": {"common": "canada", "official": "Canada"}},
            {"name": {"common": "Germany", "official": "Federal Republic of Germany"}},
            {"name": {"common": "ghana", "official": "Republic of Ghana"}}
        ]"#;
        let names: Vec<String> = decode_dataset(payload.as_bytes())
            .unwrap()
            .into_iter()
            .map(|r| r.common_name)
            .collect();
        assert_eq!(names, vec!["canada", "Germany", "ghana"]);
    }
}
