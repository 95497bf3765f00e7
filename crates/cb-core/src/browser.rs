//! The country browser view-model.
//!
//! Owns the dataset, the current query, and the derived name index. The
//! renderers only read projections; state changes go through the intents
//! `submit_query`, `clear_query`, and `select`.

use cb_backend::{DatasetSource, LoadError};
use cb_protocol::CountryRecord;
use tracing::{info, warn};

use crate::config::BrowserConfig;
use crate::detail::{lookup, CountryDetail};
use crate::group::{sections, Section};
use crate::search::{build_name_index, filter_names, normalize_query};

/// Presentation switches for the name index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserOptions {
    pub sort_names: bool,
    pub group_by_letter: bool,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            sort_names: true,
            group_by_letter: true,
        }
    }
}

impl From<BrowserConfig> for BrowserOptions {
    fn from(cfg: BrowserConfig) -> Self {
        Self {
            sort_names: cfg.sort_names,
            group_by_letter: cfg.group_by_letter,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CountryBrowser {
    records: Vec<CountryRecord>,
    names: Vec<String>,
    query: String,
    options: BrowserOptions,
}

impl CountryBrowser {
    pub fn new(records: Vec<CountryRecord>, options: BrowserOptions) -> Self {
        let names = build_name_index(&records, options.sort_names);
        Self {
            records,
            names,
            query: String::new(),
            options,
        }
    }

    /// Build from the outcome of a dataset load.
    ///
    /// A failed load is logged and yields an empty browser; there is no
    /// retry and no partial result.
    pub fn from_load_result(
        result: Result<Vec<CountryRecord>, LoadError>,
        options: BrowserOptions,
    ) -> Self {
        let records = match result {
            Ok(records) => {
                info!(count = records.len(), "country dataset loaded");
                records
            }
            Err(e) => {
                warn!(error = %e, "failed to load country dataset");
                Vec::new()
            }
        };
        Self::new(records, options)
    }

    /// Fetch the dataset once from `source` and build the browser.
    pub async fn load<S: DatasetSource>(source: &S, options: BrowserOptions) -> Self {
        Self::from_load_result(source.load().await, options)
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// The full name index, sorted or in dataset order per the options.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The current normalized query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn options(&self) -> BrowserOptions {
        self.options
    }

    /// True when no dataset was loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names matching the current query, in index order.
    pub fn results(&self) -> Vec<&str> {
        filter_names(&self.names, &self.query)
    }

    /// Matching names grouped by first letter, keys ascending.
    pub fn sections(&self) -> Vec<Section<'_>> {
        sections(self.results())
    }

    /// Matching names in the order they are displayed: flattened sections
    /// when grouping, plain results otherwise.
    pub fn display_order(&self) -> Vec<&str> {
        if self.options.group_by_letter {
            self.sections()
                .into_iter()
                .flat_map(|section| section.names)
                .collect()
        } else {
            self.results()
        }
    }

    /// The displayed entry with 1-based `number`, if any.
    pub fn entry(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.display_order().get(i).copied())
    }

    /// Replace the query with the normalized form of `text`.
    pub fn submit_query(&mut self, text: &str) {
        self.query = normalize_query(text);
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Detail for `name`, with placeholders when no record matches.
    pub fn select(&self, name: &str) -> CountryDetail {
        CountryDetail::new(name, lookup(&self.records, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::{MAP_NOT_AVAILABLE, NOT_AVAILABLE};
    use cb_backend::mock::fixtures;

    fn browser_of(names: &[&str], options: BrowserOptions) -> CountryBrowser {
        let records = names
            .iter()
            .map(|n| CountryRecord::new(*n, format!("Official {n}")))
            .collect();
        CountryBrowser::new(records, options)
    }

    fn unsorted_flat() -> BrowserOptions {
        BrowserOptions {
            sort_names: false,
            group_by_letter: false,
        }
    }

    #[test]
    fn initial_state_shows_every_name() {
        let browser = browser_of(&["Peru", "Chad", "Mali"], BrowserOptions::default());
        assert_eq!(browser.query(), "");
        assert_eq!(browser.names(), ["Chad", "Mali", "Peru"]);
        assert_eq!(browser.results(), vec!["Chad", "Mali", "Peru"]);
    }

    #[test]
    fn unsorted_keeps_dataset_order() {
        let browser = browser_of(&["Peru", "Chad", "Mali"], unsorted_flat());
        assert_eq!(browser.names(), ["Peru", "Chad", "Mali"]);
    }

    #[test]
    fn submit_query_normalizes() {
        let mut browser = browser_of(&["canada", "Germany", "ghana"], BrowserOptions::default());
        browser.submit_query("g");
        assert_eq!(browser.query(), "G");
        assert_eq!(browser.results(), vec!["Germany"]);
    }

    #[test]
    fn scenario_grouping_after_query() {
        let mut browser = browser_of(&["canada", "Germany", "ghana"], BrowserOptions::default());
        browser.submit_query("g");
        let sections = browser.sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].letter, "G");
        assert_eq!(sections[0].names, vec!["Germany"]);
    }

    #[test]
    fn empty_query_groups_everything() {
        let browser = browser_of(&["canada", "Germany", "ghana"], BrowserOptions::default());
        let sections = browser.sections();
        let letters: Vec<&str> = sections.iter().map(|s| s.letter.as_str()).collect();
        assert_eq!(letters, vec!["C", "G"]);
        assert_eq!(sections[1].names, vec!["Germany", "ghana"]);
    }

    #[test]
    fn clear_query_restores_full_list() {
        let mut browser = browser_of(&["Chad", "Peru"], BrowserOptions::default());
        browser.submit_query("pe");
        assert_eq!(browser.results(), vec!["Peru"]);
        browser.clear_query();
        assert_eq!(browser.results(), vec!["Chad", "Peru"]);
    }

    #[test]
    fn display_order_follows_sections_when_grouped() {
        let options = BrowserOptions {
            sort_names: false,
            group_by_letter: true,
        };
        let browser = browser_of(&["Peru", "Chad", "Palau"], options);
        assert_eq!(browser.display_order(), vec!["Chad", "Peru", "Palau"]);
        assert_eq!(browser.entry(1), Some("Chad"));
        assert_eq!(browser.entry(3), Some("Palau"));
    }

    #[test]
    fn display_order_flat() {
        let browser = browser_of(&["Peru", "Chad", "Palau"], unsorted_flat());
        assert_eq!(browser.display_order(), vec!["Peru", "Chad", "Palau"]);
    }

    #[test]
    fn entry_out_of_range() {
        let browser = browser_of(&["Chad"], BrowserOptions::default());
        assert_eq!(browser.entry(0), None);
        assert_eq!(browser.entry(2), None);
    }

    #[test]
    fn select_known_name() {
        let browser = browser_of(&["Chad"], BrowserOptions::default());
        let detail = browser.select("Chad");
        assert!(detail.found);
        assert_eq!(detail.official_name, "Official Chad");
        assert_eq!(detail.region, NOT_AVAILABLE);
    }

    #[test]
    fn select_unknown_name_never_fails() {
        let browser = browser_of(&["Chad"], BrowserOptions::default());
        let detail = browser.select("Atlantis");
        assert!(!detail.found);
        assert_eq!(detail.map, MAP_NOT_AVAILABLE);
    }

    #[tokio::test]
    async fn load_from_mock() {
        let browser = CountryBrowser::load(&fixtures::sample(), BrowserOptions::default()).await;
        assert_eq!(browser.records().len(), 5);
        assert_eq!(
            browser.names(),
            ["Austria", "Bouvet Island", "Canada", "Germany", "Ghana"]
        );
        let detail = browser.select("Germany");
        assert_eq!(detail.population, "83,240,525");
    }

    #[tokio::test]
    async fn decode_failure_leaves_browser_empty() {
        let browser =
            CountryBrowser::load(&fixtures::undecodable(), BrowserOptions::default()).await;
        assert!(browser.is_empty());
        assert!(browser.names().is_empty());
        assert!(browser.sections().is_empty());
    }

    #[tokio::test]
    async fn server_error_leaves_browser_empty() {
        let browser =
            CountryBrowser::load(&fixtures::server_error(), BrowserOptions::default()).await;
        assert!(browser.is_empty());
        assert!(browser.results().is_empty());
    }

    #[test]
    fn options_from_config() {
        let options = BrowserOptions::from(BrowserConfig {
            sort_names: false,
            group_by_letter: true,
        });
        assert!(!options.sort_names);
        assert!(options.group_by_letter);
    }
}
