//! Name index and incremental search.

use cb_protocol::CountryRecord;

/// Normalize a query: first character uppercased, the rest lowercased.
///
/// Applied to the query only, never to stored names. Empty in, empty out.
pub fn normalize_query(query: &str) -> String {
    let mut chars = query.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Return the names containing the normalized query, in index order.
///
/// Matching is a case-sensitive substring test against the normalized query,
/// so `"g"` matches `"Germany"` and `"Senegal"` but not `"ghana"`. An empty
/// query returns every name.
pub fn filter_names<'a, S: AsRef<str>>(names: &'a [S], query: &str) -> Vec<&'a str> {
    let normalized = normalize_query(query);
    names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| normalized.is_empty() || name.contains(normalized.as_str()))
        .collect()
}

/// Build the searchable name index from the dataset.
///
/// Names keep dataset order unless `sorted`, in which case they are sorted
/// ascending by code point.
pub fn build_name_index(records: &[CountryRecord], sorted: bool) -> Vec<String> {
    let mut names: Vec<String> = records.iter().map(|r| r.common_name.clone()).collect();
    if sorted {
        names.sort();
    }
    names
}
