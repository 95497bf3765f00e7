//! Alphabetical grouping of names into display sections.

use std::collections::BTreeMap;

/// A run of names sharing a bucket key, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub letter: String,
    pub names: Vec<&'a str>,
}

/// The bucket key for a name: its literal first character, uppercased.
///
/// Some characters uppercase to more than one (`ß` -> `SS`), hence a `String`.
/// An empty name has the empty key.
pub fn bucket_key(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Bucket names by first letter. Keys iterate in ascending order; names keep
/// their input order within a bucket.
pub fn group_by_first_letter<'a, I>(names: I) -> BTreeMap<String, Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buckets: BTreeMap<String, Vec<&'a str>> = BTreeMap::new();
    for name in names {
        buckets.entry(bucket_key(name)).or_default().push(name);
    }
    buckets
}

/// Group names and flatten the buckets into ordered sections.
pub fn sections<'a, I>(names: I) -> Vec<Section<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    group_by_first_letter(names)
        .into_iter()
        .map(|(letter, names)| Section { letter, names })
        .collect()
}
