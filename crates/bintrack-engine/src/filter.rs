use bintrack_types::{Bin, Record};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized search input: trimmed and lower-cased once, matched many times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of characters after trimming. Used for minimum-length gates.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Case-insensitive substring test. An empty term matches everything.
    pub fn matches(&self, haystack: &str) -> bool {
        self.is_empty() || haystack.to_lowercase().contains(&self.0)
    }
}

impl From<&str> for SearchTerm {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Records whose bin-location name or product description contains `term`.
///
/// Order is preserved and missing names count as empty strings.
pub fn filter_records<'a>(records: &'a [Record], term: &SearchTerm) -> Vec<&'a Record> {
    if term.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|r| term.matches(r.bin_location_name()) || term.matches(r.description()))
        .collect()
}

/// Bins whose name contains `term`, same normalization as [`filter_records`].
pub fn filter_bins<'a>(bins: &'a [Bin], term: &SearchTerm) -> Vec<&'a Bin> {
    bins.iter().filter(|b| term.matches(b.name())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bintrack_types::RecordId;

    fn record(id: i64, bin: Option<&str>, description: Option<&str>) -> Record {
        Record {
            id: RecordId::new(id),
            bin_location: bin.map(str::to_string),
            bin_location_id: None,
            product_upc: None,
            product_description: description.map(str::to_string),
            unit_qty: None,
            qty_cases: Some(1),
            last_update: None,
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record(1, Some("A-01"), Some("Whole Milk")),
            record(2, Some("B-02"), Some("Orange Juice")),
            record(3, Some("MILK-ROOM"), Some("Butter")),
            record(4, None, None),
        ]
    }

    fn ids(records: &[&Record]) -> Vec<i64> {
        records.iter().map(|r| r.id.get()).collect()
    }

    #[test]
    fn test_empty_term_is_identity() {
        let records = sample();
        let filtered = filter_records(&records, &SearchTerm::new("   "));
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_matches_bin_or_description_case_insensitive() {
        let records = sample();
        let filtered = filter_records(&records, &SearchTerm::new("  MiLk "));
        assert_eq!(ids(&filtered), vec![1, 3]);
    }

    #[test]
    fn test_filter_is_subset_and_excludes_non_matches() {
        let records = sample();
        let term = SearchTerm::new("juice");
        let filtered = filter_records(&records, &term);

        assert_eq!(ids(&filtered), vec![2]);
        for r in records.iter().filter(|r| r.id.get() != 2) {
            assert!(!term.matches(r.bin_location_name()));
            assert!(!term.matches(r.description()));
        }
    }

    #[test]
    fn test_missing_names_never_match_non_empty_term() {
        let records = vec![record(9, None, None)];
        assert!(filter_records(&records, &SearchTerm::new("a")).is_empty());
    }

    #[test]
    fn test_filter_bins_by_name() {
        let bins = vec![Bin::new(1, "A-01"), Bin::new(2, "A-02"), Bin::new(3, "C-10")];
        let hits = filter_bins(&bins, &SearchTerm::new("a-0"));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].name(), "A-02");
    }

    #[test]
    fn test_search_term_len_counts_trimmed_chars() {
        assert_eq!(SearchTerm::new("  m ").len(), 1);
        assert!(SearchTerm::new("   ").is_empty());
    }
}
