use bintrack_types::Record;
use serde::{Deserialize, Serialize};

/// Totals shown above the inventory region, derived from whatever subset is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub total_cases: i64,
    /// Sum of derived totals. Records without a case size contribute nothing.
    pub total_items: f64,
    pub record_count: usize,
}

impl AggregateSummary {
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

pub fn summarize<'a, I>(records: I) -> AggregateSummary
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .fold(AggregateSummary::default(), |mut acc, record| {
            acc.total_cases += record.cases();
            acc.total_items += record.total_quantity().unwrap_or(0.0);
            acc.record_count += 1;
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bintrack_types::RecordId;

    fn record(id: i64, cases: i64, per_case: f64) -> Record {
        Record {
            id: RecordId::new(id),
            bin_location: Some(format!("A-{id:02}")),
            bin_location_id: None,
            product_upc: Some(format!("{id:04}")),
            product_description: Some("Item".to_string()),
            unit_qty: Some(per_case),
            qty_cases: Some(cases),
            last_update: None,
        }
    }

    #[test]
    fn test_unset_case_size_counts_as_zero_items() {
        let records = vec![record(1, 2, 10.0), record(2, 5, 0.0), record(3, 1, 4.0)];
        let summary = summarize(&records);

        assert_eq!(summary.total_cases, 8);
        assert_eq!(summary.total_items, 24.0);
        assert_eq!(summary.record_count, 3);
    }

    #[test]
    fn test_empty_subset() {
        let summary = summarize(std::iter::empty::<&Record>());
        assert!(summary.is_empty());
        insta::assert_debug_snapshot!(summary, @r###"
        AggregateSummary {
            total_cases: 0,
            total_items: 0.0,
            record_count: 0,
        }
        "###);
    }

    #[test]
    fn test_summarize_filtered_references() {
        let records = vec![record(1, 2, 10.0), record(2, 3, 6.0)];
        let visible: Vec<&Record> = records.iter().skip(1).collect();
        let summary = summarize(visible.iter().copied());

        assert_eq!(summary.total_cases, 3);
        assert_eq!(summary.total_items, 18.0);
    }
}
