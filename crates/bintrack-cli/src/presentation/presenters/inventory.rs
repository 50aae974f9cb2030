use bintrack_engine::{AggregateSummary, summarize};
use bintrack_types::{Record, ViewKind};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, InventoryBody, InventoryViewModel, RecordRowViewModel,
    StatusBadge, TotalsViewModel,
};

pub const EMPTY_MESSAGE: &str = "No records found";

fn non_empty(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty()).map(str::to_string)
}

fn present_row(record: &Record) -> RecordRowViewModel {
    RecordRowViewModel {
        id: record.id.get(),
        bin_location: non_empty(record.bin_location.as_deref()),
        product: non_empty(record.product_description.as_deref()),
        upc: non_empty(record.product_upc.as_deref()),
        cases: record.cases(),
        qty_per_case: record.qty_per_case(),
        total_quantity: record.total_quantity(),
    }
}

fn search_label(search: &str) -> Option<String> {
    let search = search.trim();
    (!search.is_empty()).then(|| search.to_string())
}

pub fn present_table(
    subset: &[&Record],
    summary: AggregateSummary,
    search: &str,
    separator: &str,
) -> InventoryViewModel {
    InventoryViewModel {
        view: ViewKind::Table,
        search: search_label(search),
        summary: Some(summary),
        body: InventoryBody::Table {
            rows: subset.iter().map(|r| present_row(r)).collect(),
            totals: TotalsViewModel {
                total_cases: summary.total_cases,
                total_items: summary.total_items,
            },
        },
        separator: separator.to_string(),
    }
}

/// Cards carry no totals row; the shared summary header is all they get.
pub fn present_cards(
    subset: &[&Record],
    summary: AggregateSummary,
    search: &str,
    separator: &str,
) -> InventoryViewModel {
    InventoryViewModel {
        view: ViewKind::Card,
        search: search_label(search),
        summary: Some(summary),
        body: InventoryBody::Cards {
            cards: subset.iter().map(|r| present_row(r)).collect(),
        },
        separator: separator.to_string(),
    }
}

/// Pick the body for `view`. An empty subset gets only the placeholder.
pub fn present_inventory(
    subset: &[&Record],
    view: ViewKind,
    search: &str,
    separator: &str,
) -> InventoryViewModel {
    if subset.is_empty() {
        return InventoryViewModel {
            view,
            search: search_label(search),
            summary: None,
            body: InventoryBody::Empty {
                message: EMPTY_MESSAGE.to_string(),
            },
            separator: separator.to_string(),
        };
    }

    let summary = summarize(subset.iter().copied());
    match view {
        ViewKind::Table => present_table(subset, summary, search, separator),
        ViewKind::Card => present_cards(subset, summary, search, separator),
    }
}

pub fn present_inventory_result(
    inventory: InventoryViewModel,
    total_records: usize,
) -> CommandResultViewModel<InventoryViewModel> {
    let shown = inventory.rows().len();
    let search = inventory.search.clone();
    let mut result = CommandResultViewModel::new(inventory);

    result = match (shown, search) {
        (0, Some(search)) => result
            .with_badge(StatusBadge::warning(format!(
                "No records match '{}'",
                search
            )))
            .with_suggestion(Guidance::new("Show everything").with_command("bintrack list")),
        (0, None) => result
            .with_badge(StatusBadge::info("Inventory is empty"))
            .with_suggestion(Guidance::new("Add the first record").with_command(
                "bintrack add --bin-id <ID> --upc <UPC> --description <TEXT> --cases <N>",
            )),
        (n, Some(_)) => {
            result.with_badge(StatusBadge::success(format!("{} of {} record(s)", n, total_records)))
        }
        (n, None) => result.with_badge(StatusBadge::success(format!("{} record(s)", n))),
    };

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use bintrack_testing::fixtures::{self, RecordBuilder};

    #[test]
    fn test_empty_subset_is_placeholder_only() {
        let vm = present_inventory(&[], ViewKind::Table, "zzz", ",");
        assert!(vm.is_empty());
        assert!(vm.summary.is_none());
        assert_eq!(vm.search.as_deref(), Some("zzz"));
    }

    #[test]
    fn test_table_has_totals_and_cards_do_not() {
        let records = fixtures::records();
        let subset: Vec<&Record> = records.iter().collect();

        let table = present_inventory(&subset, ViewKind::Table, "", ",");
        match &table.body {
            InventoryBody::Table { rows, totals } => {
                assert_eq!(rows.len(), 3);
                assert_eq!(totals.total_cases, 8);
                assert_eq!(totals.total_items, 24.0);
            }
            other => panic!("expected table, got {:?}", other),
        }

        let cards = present_inventory(&subset, ViewKind::Card, "", ",");
        assert!(matches!(cards.body, InventoryBody::Cards { .. }));
        assert_eq!(cards.summary, table.summary);
    }

    #[test]
    fn test_unset_case_size_has_no_total() {
        let record = RecordBuilder::new(9).per_case(0.0).cases(7).build();
        let vm = present_inventory(&[&record], ViewKind::Table, "", ",");
        let row = &vm.rows()[0];
        assert_eq!(row.qty_per_case, None);
        assert_eq!(row.total_quantity, None);
        assert_eq!(row.cases, 7);
    }

    #[test]
    fn test_missing_names_stay_none() {
        let record = RecordBuilder::new(9).bin("").build();
        let vm = present_inventory(&[&record], ViewKind::Card, "", ",");
        assert_eq!(vm.rows()[0].bin_location, None);
    }

    #[test]
    fn test_result_badge_mentions_filter() {
        let records = fixtures::records();
        let subset: Vec<&Record> = records.iter().take(1).collect();
        let vm = present_inventory(&subset, ViewKind::Table, "milk", ",");
        let result = present_inventory_result(vm, 3);
        assert_eq!(result.badge.map(|b| b.label).as_deref(), Some("1 of 3 record(s)"));
    }
}
