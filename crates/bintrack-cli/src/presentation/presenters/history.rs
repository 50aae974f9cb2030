use bintrack_types::{HistoryEntry, HistoryStats, OperationType, parse_server_timestamp};

use crate::presentation::formatters::format_per_case;
use crate::presentation::view_models::{
    CommandResultViewModel, HistoryEntryViewModel, HistoryListViewModel, HistoryStatsViewModel,
    StatusBadge,
};

fn format_time(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    Some(match parse_server_timestamp(raw) {
        Some(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    })
}

fn arrow<T: PartialEq + ToString>(
    label: &str,
    before: Option<T>,
    after: Option<T>,
) -> Option<String> {
    if before == after {
        return None;
    }
    let show = |v: Option<T>| v.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
    Some(format!("{}: {} → {}", label, show(before), show(after)))
}

/// One-line summary of what an entry changed.
pub fn describe_change(entry: &HistoryEntry) -> String {
    match entry.operation {
        OperationType::Create => format!("created with {} cases", entry.new_cases.unwrap_or(0)),
        OperationType::Delete => format!("removed ({} cases)", entry.previous_cases.unwrap_or(0)),
        OperationType::Adjust => {
            let delta = entry.adjustment.unwrap_or_else(|| {
                entry.new_cases.unwrap_or(0) - entry.previous_cases.unwrap_or(0)
            });
            format!(
                "{:+} cases ({} → {})",
                delta,
                entry.previous_cases.unwrap_or(0),
                entry.new_cases.unwrap_or(0)
            )
        }
        OperationType::Update => {
            let parts: Vec<String> = [
                arrow("bin", entry.previous_bin.clone(), entry.new_bin.clone()),
                arrow("upc", entry.previous_upc.clone(), entry.new_upc.clone()),
                arrow("cases", entry.previous_cases, entry.new_cases),
                arrow(
                    "per case",
                    entry.previous_unit_qty.map(format_per_case),
                    entry.new_unit_qty.map(format_per_case),
                ),
            ]
            .into_iter()
            .flatten()
            .collect();

            if parts.is_empty() {
                "no field changes".to_string()
            } else {
                parts.join(", ")
            }
        }
    }
}

pub fn present_history(
    entries: &[HistoryEntry],
    limit: u32,
) -> CommandResultViewModel<HistoryListViewModel> {
    let rows = entries
        .iter()
        .map(|entry| HistoryEntryViewModel {
            history_id: entry.history_id,
            record_id: entry.record_id.get(),
            operation: entry.operation,
            time: format_time(entry.timestamp.as_deref()),
            user: entry.username.clone(),
            product: entry.product_label().to_string(),
            bin: entry.bin_label().to_string(),
            change: describe_change(entry),
            notes: entry.notes.clone().filter(|n| !n.trim().is_empty()),
        })
        .collect::<Vec<_>>();

    let count = rows.len();
    let result = CommandResultViewModel::new(HistoryListViewModel {
        limit,
        entries: rows,
    });

    if count == 0 {
        result.with_badge(StatusBadge::info("No history entries"))
    } else if count as u32 >= limit {
        result.with_badge(StatusBadge::warning(format!(
            "Showing the latest {} entries (limit reached)",
            count
        )))
    } else {
        result.with_badge(StatusBadge::success(format!("{} history entries", count)))
    }
}

pub fn present_history_stats(
    stats: &HistoryStats,
) -> CommandResultViewModel<HistoryStatsViewModel> {
    let content = HistoryStatsViewModel {
        total_operations: stats.total_operations,
        creates: stats.creates.unwrap_or(0),
        updates: stats.updates.unwrap_or(0),
        adjustments: stats.adjustments.unwrap_or(0),
        deletes: stats.deletes.unwrap_or(0),
        unique_users: stats.unique_users,
        earliest: format_time(stats.earliest_operation.as_deref()),
        latest: format_time(stats.latest_operation.as_deref()),
    };
    CommandResultViewModel::new(content).with_badge(StatusBadge::info("Audit trail"))
}
