use std::fmt::{self, Write};

use super::preformatted;
use crate::presentation::formatters::{or_na, truncate};
use crate::presentation::view_models::{HistoryListViewModel, HistoryStatsViewModel, ViewMode};

// --------------------------------------------------------
// History List View
// --------------------------------------------------------

pub struct HistoryListView<'a> {
    data: &'a HistoryListViewModel,
    mode: ViewMode,
}

impl<'a> HistoryListView<'a> {
    pub fn new(data: &'a HistoryListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render(&self, w: &mut impl Write) -> fmt::Result {
        if self.data.entries.is_empty() {
            return writeln!(w, "No history entries found.");
        }

        writeln!(
            w,
            "{:<16}  {:<6}  {:>6}  {:<12}  {:<24}  CHANGE",
            "TIME", "OP", "RECORD", "USER", "PRODUCT @ BIN"
        )?;
        for entry in &self.data.entries {
            let target = format!(
                "{} @ {}",
                or_na(Some(entry.product.as_str())),
                or_na(Some(entry.bin.as_str()))
            );
            let line = format!(
                "{:<16}  {:<6}  {:>6}  {:<12}  {:<24}  {}",
                entry.time.as_deref().unwrap_or("-"),
                entry.operation,
                entry.record_id,
                truncate(entry.user.as_deref().unwrap_or("-"), 12),
                truncate(&target, 24),
                entry.change
            );
            writeln!(w, "{}", line.trim_end())?;
            if let Some(notes) = &entry.notes {
                writeln!(w, "{:>18}note: {}", "", notes)?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for HistoryListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Text => self.render(f),
            ViewMode::Markup => preformatted(f, |w| self.render(w)),
        }
    }
}

// --------------------------------------------------------
// History Stats View
// --------------------------------------------------------

pub struct HistoryStatsView<'a> {
    data: &'a HistoryStatsViewModel,
    mode: ViewMode,
}

impl<'a> HistoryStatsView<'a> {
    pub fn new(data: &'a HistoryStatsViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render(&self, w: &mut impl Write) -> fmt::Result {
        let d = self.data;
        writeln!(w, "Operations:   {}", d.total_operations)?;
        writeln!(w, "  Creates:     {}", d.creates)?;
        writeln!(w, "  Updates:     {}", d.updates)?;
        writeln!(w, "  Adjustments: {}", d.adjustments)?;
        writeln!(w, "  Deletes:     {}", d.deletes)?;
        writeln!(w, "Users:        {}", d.unique_users)?;
        if let (Some(first), Some(last)) = (&d.earliest, &d.latest) {
            writeln!(w, "Range:        {} .. {}", first, last)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for HistoryStatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Text => self.render(f),
            ViewMode::Markup => preformatted(f, |w| self.render(w)),
        }
    }
}
