use std::fmt;

use crate::presentation::formatters::{
    NOT_APPLICABLE, NOT_SET, escape_html, format_count, format_per_case, format_quantity, or_na,
};
use crate::presentation::view_models::{
    InventoryBody, InventoryViewModel, RecordRowViewModel, TotalsViewModel,
};

fn per_case_text(row: &RecordRowViewModel) -> String {
    row.qty_per_case
        .map(format_per_case)
        .unwrap_or_else(|| NOT_SET.to_string())
}

fn total_text(row: &RecordRowViewModel, separator: &str) -> String {
    row.total_quantity
        .map(|t| format_quantity(t, separator))
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

fn write_row(f: &mut fmt::Formatter, widths: &[usize; 6], line: [&str; 6]) -> fmt::Result {
    let text = format!(
        "{:<w0$}  {:<w1$}  {:<w2$}  {:>w3$}  {:>w4$}  {:>w5$}",
        line[0],
        line[1],
        line[2],
        line[3],
        line[4],
        line[5],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
        w4 = widths[4],
        w5 = widths[5],
    );
    writeln!(f, "{}", text.trim_end())
}

// --------------------------------------------------------
// Text View
// --------------------------------------------------------

pub struct InventoryView<'a> {
    data: &'a InventoryViewModel,
}

impl<'a> InventoryView<'a> {
    pub fn new(data: &'a InventoryViewModel) -> Self {
        Self { data }
    }

    fn render_summary(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(summary) = &self.data.summary else {
            return Ok(());
        };
        let sep = &self.data.separator;
        writeln!(
            f,
            "Total Cases: {} | Total Items: {} | Records: {}",
            format_count(summary.total_cases, sep),
            format_quantity(summary.total_items, sep),
            format_count(summary.record_count as i64, sep)
        )?;
        writeln!(f)
    }

    fn render_table(
        &self,
        f: &mut fmt::Formatter,
        rows: &[RecordRowViewModel],
        totals: &TotalsViewModel,
    ) -> fmt::Result {
        let sep = &self.data.separator;
        let cells: Vec<[String; 6]> = rows
            .iter()
            .map(|row| {
                [
                    row.id.to_string(),
                    or_na(row.bin_location.as_deref()).to_string(),
                    or_na(row.product.as_deref()).to_string(),
                    format_count(row.cases, sep),
                    per_case_text(row),
                    total_text(row, sep),
                ]
            })
            .collect();
        let footer = [
            String::new(),
            String::new(),
            "Totals".to_string(),
            format_count(totals.total_cases, sep),
            String::new(),
            format_quantity(totals.total_items, sep),
        ];
        let header = ["ID", "BIN LOCATION", "PRODUCT", "CASES", "QTY/CASE", "TOTAL"];

        let mut widths = header.map(|h| h.chars().count());
        for line in cells.iter().chain(std::iter::once(&footer)) {
            for (w, cell) in widths.iter_mut().zip(line) {
                *w = (*w).max(cell.chars().count());
            }
        }

        write_row(f, &widths, header)?;
        for line in &cells {
            write_row(f, &widths, line.each_ref().map(String::as_str))?;
        }
        let rule: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        writeln!(f, "{}", "-".repeat(rule))?;
        write_row(f, &widths, footer.each_ref().map(String::as_str))
    }

    fn render_cards(&self, f: &mut fmt::Formatter, cards: &[RecordRowViewModel]) -> fmt::Result {
        let sep = &self.data.separator;
        for (i, card) in cards.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(
                f,
                "[{}] {} (#{})",
                or_na(card.bin_location.as_deref()),
                or_na(card.product.as_deref()),
                card.id
            )?;
            writeln!(f, "  Case Quantity:  {}", format_count(card.cases, sep))?;
            writeln!(f, "  Qty per Case:   {}", per_case_text(card))?;
            writeln!(f, "  Total Quantity: {}", total_text(card, sep))?;
            writeln!(f, "  Actions: Edit | Adjust | Delete")?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for InventoryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data.body {
            InventoryBody::Empty { message } => writeln!(f, "{}", message),
            InventoryBody::Table { rows, totals } => {
                self.render_summary(f)?;
                self.render_table(f, rows, totals)
            }
            InventoryBody::Cards { cards } => {
                self.render_summary(f)?;
                self.render_cards(f, cards)
            }
        }
    }
}

// --------------------------------------------------------
// Markup View
// --------------------------------------------------------

/// HTML fragment of the inventory region. Record text is always escaped.
pub struct InventoryMarkupView<'a> {
    data: &'a InventoryViewModel,
}

impl<'a> InventoryMarkupView<'a> {
    pub fn new(data: &'a InventoryViewModel) -> Self {
        Self { data }
    }

    fn per_case_cell(row: &RecordRowViewModel) -> String {
        match row.qty_per_case {
            Some(q) => format_per_case(q),
            None => format!("<span class=\"muted\">{}</span>", NOT_SET),
        }
    }

    fn total_cell(&self, row: &RecordRowViewModel) -> String {
        match row.total_quantity {
            Some(t) => escape_html(&format_quantity(t, &self.data.separator)),
            None => format!("<span class=\"muted\">{}</span>", NOT_APPLICABLE),
        }
    }

    fn actions(f: &mut fmt::Formatter, id: i64) -> fmt::Result {
        for (action, label) in [("edit", "Edit"), ("adjust", "Adjust"), ("delete", "Delete")] {
            writeln!(
                f,
                "<button class=\"btn btn-small\" data-action=\"{}\" data-id=\"{}\">{}</button>",
                action, id, label
            )?;
        }
        Ok(())
    }

    fn render_summary(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(summary) = &self.data.summary else {
            return Ok(());
        };
        let sep = &self.data.separator;
        writeln!(f, "<div class=\"summary\">")?;
        for (label, value) in [
            ("Total Cases", format_count(summary.total_cases, sep)),
            ("Total Items", format_quantity(summary.total_items, sep)),
            ("Records", format_count(summary.record_count as i64, sep)),
        ] {
            writeln!(
                f,
                "<div class=\"summary-item\"><span class=\"summary-label\">{}</span><span class=\"summary-value\">{}</span></div>",
                label,
                escape_html(&value)
            )?;
        }
        writeln!(f, "</div>")
    }

    fn render_table(
        &self,
        f: &mut fmt::Formatter,
        rows: &[RecordRowViewModel],
        totals: &TotalsViewModel,
    ) -> fmt::Result {
        let sep = &self.data.separator;
        writeln!(f, "<table class=\"inventory-table\">")?;
        writeln!(
            f,
            "<thead><tr><th>Bin Location</th><th>Product Name</th><th>Case Quantity</th><th>Qty per Case</th><th>Total Quantity</th><th>Actions</th></tr></thead>"
        )?;
        writeln!(f, "<tbody>")?;
        for row in rows {
            writeln!(f, "<tr data-id=\"{}\">", row.id)?;
            writeln!(
                f,
                "<td><strong>{}</strong></td>",
                escape_html(or_na(row.bin_location.as_deref()))
            )?;
            writeln!(f, "<td>{}</td>", escape_html(or_na(row.product.as_deref())))?;
            writeln!(f, "<td>{}</td>", escape_html(&format_count(row.cases, sep)))?;
            writeln!(f, "<td>{}</td>", Self::per_case_cell(row))?;
            writeln!(f, "<td>{}</td>", self.total_cell(row))?;
            writeln!(f, "<td class=\"table-actions\">")?;
            Self::actions(f, row.id)?;
            writeln!(f, "</td>")?;
            writeln!(f, "</tr>")?;
        }
        writeln!(f, "</tbody>")?;
        writeln!(
            f,
            "<tfoot><tr class=\"totals-row\"><td colspan=\"2\"><strong>Totals:</strong></td><td><strong>{}</strong></td><td></td><td><strong>{}</strong></td><td></td></tr></tfoot>",
            escape_html(&format_count(totals.total_cases, sep)),
            escape_html(&format_quantity(totals.total_items, sep))
        )?;
        writeln!(f, "</table>")
    }

    fn render_cards(&self, f: &mut fmt::Formatter, cards: &[RecordRowViewModel]) -> fmt::Result {
        let sep = &self.data.separator;
        writeln!(f, "<div class=\"card-grid\">")?;
        for card in cards {
            writeln!(f, "<div class=\"record-card\" data-id=\"{}\">", card.id)?;
            writeln!(
                f,
                "<div class=\"card-header\"><div class=\"card-badge\">{}</div></div>",
                escape_html(or_na(card.bin_location.as_deref()))
            )?;
            writeln!(f, "<div class=\"card-body\">")?;
            writeln!(
                f,
                "<div class=\"card-title\">{}</div>",
                escape_html(or_na(card.product.as_deref()))
            )?;
            for (label, value) in [
                ("Case Quantity:", escape_html(&format_count(card.cases, sep))),
                ("Qty per Case:", Self::per_case_cell(card)),
                ("Total Quantity:", self.total_cell(card)),
            ] {
                writeln!(
                    f,
                    "<div class=\"card-info-row\"><span class=\"card-info-label\">{}</span><span class=\"card-info-value\">{}</span></div>",
                    label, value
                )?;
            }
            writeln!(f, "</div>")?;
            writeln!(f, "<div class=\"card-footer\">")?;
            Self::actions(f, card.id)?;
            writeln!(f, "</div>")?;
            writeln!(f, "</div>")?;
        }
        writeln!(f, "</div>")
    }
}

impl<'a> fmt::Display for InventoryMarkupView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "<section class=\"inventory\" data-view=\"{}\">",
            self.data.view
        )?;
        match &self.data.body {
            InventoryBody::Empty { message } => {
                writeln!(f, "<div class=\"empty-state\">{}</div>", escape_html(message))?;
            }
            InventoryBody::Table { rows, totals } => {
                self.render_summary(f)?;
                self.render_table(f, rows, totals)?;
            }
            InventoryBody::Cards { cards } => {
                self.render_summary(f)?;
                self.render_cards(f, cards)?;
            }
        }
        writeln!(f, "</section>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_inventory;
    use bintrack_testing::fixtures::{self, RecordBuilder};
    use bintrack_types::{Record, ViewKind};

    fn render(records: &[Record], view: ViewKind, markup: bool) -> String {
        let subset: Vec<&Record> = records.iter().collect();
        let vm = present_inventory(&subset, view, "", ",");
        if markup {
            InventoryMarkupView::new(&vm).to_string()
        } else {
            InventoryView::new(&vm).to_string()
        }
    }

    #[test]
    fn test_single_card_text() {
        let records = vec![
            RecordBuilder::new(1)
                .bin("A-01")
                .product("0001", "Whole Milk")
                .per_case(1250.0)
                .cases(2)
                .build(),
        ];
        insta::assert_snapshot!(render(&records, ViewKind::Card, false), @r"
        Total Cases: 2 | Total Items: 2,500 | Records: 1

        [A-01] Whole Milk (#1)
          Case Quantity:  2
          Qty per Case:   1250
          Total Quantity: 2,500
          Actions: Edit | Adjust | Delete
        ");
    }

    #[test]
    fn test_table_text_has_totals_row() {
        let text = render(&fixtures::records(), ViewKind::Table, false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Total Cases: 8 | Total Items: 24 | Records: 3");
        assert!(lines[2].starts_with("ID  BIN LOCATION  PRODUCT"));
        assert!(text.contains("Not Set"));
        assert!(text.contains('—'));
        assert!(lines.last().is_some_and(|l| l.contains("Totals") && l.ends_with("24")));
    }

    #[test]
    fn test_card_text_has_no_totals_row() {
        let text = render(&fixtures::records(), ViewKind::Card, false);
        assert!(text.starts_with("Total Cases: 8 | Total Items: 24 | Records: 3"));
        assert!(!text.contains("Totals"));
        assert!(text.contains("[COLD-1] Butter (#3)"));
    }

    #[test]
    fn test_empty_is_placeholder_only() {
        let text = render(&[], ViewKind::Table, false);
        assert_eq!(text, "No records found\n");

        let html = render(&[], ViewKind::Card, true);
        assert!(html.contains("<div class=\"empty-state\">No records found</div>"));
        assert!(!html.contains("summary"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_markup_escapes_record_text() {
        let records = vec![
            RecordBuilder::new(5)
                .bin("A&B")
                .product("0005", "<script>alert(1)</script>")
                .cases(1)
                .build(),
        ];
        for view in [ViewKind::Table, ViewKind::Card] {
            let html = render(&records, view, true);
            assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
            assert!(html.contains("A&amp;B"));
            assert!(!html.contains("<script>"));
        }
    }

    #[test]
    fn test_markup_totals_only_in_table() {
        let table = render(&fixtures::records(), ViewKind::Table, true);
        assert!(table.contains("<tfoot>"));
        assert!(table.contains("<strong>Totals:</strong>"));

        let cards = render(&fixtures::records(), ViewKind::Card, true);
        assert!(!cards.contains("<tfoot>"));
        assert!(cards.contains("<div class=\"card-footer\">"));
        assert!(cards.contains("<span class=\"summary-value\">24</span>"));
    }

    #[test]
    fn test_unset_case_size_renders_markers() {
        let records = vec![RecordBuilder::new(2).bin("A-02").per_case(0.0).cases(5).build()];
        let html = render(&records, ViewKind::Table, true);
        assert!(html.contains("<span class=\"muted\">Not Set</span>"));
        assert!(html.contains("<span class=\"muted\">—</span>"));
        assert!(html.contains("<td><strong>A-02</strong></td>\n<td>N/A</td>"));
    }

    #[test]
    fn test_custom_separator() {
        let records = vec![RecordBuilder::new(1).per_case(100.0).cases(1500).build()];
        let subset: Vec<&Record> = records.iter().collect();
        let vm = present_inventory(&subset, ViewKind::Card, "", ".");
        let text = InventoryView::new(&vm).to_string();
        assert!(text.contains("Total Items: 150.000"));
        assert!(text.contains("Case Quantity:  1.500"));
    }
}
