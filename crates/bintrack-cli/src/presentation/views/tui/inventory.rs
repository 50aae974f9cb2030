//! Inventory region: summary header, table and card grid.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget, Wrap},
};

use crate::presentation::formatters::{
    NOT_APPLICABLE, NOT_SET, format_count, format_per_case, format_quantity, or_na,
};
use crate::presentation::view_models::{InventoryBody, InventoryViewModel, RecordRowViewModel};

const CARD_WIDTH: u16 = 34;
const CARD_HEIGHT: u16 = 7;

fn muted(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(Color::DarkGray))
}

fn per_case_span(row: &RecordRowViewModel) -> Span<'static> {
    match row.qty_per_case {
        Some(q) => Span::raw(format_per_case(q)),
        None => muted(NOT_SET),
    }
}

fn total_span(row: &RecordRowViewModel, separator: &str) -> Span<'static> {
    match row.total_quantity {
        Some(t) => Span::raw(format_quantity(t, separator)),
        None => muted(NOT_APPLICABLE),
    }
}

/// First row index to draw so that `selected` stays visible.
fn scroll_offset(selected: Option<usize>, visible: usize) -> usize {
    match selected {
        Some(i) if visible > 0 && i >= visible => i + 1 - visible,
        _ => 0,
    }
}

// --------------------------------------------------------
// Summary
// --------------------------------------------------------

pub struct SummaryView<'a> {
    model: &'a InventoryViewModel,
}

impl<'a> SummaryView<'a> {
    pub fn new(model: &'a InventoryViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for SummaryView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(summary) = &self.model.summary else {
            return;
        };
        let sep = &self.model.separator;
        let label = Style::default().fg(Color::Gray);
        let value = Style::default().add_modifier(Modifier::BOLD);

        let line = Line::from(vec![
            Span::styled("Total Cases ", label),
            Span::styled(format_count(summary.total_cases, sep), value),
            Span::raw("   "),
            Span::styled("Total Items ", label),
            Span::styled(format_quantity(summary.total_items, sep), value),
            Span::raw("   "),
            Span::styled("Records ", label),
            Span::styled(format_count(summary.record_count as i64, sep), value),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

// --------------------------------------------------------
// Table
// --------------------------------------------------------

pub struct InventoryTableView<'a> {
    model: &'a InventoryViewModel,
    selected: Option<usize>,
}

impl<'a> InventoryTableView<'a> {
    pub fn new(model: &'a InventoryViewModel, selected: Option<usize>) -> Self {
        Self { model, selected }
    }
}

impl<'a> Widget for InventoryTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("Inventory").borders(Borders::ALL);

        let (rows, totals) = match &self.model.body {
            InventoryBody::Table { rows, totals } => (rows, totals),
            InventoryBody::Empty { message } => {
                Paragraph::new(message.as_str()).block(block).render(area, buf);
                return;
            }
            InventoryBody::Cards { .. } => {
                CardGridView::new(self.model, self.selected).render(area, buf);
                return;
            }
        };

        let sep = &self.model.separator;
        // borders + header + totals
        let visible = area.height.saturating_sub(4) as usize;
        let offset = scroll_offset(self.selected, visible);

        let mut table_rows: Vec<Row> = rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, row)| {
                let style = if Some(i) == self.selected {
                    Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(or_na(row.bin_location.as_deref()).to_string()),
                    Cell::from(or_na(row.product.as_deref()).to_string()),
                    Cell::from(format_count(row.cases, sep)),
                    Cell::from(per_case_span(row)),
                    Cell::from(total_span(row, sep)),
                ])
                .style(style)
            })
            .collect();

        table_rows.push(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Totals:"),
                Cell::from(format_count(totals.total_cases, sep)),
                Cell::from(""),
                Cell::from(format_quantity(totals.total_items, sep)),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD)),
        );

        let header = Row::new(vec![
            "Bin Location",
            "Product Name",
            "Cases",
            "Qty/Case",
            "Total",
        ])
        .style(Style::default().fg(Color::Yellow));

        let widths = [
            Constraint::Length(14),
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(10),
        ];

        Table::new(table_rows, widths)
            .header(header)
            .block(block)
            .render(area, buf);
    }
}

// --------------------------------------------------------
// Cards
// --------------------------------------------------------

pub struct CardGridView<'a> {
    model: &'a InventoryViewModel,
    selected: Option<usize>,
}

impl<'a> CardGridView<'a> {
    pub fn new(model: &'a InventoryViewModel, selected: Option<usize>) -> Self {
        Self { model, selected }
    }

    fn render_card(&self, row: &RecordRowViewModel, selected: bool, area: Rect, buf: &mut Buffer) {
        let sep = &self.model.separator;
        let border = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title(Span::styled(
                or_na(row.bin_location.as_deref()).to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(border);

        let lines = vec![
            Line::from(Span::styled(
                or_na(row.product.as_deref()).to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::raw("Case Quantity:  "),
                Span::raw(format_count(row.cases, sep)),
            ]),
            Line::from(vec![Span::raw("Qty per Case:   "), per_case_span(row)]),
            Line::from(vec![Span::raw("Total Quantity: "), total_span(row, sep)]),
            Line::from(muted("[e]dit  [+]adjust  [d]elete")),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl<'a> Widget for CardGridView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cards = match &self.model.body {
            InventoryBody::Cards { cards } => cards,
            _ => {
                InventoryTableView::new(self.model, self.selected).render(area, buf);
                return;
            }
        };

        let columns = (area.width / CARD_WIDTH).max(1) as usize;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        let selected_row = self.selected.map(|i| i / columns);
        let first_row = scroll_offset(selected_row, visible_rows);
        let card_width = area.width / columns as u16;

        for (i, card) in cards.iter().enumerate().skip(first_row * columns) {
            let grid_row = i / columns - first_row;
            if grid_row >= visible_rows {
                break;
            }
            let rect = Rect {
                x: area.x + (i % columns) as u16 * card_width,
                y: area.y + grid_row as u16 * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT.min(area.height),
            };
            self.render_card(card, Some(i) == self.selected, rect, buf);
        }
    }
}
