use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::centered;
use crate::presentation::view_models::{
    FormFieldViewModel, ModalViewModel, SuggestionListViewModel,
};

const MODAL_WIDTH: u16 = 64;

pub struct ModalView<'a> {
    model: &'a ModalViewModel,
}

impl<'a> ModalView<'a> {
    pub fn new(model: &'a ModalViewModel) -> Self {
        Self { model }
    }

    fn lines(&self) -> (String, Vec<Line<'a>>, Line<'static>) {
        match self.model {
            ModalViewModel::Record {
                title,
                fields,
                suggestions,
            } => {
                let mut lines = Vec::new();
                for field in fields {
                    lines.push(field_line(field));
                    if field.focused
                        && let Some(list) = suggestions
                    {
                        lines.extend(suggestion_lines(list));
                    }
                }
                (title.clone(), lines, help(&["Tab", "Enter", "Esc"]))
            }
            ModalViewModel::Adjust {
                label,
                current_cases,
                fields,
                projected_cases,
                notes_len,
                notes_limit,
            } => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        label.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!("Current Cases: {}", current_cases)),
                    Line::from(""),
                ];
                lines.extend(fields.iter().map(field_line));
                let projected = match projected_cases {
                    Some(n) => Span::raw(n.to_string()),
                    None => Span::styled("—", Style::default().fg(Color::DarkGray)),
                };
                lines.push(Line::from(""));
                lines.push(Line::from(vec![Span::raw("New Total: "), projected]));
                let counter = if notes_len > notes_limit {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                lines.push(Line::from(Span::styled(
                    format!("{}/{} characters", notes_len, notes_limit),
                    counter,
                )));
                ("Adjust Quantity".to_string(), lines, help(&["Tab", "Enter", "Esc"]))
            }
            ModalViewModel::Delete { lines: summary } => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        "Are you sure you want to delete this record?",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                ];
                lines.extend(summary.iter().map(|l| Line::from(l.as_str())));
                ("Confirm Delete".to_string(), lines, help(&["y", "Esc"]))
            }
        }
    }
}

fn field_line(field: &FormFieldViewModel) -> Line<'_> {
    let label_style = if field.focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut spans = vec![
        Span::styled(format!("{:<14}", field.label), label_style),
        Span::raw(field.value.as_str()),
    ];
    if field.focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }
    if field.selected {
        spans.push(Span::styled(" ✓", Style::default().fg(Color::Green)));
    }
    Line::from(spans)
}

fn suggestion_lines(list: &SuggestionListViewModel) -> Vec<Line<'_>> {
    let indent = " ".repeat(14);
    if let Some(message) = &list.empty_message {
        return vec![Line::from(vec![
            Span::raw(indent),
            Span::styled(message.as_str(), Style::default().fg(Color::DarkGray)),
        ])];
    }

    list.items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if Some(i) == list.highlighted {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            let mut spans = vec![
                Span::raw(indent.clone()),
                Span::styled(item.primary.as_str(), style),
            ];
            if let Some(secondary) = &item.secondary {
                spans.push(Span::styled(
                    format!("  {}", secondary),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        })
        .collect()
}

fn help(keys: &[&str]) -> Line<'static> {
    let mut spans = Vec::new();
    for key in keys {
        let action = match *key {
            "Tab" => "next field",
            "Enter" => "save",
            "y" => "delete",
            _ => "cancel",
        };
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(format!(" {}  ", action)));
    }
    Line::from(spans)
}

impl<'a> Widget for ModalView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, mut lines, help_line) = self.lines();
        lines.push(Line::from(""));
        lines.push(help_line);

        // borders
        let height = lines.len() as u16 + 2;
        let rect = centered(area, MODAL_WIDTH, height);

        Clear.render(rect, buf);
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(rect, buf);
    }
}
