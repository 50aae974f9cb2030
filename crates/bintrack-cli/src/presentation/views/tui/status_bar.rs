use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::status_level_to_color;
use crate::presentation::view_models::{NoticeViewModel, ScreenViewModel, StatusLevel};

pub struct SearchBarView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> SearchBarView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for SearchBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.model.search_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title(format!("bintrack · {}", self.model.server))
            .borders(Borders::ALL)
            .border_style(border);

        let mut spans = vec![Span::styled("Search: ", Style::default().fg(Color::Gray))];
        if self.model.search.is_empty() && !self.model.search_focused {
            spans.push(Span::styled(
                "press / to search bins and products",
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(self.model.search.as_str()));
        }
        if self.model.search_focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
        if self.model.busy {
            spans.push(Span::styled(
                "  loading…",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}

/// Latest notices, newest last.
pub struct NoticeView<'a> {
    notices: &'a [NoticeViewModel],
}

impl<'a> NoticeView<'a> {
    pub fn new(notices: &'a [NoticeViewModel]) -> Self {
        Self { notices }
    }
}

impl<'a> Widget for NoticeView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let skip = self.notices.len().saturating_sub(area.height as usize);
        let lines: Vec<Line> = self
            .notices
            .iter()
            .skip(skip)
            .map(|notice| {
                let color = status_level_to_color(notice.level);
                Line::from(vec![
                    Span::styled(
                        format!("{} ", notice.level.icon()),
                        Style::default().fg(color),
                    ),
                    Span::styled(notice.message.as_str(), Style::default().fg(color)),
                ])
            })
            .collect();
        Paragraph::new(lines).render(area, buf);
    }
}

/// Key help for the main screen.
pub struct StatusBarView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let keys: &[(&str, &str)] = if self.model.search_focused {
            &[("Enter", "done"), ("Esc", "clear")]
        } else {
            &[
                ("/", "search"),
                ("v", "view"),
                ("a", "add"),
                ("e", "edit"),
                ("+", "adjust"),
                ("d", "delete"),
                ("r", "reload"),
                ("L", "logout"),
                ("q", "quit"),
            ]
        };

        let mut spans = Vec::new();
        for (key, action) in keys {
            spans.push(Span::styled(
                format!("[{}]", key),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(format!(" {} ", action)));
        }

        let count = self.model.inventory.rows().len();
        let level = if count == 0 {
            StatusLevel::Warning
        } else {
            StatusLevel::Info
        };
        spans.push(Span::styled(
            format!(" {} shown", count),
            Style::default().fg(status_level_to_color(level)),
        ));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
