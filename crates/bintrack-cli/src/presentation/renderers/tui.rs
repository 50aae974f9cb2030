//! TUI Renderer for the `browse` command
//!
//! Owns the terminal and translates key presses into [`BrowseAction`]s.
//! It never touches the session: the handler applies actions, rebuilds the
//! [`ScreenViewModel`] and asks for a redraw.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};

use crate::presentation::view_models::{ModalViewModel, ScreenViewModel};
use crate::presentation::views::tui::{
    InventoryTableView, ModalView, NoticeView, SearchBarView, StatusBarView, SummaryView,
};
use bintrack_runtime::NavKey;

/// What the keyboard is currently driving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
    RecordForm,
    AdjustForm,
    DeleteConfirm,
}

impl InputMode {
    pub fn of(screen: &ScreenViewModel) -> Self {
        match &screen.modal {
            Some(ModalViewModel::Record { .. }) => InputMode::RecordForm,
            Some(ModalViewModel::Adjust { .. }) => InputMode::AdjustForm,
            Some(ModalViewModel::Delete { .. }) => InputMode::DeleteConfirm,
            None if screen.search_focused => InputMode::Search,
            None => InputMode::Browse,
        }
    }
}

/// Intent decoded from one key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    Quit,
    FocusSearch,
    LeaveSearch,
    ClearSearch,
    ToggleView,
    Reload,
    SelectNext,
    SelectPrev,
    Add,
    Edit,
    Adjust,
    Delete,
    Logout,
    Input(char),
    Backspace,
    PrevField,
    /// Arrow/Enter/Tab/Esc offered to the focused autocomplete first.
    Nav(NavKey),
    Submit,
    Cancel,
}

pub fn map_key(key: KeyEvent, mode: InputMode) -> Option<BrowseAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(BrowseAction::Quit);
    }

    match mode {
        InputMode::Browse => match key.code {
            KeyCode::Char('q') => Some(BrowseAction::Quit),
            KeyCode::Char('/') => Some(BrowseAction::FocusSearch),
            KeyCode::Char('v') => Some(BrowseAction::ToggleView),
            KeyCode::Char('r') => Some(BrowseAction::Reload),
            KeyCode::Char('j') | KeyCode::Down => Some(BrowseAction::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(BrowseAction::SelectPrev),
            KeyCode::Char('a') => Some(BrowseAction::Add),
            KeyCode::Char('e') | KeyCode::Enter => Some(BrowseAction::Edit),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(BrowseAction::Adjust),
            KeyCode::Char('d') | KeyCode::Delete => Some(BrowseAction::Delete),
            KeyCode::Char('L') => Some(BrowseAction::Logout),
            _ => None,
        },
        InputMode::Search => match key.code {
            KeyCode::Enter => Some(BrowseAction::LeaveSearch),
            KeyCode::Esc => Some(BrowseAction::ClearSearch),
            KeyCode::Backspace => Some(BrowseAction::Backspace),
            KeyCode::Char(c) => Some(BrowseAction::Input(c)),
            _ => None,
        },
        InputMode::RecordForm | InputMode::AdjustForm => match key.code {
            KeyCode::Down => Some(BrowseAction::Nav(NavKey::Down)),
            KeyCode::Up => Some(BrowseAction::Nav(NavKey::Up)),
            KeyCode::Enter => Some(BrowseAction::Nav(NavKey::Enter)),
            KeyCode::Tab => Some(BrowseAction::Nav(NavKey::Tab)),
            KeyCode::BackTab => Some(BrowseAction::PrevField),
            KeyCode::Esc => Some(BrowseAction::Nav(NavKey::Escape)),
            KeyCode::Backspace => Some(BrowseAction::Backspace),
            KeyCode::Char(c) => Some(BrowseAction::Input(c)),
            _ => None,
        },
        InputMode::DeleteConfirm => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Some(BrowseAction::Submit),
            KeyCode::Char('n') | KeyCode::Esc => Some(BrowseAction::Cancel),
            _ => None,
        },
    }
}

pub fn render_screen(f: &mut Frame, screen: &ScreenViewModel) {
    let [search, summary, body, notices, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(f.area());

    f.render_widget(SearchBarView::new(screen), search);
    f.render_widget(SummaryView::new(&screen.inventory), summary);
    f.render_widget(
        InventoryTableView::new(&screen.inventory, screen.selected),
        body,
    );
    f.render_widget(NoticeView::new(&screen.notices), notices);
    f.render_widget(StatusBarView::new(screen), status);

    if let Some(modal) = &screen.modal {
        f.render_widget(ModalView::new(modal), f.area());
    }
}

/// Raw-mode alternate screen for the lifetime of the value.
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    restored: bool,
}

impl TuiRenderer {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn draw(&mut self, screen: &ScreenViewModel) -> Result<()> {
        self.terminal.draw(|f| render_screen(f, screen))?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiRenderer {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_inventory;
    use bintrack_testing::fixtures;
    use bintrack_types::{Record, ViewKind};
    use ratatui::backend::TestBackend;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen(modal: Option<ModalViewModel>) -> ScreenViewModel {
        let records = fixtures::records();
        let subset: Vec<&Record> = records.iter().collect();
        ScreenViewModel {
            server: "http://127.0.0.1:5000".to_string(),
            search: String::new(),
            search_focused: false,
            inventory: present_inventory(&subset, ViewKind::Table, "", ","),
            selected: Some(0),
            busy: false,
            notices: Vec::new(),
            modal,
        }
    }

    #[test]
    fn test_browse_keys() {
        let mode = InputMode::Browse;
        assert_eq!(map_key(press(KeyCode::Char('q')), mode), Some(BrowseAction::Quit));
        assert_eq!(map_key(press(KeyCode::Char('v')), mode), Some(BrowseAction::ToggleView));
        assert_eq!(map_key(press(KeyCode::Down), mode), Some(BrowseAction::SelectNext));
        assert_eq!(map_key(press(KeyCode::Char('x')), mode), None);
    }

    #[test]
    fn test_form_keys_go_to_autocomplete_first() {
        let mode = InputMode::RecordForm;
        assert_eq!(
            map_key(press(KeyCode::Down), mode),
            Some(BrowseAction::Nav(NavKey::Down))
        );
        assert_eq!(map_key(press(KeyCode::Char('q')), mode), Some(BrowseAction::Input('q')));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key, InputMode::Browse), None);
    }

    #[test]
    fn test_input_mode_follows_modal() {
        assert_eq!(InputMode::of(&screen(None)), InputMode::Browse);
        let delete = ModalViewModel::Delete { lines: Vec::new() };
        assert_eq!(InputMode::of(&screen(Some(delete))), InputMode::DeleteConfirm);
    }

    #[test]
    fn test_render_screen_draws_inventory() {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let vm = screen(None);
        terminal.draw(|f| render_screen(f, &vm)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Whole Milk"));
        assert!(text.contains("Total Cases"));
        assert!(text.contains("[q] quit"));
    }
}
