//! Interactive inventory browser.
//!
//! [`BrowseController`] owns the session plus the UI-only state (search
//! focus, selection, focused dialog field) and applies [`BrowseAction`]s.
//! `handle` wires it to the terminal: key events, suggestion results and a
//! ticker for notice expiry and deferred redirects all feed one loop.

use super::HandlerContext;
use super::logout::forget_session_cookie;
use crate::presentation::presenters::{ScreenContext, initial_focus, present_screen};
use crate::presentation::renderers::{BrowseAction, InputMode, TuiRenderer, map_key};
use crate::presentation::view_models::{FieldFocus, ScreenViewModel};
use anyhow::Result;
use bintrack_runtime::{AdjustForm, BusyIndicator, InventorySession, Modal, NavKey, Route};
use bintrack_types::{RecordId, ViewKind};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::time::{Duration, Instant};
use tracing::{info, warn};

const TICK: Duration = Duration::from_millis(250);

const RECORD_FIELDS: [FieldFocus; 4] = [
    FieldFocus::Bin,
    FieldFocus::Product,
    FieldFocus::QtyPerCase,
    FieldFocus::Cases,
];
const ADJUST_FIELDS: [FieldFocus; 2] = [FieldFocus::Delta, FieldFocus::Notes];

pub struct BrowseController {
    session: InventorySession,
    search_focused: bool,
    selected: usize,
    focus: FieldFocus,
    quit: bool,
    logged_out: bool,
}

impl BrowseController {
    pub fn new(session: InventorySession) -> Self {
        Self {
            session,
            search_focused: false,
            selected: 0,
            focus: FieldFocus::Bin,
            quit: false,
            logged_out: false,
        }
    }

    pub fn session(&self) -> &InventorySession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut InventorySession {
        &mut self.session
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Set once the user logged out from inside the browser.
    pub fn logged_out(&self) -> bool {
        self.logged_out
    }

    pub fn screen(&self, server: &str, separator: &str, now: Instant) -> ScreenViewModel {
        let ctx = ScreenContext {
            server,
            separator,
            search_focused: self.search_focused,
            selected: self.selected,
            focus: self.focus,
        };
        present_screen(&self.session, ctx, now)
    }

    fn selected_id(&self, screen: &ScreenViewModel) -> Option<RecordId> {
        let index = screen.selected?;
        screen
            .inventory
            .rows()
            .get(index)
            .map(|row| RecordId::new(row.id))
    }

    fn after_open(&mut self, opened: bool) {
        if opened {
            self.focus = initial_focus(self.session.modal());
        }
    }

    fn fields(&self) -> &'static [FieldFocus] {
        match self.session.modal() {
            Modal::Adjust { .. } => &ADJUST_FIELDS,
            _ => &RECORD_FIELDS,
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % fields.len()
        } else {
            (current + fields.len() - 1) % fields.len()
        };
        self.focus = fields[next];
        // Leaving an autocomplete field closes its list.
        self.session.dismiss_suggestions();
    }

    pub async fn apply(&mut self, action: BrowseAction, screen: &ScreenViewModel) {
        match InputMode::of(screen) {
            InputMode::Browse => self.apply_browse(action, screen).await,
            InputMode::Search => self.apply_search(action),
            InputMode::RecordForm | InputMode::AdjustForm => self.apply_form(action).await,
            InputMode::DeleteConfirm => match action {
                BrowseAction::Submit => {
                    self.session.submit_modal().await;
                }
                BrowseAction::Cancel => self.session.close_modal(),
                BrowseAction::Quit => self.quit = true,
                _ => {}
            },
        }
    }

    async fn apply_browse(&mut self, action: BrowseAction, screen: &ScreenViewModel) {
        let rows = screen.inventory.rows().len();
        match action {
            BrowseAction::Quit => self.quit = true,
            BrowseAction::FocusSearch => self.search_focused = true,
            BrowseAction::ToggleView => self.session.toggle_view(),
            BrowseAction::Reload => {
                self.session.reload().await;
            }
            BrowseAction::SelectNext => {
                self.selected = (self.selected + 1).min(rows.saturating_sub(1));
            }
            BrowseAction::SelectPrev => self.selected = self.selected.saturating_sub(1),
            BrowseAction::Add => {
                self.session.open_create();
                self.after_open(true);
            }
            BrowseAction::Edit => {
                if let Some(id) = self.selected_id(screen) {
                    let opened = self.session.open_edit(id);
                    self.after_open(opened);
                }
            }
            BrowseAction::Adjust => {
                if let Some(id) = self.selected_id(screen) {
                    let opened = self.session.open_adjust(id);
                    self.after_open(opened);
                }
            }
            BrowseAction::Delete => {
                if let Some(id) = self.selected_id(screen) {
                    let opened = self.session.open_delete(id);
                    self.after_open(opened);
                }
            }
            BrowseAction::Logout => {
                self.session.logout().await;
                self.logged_out = true;
            }
            _ => {}
        }
    }

    fn apply_search(&mut self, action: BrowseAction) {
        let mut text = self.session.search_input().to_string();
        match action {
            BrowseAction::Input(c) => text.push(c),
            BrowseAction::Backspace => {
                text.pop();
            }
            BrowseAction::LeaveSearch => {
                self.search_focused = false;
                return;
            }
            BrowseAction::ClearSearch => {
                text.clear();
                self.search_focused = false;
            }
            BrowseAction::Quit => {
                self.quit = true;
                return;
            }
            _ => return,
        }
        self.session.set_search(&text);
        self.selected = 0;
    }

    async fn apply_form(&mut self, action: BrowseAction) {
        match action {
            BrowseAction::Input(c) => self.edit_field(|text| text.push(c)),
            BrowseAction::Backspace => self.edit_field(|text| {
                text.pop();
            }),
            BrowseAction::PrevField => self.move_focus(false),
            BrowseAction::Nav(key) => {
                let consumed = match self.focus {
                    FieldFocus::Bin => self.session.bin_key(key),
                    FieldFocus::Product => self.session.product_key(key),
                    _ => false,
                };
                if consumed {
                    return;
                }
                match key {
                    NavKey::Tab | NavKey::Down => self.move_focus(true),
                    NavKey::Up => self.move_focus(false),
                    NavKey::Enter => {
                        self.session.dismiss_suggestions();
                        self.session.submit_modal().await;
                    }
                    NavKey::Escape => self.session.close_modal(),
                }
            }
            BrowseAction::Quit => self.quit = true,
            _ => {}
        }
    }

    /// Apply `edit` to the focused field's text.
    fn edit_field(&mut self, edit: impl FnOnce(&mut String)) {
        match (self.focus, self.session.modal_mut()) {
            (FieldFocus::Bin, Modal::Record(form)) => {
                let mut text = form.bin_text.clone();
                edit(&mut text);
                self.session.bin_input(&text);
            }
            (FieldFocus::Product, Modal::Record(form)) => {
                let mut text = form.product_text.clone();
                edit(&mut text);
                self.session.product_input(&text);
            }
            (FieldFocus::QtyPerCase, Modal::Record(form)) => edit(&mut form.qty_per_case),
            (FieldFocus::Cases, Modal::Record(form)) => edit(&mut form.qty_cases),
            (FieldFocus::Delta, Modal::Adjust { form, .. }) => edit(&mut form.delta),
            (FieldFocus::Notes, Modal::Adjust { form, .. }) => {
                let mut notes = form.notes.clone();
                edit(&mut notes);
                if notes.chars().count() <= AdjustForm::NOTES_LIMIT {
                    form.notes = notes;
                }
            }
            _ => {}
        }
    }
}

/// Drive `work` to completion. While the session holds its busy indicator,
/// `screen` is redrawn with the busy flag set on every tick.
async fn redraw_while<F, D>(
    work: F,
    screen: &ScreenViewModel,
    busy: &BusyIndicator,
    mut draw: D,
) -> Result<F::Output>
where
    F: Future,
    D: FnMut(&ScreenViewModel) -> Result<()>,
{
    tokio::pin!(work);
    let mut redraw = tokio::time::interval(TICK);
    let mut frame = screen.clone();
    loop {
        tokio::select! {
            biased;
            output = &mut work => return Ok(output),
            _ = redraw.tick() => {
                frame.busy = busy.is_busy();
                if frame.busy {
                    draw(&frame)?;
                }
            }
        }
    }
}

pub async fn handle(ctx: &HandlerContext, view: Option<ViewKind>) -> Result<()> {
    let (session, mut suggestions) = ctx.session()?;
    let mut controller = BrowseController::new(session);
    if let Some(view) = view {
        controller.session_mut().switch_view(view);
    }

    let busy = controller.session().busy().clone();
    let mut tui = TuiRenderer::enter()?;
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK);

    let first = controller.screen(ctx.server(), ctx.separator(), Instant::now());
    tui.draw(&first)?;
    redraw_while(controller.session_mut().start(), &first, &busy, |frame| {
        tui.draw(frame)
    })
    .await?;

    let route = loop {
        let now = Instant::now();
        if let Some(route) = controller.session_mut().take_due_redirect(now) {
            break Some(route);
        }
        if controller.should_quit() {
            break None;
        }

        let screen = controller.screen(ctx.server(), ctx.separator(), now);
        tui.draw(&screen)?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => {
                    if let Some(action) = map_key(key, InputMode::of(&screen)) {
                        let work = controller.apply(action, &screen);
                        redraw_while(work, &screen, &busy, |frame| tui.draw(frame)).await?;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    tui.restore()?;
                    return Err(err.into());
                }
                None => break None,
            },
            Some(update) = suggestions.recv() => controller.session_mut().apply_suggestion(update),
            _ = ticker.tick() => controller.session_mut().tick(Instant::now()),
        }
    };

    tui.restore()?;

    if controller.logged_out() {
        match forget_session_cookie(ctx) {
            Ok(cleared) => info!(cleared, "logged out from browser"),
            Err(err) => warn!(error = %err, "could not clear stored session cookie"),
        }
    }

    match route {
        Some(Route::Login) => println!(
            "Signed out. Sign in at {}{} to continue.",
            ctx.server(),
            Route::Login.path()
        ),
        Some(Route::Settings) => println!(
            "Please configure database connection in Settings: {}{}",
            ctx.server(),
            Route::Settings.path()
        ),
        None => {}
    }
    Ok(())
}
