//! Terminal dashboard state and key handling
//!
//! `App` turns key presses into [`DashboardAction`]s. It holds no terminal
//! handle, so key handling is testable without a screen.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use shared::order::{OrderStatus, Platform, SpecialStatus, StatusFilter, StatusTag};
use tracing::{info, warn};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use super::command::{Command, HELP, parse_command};
use crate::dashboard::{BatchKind, Dashboard, DashboardAction};
use crate::notify::{NotificationSink, ToastQueue};
use crate::orders::{EditField, EditorMode};
use crate::utils::AppResult;

/// What the bottom input line is editing
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    /// Search text, applied on every keystroke
    Search,
    /// `:` command line
    Command,
    /// One field of the open order
    Field(EditField),
}

/// Status strip entries: `All`, then every lifecycle status, then the special buckets
pub fn strip_entries() -> Vec<StatusFilter> {
    std::iter::once(StatusFilter::All)
        .chain(
            OrderStatus::ALL
                .iter()
                .map(|s| StatusFilter::Tag(StatusTag::Lifecycle(*s))),
        )
        .chain(
            SpecialStatus::ALL
                .iter()
                .map(|s| StatusFilter::Tag(StatusTag::Special(*s))),
        )
        .collect()
}

pub struct App {
    pub dashboard: Dashboard,
    pub toasts: ToastQueue,
    /// Input line state
    pub input: Input,
    pub input_mode: InputMode,
    /// Index into [`strip_entries`]
    pub status_cursor: usize,
    /// Index into the visible rows
    pub row_cursor: usize,
    /// Focused field of the detail panel
    pub field_cursor: EditField,
    /// Logger widget state
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
}

impl App {
    pub fn new(dashboard: Dashboard, toast_capacity: usize) -> Self {
        let status_cursor = strip_entries()
            .iter()
            .position(|e| *e == dashboard.state().active_status)
            .unwrap_or(0);
        Self {
            dashboard,
            toasts: ToastQueue::new(toast_capacity),
            input: Input::default(),
            input_mode: InputMode::default(),
            status_cursor,
            row_cursor: 0,
            field_cursor: EditField::CustomerName,
            logger_state: TuiWidgetState::new(),
            should_quit: false,
        }
    }

    /// Dispatch an action; notifications go to the toast strip, errors to the log
    pub fn apply(&mut self, action: DashboardAction) -> bool {
        match self.dashboard.dispatch(action) {
            Ok(notifications) => {
                self.toasts.notify_all(notifications);
                self.clamp_row_cursor();
                true
            }
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }

    /// Id of the row under the cursor
    pub fn current_order_id(&self) -> Option<String> {
        self.dashboard
            .visible()
            .get(self.row_cursor)
            .map(|o| o.id.clone())
    }

    fn clamp_row_cursor(&mut self) {
        let len = self.dashboard.visible().len();
        self.row_cursor = self.row_cursor.min(len.saturating_sub(1));
    }

    fn editor_mode(&self) -> Option<EditorMode> {
        self.dashboard.state().editor.as_ref().map(|e| e.mode())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => match self.editor_mode() {
                Some(mode) => self.handle_detail_key(key, mode),
                None => self.handle_table_key(key),
            },
            InputMode::Search => self.handle_search_key(key),
            InputMode::Command => self.handle_command_key(key),
            InputMode::Field(field) => self.handle_field_key(key, field),
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        let entries = strip_entries();
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left => self.status_cursor = self.status_cursor.saturating_sub(1),
            KeyCode::Right => {
                self.status_cursor = (self.status_cursor + 1).min(entries.len() - 1);
            }
            KeyCode::Enter => self.click_status(entries[self.status_cursor]),
            KeyCode::Up => self.row_cursor = self.row_cursor.saturating_sub(1),
            KeyCode::Down => {
                self.row_cursor += 1;
                self.clamp_row_cursor();
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.current_order_id() {
                    let selected = !self.dashboard.state().selection.contains(&id);
                    self.apply(DashboardAction::select_order(id, selected));
                }
            }
            KeyCode::Char('a') => {
                let select = !self.dashboard.is_all_selected();
                self.apply(DashboardAction::select_all(select));
            }
            KeyCode::Char('/') => {
                let query = self
                    .dashboard
                    .state()
                    .filters
                    .search_query
                    .clone()
                    .unwrap_or_default();
                self.input = Input::new(query);
                self.input_mode = InputMode::Search;
            }
            KeyCode::Char(':') => {
                self.input = Input::new("/".to_string());
                self.input_mode = InputMode::Command;
            }
            KeyCode::Char('p') => {
                let mut filters = self.dashboard.state().filters.clone();
                filters.platform = Platform::cycle(filters.platform);
                self.apply(DashboardAction::change_filters(filters));
            }
            KeyCode::Char('s') => {
                self.apply(DashboardAction::cycle_sort());
            }
            KeyCode::Char('r') => {
                if let Some(field) = self.dashboard.state().sort.field() {
                    self.apply(DashboardAction::toggle_sort(field));
                }
            }
            KeyCode::Char('v') => {
                if let Some(id) = self.current_order_id() {
                    self.apply(DashboardAction::view_order(id));
                }
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.current_order_id() {
                    self.field_cursor = EditField::CustomerName;
                    self.apply(DashboardAction::edit_order(id));
                }
            }
            KeyCode::Char('i') => {
                self.apply(DashboardAction::manual_import());
            }
            KeyCode::Char('b') => {
                self.apply(DashboardAction::batch_edit());
            }
            KeyCode::Char(c @ '1'..='9') => {
                let offered = self.dashboard.offered_batch_actions();
                let idx = (c as usize) - ('1' as usize);
                if let Some(kind) = offered.get(idx) {
                    self.apply(DashboardAction::batch(*kind));
                }
            }
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            KeyCode::Esc => {
                self.toasts.dismiss();
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent, mode: EditorMode) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (mode, key.code) {
            (EditorMode::View, KeyCode::Char('e')) => {
                self.field_cursor = EditField::CustomerName;
                self.apply(DashboardAction::begin_edit());
            }
            (EditorMode::View, KeyCode::Esc | KeyCode::Char('q')) => {
                self.apply(DashboardAction::close_order());
            }
            (EditorMode::Edit, KeyCode::Char('s')) if ctrl => {
                self.apply(DashboardAction::save_order());
            }
            (EditorMode::Edit, KeyCode::Tab) => self.field_cursor = self.field_cursor.next(),
            (EditorMode::Edit, KeyCode::Enter) => {
                let value = self
                    .dashboard
                    .state()
                    .editor
                    .as_ref()
                    .map(|e| self.field_cursor.value(e.displayed()).to_string())
                    .unwrap_or_default();
                self.input = Input::new(value);
                self.input_mode = InputMode::Field(self.field_cursor);
            }
            (EditorMode::Edit, KeyCode::Esc) => {
                self.apply(DashboardAction::cancel_edit());
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
            _ => {
                if self.input.handle_event(&Event::Key(key)).is_some() {
                    let mut filters = self.dashboard.state().filters.clone();
                    let value = self.input.value();
                    filters.search_query = (!value.is_empty()).then(|| value.to_string());
                    self.apply(DashboardAction::change_filters(filters));
                }
            }
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let line = self.input.value().to_string();
                self.input.reset();
                self.input_mode = InputMode::Normal;
                if let Err(e) = self.run_command(&line) {
                    warn!("{}", e);
                }
            }
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            _ => {
                self.input.handle_event(&Event::Key(key));
            }
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent, field: EditField) {
        match key.code {
            KeyCode::Enter => {
                let value = self.input.value().to_string();
                self.input.reset();
                self.input_mode = InputMode::Normal;
                self.apply(DashboardAction::edit_field(field, value));
            }
            KeyCode::Esc => {
                self.input.reset();
                self.input_mode = InputMode::Normal;
            }
            _ => {
                self.input.handle_event(&Event::Key(key));
            }
        }
    }

    fn click_status(&mut self, entry: StatusFilter) {
        let tag = match (entry, self.dashboard.state().active_status) {
            (StatusFilter::Tag(tag), _) => tag,
            // `All` is reached by clicking the active tag again
            (StatusFilter::All, StatusFilter::Tag(active)) => active,
            (StatusFilter::All, StatusFilter::All) => return,
        };
        if self.apply(DashboardAction::click_status(tag)) {
            self.row_cursor = 0;
        }
    }

    /// Run one `:` command line
    pub fn run_command(&mut self, line: &str) -> AppResult<()> {
        let mut filters = self.dashboard.state().filters.clone();
        let action = match parse_command(line)? {
            Command::Search(query) => {
                filters.search_query = query;
                DashboardAction::change_filters(filters)
            }
            Command::Platform(platform) => {
                filters.platform = platform;
                DashboardAction::change_filters(filters)
            }
            Command::Status(status) => {
                filters.status = status;
                DashboardAction::change_filters(filters)
            }
            Command::Date(range) => {
                filters.date_range = (!range.is_unbounded()).then_some(range);
                DashboardAction::change_filters(filters)
            }
            Command::Amount(range) => {
                filters.amount_range = (!range.is_unbounded()).then_some(range);
                DashboardAction::change_filters(filters)
            }
            Command::ClearFilters => DashboardAction::change_filters(Default::default()),
            Command::Batch(kind) => DashboardAction::batch(kind),
            Command::Import => DashboardAction::manual_import(),
            Command::BatchEdit => DashboardAction::batch_edit(),
            Command::Help => {
                info!("Available commands:");
                for line in HELP {
                    info!("  {}", line);
                }
                return Ok(());
            }
        };
        self.dashboard.dispatch(action).map(|notifications| {
            self.toasts.notify_all(notifications);
            self.clamp_row_cursor();
        })
    }

    /// Batch actions with their number keys, for the filter bar
    pub fn batch_hints(&self) -> Vec<(usize, BatchKind)> {
        self.dashboard
            .offered_batch_actions()
            .into_iter()
            .enumerate()
            .map(|(i, kind)| (i + 1, kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::{SortField, seed_orders};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> App {
        App::new(Dashboard::new(seed_orders()), 5)
    }

    #[test]
    fn test_strip_entries() {
        let entries = strip_entries();
        assert_eq!(entries.len(), 14);
        assert_eq!(entries[0], StatusFilter::All);
    }

    #[test]
    fn test_status_cursor_click_and_unclick() {
        let mut app = app();
        // All, manual_add, pending_payment, preorder, general, adding_stock, ready_to_ship
        for _ in 0..6 {
            press(&mut app, KeyCode::Right);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.dashboard.state().active_status,
            StatusFilter::Tag(OrderStatus::ReadyToShip.into())
        );
        assert_eq!(app.dashboard.visible_ids(), vec!["1"]);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.dashboard.state().active_status, StatusFilter::All);
    }

    #[test]
    fn test_space_and_batch_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.dashboard.state().selection.contains("1"));

        // only batch_edit is offered under All
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(
            app.toasts.latest().map(|n| n.description.as_str()),
            Some("對 1 筆訂單執行 batch_edit 操作")
        );
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.toasts.len(), 1);
    }

    #[test]
    fn test_search_mode_filters_live() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);
        for c in "李".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.dashboard.visible_ids(), vec!["2"]);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_edit_field_and_save() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.field_cursor, EditField::Notes);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Field(EditField::Notes));
        app.input = Input::new("改期".to_string());
        press(&mut app, KeyCode::Enter);

        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        assert_eq!(
            app.toasts.latest().map(|n| n.title.as_str()),
            Some("訂單已更新")
        );
        let editor = app.dashboard.state().editor.as_ref().unwrap();
        assert_eq!(editor.displayed().notes.as_deref(), Some("改期"));
        assert_eq!(app.dashboard.orders()[0].notes.as_deref(), Some("請小心包裝"));
    }

    #[test]
    fn test_escape_cancels_then_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.editor_mode(), Some(EditorMode::View));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.editor_mode(), None);
    }

    #[test]
    fn test_sort_key_cycles_back_to_unsorted() {
        let mut app = app();
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('s'));
        }
        assert_eq!(
            app.dashboard.state().sort.field(),
            Some(SortField::TotalAmount)
        );
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.dashboard.state().sort.field(), None);
        assert_eq!(app.dashboard.visible_ids(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_run_command() {
        let mut app = app();
        app.run_command("/amount 2000 -").unwrap();
        assert_eq!(app.dashboard.visible_ids(), vec!["1", "2"]);
        app.run_command("/platform momo").unwrap();
        assert_eq!(app.dashboard.visible_ids(), vec!["1"]);
        app.run_command("/clear").unwrap();
        assert_eq!(app.dashboard.visible_ids().len(), 3);
        assert!(app.run_command("/batch print").is_err());
    }
}
