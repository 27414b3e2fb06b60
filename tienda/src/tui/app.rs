//! App - form/table controller
//!
//! Two observable states:
//! - idle: form cleared, nothing selected
//! - editing: form filled from a table row, `selected_id` set
//!
//! Every action runs synchronously: validate the form, call the repository
//! (one whole-file read and write), then redraw the table from disk.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;
use shared::{AppError, ErrorCode, ProductForm};
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use super::dialog::{ConfirmAction, Dialog, DialogKind};
use super::form::{Button, Focus, FormField, FormState};
use super::table::{ProductRow, build_rows};
use crate::db::{ProductRepository, ProductStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    Editing,
}

pub struct App<S> {
    repo: ProductRepository<S>,
    pub(crate) form: FormState,
    pub(crate) focus: Focus,
    pub(crate) rows: Vec<ProductRow>,
    pub(crate) table_state: TableState,
    pub(crate) logger_state: TuiWidgetState,
    selected_id: Option<i64>,
    dialog: Option<Dialog>,
    should_quit: bool,
}

impl<S: ProductStore> App<S> {
    /// Create the controller and load the table
    pub fn new(repo: ProductRepository<S>) -> Self {
        let mut app = Self {
            repo,
            form: FormState::default(),
            focus: Focus::default(),
            rows: Vec::new(),
            table_state: TableState::default(),
            logger_state: TuiWidgetState::new(),
            selected_id: None,
            dialog: None,
            should_quit: false,
        };
        app.refresh_table();
        app
    }

    // ========== Accessors ==========

    pub fn repository(&self) -> &ProductRepository<S> {
        &self.repo
    }

    pub fn state(&self) -> EditorState {
        match self.selected_id {
            Some(_) => EditorState::Editing,
            None => EditorState::Idle,
        }
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected_id
    }

    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn field(&self, field: FormField) -> &str {
        self.form.value(field)
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_value(field, value);
    }

    // ========== Actions ==========

    /// Re-read the store and rebuild every row
    pub fn refresh_table(&mut self) {
        self.table_state.select(None);
        match self.repo.find_all() {
            Ok(products) => self.rows = build_rows(&products),
            Err(err) => {
                self.rows.clear();
                self.show_error(err);
            }
        }
    }

    /// Create a new product from the form; never uses the selection
    pub fn add(&mut self) {
        let Some(draft) = self.parse_form() else {
            return;
        };
        match self.repo.create(draft) {
            Ok(_) => self.finish_mutation("Producto agregado correctamente"),
            Err(err) => self.show_error(err),
        }
    }

    /// Save the form over the selected product
    pub fn update(&mut self) {
        let Some(id) = self.require_selection("Selecciona un producto para actualizar") else {
            return;
        };
        let Some(draft) = self.parse_form() else {
            return;
        };
        match self.repo.update(id, draft) {
            Ok(_) => self.finish_mutation("Producto actualizado correctamente"),
            Err(err) => self.show_error(err),
        }
    }

    /// Ask for confirmation before deleting the selected product
    pub fn request_delete(&mut self) {
        if let Some(id) = self.require_selection("Selecciona un producto para eliminar") {
            self.dialog = Some(Dialog::confirm_delete(id));
        }
    }

    /// Close the open dialog; `accepted` answers a pending confirmation
    pub fn answer_dialog(&mut self, accepted: bool) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };
        if let DialogKind::Confirm(ConfirmAction::Delete(id)) = dialog.kind
            && accepted
        {
            self.delete(id);
        }
    }

    /// Back to idle: empty form, no selection
    pub fn clear_form(&mut self) {
        self.form.clear();
        self.selected_id = None;
        self.table_state.select(None);
    }

    /// Select a table row and load its record into the form
    ///
    /// The record is re-read from the store; if it is gone nothing changes.
    pub fn select_row(&mut self, index: usize) {
        let Some(row) = self.rows.get(index) else {
            return;
        };
        let id = row.id;

        match self.repo.find_by_id(id) {
            Ok(Some(product)) => {
                self.table_state.select(Some(index));
                self.form.load(&ProductForm::from_product(&product));
                self.selected_id = Some(id);
                tracing::debug!(id, "Product selected");
            }
            Ok(None) => tracing::debug!(id, "Selected row no longer in store"),
            Err(err) => self.show_error(err),
        }
    }

    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let index = match self.table_state.selected() {
            Some(i) => (i + 1).min(self.rows.len() - 1),
            None => 0,
        };
        self.select_row(index);
    }

    pub fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let index = match self.table_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.select_row(index);
    }

    pub fn press(&mut self, button: Button) {
        match button {
            Button::Add => self.add(),
            Button::Update => self.update(),
            Button::Delete => self.request_delete(),
            Button::Clear => self.clear_form(),
        }
    }

    // ========== Keyboard ==========

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.dialog.is_some() {
            self.handle_dialog_key(key);
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::F(2) => self.press(Button::Add),
            KeyCode::F(3) => self.press(Button::Update),
            KeyCode::F(4) => self.press(Button::Delete),
            KeyCode::F(5) => self.press(Button::Clear),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            _ => match self.focus {
                Focus::Field(field) => self.handle_field_key(field, key),
                Focus::Button(button) => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.press(button);
                    }
                }
                Focus::Table => self.handle_table_key(key),
            },
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let confirm = self.dialog.as_ref().is_some_and(Dialog::is_confirm);
        match key.code {
            KeyCode::Char('s' | 'S' | 'y' | 'Y') if confirm => self.answer_dialog(true),
            KeyCode::Char('n' | 'N') if confirm => self.answer_dialog(false),
            KeyCode::Enter => self.answer_dialog(true),
            KeyCode::Esc => self.answer_dialog(false),
            KeyCode::Char(' ') if !confirm => self.answer_dialog(true),
            _ => {}
        }
    }

    fn handle_field_key(&mut self, field: FormField, key: KeyEvent) {
        match key.code {
            KeyCode::Enter if field.is_multiline() => self.form.insert_newline(field),
            KeyCode::Enter => self.focus = self.focus.next(),
            _ => {
                self.form.input_mut(field).handle_event(&Event::Key(key));
            }
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_previous(),
            KeyCode::Home => self.select_row(0),
            KeyCode::End => self.select_row(self.rows.len().saturating_sub(1)),
            KeyCode::Enter => {
                if let Some(index) = self.table_state.selected() {
                    self.select_row(index);
                }
            }
            _ => {}
        }
    }

    // ========== Internals ==========

    fn delete(&mut self, id: i64) {
        match self.repo.delete(id) {
            Ok(_) => self.finish_mutation("Producto eliminado correctamente"),
            Err(err) => self.show_error(err),
        }
    }

    /// Validation failures show a warning and keep the form as typed
    fn parse_form(&mut self) -> Option<shared::ProductDraft> {
        match self.form.to_form().parse() {
            Ok(draft) => Some(draft),
            Err(err) => {
                self.show_error(err);
                None
            }
        }
    }

    fn require_selection(&mut self, message: &str) -> Option<i64> {
        if self.selected_id.is_none() {
            self.show_error(AppError::with_message(ErrorCode::ProductNotSelected, message));
        }
        self.selected_id
    }

    fn finish_mutation(&mut self, message: &str) {
        self.refresh_table();
        self.clear_form();
        if self.dialog.is_none() {
            self.dialog = Some(Dialog::info("Éxito", message));
        }
    }

    fn show_error(&mut self, err: AppError) {
        if err.is_validation() {
            tracing::debug!(code = %err.code, "{}", err.message);
        } else {
            tracing::error!(code = %err.code, "{}", err.message);
        }
        self.dialog = Some(Dialog::from_error(&err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::JsonFileStore;
    use crossterm::event::KeyEventKind;

    fn app_in(dir: &tempfile::TempDir) -> App<JsonFileStore> {
        let store = JsonFileStore::new(dir.path().join("productos.json"));
        App::new(ProductRepository::new(store))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text<S: ProductStore>(app: &mut App<S>, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_starts_idle_with_default_form() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(&dir);
        assert_eq!(app.state(), EditorState::Idle);
        assert_eq!(app.field(FormField::Stock), "0");
        assert!(app.rows().is_empty());
        assert!(app.dialog().is_none());
    }

    #[test]
    fn test_typing_and_tab_navigation() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        type_text(&mut app, "Widget");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "uno");
        app.handle_key(key(KeyCode::Enter));
        type_text(&mut app, "dos");
        app.handle_key(key(KeyCode::BackTab));

        assert_eq!(app.field(FormField::Name), "Widget");
        assert_eq!(app.field(FormField::Description), "uno\ndos");
        assert_eq!(app.focus(), Focus::Field(FormField::Name));
    }

    #[test]
    fn test_enter_on_single_line_moves_focus() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.focus(), Focus::Field(FormField::Description));
    }

    #[test]
    fn test_ctrl_q_quits() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        let mut event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        event.kind = KeyEventKind::Press;
        app.handle_key(event);
        assert!(app.should_quit());
    }

    #[test]
    fn test_f2_adds_and_shows_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.set_field(FormField::Name, "Widget");
        app.set_field(FormField::Price, "9.99");

        app.handle_key(key(KeyCode::F(2)));

        let dialog = app.dialog().unwrap();
        assert_eq!(dialog.kind, DialogKind::Info);
        assert_eq!(dialog.message, "Producto agregado correctamente");
        assert_eq!(app.rows().len(), 1);
        assert_eq!(app.rows()[0].price, "$9.99");
        assert_eq!(app.field(FormField::Name), "");

        app.handle_key(key(KeyCode::Enter));
        assert!(app.dialog().is_none());
    }

    #[test]
    fn test_keys_are_swallowed_while_dialog_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.update();
        assert!(app.dialog().is_some());

        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.field(FormField::Name), "");
        assert!(app.dialog().is_some());

        app.handle_key(key(KeyCode::Esc));
        assert!(app.dialog().is_none());
    }

    #[test]
    fn test_table_navigation_selects_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        for name in ["A", "B", "C"] {
            app.set_field(FormField::Name, name);
            app.add();
            app.answer_dialog(true);
        }

        app.focus = Focus::Table;
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected_id(), Some(3));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected_id(), Some(2));
        app.handle_key(key(KeyCode::End));
        assert_eq!(app.selected_id(), Some(1));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected_id(), Some(1));
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.selected_id(), Some(2));
        assert_eq!(app.field(FormField::Name), "B");
    }

    #[test]
    fn test_select_vanished_row_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        for name in ["A", "B"] {
            app.set_field(FormField::Name, name);
            app.add();
            app.answer_dialog(true);
        }
        app.select_row(1);
        assert_eq!(app.selected_id(), Some(1));

        // id 2 removed behind the table's back
        app.repository().delete(2).unwrap();
        app.select_row(0);

        assert_eq!(app.selected_id(), Some(1));
        assert_eq!(app.table_state.selected(), Some(1));
        assert_eq!(app.field(FormField::Name), "A");
    }

    #[test]
    fn test_button_press_with_space() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.set_field(FormField::Name, "Con espacio");
        app.focus = Focus::Button(Button::Add);
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.rows().len(), 1);
    }
}
