//! Application state and logic
//!
//! `App` holds only view state. The library is owned by the caller and passed
//! in for every action, and the selected position is re-checked against it
//! each time, so an action never reuses a position from before a removal.

use std::time::{Duration, Instant};

use shelf_core::pages::coerce_pages;
use shelf_core::{Book, Library};

/// How long a status message stays visible
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode
    Normal,
    /// Add-book form is open
    Form,
    /// Title search input (after pressing /)
    Find,
}

/// Field focused in the add-book form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Author,
    Pages,
    Read,
}

impl FormField {
    /// Move to the next field (wrapping)
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Author,
            FormField::Author => FormField::Pages,
            FormField::Pages => FormField::Read,
            FormField::Read => FormField::Title,
        }
    }

    /// Move to the previous field (wrapping)
    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Read,
            FormField::Author => FormField::Title,
            FormField::Pages => FormField::Author,
            FormField::Read => FormField::Pages,
        }
    }
}

/// Add-book form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub pages: String,
    pub read: bool,
    pub field: FormField,
}

impl BookForm {
    /// Text buffer of the focused field (None for the checkbox)
    fn focused_text(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Title => Some(&mut self.title),
            FormField::Author => Some(&mut self.author),
            FormField::Pages => Some(&mut self.pages),
            FormField::Read => None,
        }
    }
}

/// Application state
pub struct App {
    /// Whether the app should exit
    pub should_quit: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Add-book form
    pub form: BookForm,
    /// Title search input buffer
    pub find_input: String,
    /// Currently selected book position
    pub selected: usize,
    /// Status message to display temporarily
    pub status_message: Option<String>,
    /// When the status message was set (for auto-dismiss)
    pub status_message_time: Option<Instant>,
    /// Whether the status message reports an error
    pub status_is_error: bool,
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Pending 'g' keypress for gg sequence (with timestamp)
    pub pending_g: Option<Instant>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            form: BookForm::default(),
            find_input: String::new(),
            selected: 0,
            status_message: None,
            status_message_time: None,
            status_is_error: false,
            show_help: false,
            pending_g: None,
        }
    }

    /// Set a status message (will auto-dismiss after 3 seconds)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_message_time = Some(Instant::now());
        self.status_is_error = false;
    }

    /// Set an error message in the status bar
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.set_status(message);
        self.status_is_error = true;
    }

    /// Check and clear expired status message
    pub fn check_status_timeout(&mut self) {
        if let Some(time) = self.status_message_time {
            if time.elapsed() > STATUS_TIMEOUT {
                self.status_message = None;
                self.status_message_time = None;
                self.status_is_error = false;
            }
        }
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Get the currently selected book
    pub fn current_book<'a>(&self, library: &'a Library) -> Option<&'a Book> {
        library.get(self.selected)
    }

    /// Keep the selection inside the library after a mutation
    pub fn clamp_selection(&mut self, library: &Library) {
        self.selected = self.selected.min(library.len().saturating_sub(1));
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, library: &Library) {
        if self.selected < library.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Move selection to the first book (vim 'gg')
    pub fn move_to_first(&mut self) {
        self.selected = 0;
    }

    /// Move selection to the last book (vim 'G')
    pub fn move_to_last(&mut self, library: &Library) {
        self.selected = library.len().saturating_sub(1);
    }

    /// Toggle the read flag of the selected book
    pub fn toggle_selected(&mut self, library: &mut Library) {
        match library.toggle_read_at(self.selected) {
            Ok(_) => {
                if let Some(book) = library.get(self.selected) {
                    let message = format!("'{}' marked as {}", book.title, book.status_label());
                    self.set_status(message);
                }
            }
            Err(e) => self.set_error(format!("{}. {}", e, e.recovery_suggestion())),
        }
    }

    /// Remove the selected book
    pub fn remove_selected(&mut self, library: &mut Library) {
        match library.remove_at(self.selected) {
            Ok(book) => {
                self.clamp_selection(library);
                self.set_status(format!("Removed: {}", book.title));
            }
            Err(e) => self.set_error(format!("{}. {}", e, e.recovery_suggestion())),
        }
    }

    /// Open the add-book form with empty fields
    pub fn enter_form_mode(&mut self) {
        self.input_mode = InputMode::Form;
        self.form = BookForm::default();
    }

    /// Open the title search input
    pub fn enter_find_mode(&mut self) {
        self.input_mode = InputMode::Find;
        self.find_input.clear();
    }

    /// Exit any input mode back to normal
    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Insert a character into the active input
    pub fn insert_char(&mut self, c: char) {
        match self.input_mode {
            InputMode::Form if self.form.field == FormField::Read => {
                if c == ' ' {
                    self.form.read = !self.form.read;
                }
            }
            InputMode::Form => {
                if let Some(text) = self.form.focused_text() {
                    text.push(c);
                }
            }
            InputMode::Find => self.find_input.push(c),
            InputMode::Normal => {}
        }
    }

    /// Delete the last character of the active input
    pub fn delete_char(&mut self) {
        match self.input_mode {
            InputMode::Form => {
                if let Some(text) = self.form.focused_text() {
                    text.pop();
                }
            }
            InputMode::Find => {
                self.find_input.pop();
            }
            InputMode::Normal => {}
        }
    }

    pub fn next_field(&mut self) {
        self.form.field = self.form.field.next();
    }

    pub fn prev_field(&mut self) {
        self.form.field = self.form.field.prev();
    }

    /// Add the book described by the form
    ///
    /// On success the form is reset and the new book selected. A page count
    /// that cannot be coerced keeps the form open.
    pub fn submit_form(&mut self, library: &mut Library) {
        let Some(pages) = coerce_pages(&self.form.pages) else {
            self.set_error("Pages must be a number");
            self.form.field = FormField::Pages;
            return;
        };

        let form = std::mem::take(&mut self.form);
        let title = library.add(form.title, form.author, pages, form.read).title.clone();
        self.selected = library.len() - 1;
        self.exit_input_mode();
        self.set_status(format!("Added: {}", title));
    }

    /// Select the first book whose title contains the search input
    pub fn submit_find(&mut self, library: &Library) {
        let query = std::mem::take(&mut self.find_input);
        self.exit_input_mode();

        match library.position_by_title_substring(&query) {
            Some(index) => {
                self.selected = index;
                if let Some(book) = library.get(index) {
                    self.set_status(format!("Found: {}", book.describe()));
                }
            }
            None => self.set_error(format!("No book matching '{}'", query)),
        }
    }
}
