//! Shelf TUI
//!
//! Terminal user interface for Shelf - a personal book-tracking list.
//!
//! ## Layout
//!
//! - Top: book count
//! - Left: books list
//! - Right: card for the selected book
//! - Bottom: status bar, or the find input
//!
//! ## Navigation
//!
//! - j/k or ↑/↓: Move selection up/down
//! - gg / G: First / last book
//! - q: Quit
//!
//! ## Commands
//!
//! - a: Add book (form)
//! - space / r: Toggle read status
//! - d: Remove book
//! - /: Find by title
//! - ?: Help

mod app;
mod ui;

use std::fs::File;
use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use shelf_core::{Config, Library};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::{App, InputMode};

/// Run the TUI application
pub fn run(config: &Config, empty: bool) -> Result<()> {
    // Initialize TUI logging (file-based, only if SHELF_LOG is set)
    init_tui_logging(config);
    info!("Library app initialized");

    let mut library = crate::open_library(config, empty);
    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    with_restore(
        || {
            stdout().execute(EnterAlternateScreen)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
            run_app(&mut terminal, &mut app, &mut library)
        },
        || {
            disable_raw_mode()?;
            stdout().execute(LeaveAlternateScreen)?;
            Ok(())
        },
    )
}

/// Run `body`, then `restore` whether or not `body` failed
///
/// The first error wins, so a setup failure is not hidden by a restore error.
fn with_restore(
    body: impl FnOnce() -> Result<()>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<()> {
    let result = body();
    let restored = restore();
    result.and(restored)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, library: &mut Library) -> Result<()> {
    loop {
        // Check for status message timeout
        app.check_status_timeout();

        // Redraw from the current library contents
        terminal.draw(|frame| ui::draw(frame, app, library))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    handle_key(app, library, key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Dispatch a key press according to the current input mode
fn handle_key(app: &mut App, library: &mut Library, key: KeyEvent) {
    // If help is showing, any key dismisses it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, library, key.code, key.modifiers),
        InputMode::Form => handle_form_mode(app, library, key.code),
        InputMode::Find => handle_find_mode(app, library, key.code),
    }
}

/// Handle key events in normal mode
fn handle_normal_mode(app: &mut App, library: &mut Library, code: KeyCode, modifiers: KeyModifiers) {
    // Clear status message on navigation keys
    if matches!(
        code,
        KeyCode::Char('j')
            | KeyCode::Char('k')
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Char('g')
            | KeyCode::Char('G')
    ) {
        app.status_message = None;
    }

    // Clear pending 'g' if timeout expired (500ms)
    if let Some(time) = app.pending_g {
        if time.elapsed() > Duration::from_millis(500) {
            app.pending_g = None;
        }
    }

    match code {
        // Quit
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(library),

        // gg: first book
        KeyCode::Char('g') => {
            if app.pending_g.take().is_some() {
                app.move_to_first();
            } else {
                app.pending_g = Some(std::time::Instant::now());
            }
        }
        KeyCode::Char('G') => app.move_to_last(library),

        // Book actions use the selection as it is now
        KeyCode::Char(' ') | KeyCode::Char('r') => app.toggle_selected(library),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(library),

        KeyCode::Char('a') => app.enter_form_mode(),
        KeyCode::Char('/') => app.enter_find_mode(),
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle key events in the add-book form
fn handle_form_mode(app: &mut App, library: &mut Library, code: KeyCode) {
    match code {
        KeyCode::Esc => {
            app.exit_input_mode();
            app.set_status("Cancelled");
        }
        KeyCode::Enter => app.submit_form(library),
        KeyCode::Tab | KeyCode::Down => app.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.prev_field(),
        KeyCode::Char(c) => app.insert_char(c),
        KeyCode::Backspace => app.delete_char(),
        _ => {}
    }
}

/// Handle key events in find mode
fn handle_find_mode(app: &mut App, library: &Library, code: KeyCode) {
    match code {
        KeyCode::Esc => app.exit_input_mode(),
        KeyCode::Enter => app.submit_find(library),
        KeyCode::Char(c) => app.insert_char(c),
        KeyCode::Backspace => app.delete_char(),
        _ => {}
    }
}

/// Log to a file when SHELF_LOG is set; the terminal is busy drawing
fn init_tui_logging(config: &Config) {
    // Only log if SHELF_LOG is set
    let Ok(log_level) = std::env::var("SHELF_LOG") else {
        return;
    };

    if config.log_file.is_none() {
        if let Err(e) = config.ensure_data_dir() {
            eprintln!("Warning: {:#}", e);
            return;
        }
    }

    let log_path = config.log_path();
    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
            return;
        }
    };

    let env_filter = EnvFilter::new(format!("shelf_core={},shelf={}", log_level, log_level));

    // Initialize file-based logging (ignore error if already initialized)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .try_init();

    info!("TUI logging initialized to {:?}", log_path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn press(app: &mut App, library: &mut Library, code: KeyCode) {
        handle_key(app, library, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, library: &mut Library, text: &str) {
        for c in text.chars() {
            press(app, library, KeyCode::Char(c));
        }
    }

    fn library() -> Library {
        let mut library = Library::new();
        library.add("1984", "George Orwell", 328, false);
        library.add("The Hobbit", "J.R.R. Tolkien", 295, true);
        library
    }

    #[test]
    fn test_quit_keys() {
        let mut library = library();
        let mut app = App::new();
        press(&mut app, &mut library, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::new();
        handle_key(
            &mut app,
            &mut library,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_toggle_then_remove_uses_current_selection() {
        let mut library = library();
        let mut app = App::new();

        press(&mut app, &mut library, KeyCode::Char(' '));
        assert!(library.list()[0].read);

        press(&mut app, &mut library, KeyCode::Char('d'));
        assert_eq!(library.len(), 1);

        // The Hobbit moved to position 0; toggling now hits it
        press(&mut app, &mut library, KeyCode::Char('r'));
        assert_eq!(library.list()[0].title, "The Hobbit");
        assert!(!library.list()[0].read);
    }

    #[test]
    fn test_gg_and_shift_g() {
        let mut library = library();
        let mut app = App::new();

        press(&mut app, &mut library, KeyCode::Char('G'));
        assert_eq!(app.selected, 1);

        press(&mut app, &mut library, KeyCode::Char('g'));
        assert_eq!(app.selected, 1);
        press(&mut app, &mut library, KeyCode::Char('g'));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_add_book_through_form() {
        let mut library = library();
        let mut app = App::new();

        press(&mut app, &mut library, KeyCode::Char('a'));
        assert_eq!(app.input_mode, InputMode::Form);

        // Typed characters go to the form, not to normal-mode commands
        type_str(&mut app, &mut library, "Dune");
        press(&mut app, &mut library, KeyCode::Tab);
        type_str(&mut app, &mut library, "Frank Herbert");
        press(&mut app, &mut library, KeyCode::Tab);
        type_str(&mut app, &mut library, "412");
        press(&mut app, &mut library, KeyCode::Enter);

        assert_eq!(library.len(), 3);
        assert_eq!(library.list()[2].describe(), "Dune by Frank Herbert, 412 pages, not read yet");
        assert_eq!(app.selected, 2);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_escape_cancels_form() {
        let mut library = library();
        let mut app = App::new();

        press(&mut app, &mut library, KeyCode::Char('a'));
        type_str(&mut app, &mut library, "Draft");
        press(&mut app, &mut library, KeyCode::Esc);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_find_mode() {
        let mut library = library();
        let mut app = App::new();

        press(&mut app, &mut library, KeyCode::Char('/'));
        type_str(&mut app, &mut library, "hobx");
        press(&mut app, &mut library, KeyCode::Backspace);
        press(&mut app, &mut library, KeyCode::Enter);

        assert_eq!(app.selected, 1);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut library = library();
        let mut app = App::new();

        press(&mut app, &mut library, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, &mut library, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_restore_runs_after_setup_failure() {
        let restored = Cell::new(false);
        let result = with_restore(
            || anyhow::bail!("no terminal"),
            || {
                restored.set(true);
                Ok(())
            },
        );

        assert!(restored.get());
        assert_eq!(result.unwrap_err().to_string(), "no terminal");
    }

    #[test]
    fn test_restore_error_reported_after_success() {
        let result = with_restore(|| Ok(()), || anyhow::bail!("restore failed"));
        assert_eq!(result.unwrap_err().to_string(), "restore failed");
    }
}
