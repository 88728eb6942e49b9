//! UI rendering
//!
//! Everything is drawn from `Library::list()` on every frame; nothing about
//! the books is cached between frames.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use shelf_core::Library;

use super::app::{App, FormField, InputMode};

const EMPTY_LIBRARY_TEXT: &str = "No books in your library yet. Add some books to get started!";

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App, library: &Library) {
    // Header, panes, status bar
    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, library, outer_chunks[0]);

    let pane_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(outer_chunks[1]);

    draw_books_pane(frame, app, library, pane_chunks[0]);
    draw_detail_pane(frame, app, library, pane_chunks[1]);

    match app.input_mode {
        InputMode::Normal | InputMode::Form => draw_status_bar(frame, app, outer_chunks[2]),
        InputMode::Find => draw_find_input(frame, app, outer_chunks[2]),
    }

    if app.input_mode == InputMode::Form {
        draw_form_overlay(frame, app);
    }

    // Draw help overlay if visible
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the header line with the book count
fn draw_header(frame: &mut Frame, library: &Library, area: Rect) {
    let line = Line::from(vec![
        Span::styled("My Library", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            "  Total books: {}  Read: {}",
            library.len(),
            library.read_count()
        )),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the book list (left)
fn draw_books_pane(frame: &mut Frame, app: &App, library: &Library, area: Rect) {
    let block = Block::default()
        .title(format!(" Books ({}) ", library.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().add_modifier(Modifier::BOLD));

    if library.is_empty() {
        let paragraph = Paragraph::new(EMPTY_LIBRARY_TEXT)
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = library
        .entries()
        .map(|(index, book)| {
            let (mark, mark_style) = if book.read {
                ("[x]", Style::default().fg(Color::Green))
            } else {
                ("[ ]", Style::default().fg(Color::Yellow))
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3}. ", index + 1), Style::default().add_modifier(Modifier::DIM)),
                Span::styled(mark, mark_style),
                Span::raw(" "),
                Span::raw(book.title.as_str()),
                Span::styled(
                    format!("  {}", book.author),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::REVERSED),
    );

    let mut state = ListState::default();
    state.select(Some(app.selected.min(library.len() - 1)));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the card for the selected book (right)
fn draw_detail_pane(frame: &mut Frame, app: &App, library: &Library, area: Rect) {
    let block = Block::default().title(" Book ").borders(Borders::ALL);

    let label = Style::default().add_modifier(Modifier::BOLD);
    let content = if let Some(book) = app.current_book(library) {
        let status_style = if book.read {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Yellow)
        };

        vec![
            Line::from(Span::styled(book.title.as_str(), label)),
            Line::from(""),
            Line::from(vec![Span::styled("Author: ", label), Span::raw(book.author.as_str())]),
            Line::from(vec![Span::styled("Pages:  ", label), Span::raw(book.pages.to_string())]),
            Line::from(vec![
                Span::styled("Status: ", label),
                Span::styled(book.status_label(), status_style),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("[space] {}   [d] Remove Book", book.toggle_label()),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ]
    } else {
        vec![Line::from(Span::styled(
            "Press 'a' to add a book.",
            Style::default().add_modifier(Modifier::DIM),
        ))]
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Draw the status bar at the bottom
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (content, style) = match &app.status_message {
        Some(msg) if app.status_is_error => (msg.clone(), Style::default().fg(Color::Red)),
        Some(msg) => (msg.clone(), Style::default()),
        None => (
            "a:add  space:toggle read  d:remove  /:find  ?:help  q:quit".to_string(),
            Style::default().add_modifier(Modifier::DIM),
        ),
    };

    frame.render_widget(Paragraph::new(content).style(style), area);
}

/// Draw title search input at the bottom
fn draw_find_input(frame: &mut Frame, app: &App, area: Rect) {
    let prefix = "/";

    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::Cyan)),
        Span::raw(app.find_input.as_str()),
    ]);

    frame.render_widget(Paragraph::new(line), area);

    let offset = u16::try_from(prefix.len() + app.find_input.chars().count()).unwrap_or(u16::MAX);
    let cursor_x = area
        .x
        .saturating_add(offset)
        .min(area.right().saturating_sub(1));
    frame.set_cursor_position((cursor_x, area.y));
}

/// Draw the add-book form
fn draw_form_overlay(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect(frame.area(), 50, 10);
    frame.render_widget(Clear, popup_area);

    let form = &app.form;
    let field_line = |field: FormField, name: &'static str, value: String| {
        let style = if form.field == field {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(value, style),
        ])
    };

    let checkbox = if form.read { "[x]" } else { "[ ]" };
    let lines = vec![
        field_line(FormField::Title, "Title:  ", format!("{} ", form.title)),
        field_line(FormField::Author, "Author: ", format!("{} ", form.author)),
        field_line(FormField::Pages, "Pages:  ", format!("{} ", form.pages)),
        field_line(FormField::Read, "Read:   ", checkbox.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Tab: next field  Space: toggle read  Enter: add  Esc: cancel",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Add Book ")
        .borders(Borders::ALL)
        .border_style(Style::default().add_modifier(Modifier::BOLD));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup_area);
}

/// Draw help overlay
fn draw_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(frame.area(), 50, 18);

    // Clear the popup area
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("Navigation:"),
        Line::from("  j/k, ↑/↓    Move up/down"),
        Line::from("  gg          Jump to first book"),
        Line::from("  G           Jump to last book"),
        Line::from(""),
        Line::from("Commands:"),
        Line::from("  a           Add book"),
        Line::from("  space, r    Toggle read status"),
        Line::from("  d           Remove book"),
        Line::from("  /           Find by title"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().add_modifier(Modifier::BOLD));

    let paragraph = Paragraph::new(help_text).block(block);
    frame.render_widget(paragraph, popup_area);
}

/// Centered popup area of at most `width` x `height`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(4));
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_terminal(app: &App, library: &Library) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app, library)).unwrap();
        terminal
    }

    fn render(app: &App, library: &Library) -> String {
        draw_terminal(app, library)
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_library() {
        let text = render(&App::new(), &Library::new());
        assert!(text.contains("Total books: 0"));
        assert!(text.contains("No books in your library yet."));
        assert!(text.contains("Press 'a' to add a book."));
    }

    #[test]
    fn test_selected_book_card() {
        let mut library = Library::new();
        library.add("1984", "George Orwell", 328, false);
        library.add("The Hobbit", "J.R.R. Tolkien", 295, true);

        let mut app = App::new();
        app.move_down(&library);

        let text = render(&app, &library);
        assert!(text.contains("Total books: 2"));
        assert!(text.contains("1984"));
        assert!(text.contains("Author: J.R.R. Tolkien"));
        assert!(text.contains("Pages:  295"));
        assert!(text.contains("Mark as Unread"));
    }

    #[test]
    fn test_form_overlay() {
        let mut app = App::new();
        app.enter_form_mode();
        app.insert_char('E');

        let text = render(&app, &Library::new());
        assert!(text.contains("Add Book"));
        assert!(text.contains("Title:  E"));
    }

    #[test]
    fn test_error_status() {
        let mut app = App::new();
        app.set_error("No book matching 'zzz'");

        let text = render(&app, &Library::new());
        assert!(text.contains("No book matching 'zzz'"));
    }

    #[test]
    fn test_find_cursor_stays_on_screen() {
        let mut app = App::new();
        app.enter_find_mode();
        for _ in 0..150 {
            app.insert_char('x');
        }

        let mut terminal = draw_terminal(&app, &Library::new());
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor.x, 99);
        assert_eq!(cursor.y, 19);
    }

    #[test]
    fn test_centered_rect_fits_small_area() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = centered_rect(area, 50, 18);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }
}
