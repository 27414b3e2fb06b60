//! Rendering

use ratatui::{prelude::*, widgets::*};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use super::WINDOW_TITLE;
use super::app::App;
use super::dialog::{Dialog, DialogKind};
use super::form::{Button, Focus, FormField, cursor_row_col};
use super::table::HEADERS;
use crate::db::ProductStore;

const LABEL_WIDTH: u16 = 15;

pub fn draw<S: ProductStore>(f: &mut Frame, app: &mut App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(10), // Form
            Constraint::Min(6),     // Table
            Constraint::Length(8),  // Logs
        ])
        .split(f.area());

    draw_header(f, chunks[0]);
    draw_form(f, app, chunks[1]);
    draw_table(f, app, chunks[2]);
    draw_logs(f, app, chunks[3]);

    if let Some(dialog) = app.dialog() {
        draw_dialog(f, dialog);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(32), Constraint::Length(44)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {WINDOW_TITLE} "),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]));
    f.render_widget(title, parts[0]);

    let help = Paragraph::new("Tab: mover  F2-F5: acciones  Ctrl-Q: salir ")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    f.render_widget(help, parts[1]);
}

fn draw_form<S: ProductStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(" Datos del Producto ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FormField::ALL
        .iter()
        .map(|field| Constraint::Length(field.height()))
        .collect();
    constraints.push(Constraint::Length(1)); // Buttons
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (field, row) in FormField::ALL.iter().zip(rows.iter()) {
        draw_field(f, app, *field, *row);
    }
    draw_buttons(f, app.focus(), rows[FormField::ALL.len()]);
}

fn draw_field<S: ProductStore>(f: &mut Frame, app: &App<S>, field: FormField, area: Rect) {
    let focused = app.focus() == Focus::Field(field);
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)])
        .split(area);

    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    f.render_widget(Paragraph::new(field.label()).style(label_style), parts[0]);

    let input = app.form.input(field);
    let input_area = parts[1];
    let input_style = Style::default().fg(Color::White).bg(Color::Black);

    if field.is_multiline() {
        let (row, col) = cursor_row_col(input.value(), input.cursor());
        let v_scroll = row.saturating_sub(input_area.height.saturating_sub(1) as usize);
        let text = Paragraph::new(input.value())
            .style(input_style)
            .scroll((v_scroll as u16, 0));
        f.render_widget(text, input_area);

        if focused && app.dialog().is_none() {
            let x = (col as u16).min(input_area.width.saturating_sub(1));
            f.set_cursor_position((input_area.x + x, input_area.y + (row - v_scroll) as u16));
        }
    } else {
        let width = input_area.width.max(1) - 1;
        let scroll = input.visual_scroll(width as usize);
        let text = Paragraph::new(input.value())
            .style(input_style)
            .scroll((0, scroll as u16));
        f.render_widget(text, input_area);

        if focused && app.dialog().is_none() {
            f.set_cursor_position((
                input_area.x + ((input.visual_cursor().max(scroll) - scroll) as u16),
                input_area.y,
            ));
        }
    }
}

fn draw_buttons(f: &mut Frame, focus: Focus, area: Rect) {
    let mut spans = vec![Span::raw(" ".repeat(LABEL_WIDTH as usize))];
    for button in Button::ALL {
        let style = if focus == Focus::Button(button) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(
            format!("[{} {}]", button.shortcut(), button.label()),
            style,
        ));
        spans.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_table<S: ProductStore>(f: &mut Frame, app: &mut App<S>, area: Rect) {
    let border_color = if app.focus() == Focus::Table {
        Color::Yellow
    } else {
        Color::Cyan
    };

    let header = Row::new(HEADERS).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = app.rows.iter().map(|row| Row::new(row.cells())).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(25),
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!(" Lista de Productos ({}) ", app.rows.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    )
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("> ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn draw_logs<S: ProductStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::DIM),
                )
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn draw_dialog(f: &mut Frame, dialog: &Dialog) {
    let color = match dialog.kind {
        DialogKind::Info => Color::Green,
        DialogKind::Warning => Color::Yellow,
        DialogKind::Error => Color::Red,
        DialogKind::Confirm(_) => Color::Magenta,
    };

    let area = centered_rect(60, 7, f.area());
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(dialog.message.as_str()),
        Line::from(""),
        Line::styled(dialog.hint(), Style::default().fg(Color::DarkGray)),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", dialog.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        );
    f.render_widget(paragraph, area);
}

/// Rect of `percent_x` width and `height` rows centered in `r`
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{JsonFileStore, ProductRepository};
    use ratatui::{Terminal, backend::TestBackend};
    use shared::{Product, ProductDraft};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_centered_rect() {
        let area = centered_rect(60, 7, Rect::new(0, 0, 100, 40));
        assert_eq!(area.width, 60);
        assert_eq!(area.height, 7);
        assert_eq!(area.x, 20);
    }

    #[test]
    fn test_draw_form_and_table() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("productos.json"));
        store
            .save(&[Product::from_draft(
                1,
                ProductDraft::new("Lámpara").price(19.5).stock(3),
            )])
            .unwrap();
        let mut app = App::new(ProductRepository::new(store));

        let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains(WINDOW_TITLE));
        assert!(text.contains("Datos del Producto"));
        assert!(text.contains("Imagen (URL):"));
        assert!(text.contains("[F2 Agregar]"));
        assert!(text.contains("Lista de Productos (1)"));
        assert!(text.contains("Lámpara"));
        assert!(text.contains("$19.50"));
    }

    #[test]
    fn test_draw_dialog_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("productos.json"));
        let mut app = App::new(ProductRepository::new(store));
        app.request_delete();

        let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Selección"));
        assert!(text.contains("Selecciona un producto para eliminar"));
    }
}
