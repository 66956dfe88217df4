use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::color::style::to_style;
use crate::tui::colors;

/// Render the report table, one row per visible task
pub fn render_task_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = format!(
        " {} ({}/{}) ",
        app.report.name,
        app.visible.len(),
        app.table.rows.len()
    );
    let block = Block::default().title(title).borders(Borders::ALL);

    if app.visible.is_empty() {
        let message = if app.table.rows.is_empty() {
            "No tasks"
        } else {
            "No tasks match the search"
        };
        let empty = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(colors::MUTED));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(app.table.headers.iter().map(|h| Cell::from(h.as_str()))).style(
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    );

    let rows: Vec<Row> = app
        .visible
        .iter()
        .filter_map(|&idx| app.table.rows.get(idx))
        .map(|row| {
            let style = row.attr.as_ref().map(to_style).unwrap_or_default();
            Row::new(row.cells.iter().map(|cell| Cell::from(cell.as_str()))).style(style)
        })
        .collect();

    // The description column takes whatever space is left
    let widths: Vec<Constraint> = app
        .report
        .columns
        .iter()
        .zip(&app.table.widths)
        .map(|(column, &width)| {
            if column.starts_with("description") {
                Constraint::Fill(1)
            } else {
                Constraint::Length(width)
            }
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(
            Style::default()
                .bg(colors::SELECTION_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}
