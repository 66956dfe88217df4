use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Row, Table},
    Frame,
};

use crate::app::App;
use crate::tui::colors;
use crate::tui::centered_rect;

/// Render every active binding, user bindings first
pub fn render_help_popup(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup);

    let rows: Vec<Row> = app
        .key_hints()
        .into_iter()
        .map(|(key, mode, target)| {
            Row::new([
                Cell::from(key).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(mode).style(Style::default().fg(colors::MUTED)),
                Cell::from(target),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Key bindings (? to close) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER_FOCUS));

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Fill(1),
        ],
    )
    .block(block);

    frame.render_widget(table, popup);
}
