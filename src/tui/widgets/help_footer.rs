use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};
use crate::tui::colors;

/// Render the footer: key hints, or the search prompt while searching
pub fn render_help_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.mode {
        Mode::Normal if !app.search_query.is_empty() => {
            let mut spans = vec![
                Span::styled("filter: ", Style::default().fg(colors::MUTED)),
                Span::styled(
                    app.search_query.as_str(),
                    Style::default().fg(colors::HIGHLIGHT),
                ),
                Span::raw("  "),
            ];
            spans.extend(hint_spans(&normal_mode_help()));
            Line::from(spans)
        }
        Mode::Normal => Line::from(hint_spans(&normal_mode_help())),
        Mode::Search => {
            let mut spans = vec![
                Span::styled("/", Style::default().fg(colors::PRIMARY)),
                Span::raw(app.search_query.as_str()),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
                Span::raw("  "),
            ];
            spans.extend(hint_spans(&search_mode_help()));
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(colors::BAR_BG));
    frame.render_widget(paragraph, area);
}

fn hint_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    hints
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(*key, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": "),
                Span::styled(*desc, Style::default().fg(colors::MUTED)),
                Span::raw("  "),
            ]
        })
        .collect()
}

fn normal_mode_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("j/k", "Move"),
        ("Enter", "Info"),
        ("e", "Edit"),
        ("r", "Refresh"),
        ("/", "Search"),
        ("?", "Help"),
        ("q", "Quit"),
    ]
}

fn search_mode_help() -> Vec<(&'static str, &'static str)> {
    vec![("Enter", "Keep filter"), ("Esc", "Clear"), ("C-w", "Del word")]
}
