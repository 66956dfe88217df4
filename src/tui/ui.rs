use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, NotificationLevel};

use super::colors;
use super::widgets::{render_help_footer, render_help_popup, render_task_table};

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, app, header_area);
    render_task_table(frame, app, body_area);
    render_help_footer(frame, app, footer_area);

    if app.show_help {
        render_help_popup(frame, app, area);
    }

    if !app.notifications.is_empty() {
        render_notifications(frame, app, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!("tasktable - {}", app.report.name);
    let mode_str = format!("[{}]", app.mode);
    let padding = (area.width as usize).saturating_sub(title.width() + mode_str.width());

    let header_text = Line::from(vec![
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(padding)),
        Span::styled(mode_str, Style::default().fg(colors::PRIMARY)),
    ]);

    let header = Paragraph::new(header_text).style(Style::default().bg(colors::BAR_BG));
    frame.render_widget(header, area);
}

/// Stacked popups in the bottom-right corner, newest at the bottom
fn render_notifications(frame: &mut Frame, app: &App, area: Rect) {
    const POPUP_WIDTH: u16 = 40;
    const POPUP_HEIGHT: u16 = 3;
    const MAX_VISIBLE: usize = 5;

    let start_idx = app.notifications.len().saturating_sub(MAX_VISIBLE);
    let visible = &app.notifications[start_idx..];
    let count = visible.len();

    for (i, notification) in visible.iter().enumerate() {
        let (label, border_color) = match notification.level {
            NotificationLevel::Info => ("INFO", colors::PRIMARY),
            NotificationLevel::Error => ("ERROR", colors::ERROR),
        };

        let slide_offset = notification.slide_offset(POPUP_WIDTH + 2);

        let y_offset = (count - 1 - i) as u16 * POPUP_HEIGHT;
        let popup_x = area.width.saturating_sub(POPUP_WIDTH + 1) + slide_offset;
        let popup_y = area.height.saturating_sub(POPUP_HEIGHT + 1 + y_offset);

        if popup_x >= area.width {
            continue;
        }

        let visible_width = area.width.saturating_sub(popup_x).min(POPUP_WIDTH);
        if visible_width == 0 {
            continue;
        }

        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: visible_width,
            height: POPUP_HEIGHT,
        };

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {label} "))
            .title_style(
                Style::default()
                    .fg(border_color)
                    .add_modifier(Modifier::BOLD),
            );

        let msg = truncate(&notification.message, visible_width.saturating_sub(4) as usize);
        frame.render_widget(Paragraph::new(msg).block(block), popup_area);
    }
}

/// Cut `text` to `max` display columns, ending in `...` when shortened
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let budget = max.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max >= 3 {
        out.push_str("...");
    }
    out
}

/// Create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, center, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center);

    center
}
