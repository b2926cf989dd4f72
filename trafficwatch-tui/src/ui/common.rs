//! Common UI components shared across render modes.
//!
//! This module contains the header bar, status bar, and help overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::state::RenderState;

/// Render the header bar with the overall status indicator.
///
/// Displays: status dot, title, backend base URL.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let dot_style = match app.render_state() {
        RenderState::Loading => Style::default().add_modifier(Modifier::DIM),
        RenderState::Error { .. } => Style::default().fg(app.theme.down),
        RenderState::Loaded(health) => app.theme.status_style(&health.status),
    };

    let line = Line::from(vec![
        Span::styled(" ● ", dot_style),
        Span::styled("TRAFFICWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ AI Traffic Management │ "),
        Span::styled(app.base_url().to_string(), Style::default().fg(app.theme.highlight)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows time since the last completed poll and the available controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = match (app.render_state(), app.last_updated) {
        (RenderState::Loading, _) => " Waiting for first poll... | q:quit".to_string(),
        (_, Some(at)) => format!(
            " Updated {:.1}s ago | ?:help q:quit",
            at.elapsed().as_secs_f64()
        ),
        (_, None) => " ?:help q:quit".to_string(),
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current panel.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from("  q / Esc    Quit"),
        Line::from("  ?          Toggle this help"),
        Line::from(""),
        Line::from(Span::styled(
            "The dashboard refreshes itself on a fixed interval.",
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let width = 56.min(area.width);
    let height = (help_text.len() as u16 + 2).min(area.height);
    let popup = centered_rect(width, height, area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(help_text)
            .block(block)
            .alignment(Alignment::Left),
        popup,
    );
}

/// A rect of the given size centered within `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
