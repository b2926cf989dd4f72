//! Dashboard panel rendering.
//!
//! Renders exactly one of the three render modes: the loading notice, the
//! connection error card, or the loaded health report (status card,
//! services card, API resources card).

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use trafficwatch_types::HealthStatus;

use crate::app::App;
use crate::state::{RenderState, BACKEND_HINT};
use crate::ui::common::centered_rect;

/// Render the dashboard for the current render mode.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.render_state() {
        RenderState::Loading => render_loading(frame, app, area),
        RenderState::Error { message } => render_error(frame, app, message, area),
        RenderState::Loaded(health) => render_loaded(frame, app, health, area),
    }
}

fn render_loading(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(40.min(area.width), 3, area);

    let paragraph = Paragraph::new("Loading system status...")
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.highlight))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        );

    frame.render_widget(paragraph, popup);
}

fn render_error(frame: &mut Frame, app: &App, message: &str, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Connection Error",
            Style::default()
                .fg(app.theme.down)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            BACKEND_HINT,
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let width = (BACKEND_HINT.len() as u16 + 4).min(area.width);
    let popup = centered_rect(width, lines.len() as u16 + 2, area);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.down)),
    );

    frame.render_widget(paragraph, popup);
}

fn render_loaded(frame: &mut Frame, app: &App, health: &HealthStatus, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(6), // Status card
        Constraint::Length(5), // Services card
        Constraint::Min(6),    // API resources card
    ])
    .split(area);

    render_status_card(frame, app, health, chunks[0]);
    render_services_card(frame, app, health, chunks[1]);
    render_links_card(frame, app, chunks[2]);
}

fn render_status_card(frame: &mut Frame, app: &App, health: &HealthStatus, area: Rect) {
    let label = Style::default().add_modifier(Modifier::DIM);

    let lines = vec![
        Line::from(vec![
            Span::styled("Status:       ", label),
            Span::styled(
                health.status.to_uppercase(),
                app.theme
                    .status_style(&health.status)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Health Score: ", label),
            Span::raw(health.score_percent()),
        ]),
        Line::from(vec![
            Span::styled("Uptime:       ", label),
            Span::raw(health.uptime_display()),
        ]),
        Line::from(vec![
            Span::styled("Version:      ", label),
            Span::raw(health.version.clone()),
        ]),
    ];

    let block = Block::default()
        .title(" System Status ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_services_card(frame: &mut Frame, app: &App, health: &HealthStatus, area: Rect) {
    let lines: Vec<Line> = health
        .services
        .entries()
        .iter()
        .map(|(service, up)| {
            let icon = if *up { "✔" } else { "✘" };
            Line::from(vec![
                Span::styled(format!(" {} ", icon), app.theme.service_style(*up)),
                Span::raw(service.label()),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Services ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_links_card(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .links()
        .iter()
        .map(|link| {
            Line::from(vec![
                Span::raw(format!(" {:<22}", link.label)),
                Span::styled(link.url.clone(), Style::default().fg(app.theme.highlight)),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" API Resources ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
