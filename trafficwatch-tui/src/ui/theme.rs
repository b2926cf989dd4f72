//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and link URLs.
    pub highlight: Color,
    /// Color for healthy status and active services.
    pub healthy: Color,
    /// Color for degraded status.
    pub degraded: Color,
    /// Color for down status, inactive services, and errors.
    pub down: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for panel titles and field labels.
    pub header: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            healthy: Color::Green,
            degraded: Color::Yellow,
            down: Color::Red,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            healthy: Color::Green,
            degraded: Color::Yellow,
            down: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Style for an overall status label.
    ///
    /// Known labels get their conventional colors; anything else is treated
    /// as trouble.
    pub fn status_style(&self, status: &str) -> Style {
        match status {
            "healthy" => Style::default().fg(self.healthy),
            "degraded" => Style::default().fg(self.degraded),
            _ => Style::default().fg(self.down).add_modifier(Modifier::BOLD),
        }
    }

    /// Style for a service availability flag.
    pub fn service_style(&self, up: bool) -> Style {
        if up {
            Style::default().fg(self.healthy)
        } else {
            Style::default().fg(self.down)
        }
    }
}
