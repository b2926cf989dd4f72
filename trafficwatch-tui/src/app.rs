//! Application state for the dashboard.

use std::time::Instant;

use trafficwatch_client::PollOutcome;

use crate::state::{reduce, PollState, RenderState};
use crate::ui::Theme;

/// A labelled link to one of the backend's informational resources.
///
/// Rendered as text only; the dashboard never fetches these.
#[derive(Debug, Clone)]
pub struct ApiLink {
    pub label: &'static str,
    pub url: String,
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub poll_state: PollState,
    pub theme: Theme,
    pub last_updated: Option<Instant>,
    base_url: String,
    links: Vec<ApiLink>,
}

impl App {
    /// Create a new App pointed at the given backend.
    pub fn new(base_url: impl Into<String>, links: Vec<ApiLink>) -> Self {
        Self {
            running: true,
            show_help: false,
            poll_state: PollState::default(),
            theme: Theme::auto_detect(),
            last_updated: None,
            base_url: base_url.into(),
            links,
        }
    }

    /// The backend base URL, shown in the header.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The informational resource links, in display order.
    pub fn links(&self) -> &[ApiLink] {
        &self.links
    }

    /// Apply a completed poll outcome to the poll state.
    pub fn apply_outcome(&mut self, outcome: PollOutcome) {
        self.poll_state.apply(outcome);
        self.last_updated = Some(Instant::now());
    }

    /// The render mode for the current poll state.
    pub fn render_state(&self) -> RenderState<'_> {
        reduce(&self.poll_state)
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
