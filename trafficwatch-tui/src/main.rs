use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tokio::sync::mpsc;

use trafficwatch_client::{HealthClient, PollOutcome, Poller};
use trafficwatch_tui::app::{ApiLink, App};
use trafficwatch_tui::{events, ui};

#[derive(Parser, Debug)]
#[command(name = "trafficwatch")]
#[command(about = "Terminal status dashboard for an AI traffic management backend")]
struct Args {
    /// Base URL of the backend API
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    /// Poll interval in seconds
    #[arg(short, long, default_value = "5")]
    interval: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,

    /// Fetch the health report once, print it as JSON, and exit
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let client = HealthClient::builder()
        .endpoint(&args.url)
        .timeout(Duration::from_secs(args.timeout))
        .build();

    let rt = tokio::runtime::Runtime::new()?;

    if args.check {
        return run_check(&rt, &client);
    }

    // Start the poller on the runtime; the TUI runs on the main thread and
    // drains its outcome channel each frame.
    let poller = Poller::new(client.clone()).interval(Duration::from_secs(args.interval));
    let (handle, outcomes) = rt.block_on(async { poller.start() });

    let mut app = App::new(&args.url, api_links(&client));
    let result = run_tui(&mut app, outcomes);

    handle.stop();

    result
}

/// One-shot mode: fetch the health report and print it as JSON.
fn run_check(rt: &tokio::runtime::Runtime, client: &HealthClient) -> Result<()> {
    // A fmt subscriber would corrupt the raw-mode terminal, so logging is
    // only installed on this non-interactive path.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let health = rt.block_on(client.fetch_health())?;
    println!("{}", serde_json::to_string_pretty(&health)?);

    Ok(())
}

/// The informational resource links shown in the API resources card.
fn api_links(client: &HealthClient) -> Vec<ApiLink> {
    vec![
        ApiLink {
            label: "API Documentation",
            url: client.docs_url(),
        },
        ApiLink {
            label: "Health Check",
            url: client.health_url(),
        },
        ApiLink {
            label: "System Information",
            url: client.system_info_url(),
        },
        ApiLink {
            label: "Metrics",
            url: client.metrics_url(),
        },
    ]
}

/// Run the TUI with the given outcome channel.
fn run_tui(app: &mut App, mut outcomes: mpsc::Receiver<PollOutcome>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let result = run_app(&mut terminal, app, &mut outcomes);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    outcomes: &mut mpsc::Receiver<PollOutcome>,
) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 16;

    while app.running {
        // Apply any poll outcomes that completed since the last frame.
        while let Ok(outcome) = outcomes.try_recv() {
            app.apply_outcome(outcome);
        }

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = ratatui::layout::Rect::new(
                    0,
                    (area.height / 2).saturating_sub(2),
                    area.width,
                    5.min(area.height),
                );
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Min(10),   // Dashboard
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::dashboard::render(frame, app, chunks[1]);
            ui::common::render_status_bar(frame, app, chunks[2]);

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}
