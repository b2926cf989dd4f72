//! # trafficwatch-tui
//!
//! A terminal status dashboard for an AI traffic management backend. The
//! dashboard polls the backend's `/health` endpoint on a fixed interval and
//! renders the latest result as one of three mutually exclusive panels:
//! loading, connection error, or the loaded health report.
//!
//! ## Architecture
//!
//! Data flows one way:
//!
//! ```text
//! Poller (trafficwatch-client task)
//!    │  PollOutcome via channel
//!    ▼
//! App (poll state)
//!    │  reduce()
//!    ▼
//! RenderState ──▶ ui (ratatui panels)
//! ```
//!
//! - **[`state`]**: the tri-state poll model and the pure reduction from
//!   poll state to render mode
//! - **[`app`]**: application state, outcome application, and user
//!   interaction flags
//! - **[`events`]**: crossterm event polling and key handling
//! - **[`ui`]**: terminal rendering - header, dashboard panels, status bar,
//!   help overlay, and theme support
//!
//! The presentation layer never triggers a poll; outcomes arrive only from
//! the poller's channel.

pub mod app;
pub mod events;
pub mod state;
pub mod ui;
