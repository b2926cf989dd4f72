//! # trafficwatch-types
//!
//! Core types for the trafficwatch status dashboard. This crate defines the
//! health report schema served by the backend's `/health` endpoint, plus the
//! pure display derivations (score percentage, uptime minutes) used when
//! rendering a report.
//!
//! ## Design Goals
//!
//! - **Zero required dependencies**: the schema types work without any
//!   serialization framework
//! - **Optional serialization**: enable the `serde` feature to derive
//!   `Serialize`/`Deserialize` for the wire format
//! - **Pure derivations**: formatting helpers are plain functions of their
//!   inputs, safe to call from any rendering layer
//!
//! ## Example
//!
//! ```rust
//! use trafficwatch_types::{HealthStatus, ServiceStatuses};
//!
//! let report = HealthStatus {
//!     status: "healthy".to_string(),
//!     timestamp: "2025-06-01T12:00:00Z".to_string(),
//!     uptime_seconds: 125.0,
//!     health_score: 0.87,
//!     services: ServiceStatuses {
//!         vehicle_detector: true,
//!         traffic_manager: true,
//!         analytics: false,
//!     },
//!     version: "1.0.0".to_string(),
//! };
//!
//! assert_eq!(report.score_percent(), "87%");
//! assert_eq!(report.uptime_display(), "2 minutes");
//! ```

mod format;
mod health;

pub use format::*;
pub use health::*;
