//! # trafficwatch-client
//!
//! HTTP collaborator for the trafficwatch status dashboard: a small client
//! for the backend's `/health` endpoint and a cancellable polling loop that
//! fetches it on a fixed interval.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trafficwatch_client::{HealthClient, Poller};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = HealthClient::builder()
//!         .endpoint("http://localhost:8000")
//!         .build();
//!
//!     let (handle, mut outcomes) = Poller::new(client).start();
//!
//!     while let Some(outcome) = outcomes.recv().await {
//!         println!("{:?}", outcome);
//!     }
//!
//!     handle.stop();
//! }
//! ```

pub mod client;
pub mod error;
pub mod poller;

pub use client::{HealthClient, HealthClientBuilder};
pub use error::ClientError;
pub use poller::{
    HealthSource, PollHandle, PollOutcome, Poller, CONNECT_FAILED_MESSAGE, DEFAULT_POLL_INTERVAL,
};

// Re-export the schema for convenience
pub use trafficwatch_types::{HealthStatus, Service, ServiceStatuses};
