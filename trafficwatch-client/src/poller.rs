//! Repeating health polls on a fixed interval.
//!
//! The poller fetches the health endpoint once immediately, then again every
//! interval until stopped. Each completed attempt produces exactly one
//! [`PollOutcome`] on the returned channel. There is no backoff and no
//! failure cap: a failed attempt is simply retried on the next tick.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};

use trafficwatch_types::HealthStatus;

use crate::client::HealthClient;
use crate::error::ClientError;

/// How often the dashboard polls the backend by default.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// The single user-facing message for any failed poll attempt.
///
/// Network errors, timeouts, non-success statuses, and malformed bodies all
/// collapse into this one message; the underlying cause only goes to logs.
pub const CONNECT_FAILED_MESSAGE: &str = "Failed to connect to backend";

/// The result of one completed poll attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The backend responded with a parseable health report.
    Loaded(HealthStatus),
    /// The attempt failed; carries the fixed user-facing message.
    Failed(String),
}

/// Something that can be polled for a health report.
///
/// [`HealthClient`] is the production implementation; tests substitute
/// controllable fakes.
#[async_trait]
pub trait HealthSource: Send + Sync + 'static {
    async fn fetch(&self) -> Result<HealthStatus, ClientError>;
}

#[async_trait]
impl HealthSource for HealthClient {
    async fn fetch(&self) -> Result<HealthStatus, ClientError> {
        self.fetch_health().await
    }
}

/// A repeating fetch of a [`HealthSource`] on a fixed interval.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use trafficwatch_client::{HealthClient, Poller};
///
/// #[tokio::main]
/// async fn main() {
///     let client = HealthClient::builder()
///         .endpoint("http://localhost:8000")
///         .build();
///
///     let (handle, mut outcomes) = Poller::new(client)
///         .interval(Duration::from_secs(5))
///         .start();
///
///     let first = outcomes.recv().await;
///     println!("{:?}", first);
///
///     handle.stop();
/// }
/// ```
#[derive(Debug)]
pub struct Poller<S> {
    source: S,
    interval: Duration,
}

impl<S: HealthSource> Poller<S> {
    /// Create a poller with the default interval.
    pub fn new(source: S) -> Self {
        Self {
            source,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Set the poll interval (default: 5 seconds).
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Start polling on the current tokio runtime.
    ///
    /// The first fetch is issued immediately, then one per interval. Returns
    /// a stop handle and the outcome channel. Attempts are serialized: a
    /// slow fetch delays the next tick rather than overlapping it, so
    /// outcomes always arrive in attempt order.
    ///
    /// After [`PollHandle::stop`] no outcome is delivered, even when a fetch
    /// is in flight at the time of the call. Dropping the receiver also
    /// ends the polling task.
    pub fn start(self) -> (PollHandle, mpsc::Receiver<PollOutcome>) {
        let (tx, rx) = mpsc::channel(16);
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let source = self.source;
        let interval = self.interval;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        // Race the fetch against the stop signal so a
                        // stopped poller never posts a late outcome.
                        let outcome = tokio::select! {
                            result = source.fetch() => match result {
                                Ok(health) => PollOutcome::Loaded(health),
                                Err(err) => {
                                    tracing::debug!(error = %err, "health poll failed");
                                    PollOutcome::Failed(CONNECT_FAILED_MESSAGE.to_string())
                                }
                            },
                            _ = stop_rx.changed() => break,
                        };

                        if *stop_rx.borrow() {
                            break;
                        }
                        if tx.send(outcome).await.is_err() {
                            break;
                        }
                    }
                    _ = stop_rx.changed() => break,
                }
            }
        });

        (PollHandle { stop_tx }, rx)
    }
}

/// Handle for stopping a running poller.
///
/// Call [`stop`](PollHandle::stop) explicitly, or drop the handle; either
/// way no further attempts are issued and no outcome is delivered.
#[derive(Debug)]
pub struct PollHandle {
    stop_tx: watch::Sender<bool>,
}

impl PollHandle {
    /// Stop all future poll attempts. Calling this again is a no-op.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use trafficwatch_types::ServiceStatuses;

    fn sample_health() -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
            timestamp: "2025-06-01T12:00:00Z".to_string(),
            uptime_seconds: 300.0,
            health_score: 0.95,
            services: ServiceStatuses {
                vehicle_detector: true,
                traffic_manager: true,
                analytics: true,
            },
            version: "1.0.0".to_string(),
        }
    }

    /// Always succeeds with the same report.
    struct StaticSource;

    #[async_trait]
    impl HealthSource for StaticSource {
        async fn fetch(&self) -> Result<HealthStatus, ClientError> {
            Ok(sample_health())
        }
    }

    /// Always fails.
    struct FailingSource;

    #[async_trait]
    impl HealthSource for FailingSource {
        async fn fetch(&self) -> Result<HealthStatus, ClientError> {
            Err(ClientError::Connection("refused".to_string()))
        }
    }

    /// Fails on the first call, succeeds afterwards.
    struct FlakySource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl HealthSource for FlakySource {
        async fn fetch(&self) -> Result<HealthStatus, ClientError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(ClientError::Timeout)
            } else {
                Ok(sample_health())
            }
        }
    }

    /// Takes `delay` to resolve.
    struct SlowSource {
        delay: Duration,
    }

    #[async_trait]
    impl HealthSource for SlowSource {
        async fn fetch(&self) -> Result<HealthStatus, ClientError> {
            tokio::time::sleep(self.delay).await;
            Ok(sample_health())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_poll_is_immediate() {
        let start = tokio::time::Instant::now();
        let (handle, mut outcomes) = Poller::new(StaticSource).start();

        let outcome = outcomes.recv().await.unwrap();
        assert_eq!(outcome, PollOutcome::Loaded(sample_health()));
        assert!(start.elapsed() < Duration::from_secs(1));

        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn failure_collapses_to_fixed_message() {
        let (handle, mut outcomes) = Poller::new(FailingSource).start();

        let outcome = outcomes.recv().await.unwrap();
        assert_eq!(
            outcome,
            PollOutcome::Failed(CONNECT_FAILED_MESSAGE.to_string())
        );

        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn polls_repeat_on_the_configured_interval() {
        let interval = Duration::from_secs(5);
        let start = tokio::time::Instant::now();
        let (handle, mut outcomes) = Poller::new(StaticSource).interval(interval).start();

        outcomes.recv().await.unwrap();
        let first = start.elapsed();
        outcomes.recv().await.unwrap();
        let second = start.elapsed();

        // Second attempt no earlier than (interval - tolerance) after the first.
        assert!(second - first >= Duration::from_millis(4900));

        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn next_tick_retries_after_failure() {
        let source = FlakySource {
            calls: AtomicUsize::new(0),
        };
        let (handle, mut outcomes) = Poller::new(source).start();

        let first = outcomes.recv().await.unwrap();
        assert!(matches!(first, PollOutcome::Failed(_)));

        let second = outcomes.recv().await.unwrap();
        assert!(matches!(second, PollOutcome::Loaded(_)));

        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn slow_fetch_still_delivers_when_not_stopped() {
        let source = SlowSource {
            delay: Duration::from_secs(8),
        };
        let (handle, mut outcomes) = Poller::new(source).start();

        let outcome = outcomes.recv().await.unwrap();
        assert!(matches!(outcome, PollOutcome::Loaded(_)));

        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn no_outcome_after_stop_even_with_fetch_in_flight() {
        let source = SlowSource {
            delay: Duration::from_secs(10),
        };
        let (handle, mut outcomes) = Poller::new(source).start();

        // Let the first fetch get in flight, then stop before it resolves.
        tokio::time::sleep(Duration::from_secs(1)).await;
        handle.stop();

        // The task exits without posting; the channel closes with no outcome.
        assert!(outcomes.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_twice_is_a_noop() {
        let (handle, mut outcomes) = Poller::new(StaticSource).start();

        outcomes.recv().await.unwrap();
        handle.stop();
        handle.stop();

        assert!(outcomes.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_receiver_ends_polling() {
        let (handle, outcomes) = Poller::new(StaticSource).start();
        drop(outcomes);

        // The next send fails and the task exits, dropping its stop receiver.
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(handle.stop_tx.is_closed());
    }
}
