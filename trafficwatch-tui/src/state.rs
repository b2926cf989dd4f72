//! Poll state and its reduction to a render mode.
//!
//! The poll state is a sum type so the three modes are structurally
//! exclusive - there is no way to have both an error and a report "set" at
//! the same time, and the renderer matches exhaustively.

use trafficwatch_client::PollOutcome;
use trafficwatch_types::HealthStatus;

/// Remediation hint rendered under the connection error message.
pub const BACKEND_HINT: &str =
    "Start the backend locally with: uvicorn app.main:app --reload";

/// The latest known poll result, owned by the application.
///
/// Starts in `Loading`; each completed attempt overwrites it with a terminal
/// variant. A failed poll replaces prior success - there is no last-good-value
/// retention.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PollState {
    #[default]
    Loading,
    Loaded(HealthStatus),
    Failed(String),
}

impl PollState {
    /// Apply a completed poll outcome, overwriting whatever was there.
    pub fn apply(&mut self, outcome: PollOutcome) {
        *self = match outcome {
            PollOutcome::Loaded(health) => PollState::Loaded(health),
            PollOutcome::Failed(message) => PollState::Failed(message),
        };
    }
}

/// Exactly one of the three panels the dashboard can show.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState<'a> {
    Loading,
    Error { message: &'a str },
    Loaded(&'a HealthStatus),
}

/// Map the current poll state to its render mode.
///
/// Pure and deterministic: the same state always reduces to the same mode,
/// and every state reduces to exactly one.
pub fn reduce(state: &PollState) -> RenderState<'_> {
    match state {
        PollState::Loading => RenderState::Loading,
        PollState::Failed(message) => RenderState::Error { message },
        PollState::Loaded(health) => RenderState::Loaded(health),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use trafficwatch_client::CONNECT_FAILED_MESSAGE;
    use trafficwatch_types::ServiceStatuses;

    fn sample_health() -> HealthStatus {
        HealthStatus {
            status: "degraded".to_string(),
            timestamp: "2025-06-01T12:00:00Z".to_string(),
            uptime_seconds: 125.0,
            health_score: 0.5,
            services: ServiceStatuses {
                vehicle_detector: true,
                traffic_manager: false,
                analytics: true,
            },
            version: "1.0.0".to_string(),
        }
    }

    #[test]
    fn starts_loading() {
        assert_eq!(PollState::default(), PollState::Loading);
        assert_eq!(reduce(&PollState::default()), RenderState::Loading);
    }

    #[test]
    fn loaded_outcome_shows_report() {
        let mut state = PollState::default();
        state.apply(PollOutcome::Loaded(sample_health()));

        match reduce(&state) {
            RenderState::Loaded(health) => assert_eq!(health.score_percent(), "50%"),
            other => panic!("expected loaded, got {:?}", other),
        }
    }

    #[test]
    fn failed_outcome_shows_error_and_clears_report() {
        let mut state = PollState::default();
        state.apply(PollOutcome::Loaded(sample_health()));
        state.apply(PollOutcome::Failed(CONNECT_FAILED_MESSAGE.to_string()));

        assert_eq!(
            reduce(&state),
            RenderState::Error {
                message: CONNECT_FAILED_MESSAGE
            }
        );
    }

    #[test]
    fn recovery_overwrites_error() {
        let mut state = PollState::default();
        state.apply(PollOutcome::Failed(CONNECT_FAILED_MESSAGE.to_string()));
        state.apply(PollOutcome::Loaded(sample_health()));

        assert!(matches!(reduce(&state), RenderState::Loaded(_)));
    }

    #[test]
    fn reduce_is_idempotent() {
        let loaded = PollState::Loaded(sample_health());
        let failed = PollState::Failed(CONNECT_FAILED_MESSAGE.to_string());

        assert_eq!(reduce(&loaded), reduce(&loaded));
        assert_eq!(reduce(&failed), reduce(&failed));
        assert_eq!(reduce(&PollState::Loading), reduce(&PollState::Loading));
    }

    #[test]
    fn every_state_maps_to_its_own_mode() {
        assert!(matches!(reduce(&PollState::Loading), RenderState::Loading));
        assert!(matches!(
            reduce(&PollState::Failed("x".to_string())),
            RenderState::Error { .. }
        ));
        assert!(matches!(
            reduce(&PollState::Loaded(sample_health())),
            RenderState::Loaded(_)
        ));
    }
}
