//! Health report schema - the shape of the backend's `/health` response.

use crate::format;

/// A point-in-time health report fetched from the backend.
///
/// Field names mirror the JSON the backend emits. The report is treated as
/// immutable once received; nothing here is validated or coerced beyond what
/// deserialization requires.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthStatus {
    /// Overall status label ("healthy", "degraded", ...). Unknown labels are
    /// carried through and rendered as-is.
    pub status: String,

    /// When the report was produced. Opaque; never parsed.
    pub timestamp: String,

    /// How long the backend has been up, in seconds.
    pub uptime_seconds: f64,

    /// Composite health score, nominally in `[0, 1]`. Out-of-range values
    /// are still formatted rather than rejected.
    pub health_score: f64,

    /// Availability of the three backend services.
    pub services: ServiceStatuses,

    /// Backend version label. Opaque.
    pub version: String,
}

impl HealthStatus {
    /// The health score as a whole percentage, e.g. `"87%"`.
    pub fn score_percent(&self) -> String {
        format::score_percent(self.health_score)
    }

    /// The uptime as whole minutes, e.g. `"2 minutes"`.
    pub fn uptime_display(&self) -> String {
        format::uptime_display(self.uptime_seconds)
    }
}

/// Availability flags for the backend's services.
///
/// The three keys are part of the wire contract and known at build time;
/// [`ServiceStatuses::entries`] yields them in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceStatuses {
    pub vehicle_detector: bool,
    pub traffic_manager: bool,
    pub analytics: bool,
}

impl ServiceStatuses {
    /// The fixed services and their flags, in display order.
    pub fn entries(&self) -> [(Service, bool); 3] {
        [
            (Service::VehicleDetector, self.vehicle_detector),
            (Service::TrafficManager, self.traffic_manager),
            (Service::Analytics, self.analytics),
        ]
    }

    /// Number of services currently up.
    pub fn up_count(&self) -> usize {
        self.entries().iter().filter(|(_, up)| *up).count()
    }

    /// True when every service is up.
    pub fn all_up(&self) -> bool {
        self.up_count() == self.entries().len()
    }
}

/// One of the backend's three fixed services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    VehicleDetector,
    TrafficManager,
    Analytics,
}

impl Service {
    /// Human-readable name shown in the services panel.
    pub fn label(&self) -> &'static str {
        match self {
            Service::VehicleDetector => "Vehicle Detector (YOLOv8)",
            Service::TrafficManager => "Traffic Manager",
            Service::Analytics => "Analytics Service",
        }
    }
}
