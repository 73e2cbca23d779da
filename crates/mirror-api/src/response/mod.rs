//! Response bodies
//!
//! The trigger platform only looks at the status code; the bodies are for
//! operators and tests.

use chrono::{DateTime, Utc};
use mirror_service::MirrorOutcome;
use serde::{Deserialize, Serialize};

/// Acknowledgement returned for every trigger delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerAck {
    /// `dispatched`, `no_data` or `unconfigured`
    pub outcome: String,
}

impl From<&MirrorOutcome> for TriggerAck {
    fn from(outcome: &MirrorOutcome) -> Self {
        Self {
            outcome: outcome.as_str().to_string(),
        }
    }
}

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: ReadinessChecks,
}

/// Per-dependency readiness
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessChecks {
    pub mirror_url: String,
}

impl ReadinessResponse {
    /// The service is ready either way; a missing URL is reported, not fatal
    pub fn ready(mirror_configured: bool) -> Self {
        Self {
            status: "ready".to_string(),
            timestamp: Utc::now(),
            checks: ReadinessChecks {
                mirror_url: if mirror_configured { "configured" } else { "unconfigured" }
                    .to_string(),
            },
        }
    }
}
