// src/health/status.rs
use serde_json::Value;
use std::fmt;

use super::render::render_payload;

/// Binary health of the monitored target. Starts as `Healthy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthStatus {
    #[default]
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    pub fn from_status_code(code: u16) -> Self {
        if code == 200 {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProbeDetail {
    /// Decoded response body, or the status code/text fallback.
    Payload(Value),
    /// Transport-level failure, no response body available.
    Failure(String),
}

impl ProbeDetail {
    /// Render as indented `key: value` lines for notification text.
    pub fn render(&self) -> String {
        match self {
            ProbeDetail::Payload(value) => render_payload(value, 0),
            ProbeDetail::Failure(description) => format!("error: {}\n", description),
        }
    }
}

impl fmt::Display for ProbeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeDetail::Payload(value) => write!(f, "{}", value),
            ProbeDetail::Failure(description) => write!(f, "{}", description),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub status: HealthStatus,
    pub detail: ProbeDetail,
}

impl ProbeResult {
    pub fn from_response(status_code: u16, payload: Value) -> Self {
        Self {
            status: HealthStatus::from_status_code(status_code),
            detail: ProbeDetail::Payload(payload),
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            detail: ProbeDetail::Failure(description.into()),
        }
    }
}
