// src/notify/event.rs
use crate::health::ProbeDetail;

pub const DOWN_ALERT_HEADER: &str = "🤖 SYSTEM ALERT
The monitored service is failing or unavailable.
Recording and notifying immediately.
Please check as soon as possible.";

pub const RECOVERY_ALERT: &str = "🤖 SYSTEM RESTORED
The monitored service is operational again.
Monitoring continues.";

pub const ERROR_ALERT_PREFIX: &str = "❌ Error while checking target:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    DownAlert,
    RecoveryAlert,
    ErrorAlert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub kind: NotificationKind,
    pub text: String,
}

impl NotificationEvent {
    /// Down alert embedding the rendered probe detail.
    pub fn down(detail: &ProbeDetail) -> Self {
        Self {
            kind: NotificationKind::DownAlert,
            text: format!("{}\nTarget response:\n{}", DOWN_ALERT_HEADER, detail.render()),
        }
    }

    pub fn recovery() -> Self {
        Self {
            kind: NotificationKind::RecoveryAlert,
            text: RECOVERY_ALERT.to_string(),
        }
    }

    pub fn error(description: impl std::fmt::Display) -> Self {
        Self {
            kind: NotificationKind::ErrorAlert,
            text: format!("{} {}", ERROR_ALERT_PREFIX, description),
        }
    }
}
