// src/notify/mod.rs
mod event;
mod webhook;

pub use event::{NotificationEvent, NotificationKind, DOWN_ALERT_HEADER, ERROR_ALERT_PREFIX, RECOVERY_ALERT};
pub use webhook::{NotifyError, Notifier, WebhookNotifier};
