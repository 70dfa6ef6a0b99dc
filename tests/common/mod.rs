// tests/common/mod.rs
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uptime_monitor::health::{ProbeError, ProbeResult, Prober};
use uptime_monitor::monitor::{Controller, Timer};
use uptime_monitor::notify::{NotificationEvent, NotificationKind, NotifyError, Notifier};

pub const HEALTHY_INTERVAL: Duration = Duration::from_secs(60);
pub const DEGRADED_INTERVAL: Duration = Duration::from_secs(5);

/// One scripted probe outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Up,
    Down,
    Error,
}

impl Outcome {
    fn to_probe(self) -> Result<ProbeResult, ProbeError> {
        match self {
            Outcome::Up => Ok(ProbeResult::from_response(200, json!({"status": "ok"}))),
            Outcome::Down => Ok(ProbeResult::from_response(500, json!({"error": "db down"}))),
            Outcome::Error => Err(ProbeError::Request("builder error".to_string())),
        }
    }
}

pub struct ScriptedProber {
    outcomes: Mutex<VecDeque<Outcome>>,
}

#[async_trait]
impl Prober for ScriptedProber {
    async fn probe(&self) -> Result<ProbeResult, ProbeError> {
        let next = self.outcomes.lock().unwrap().pop_front().unwrap_or(Outcome::Up);
        next.to_probe()
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub sent: Arc<Mutex<Vec<NotificationEvent>>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn kinds(&self) -> Vec<NotificationKind> {
        self.sent.lock().unwrap().iter().map(|e| e.kind).collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, event: &NotificationEvent) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(event.clone());
        if self.fail {
            return Err(NotifyError::Status {
                status: 500,
                body: "webhook down".to_string(),
            });
        }
        Ok(())
    }
}

/// Records every re-arm. Fires `ticks` times, then never again.
#[derive(Clone)]
pub struct RecordingTimer {
    pub period: Duration,
    pub rearms: Arc<Mutex<Vec<Duration>>>,
    pub ticks: Arc<Mutex<usize>>,
}

impl RecordingTimer {
    pub fn new(ticks: usize) -> Self {
        Self {
            period: HEALTHY_INTERVAL,
            rearms: Arc::default(),
            ticks: Arc::new(Mutex::new(ticks)),
        }
    }

    pub fn rearms(&self) -> Vec<Duration> {
        self.rearms.lock().unwrap().clone()
    }
}

#[async_trait]
impl Timer for RecordingTimer {
    async fn tick(&mut self) {
        let fire = {
            let mut remaining = self.ticks.lock().unwrap();
            if *remaining > 0 {
                *remaining -= 1;
                true
            } else {
                false
            }
        };
        if !fire {
            std::future::pending::<()>().await;
        }
    }

    fn rearm(&mut self, period: Duration) {
        self.rearms.lock().unwrap().push(period);
        self.period = period;
    }

    fn period(&self) -> Duration {
        self.period
    }
}

pub struct Harness {
    pub controller: Controller,
    pub notifier: RecordingNotifier,
    pub timer: RecordingTimer,
}

pub fn harness(outcomes: &[Outcome]) -> Harness {
    harness_with(outcomes, RecordingNotifier::default(), RecordingTimer::new(0))
}

pub fn harness_with(
    outcomes: &[Outcome],
    notifier: RecordingNotifier,
    timer: RecordingTimer,
) -> Harness {
    let prober = ScriptedProber {
        outcomes: Mutex::new(outcomes.iter().copied().collect()),
    };
    let controller = Controller::new(
        Box::new(prober),
        Box::new(notifier.clone()),
        Box::new(timer.clone()),
        HEALTHY_INTERVAL,
        DEGRADED_INTERVAL,
    );
    Harness {
        controller,
        notifier,
        timer,
    }
}
