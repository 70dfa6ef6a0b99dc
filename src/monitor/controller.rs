// src/monitor/controller.rs
use super::timer::Timer;
use crate::health::{HealthStatus, ProbeError, ProbeResult, Prober};
use crate::notify::{NotificationEvent, Notifier};
use tokio::sync::watch;
use tokio::time::Duration;
use tracing::{debug, error, info, warn};

/// What a single tick observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Down,
    Recovery,
    Unchanged,
}

/// Owns the remembered health state and the polling timer. Ticks are handled
/// one at a time by `run`, so `previous` is never touched concurrently.
pub struct Controller {
    prober: Box<dyn Prober>,
    notifier: Box<dyn Notifier>,
    timer: Box<dyn Timer>,
    previous: HealthStatus,
    healthy_interval: Duration,
    degraded_interval: Duration,
}

impl Controller {
    pub fn new(
        prober: Box<dyn Prober>,
        notifier: Box<dyn Notifier>,
        timer: Box<dyn Timer>,
        healthy_interval: Duration,
        degraded_interval: Duration,
    ) -> Self {
        Self {
            prober,
            notifier,
            timer,
            previous: HealthStatus::Healthy,
            healthy_interval,
            degraded_interval,
        }
    }

    pub fn previous(&self) -> HealthStatus {
        self.previous
    }

    /// Current polling period.
    pub fn interval(&self) -> Duration {
        self.timer.period()
    }

    /// Tick until `shutdown` flips to `true` or its sender is dropped. A tick
    /// that has started always completes.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        info!("Monitoring started, checking every {:?}", self.interval());

        loop {
            tokio::select! {
                _ = self.timer.tick() => {
                    self.on_tick().await;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Monitoring stopped");
                        break;
                    }
                }
            }
        }
    }

    pub async fn on_tick(&mut self) -> Transition {
        info!("Checking target...");

        match self.prober.probe().await {
            Ok(result) => self.on_probe_result(result).await,
            Err(e) => self.on_probe_error(&e).await,
        }
    }

    pub async fn on_probe_result(&mut self, result: ProbeResult) -> Transition {
        let transition = match (self.previous, result.status) {
            (HealthStatus::Healthy, HealthStatus::Unhealthy) => {
                warn!("🚨 Target is down: {}", result.detail);
                self.notify(NotificationEvent::down(&result.detail)).await;
                self.rearm(self.degraded_interval);
                Transition::Down
            }
            (HealthStatus::Unhealthy, HealthStatus::Healthy) => {
                info!("✅ Target recovered: {}", result.detail);
                self.notify(NotificationEvent::recovery()).await;
                self.rearm(self.healthy_interval);
                Transition::Recovery
            }
            (_, status) => {
                debug!("Target still {}", status);
                Transition::Unchanged
            }
        };

        self.previous = result.status;
        transition
    }

    /// The probe produced no result at all. Treated as unhealthy; only the
    /// entry into the unhealthy state notifies and re-arms.
    pub async fn on_probe_error(&mut self, err: &ProbeError) -> Transition {
        error!("Error while checking target: {}", err);

        let transition = if self.previous != HealthStatus::Unhealthy {
            self.notify(NotificationEvent::error(err)).await;
            self.rearm(self.degraded_interval);
            Transition::Down
        } else {
            Transition::Unchanged
        };

        self.previous = HealthStatus::Unhealthy;
        transition
    }

    async fn notify(&self, event: NotificationEvent) {
        if let Err(e) = self.notifier.send(&event).await {
            warn!("Failed to deliver {:?} notification: {}", event.kind, e);
        }
    }

    fn rearm(&mut self, period: Duration) {
        info!("Rescheduling checks every {:?}", period);
        self.timer.rearm(period);
    }
}
