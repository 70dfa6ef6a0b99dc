// src/monitor/timer.rs
use async_trait::async_trait;
use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};

/// A single re-armable periodic timer.
#[async_trait]
pub trait Timer: Send + Sync {
    /// Wait for the next fire.
    async fn tick(&mut self);

    /// Cancel the current schedule and arm a new one with `period`.
    fn rearm(&mut self, period: Duration);

    fn period(&self) -> Duration;
}

/// Tokio-backed timer. Holds exactly one `Interval`; re-arming replaces it, so
/// the previous schedule is dropped before the new one can fire.
pub struct IntervalTimer {
    interval: Interval,
    period: Duration,
}

impl IntervalTimer {
    /// Arms the timer. The first fire happens one full `period` from now.
    pub fn new(period: Duration) -> Self {
        Self {
            interval: arm(period),
            period,
        }
    }
}

fn arm(period: Duration) -> Interval {
    let mut interval = interval_at(Instant::now() + period, period);
    // A slow probe pushes the next tick back instead of causing a burst.
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

#[async_trait]
impl Timer for IntervalTimer {
    async fn tick(&mut self) {
        self.interval.tick().await;
    }

    fn rearm(&mut self, period: Duration) {
        self.interval = arm(period);
        self.period = period;
    }

    fn period(&self) -> Duration {
        self.period
    }
}
