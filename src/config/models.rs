// src/config/models.rs
use serde::Deserialize;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawMonitorConfig")]
pub struct MonitorConfig {
    /// Endpoint polled on every tick.
    pub target_url: Url,

    /// Where transition notifications are posted.
    pub webhook_url: Url,

    pub healthy_interval_secs: u64,

    pub degraded_interval_secs: u64,

    pub probe_timeout_secs: u64,
}

/// On-disk/env shape. `api_url` and `slack_webhook_url` are the older names;
/// when both spellings are set the newer one wins.
#[derive(Debug, Deserialize)]
struct RawMonitorConfig {
    target_url: Option<Url>,
    api_url: Option<Url>,
    webhook_url: Option<Url>,
    slack_webhook_url: Option<Url>,

    #[serde(default = "default_healthy_interval_secs")]
    healthy_interval_secs: u64,

    #[serde(default = "default_degraded_interval_secs")]
    degraded_interval_secs: u64,

    #[serde(default = "default_probe_timeout_secs")]
    probe_timeout_secs: u64,
}

impl TryFrom<RawMonitorConfig> for MonitorConfig {
    type Error = ConfigError;

    fn try_from(raw: RawMonitorConfig) -> Result<Self, Self::Error> {
        let target_url = raw
            .target_url
            .or(raw.api_url)
            .ok_or(ConfigError::MissingField("target_url"))?;
        let webhook_url = raw
            .webhook_url
            .or(raw.slack_webhook_url)
            .ok_or(ConfigError::MissingField("webhook_url"))?;

        let mut config = MonitorConfig::new(target_url, webhook_url);
        config.healthy_interval_secs = raw.healthy_interval_secs;
        config.degraded_interval_secs = raw.degraded_interval_secs;
        config.probe_timeout_secs = raw.probe_timeout_secs;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("missing {0} (or its older name)")]
    MissingField(&'static str),

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("{field} must use http or https, got {scheme}")]
    UnsupportedScheme { field: &'static str, scheme: String },
}

fn default_healthy_interval_secs() -> u64 {
    60
}

fn default_degraded_interval_secs() -> u64 {
    5
}

fn default_probe_timeout_secs() -> u64 {
    10
}

impl MonitorConfig {
    pub fn new(target_url: Url, webhook_url: Url) -> Self {
        Self {
            target_url,
            webhook_url,
            healthy_interval_secs: default_healthy_interval_secs(),
            degraded_interval_secs: default_degraded_interval_secs(),
            probe_timeout_secs: default_probe_timeout_secs(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, url) in [("target_url", &self.target_url), ("webhook_url", &self.webhook_url)] {
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ConfigError::UnsupportedScheme {
                    field,
                    scheme: url.scheme().to_string(),
                });
            }
        }

        if self.healthy_interval_secs == 0 {
            return Err(ConfigError::ZeroDuration("healthy_interval_secs"));
        }
        if self.degraded_interval_secs == 0 {
            return Err(ConfigError::ZeroDuration("degraded_interval_secs"));
        }
        if self.probe_timeout_secs == 0 {
            return Err(ConfigError::ZeroDuration("probe_timeout_secs"));
        }

        Ok(())
    }

    pub fn healthy_interval(&self) -> Duration {
        Duration::from_secs(self.healthy_interval_secs)
    }

    pub fn degraded_interval(&self) -> Duration {
        Duration::from_secs(self.degraded_interval_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}
