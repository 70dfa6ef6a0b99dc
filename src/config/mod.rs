// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<MonitorConfig> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .context("Failed to read config file")?;

    let config = parse_config(path, &contents)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from the process environment, reading a `.env` file first
/// when one is present.
///
/// Accepts both `TARGET_URL`/`WEBHOOK_URL` and the older `API_URL`/`SLACK_WEBHOOK_URL`;
/// the newer names take precedence.
pub fn load_from_env() -> Result<MonitorConfig> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    from_environment(::config::Environment::default())
}

fn from_environment(environment: ::config::Environment) -> Result<MonitorConfig> {
    let config: MonitorConfig = ::config::Config::builder()
        .add_source(environment.try_parsing(true))
        .build()
        .context("Failed to read environment")?
        .try_deserialize()
        .context("Failed to parse configuration from environment")?;

    config.validate()?;
    Ok(config)
}

fn parse_config(path: &Path, contents: &str) -> Result<MonitorConfig> {
    let extension = path.extension().and_then(|s| s.to_str());
    let config = if extension == Some("yaml") || extension == Some("yml") {
        serde_yaml::from_str(contents).context("Failed to parse YAML config")?
    } else {
        serde_json::from_str(contents).context("Failed to parse JSON config")?
    };
    Ok(config)
}
