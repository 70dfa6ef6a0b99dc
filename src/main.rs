// src/main.rs
use anyhow::{Context, Result};
use tokio::signal;
use tokio::sync::watch;
use tracing::info;

use uptime_monitor::{
    config::{self, MonitorConfig},
    health::HttpProber,
    monitor::{Controller, IntervalTimer},
    notify::WebhookNotifier,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("uptime_monitor=info".parse()?),
        )
        .init();

    // Config file path is optional; fall back to the environment (and .env)
    let config: MonitorConfig = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            config::load_config(&path).await?
        }
        None => {
            info!("Loading configuration from environment");
            config::load_from_env()?
        }
    };

    let prober = HttpProber::new(config.target_url.clone(), config.probe_timeout())
        .context("Failed to create prober")?;
    let notifier = WebhookNotifier::new(config.webhook_url.clone());
    let timer = IntervalTimer::new(config.healthy_interval());

    info!("🔍 Monitoring {}", prober.target());

    let mut controller = Controller::new(
        Box::new(prober),
        Box::new(notifier),
        Box::new(timer),
        config.healthy_interval(),
        config.degraded_interval(),
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    controller.run(shutdown_rx).await;

    info!("Monitoring interrupted, exiting");
    Ok(())
}

// Graceful shutdown handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
