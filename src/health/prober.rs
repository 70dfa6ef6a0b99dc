// src/health/prober.rs
use super::status::ProbeResult;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::{json, Value};
use tokio::time::{timeout, Duration};
use tracing::debug;
use url::Url;

/// Raised only when a probe cannot produce a result at all. Timeouts, refused
/// connections and non-200 answers are reported as unhealthy results instead.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Failed to build probe request: {0}")]
    Request(String),
}

#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self) -> Result<ProbeResult, ProbeError>;
}

pub struct HttpProber {
    target: Url,
    client: Client,
    timeout: Duration,
}

impl HttpProber {
    pub fn new(target: Url, probe_timeout: Duration) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(probe_timeout)
            .build()
            .map_err(|e| ProbeError::Client(e.to_string()))?;

        Ok(Self {
            target,
            client,
            timeout: probe_timeout,
        })
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    async fn classify(response: Response) -> ProbeResult {
        let status_code = response.status().as_u16();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return ProbeResult::failure(format!("Failed to read response body: {}", e)),
        };

        let payload = serde_json::from_str::<Value>(&text)
            .unwrap_or_else(|_| json!({ "status_code": status_code, "text": text }));

        ProbeResult::from_response(status_code, payload)
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self) -> Result<ProbeResult, ProbeError> {
        debug!("Probing {}", self.target);

        let result = timeout(self.timeout, self.client.get(self.target.clone()).send()).await;

        match result {
            Ok(Ok(response)) => Ok(Self::classify(response).await),
            Ok(Err(e)) if e.is_builder() => Err(ProbeError::Request(e.to_string())),
            Ok(Err(e)) => Ok(ProbeResult::failure(e.to_string())),
            Err(_) => Ok(ProbeResult::failure(format!(
                "Request timeout after {:?}",
                self.timeout
            ))),
        }
    }
}
