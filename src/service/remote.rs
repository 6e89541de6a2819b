// Client for the remote symptom analysis service.
use crate::config::RemoteConfig;
use crate::model::{AnalysisResult, RemoteError};
use crate::service::traits::SymptomAnalyzer;
use crate::utils::join_url;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    symptoms: &'a str,
}

pub struct RemoteAnalyzer {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl RemoteAnalyzer {
    pub fn new(cfg: &RemoteConfig) -> Result<Self, RemoteError> {
        let timeout = Duration::from_secs(cfg.timeout_seconds);
        let client = Client::builder()
            .user_agent(concat!("symptom-triage/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Http(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: join_url(&cfg.base_url, "analyze"),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl SymptomAnalyzer for RemoteAnalyzer {
    async fn analyze(&self, symptoms: &str) -> Result<AnalysisResult, RemoteError> {
        info!("📤 Posting symptoms to {}", self.endpoint);
        let request = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest { symptoms })
            .send();

        let response = match timeout(self.timeout, request).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) if e.is_timeout() => return Err(RemoteError::Timeout),
            Ok(Err(e)) => return Err(RemoteError::Http(e.to_string())),
            Err(_) => return Err(RemoteError::Timeout),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RemoteError::Http(e.to_string()))?;
        debug!("Remote response [{}]: {}", status, body);

        serde_json::from_str(&body).map_err(|e| RemoteError::Decode(e.to_string()))
    }
}
