//! HTTP client helpers for tests.

use plagcheck::gateway::{ErrorResponse, HealthResponse, ReadyResponse};
use plagcheck::scoring::ScoringResult;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    pub async fn check(&self, text: &str) -> Result<ScoringResult, TestClientError> {
        self.check_json(serde_json::json!({ "text": text })).await
    }

    pub async fn check_json(
        &self,
        body: serde_json::Value,
    ) -> Result<ScoringResult, TestClientError> {
        let resp = self.client.post(self.url("/check")).json(&body).send().await?;
        Self::parse_check_response(resp).await
    }

    pub async fn check_raw(&self, body: &'static str) -> Result<ScoringResult, TestClientError> {
        let resp = self
            .client
            .post(self.url("/check"))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;
        Self::parse_check_response(resp).await
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/healthz")).send().await?;
        Ok(resp.error_for_status()?.json().await?)
    }

    pub async fn ready(&self) -> Result<ReadyResponse, TestClientError> {
        let resp = self.client.get(self.url("/ready")).send().await?;
        Ok(resp.error_for_status()?.json().await?)
    }

    async fn parse_check_response(resp: reqwest::Response) -> Result<ScoringResult, TestClientError> {
        match resp.status().as_u16() {
            200 => Ok(resp.json().await?),
            400 => Err(TestClientError::BadRequest(resp.json().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Bad request: {}", .0.error)]
    BadRequest(ErrorResponse),
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),
}
