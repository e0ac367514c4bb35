use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::generator::{GenerateError, GeneratedImage, ImageGenerator};

pub const WORKERS_AI_URL: &str = "https://api.cloudflare.com/client/v4";
pub const DEFAULT_MODEL: &str = "@cf/black-forest-labs/flux-1-schnell";

const USER_AGENT: &str = "Imagist/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the Cloudflare Workers AI REST API.
///
/// Generation calls are `POST {base}/accounts/{account}/ai/run/{model}` with
/// a JSON prompt body; text-to-image models answer with
/// `{"result": {"image": "<base64>"}}`.
pub struct WorkersAiGenerator {
    client: reqwest::Client,
    run_url: String,
    api_token: String,
}

impl WorkersAiGenerator {
    /// Build a client for the given account and model. `base_url` is the API
    /// root (`WORKERS_AI_URL` in production, a mock server in tests).
    pub fn new(
        base_url: &str,
        account_id: &str,
        api_token: String,
        model: &str,
    ) -> anyhow::Result<Self> {
        let base = url::Url::parse(base_url).context("invalid Workers AI base URL")?;
        let run_url = format!(
            "{}/accounts/{account_id}/ai/run/{model}",
            base.as_str().trim_end_matches('/')
        );

        let client = reqwest::ClientBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            run_url,
            api_token,
        })
    }
}

#[async_trait]
impl ImageGenerator for WorkersAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenerateError> {
        let request_body = RunRequest { prompt };

        let response = self
            .client
            .post(&self.run_url)
            .header("User-Agent", USER_AGENT)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GenerateError::Upstream(format!("Workers AI request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "(unreadable body)".to_string());
            return Err(GenerateError::Upstream(format!(
                "Workers AI returned status {status}: {body}"
            )));
        }

        let body = response.text().await.map_err(|e| {
            GenerateError::Upstream(format!("failed to read Workers AI response body: {e}"))
        })?;

        let run_response: RunResponse = serde_json::from_str(&body).map_err(|e| {
            GenerateError::InvalidPayload(format!("failed to parse Workers AI response: {e}"))
        })?;

        let image_b64 = run_response
            .result
            .and_then(|result| result.image)
            .filter(|image| !image.is_empty())
            .ok_or_else(|| {
                GenerateError::InvalidPayload("response carried no image field".to_string())
            })?;

        Ok(GeneratedImage { image_b64 })
    }
}

// --- Workers AI wire types ---

#[derive(Debug, Serialize)]
struct RunRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct RunResponse {
    result: Option<RunResult>,
}

#[derive(Debug, Deserialize)]
struct RunResult {
    image: Option<String>,
}
