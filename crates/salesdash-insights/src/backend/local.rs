use reqwest::Client;
use salesdash_core::InsightsConfig;
use serde::{Deserialize, Serialize};

use super::{http_client, CompletionBackend};
use crate::error::InsightError;

/// Model label reported for every insight produced by the local server.
pub const LOCAL_MODEL_LABEL: &str = "local";

/// Ollama-style `/api/generate` backend.
#[derive(Debug)]
pub struct LocalBackend {
    client: Client,
    url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

impl LocalBackend {
    /// # Errors
    ///
    /// Returns [`InsightError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &InsightsConfig) -> Result<Self, InsightError> {
        Ok(Self {
            client: http_client(config.request_timeout_secs)?,
            url: config.local_url.clone(),
            model: config.local_model.clone(),
        })
    }
}

impl CompletionBackend for LocalBackend {
    fn model_label(&self) -> &str {
        LOCAL_MODEL_LABEL
    }

    async fn complete(&self, prompt: &str) -> Result<String, InsightError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        tracing::debug!(url = %self.url, model = %self.model, "sending local generate request");

        let response = self.client.post(&self.url).json(&request).send().await?;

        // The local server's status is not checked; a body without
        // `response` is what surfaces an error.
        let status = response.status();
        let body = response.text().await?;
        let parsed: GenerateResponse = serde_json::from_str(&body).map_err(|e| {
            InsightError::MalformedResponse(format!("local generate body (status {status}): {e}"))
        })?;

        Ok(parsed.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_disables_streaming() {
        let request = GenerateRequest {
            model: "llama2",
            prompt: "hello",
            stream: false,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "model": "llama2", "prompt": "hello", "stream": false })
        );
    }

    #[test]
    fn uses_configured_local_model() {
        let config = InsightsConfig {
            use_local: true,
            local_model: "mistral".to_string(),
            ..InsightsConfig::default()
        };
        let backend = LocalBackend::new(&config).unwrap();
        assert_eq!(backend.model, "mistral");
        assert_eq!(backend.model_label(), "local");
    }
}
