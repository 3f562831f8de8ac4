use reqwest::Client;
use salesdash_core::InsightsConfig;
use serde::{Deserialize, Serialize};

use super::{http_client, CompletionBackend};
use crate::error::InsightError;
use crate::prompt::system_directive;

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 2000;

/// OpenAI-compatible chat-completions backend.
pub struct HostedBackend {
    client: Client,
    url: String,
    api_key: String,
    model: String,
    system_prompt: String,
}

impl std::fmt::Debug for HostedBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedBackend")
            .field("url", &self.url)
            .field("api_key", &"[redacted]")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl HostedBackend {
    /// # Errors
    ///
    /// Returns [`InsightError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &InsightsConfig) -> Result<Self, InsightError> {
        Ok(Self {
            client: http_client(config.request_timeout_secs)?,
            url: config.api_url.clone(),
            api_key: config.api_key.clone().unwrap_or_default(),
            model: config.model.clone(),
            system_prompt: system_directive(&config.response_language),
        })
    }

    fn extract_content(body: &str) -> Result<String, InsightError> {
        let parsed: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
            InsightError::MalformedResponse(format!("chat completion body: {e}"))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                InsightError::MalformedResponse(
                    "chat completion has no choices[0].message.content".to_string(),
                )
            })
    }
}

impl CompletionBackend for HostedBackend {
    fn model_label(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, InsightError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        tracing::debug!(url = %self.url, model = %self.model, "sending chat completion request");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InsightError::Status { status });
        }

        let body = response.text().await?;
        Self::extract_content(&body)
    }
}
