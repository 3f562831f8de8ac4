//! Completion backends: the hosted chat-completions API and a local model server.
//!
//! Both expose the same `complete(prompt) -> text` operation so the agent
//! never branches on which one it holds.

mod hosted;
mod local;

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use salesdash_core::InsightsConfig;

use crate::error::InsightError;

pub use hosted::HostedBackend;
pub use local::{LocalBackend, LOCAL_MODEL_LABEL};

const USER_AGENT: &str = "salesdash/0.1 (sales-insights)";
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Something that turns a prompt into generated text.
pub trait CompletionBackend: Send + Sync {
    /// Model identifier reported alongside successful insights.
    fn model_label(&self) -> &str;

    /// Send `prompt` in a single request and return the generated text.
    fn complete(&self, prompt: &str)
        -> impl Future<Output = Result<String, InsightError>> + Send;
}

/// The backend selected by configuration.
#[derive(Debug)]
pub enum Backend {
    Hosted(HostedBackend),
    Local(LocalBackend),
}

impl Backend {
    /// Build whichever backend `config.use_local` selects.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::Http`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &InsightsConfig) -> Result<Self, InsightError> {
        if config.use_local {
            Ok(Backend::Local(LocalBackend::new(config)?))
        } else {
            Ok(Backend::Hosted(HostedBackend::new(config)?))
        }
    }
}

impl CompletionBackend for Backend {
    fn model_label(&self) -> &str {
        match self {
            Backend::Hosted(b) => b.model_label(),
            Backend::Local(b) => b.model_label(),
        }
    }

    async fn complete(&self, prompt: &str) -> Result<String, InsightError> {
        match self {
            Backend::Hosted(b) => b.complete(prompt).await,
            Backend::Local(b) => b.complete(prompt).await,
        }
    }
}

fn http_client(timeout_secs: u64) -> Result<Client, InsightError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_selects_hosted_by_default() {
        let config = InsightsConfig {
            api_key: Some("k".to_string()),
            ..InsightsConfig::default()
        };
        let backend = Backend::from_config(&config).unwrap();
        assert!(matches!(backend, Backend::Hosted(_)));
        assert_eq!(backend.model_label(), "gpt-4");
    }

    #[test]
    fn from_config_selects_local_when_flagged() {
        let config = InsightsConfig {
            use_local: true,
            ..InsightsConfig::default()
        };
        let backend = Backend::from_config(&config).unwrap();
        assert!(matches!(backend, Backend::Local(_)));
        assert_eq!(backend.model_label(), "local");
    }
}
