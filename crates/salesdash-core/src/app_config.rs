use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_LOCAL_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_LOCAL_MODEL: &str = "llama2";
pub const DEFAULT_RESPONSE_LANGUAGE: &str = "Korean";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory holding processed `<YYYY><MM>_week<N>.json` files.
    pub data_dir: PathBuf,
    pub insights: InsightsConfig,
}

/// Settings for the insight backends.
///
/// Built once at startup and never mutated; the agent constructed from it
/// owns whichever backend `use_local` selects.
#[derive(Clone)]
pub struct InsightsConfig {
    /// Bearer credential for the hosted chat-completions API.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub use_local: bool,
    pub local_url: String,
    pub local_model: String,
    /// Language the model is asked to answer in.
    pub response_language: String,
    pub request_timeout_secs: u64,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            use_local: false,
            local_url: DEFAULT_LOCAL_URL.to_string(),
            local_model: DEFAULT_LOCAL_MODEL.to_string(),
            response_language: DEFAULT_RESPONSE_LANGUAGE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for InsightsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("use_local", &self.use_local)
            .field("local_url", &self.local_url)
            .field("local_model", &self.local_model)
            .field("response_language", &self.response_language)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
