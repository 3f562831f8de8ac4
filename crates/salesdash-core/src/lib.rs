pub mod app_config;
pub mod calendar;
pub mod config;
pub mod context;
pub mod sales;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, InsightsConfig};
pub use calendar::{period_label, week_of_month, weekly_data_path};
pub use config::{load_app_config, load_app_config_from_env};
pub use context::AnalysisContext;
pub use sales::{
    load_weekly_data, summarize, BrandRecord, BrandSummary, OverallSummary, WeeklyData,
    WeeklyRecord,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors raised while reading a processed weekly data file.
#[derive(Debug, Error)]
pub enum SalesDataError {
    #[error("failed to read weekly data file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse weekly data file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
