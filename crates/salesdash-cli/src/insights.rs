//! Insight command handlers for the CLI.
//!
//! This is the composition root: it loads the weekly data file, builds the
//! agent from configuration and prints whatever result comes back.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, NaiveDate};
use salesdash_core::{load_weekly_data, week_of_month, weekly_data_path, AppConfig, WeeklyData};
use salesdash_insights::{InsightResult, InsightsAgent};

/// Pick the data file: the explicit `--data` path, or this week's file in the
/// configured data directory.
pub(crate) fn resolve_data_path(
    data_dir: &Path,
    explicit: Option<&Path>,
    today: NaiveDate,
) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => weekly_data_path(data_dir, today.year(), today.month(), week_of_month(today)),
    }
}

fn load_data(config: &AppConfig, explicit: Option<&Path>) -> anyhow::Result<WeeklyData> {
    let path = resolve_data_path(&config.data_dir, explicit, Local::now().date_naive());
    tracing::info!(path = %path.display(), "loading weekly data");
    let data = load_weekly_data(&path)?;
    tracing::info!(
        year = data.year,
        month = data.month,
        brands = data.brands.len(),
        "weekly data loaded"
    );
    Ok(data)
}

/// Generate and print insights for one brand.
///
/// # Errors
///
/// Returns an error if the data file cannot be loaded, the agent cannot be
/// built, or the insight request fails.
pub(crate) async fn run_brand_insights(
    config: &AppConfig,
    brand: &str,
    data: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let data = load_data(config, data)?;
    let agent = InsightsAgent::from_config(&config.insights)?;
    let result = agent.generate_brand_insights(&data, brand).await;
    emit(&result, json)
}

/// Generate and print insights across all brands.
///
/// # Errors
///
/// Returns an error if the data file cannot be loaded, the agent cannot be
/// built, or the insight request fails.
pub(crate) async fn run_overall_insights(
    config: &AppConfig,
    data: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let data = load_data(config, data)?;
    let agent = InsightsAgent::from_config(&config.insights)?;
    let result = agent.generate_overall_insights(&data).await;
    emit(&result, json)
}

pub(crate) fn emit(result: &InsightResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    }

    match result {
        InsightResult::Success { insight, model } => {
            tracing::info!(model = %model, "insight generated");
            if !json {
                println!("{insight}");
            }
            Ok(())
        }
        InsightResult::Failure { kind, error } => {
            anyhow::bail!("insight generation failed ({kind}): {error}")
        }
    }
}
