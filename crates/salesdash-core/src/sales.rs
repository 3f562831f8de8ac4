//! Weekly sales data as produced by the weekly processing job, plus the
//! per-brand and overall aggregation fed to the insight prompts.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::SalesDataError;

/// Sales and forecast read from one week's entry.
///
/// Non-numeric or absent values read as `None` and count as zero when summed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeeklyRecord {
    pub sales: Option<f64>,
    pub forecast: Option<f64>,
}

impl WeeklyRecord {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            sales: value.get("sales").and_then(Value::as_f64),
            forecast: value.get("forecast").and_then(Value::as_f64),
        }
    }
}

/// Raw data for one brand exactly as the processing job wrote it.
///
/// The record is kept as JSON so it can be forwarded to the model unchanged;
/// `weekly` is only interpreted for aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandRecord(Value);

impl From<Value> for BrandRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl BrandRecord {
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Weekly entries keyed by week. A missing or `null` `weekly` is empty.
    pub fn weekly(&self) -> impl Iterator<Item = (&str, WeeklyRecord)> {
        self.0
            .get("weekly")
            .and_then(Value::as_object)
            .into_iter()
            .flatten()
            .map(|(week, value)| (week.as_str(), WeeklyRecord::from_value(value)))
    }

    /// Sum every week's sales and forecast. Missing values count as zero.
    #[must_use]
    pub fn summary(&self) -> BrandSummary {
        self.weekly().fold(BrandSummary::default(), |mut acc, (_, week)| {
            acc.sales += week.sales.unwrap_or(0.0);
            acc.forecast += week.forecast.unwrap_or(0.0);
            acc
        })
    }

    /// Number of weeks with data so far.
    #[must_use]
    pub fn weeks_reported(&self) -> usize {
        self.weekly().count()
    }
}

/// Contents of one processed `<YYYY><MM>_week<N>.json` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyData {
    pub year: i32,
    pub month: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brands: BTreeMap<String, BrandRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WeeklyData {
    #[must_use]
    pub fn brand(&self, key: &str) -> Option<&BrandRecord> {
        self.brands.get(key)
    }

    #[must_use]
    pub fn summary(&self) -> OverallSummary {
        summarize(&self.brands)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandSummary {
    pub sales: f64,
    pub forecast: f64,
}

/// Month-to-date totals across every brand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallSummary {
    pub total_sales: f64,
    pub total_forecast: f64,
    pub brands: BTreeMap<String, BrandSummary>,
}

/// Aggregate raw brand records into an [`OverallSummary`].
///
/// Brands with no weekly entries contribute zero and still appear in the
/// per-brand map.
#[must_use]
pub fn summarize(brands: &BTreeMap<String, BrandRecord>) -> OverallSummary {
    let mut summary = OverallSummary::default();

    for (key, record) in brands {
        let brand = record.summary();
        summary.total_sales += brand.sales;
        summary.total_forecast += brand.forecast;
        summary.brands.insert(key.clone(), brand);
    }

    summary
}

/// Read and parse a processed weekly data file.
///
/// # Errors
///
/// Returns [`SalesDataError::Io`] if the file cannot be read and
/// [`SalesDataError::Parse`] if it is not valid weekly data JSON.
pub fn load_weekly_data(path: &Path) -> Result<WeeklyData, SalesDataError> {
    let content = std::fs::read_to_string(path).map_err(|e| SalesDataError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| SalesDataError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}
