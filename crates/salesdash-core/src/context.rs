use serde::Serialize;

use crate::calendar::period_label;
use crate::sales::{BrandRecord, WeeklyData};

pub const ALL_BRANDS_LABEL: &str = "all";
pub const DEFAULT_PERIOD_LABEL: &str = "current period";

/// Labels that frame a single insight request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisContext {
    pub brand: String,
    pub period: String,
    pub current_week: u32,
}

impl Default for AnalysisContext {
    fn default() -> Self {
        Self {
            brand: ALL_BRANDS_LABEL.to_string(),
            period: DEFAULT_PERIOD_LABEL.to_string(),
            current_week: 0,
        }
    }
}

impl AnalysisContext {
    /// Context for one brand: the current week is the number of weeks reported.
    #[must_use]
    pub fn for_brand(data: &WeeklyData, brand_key: &str, record: &BrandRecord) -> Self {
        Self {
            brand: brand_key.to_string(),
            period: period_label(data.year, data.month),
            current_week: u32::try_from(record.weeks_reported()).unwrap_or(u32::MAX),
        }
    }

    /// Context for the all-brands summary. The week is left at 0.
    #[must_use]
    pub fn overall(data: &WeeklyData) -> Self {
        Self {
            brand: ALL_BRANDS_LABEL.to_string(),
            period: period_label(data.year, data.month),
            current_week: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> WeeklyData {
        serde_json::from_value(json!({
            "year": 2025,
            "month": 3,
            "brands": {
                "MLB": { "weekly": { "1": { "sales": 1 }, "2": { "sales": 2 }, "3": {} } }
            }
        }))
        .unwrap()
    }

    #[test]
    fn default_context_is_all_brands_week_zero() {
        let ctx = AnalysisContext::default();
        assert_eq!(ctx.brand, "all");
        assert_eq!(ctx.period, "current period");
        assert_eq!(ctx.current_week, 0);
    }

    #[test]
    fn brand_context_counts_weekly_entries() {
        let data = sample();
        let record = data.brand("MLB").unwrap();
        let ctx = AnalysisContext::for_brand(&data, "MLB", record);
        assert_eq!(ctx.brand, "MLB");
        assert_eq!(ctx.period, "March 2025");
        assert_eq!(ctx.current_week, 3);
    }

    #[test]
    fn overall_context_fixes_week_at_zero() {
        let ctx = AnalysisContext::overall(&sample());
        assert_eq!(ctx.brand, "all");
        assert_eq!(ctx.period, "March 2025");
        assert_eq!(ctx.current_week, 0);
    }
}
