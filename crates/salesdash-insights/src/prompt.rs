//! Prompt templates for sales insight requests.

use salesdash_core::AnalysisContext;
use serde::Serialize;

/// Section headings the model is asked to answer under, in order.
pub const DIRECTIVE_HEADINGS: [&str; 5] = [
    "Sales Trend Analysis",
    "Target Attainment Evaluation",
    "Year-over-Year Growth Analysis",
    "Risk Identification",
    "Improvement Suggestions",
];

/// System message sent ahead of every hosted-model prompt.
#[must_use]
pub fn system_directive(language: &str) -> String {
    format!(
        "You are an expert in sales data analysis. \
         Analyze the data provided and deliver practical, actionable insights. \
         Respond in {language}."
    )
}

/// Render the analysis prompt for `data` framed by `context`.
///
/// Any serializable payload is accepted; its shape is not inspected.
///
/// # Errors
///
/// Returns the `serde_json` error if `data` cannot be serialized (for example
/// a map with non-string keys).
pub fn build_prompt<T>(data: &T, context: &AnalysisContext) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(data)?;
    let [trend, target, growth, risk, improve] = DIRECTIVE_HEADINGS;

    Ok(format!(
        "\
Analyze the following sales data and derive insights:

📊 Brand: {brand}
📅 Period: {period}
📈 Current week: week {week}

Data:
{payload}

Analyze the data from the following perspectives:

1. 📈 **{trend}**
   - Week-by-week sales trend
   - Growth compared with last year
   - Projected month-end attainment

2. 🎯 **{target}**
   - Current attainment against target
   - Shortfalls and their likely causes
   - Likelihood of reaching the target

3. 📊 **{growth}**
   - Increase or decrease versus last year
   - Drivers of growth
   - Areas of concern

4. ⚠️ **{risk}**
   - Brands or channels at risk of missing target
   - Sharp downward trends
   - Unusual patterns

5. 💡 **{improve}**
   - Concrete action items
   - Improvements ranked by priority
   - Expected impact

Response format:
- Keep each section clearly separated
- Support every point with concrete figures
- Include actionable recommendations
- Use emoji to improve readability
",
        brand = context.brand,
        period = context.period,
        week = context.current_week,
    ))
}
