use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::{FailureKind, InsightError};

/// Uniform outcome of every insight request.
///
/// Serializes to the shape the dashboard reads:
/// `{"success": true, "insight": ..., "model": ...}` or
/// `{"success": false, "kind": ..., "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightResult {
    Success { insight: String, model: String },
    Failure { kind: FailureKind, error: String },
}

impl InsightResult {
    /// Wrap a backend reply. The generated text is passed through untouched.
    #[must_use]
    pub fn from_completion(result: Result<String, InsightError>, model: &str) -> Self {
        match result {
            Ok(insight) => InsightResult::Success {
                insight,
                model: model.to_string(),
            },
            Err(e) => e.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, InsightResult::Success { .. })
    }

    #[must_use]
    pub fn insight(&self) -> Option<&str> {
        match self {
            InsightResult::Success { insight, .. } => Some(insight),
            InsightResult::Failure { .. } => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            InsightResult::Success { .. } => None,
            InsightResult::Failure { error, .. } => Some(error),
        }
    }
}

impl From<InsightError> for InsightResult {
    fn from(e: InsightError) -> Self {
        InsightResult::Failure {
            kind: e.kind(),
            error: e.to_string(),
        }
    }
}

impl Serialize for InsightResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            InsightResult::Success { insight, model } => {
                let mut s = serializer.serialize_struct("InsightResult", 3)?;
                s.serialize_field("success", &true)?;
                s.serialize_field("insight", insight)?;
                s.serialize_field("model", model)?;
                s.end()
            }
            InsightResult::Failure { kind, error } => {
                let mut s = serializer.serialize_struct("InsightResult", 3)?;
                s.serialize_field("success", &false)?;
                s.serialize_field("kind", kind)?;
                s.serialize_field("error", error)?;
                s.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_keeps_text_verbatim() {
        let text = "  ## Trend\n- up 12%\n\n".to_string();
        let result = InsightResult::from_completion(Ok(text.clone()), "gpt-4");
        assert_eq!(result.insight(), Some(text.as_str()));
        assert!(result.is_success());
        assert!(result.error().is_none());
    }

    #[test]
    fn failure_carries_kind_and_message() {
        let result = InsightResult::from_completion(
            Err(InsightError::BrandNotFound("X".to_string())),
            "gpt-4",
        );
        assert_eq!(
            result,
            InsightResult::Failure {
                kind: FailureKind::Lookup,
                error: "brand data not found: X".to_string(),
            }
        );
    }

    #[test]
    fn serializes_success_for_dashboard() {
        let result = InsightResult::Success {
            insight: "X".to_string(),
            model: "gpt-4".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "success": true, "insight": "X", "model": "gpt-4" })
        );
    }

    #[test]
    fn serializes_failure_for_dashboard() {
        let result = InsightResult::Failure {
            kind: FailureKind::BackendStatus,
            error: "API error: 500 Internal Server Error".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "success": false,
                "kind": "backend_status",
                "error": "API error: 500 Internal Server Error"
            })
        );
    }
}
