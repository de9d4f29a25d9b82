use serde::{Deserialize, Serialize};

/// Request body sent to the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub topic: String,
}

impl AnalysisRequest {
    /// Builds a request from raw form input. Returns `None` when the input is
    /// empty after trimming.
    pub fn from_input(raw: &str) -> Option<Self> {
        let topic = raw.trim();
        if topic.is_empty() {
            None
        } else {
            Some(Self {
                topic: topic.to_string(),
            })
        }
    }
}

/// Response body of a successful analysis. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub analysis: Option<String>,
    /// A single source line, not a list.
    #[serde(default)]
    pub sources: Option<String>,
    /// Some services report "soft" failures with a success status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Inline piece of an analysis paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Strong(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub spans: Vec<Span>,
}

/// What the analysis area should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisContent {
    /// Plain text, never interpreted as markup.
    Placeholder(String),
    Paragraphs(Vec<Paragraph>),
}

/// Result of one call to `FormController::handle_submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty topic; nothing happened.
    Skipped,
    Displayed { token: u64 },
    Failed { token: u64, message: String },
    /// A newer submission was issued while this one was in flight.
    Discarded { token: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_input_trims() {
        let request = AnalysisRequest::from_input("  climate policy \n").unwrap();
        assert_eq!(request.topic, "climate policy");
        assert!(AnalysisRequest::from_input(" \t\n ").is_none());
        assert!(AnalysisRequest::from_input("").is_none());
    }

    #[test]
    fn test_result_tolerates_missing_and_unknown_fields() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"analysis": "A", "title": "ignored"}"#).unwrap();
        assert_eq!(result.summary, None);
        assert_eq!(result.analysis.as_deref(), Some("A"));
        assert_eq!(result.sources, None);
    }
}
