use serde::{Deserialize, Serialize};

/// Structured compatibility assessment decoded from the model's reply.
/// Returned verbatim as the 200 response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub match_percentage: u32, // 0 – 100
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Tagged failure: the pipeline ran to completion but its output was unusable.
/// Distinct from a raised error so the handler can tell the two apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub error: String,
    /// The model's reply, untouched, when parsing was the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

/// Outcome of one run of the AI pipeline.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    Report(AnalysisReport),
    Failure(AnalysisFailure),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_deserializes_model_shaped_json() {
        let json = r#"{
            "match_percentage": 82,
            "strengths": ["Python", "Backend"],
            "weaknesses": ["No cloud certs"]
        }"#;

        let report: AnalysisReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.match_percentage, 82);
        assert_eq!(report.strengths, vec!["Python", "Backend"]);
        assert_eq!(report.weaknesses, vec!["No cloud certs"]);
    }

    #[test]
    fn test_failure_omits_raw_response_when_absent() {
        let failure = AnalysisFailure {
            error: "boom".to_string(),
            raw_response: None,
        };
        let json = serde_json::to_value(&failure).unwrap();
        assert!(json.get("raw_response").is_none());

        let failure = AnalysisFailure {
            error: "boom".to_string(),
            raw_response: Some("not json".to_string()),
        };
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["raw_response"], "not json");
    }
}
