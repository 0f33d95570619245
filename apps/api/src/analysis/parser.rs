//! Locates and decodes the JSON payload inside the model's free-text reply.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::analysis::{AnalysisFailure, AnalysisOutcome, AnalysisReport};

/// Matches a markdown-fenced ```json { ... } ``` block, non-greedy, with the
/// dot spanning newlines.
static JSON_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").expect("fence pattern is valid")
});

/// Parses the model's raw reply into an [`AnalysisOutcome`].
///
/// Strategy: if the reply contains a ```json fenced block, decode exactly the
/// fenced object; otherwise decode the whole reply directly. This function
/// never errors — an undecodable reply becomes a tagged failure carrying the
/// raw text unmodified, so the handler can report it for diagnosis.
pub fn parse_reply(raw: &str) -> AnalysisOutcome {
    let payload = JSON_FENCE_RE
        .captures(raw)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .unwrap_or(raw);

    match serde_json::from_str::<AnalysisReport>(payload) {
        Ok(report) => AnalysisOutcome::Report(report),
        Err(_) => AnalysisOutcome::Failure(AnalysisFailure {
            error: "Failed to parse AI response as JSON".to_string(),
            raw_response: Some(raw.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FENCED_REPLY: &str = "Sure! Here is the assessment you asked for:\n\
        ```json\n\
        {\n  \"match_percentage\": 82,\n  \"strengths\": [\"Python\", \"Backend\"],\n  \"weaknesses\": [\"No cloud certs\"]\n}\n\
        ```\n\
        Let me know if you need anything else.";

    fn expect_report(outcome: AnalysisOutcome) -> AnalysisReport {
        match outcome {
            AnalysisOutcome::Report(report) => report,
            AnalysisOutcome::Failure(failure) => panic!("expected report, got {failure:?}"),
        }
    }

    fn expect_failure(outcome: AnalysisOutcome) -> AnalysisFailure {
        match outcome {
            AnalysisOutcome::Failure(failure) => failure,
            AnalysisOutcome::Report(report) => panic!("expected failure, got {report:?}"),
        }
    }

    #[test]
    fn test_fenced_block_is_extracted_ignoring_prose() {
        let report = expect_report(parse_reply(FENCED_REPLY));
        assert_eq!(report.match_percentage, 82);
        assert_eq!(report.strengths, vec!["Python", "Backend"]);
        assert_eq!(report.weaknesses, vec!["No cloud certs"]);
    }

    #[test]
    fn test_bare_json_decodes_directly() {
        let raw = r#"{"match_percentage": 50, "strengths": ["a", "b"], "weaknesses": ["c", "d"]}"#;
        let report = expect_report(parse_reply(raw));
        assert_eq!(report.match_percentage, 50);
    }

    #[test]
    fn test_undecodable_reply_preserves_raw_text() {
        let raw = "I'm sorry, I can't produce JSON for that.";
        let failure = expect_failure(parse_reply(raw));
        assert_eq!(failure.error, "Failed to parse AI response as JSON");
        assert_eq!(failure.raw_response.as_deref(), Some(raw));
    }

    #[test]
    fn test_fenced_block_with_bad_json_is_a_failure() {
        let raw = "```json\n{\"match_percentage\": }\n```";
        let failure = expect_failure(parse_reply(raw));
        assert_eq!(failure.raw_response.as_deref(), Some(raw));
    }

    #[test]
    fn test_fence_match_is_non_greedy() {
        // Two fenced blocks: only the first object is decoded.
        let raw = "```json\n{\"match_percentage\": 10, \"strengths\": [\"x\", \"y\"], \"weaknesses\": [\"z\", \"w\"]}\n```\n\
            and also\n\
            ```json\n{\"unrelated\": true}\n```";
        let report = expect_report(parse_reply(raw));
        assert_eq!(report.match_percentage, 10);
    }
}
