//! JSON entry point for callers that exchange records as JSON
//! (the award search returns JSON, and the DMP service accepts it).

use serde::{Deserialize, Serialize};

use crate::ranker::CandidateRanker;
use crate::types::{AggregatedMatch, Candidate, Plan};

/// Input for [`find_best_json`].
#[derive(Debug, Deserialize)]
pub struct MatchInput {
    pub plan: Plan,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Output of [`find_best_json`]. `award` is `null` when nothing matched.
#[derive(Debug, Serialize)]
pub struct MatchOutput {
    pub award: Option<AggregatedMatch>,
    pub candidates: usize,
}

/// Deserialize a plan and its candidates, rank them, serialize the result.
///
/// Malformed input produces `{"error": "..."}` rather than a failure.
pub fn find_best_json(ranker: &CandidateRanker, input: &str) -> String {
    let parsed: MatchInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return error_json(format!("invalid match input: {}", e)),
    };

    let award = ranker.find_best(&parsed.plan, &parsed.candidates);
    let output = MatchOutput {
        award,
        candidates: parsed.candidates.len(),
    };

    match serde_json::to_string(&output) {
        Ok(json) => json,
        Err(e) => error_json(format!("serialization failed: {}", e)),
    }
}

fn error_json(message: String) -> String {
    serde_json::json!({ "error": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn run(input: &str) -> Value {
        serde_json::from_str(&find_best_json(&CandidateRanker::default(), input)).unwrap()
    }

    #[test]
    fn test_match_json() {
        let input = r#"{
            "plan": {"title": "EAGER: Coastal Resilience", "authors": "Jane Doe | MIT"},
            "candidates": [
                {"id": "123", "title": "Coastal Resilience", "piFirstName": "Jane",
                 "piLastName": "Doe", "awardeeName": "MIT"}
            ]
        }"#;
        let out = run(input);
        assert_eq!(out["candidates"], 1);
        assert_eq!(out["award"]["title"], "Coastal Resilience");
    }

    #[test]
    fn test_no_match_is_null() {
        let input = r#"{"plan": {"title": "Coastal Resilience"}}"#;
        let out = run(input);
        assert!(out["award"].is_null());
        assert_eq!(out["candidates"], 0);
    }

    #[test]
    fn test_invalid_input() {
        let out = run("{not json");
        assert!(out["error"].as_str().unwrap().starts_with("invalid match input"));
    }
}
