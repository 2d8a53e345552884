//! End-to-end matching scenarios

use award_match_core::{
    similarity, Candidate, CandidateRanker, Investigator, MatchScorer, Plan, TitleNormalizer,
    DEFAULT_AWARD_BASE_URL,
};
use pretty_assertions::assert_eq;

fn candidate(id: &str, title: &str, first: &str, last: &str, org: &str) -> Candidate {
    Candidate {
        id: id.to_string(),
        title: Some(title.to_string()),
        pi_first_name: Some(first.to_string()),
        pi_last_name: Some(last.to_string()),
        awardee_name: Some(org.to_string()),
    }
}

#[test]
fn test_eager_plan_matches_award() {
    let plan = Plan::new("EAGER: Coastal Resilience")
        .with_authors("Jane Doe | MIT, John Roe | Stanford");
    let candidates = vec![candidate("123", "Coastal Resilience", "Jane", "Doe", "MIT")];

    let normalizer = TitleNormalizer::default();
    assert_eq!(normalizer.normalize(&plan.title), "coastal resilience");
    assert_eq!(normalizer.normalize("Coastal Resilience"), "coastal resilience");

    let scorer = MatchScorer::default();
    let score = scorer.score(&plan, "Coastal Resilience", Some("Jane Doe"), Some("MIT"));
    let expected = 1.0
        + similarity("Jane Doe ", "Jane Doe")
        + similarity("John Roe ", "Jane Doe")
        + similarity(" MIT", "MIT")
        + similarity(" Stanford", "MIT");
    assert!((score - expected).abs() < 1e-12, "score {} != {}", score, expected);
    assert!(score >= 0.9);

    let award = CandidateRanker::default()
        .find_best(&plan, &candidates)
        .expect("plan should match");
    assert_eq!(award.title, "Coastal Resilience");
    assert_eq!(
        award.principal_investigators,
        vec![Investigator {
            name: "Jane Doe".into(),
            organization: "MIT".into(),
        }]
    );
    assert_eq!(award.award_id, format!("{}123", DEFAULT_AWARD_BASE_URL));
}

#[test]
fn test_collaborative_award_folds_investigators() {
    let plan = Plan::new("Collaborative Research: Coastal Study")
        .with_authors("Jane Doe | MIT, John Roe | Stanford");
    let candidates = vec![
        candidate("200", "Unrelated Glacier Survey", "Ann", "Poe", "Yale"),
        candidate("201", "Coastal Study", "Jane", "Doe", "MIT"),
        candidate("202", "Coastal Study", "John", "Roe", "Stanford"),
    ];

    let award = CandidateRanker::default()
        .find_best(&plan, &candidates)
        .expect("plan should match");

    assert_eq!(award.title, "Coastal Study");
    assert_eq!(award.principal_investigators.len(), 2);
    assert_eq!(award.principal_investigators[0].name, "Jane Doe");
    assert_eq!(award.principal_investigators[1].name, "John Roe");
}

#[test]
fn test_author_evidence_cannot_rescue_unrelated_title() {
    let plan = Plan::new("Deep Ocean Microbial Genomics").with_authors("Jane Doe|MIT");
    let candidates = vec![candidate("1", "Urban Heat Islands", "Jane", "Doe", "MIT")];

    let scorer = MatchScorer::default();
    let title_score = scorer.title_score(&plan.title, "Urban Heat Islands");
    let score = scorer.score(&plan, "Urban Heat Islands", Some("Jane Doe"), Some("MIT"));
    assert_eq!(score, title_score);

    assert_eq!(CandidateRanker::default().find_best(&plan, &candidates), None);
}

#[test]
fn test_match_serializes_with_expected_fields() {
    let plan = Plan::new("Coastal Study");
    let award = CandidateRanker::default()
        .find_best(&plan, &[candidate("9", "Coastal Study", "Jane", "Doe", "MIT")])
        .unwrap();

    let json = serde_json::to_value(&award).unwrap();
    assert_eq!(json["title"], "Coastal Study");
    assert_eq!(json["principal_investigators"][0]["name"], "Jane Doe");
    assert_eq!(json["principal_investigators"][0]["organization"], "MIT");
    assert!(json["award_id"].as_str().unwrap().ends_with("9"));
}
