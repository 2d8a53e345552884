//! Candidate scoring for the batch runner
//!
//! With the `parallel` feature, candidates are scored on the rayon pool.
//! Results keep input order, so the ranker's first-maximum tie-break holds.

use award_match_core::sources::AwardSearch;
use award_match_core::{AggregatedMatch, Candidate, CandidateRanker, Plan, ScoredCandidate};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Score every eligible candidate, in input order.
#[cfg(feature = "parallel")]
pub fn score_all(
    ranker: &CandidateRanker,
    plan: &Plan,
    candidates: &[Candidate],
) -> Vec<ScoredCandidate> {
    let scorer = ranker.scorer();
    candidates
        .par_iter()
        .filter_map(|c| scorer.score_candidate(plan, c))
        .collect()
}

/// Score every eligible candidate, in input order.
#[cfg(not(feature = "parallel"))]
pub fn score_all(
    ranker: &CandidateRanker,
    plan: &Plan,
    candidates: &[Candidate],
) -> Vec<ScoredCandidate> {
    ranker.score_all(plan, candidates)
}

/// Search for `plan`'s awards and rank them.
pub fn match_plan(
    ranker: &CandidateRanker,
    plan: &Plan,
    search: &dyn AwardSearch,
) -> Option<AggregatedMatch> {
    let keywords = ranker.keywords(plan);
    let candidates = search.search(&keywords);
    debug!(keywords = %keywords, candidates = candidates.len(), "award search");
    ranker.find_best_scored(score_all(ranker, plan, &candidates))
}
