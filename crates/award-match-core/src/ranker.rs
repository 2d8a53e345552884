//! Candidate ranking and co-investigator aggregation
//!
//! The award search returns one record per PI, so a collaborative award with
//! three investigators shows up three times under the same title. After scoring,
//! the best record decides *which* award matched; every other accepted record
//! with the exact same raw title is folded into the same result.

use tracing::{debug, info};

use crate::config::{MatchConfig, ACCEPTANCE_THRESHOLD};
use crate::scorer::MatchScorer;
use crate::sources::AwardSearch;
use crate::types::{AggregatedMatch, Candidate, Investigator, Plan, ScoredCandidate};

/// Whether a combined score clears the acceptance threshold (inclusive).
#[inline]
pub fn is_accepted(score: f64) -> bool {
    score >= ACCEPTANCE_THRESHOLD
}

/// Picks the award, if any, that funded a plan.
#[derive(Debug, Clone, Default)]
pub struct CandidateRanker {
    scorer: MatchScorer,
    config: MatchConfig,
}

impl CandidateRanker {
    pub fn new(scorer: MatchScorer, config: MatchConfig) -> Self {
        Self { scorer, config }
    }

    pub fn with_config(config: MatchConfig) -> Self {
        Self::new(MatchScorer::default(), config)
    }

    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Score every eligible candidate, in input order.
    pub fn score_all(&self, plan: &Plan, candidates: &[Candidate]) -> Vec<ScoredCandidate> {
        candidates
            .iter()
            .filter_map(|c| self.scorer.score_candidate(plan, c))
            .collect()
    }

    /// Scored candidates at or above the acceptance threshold, in input order.
    pub fn accepted(&self, plan: &Plan, candidates: &[Candidate]) -> Vec<ScoredCandidate> {
        self.score_all(plan, candidates)
            .into_iter()
            .filter(|sc| is_accepted(sc.score))
            .collect()
    }

    /// Find the award matching `plan`, or `None` when no candidate is accepted.
    pub fn find_best(&self, plan: &Plan, candidates: &[Candidate]) -> Option<AggregatedMatch> {
        self.rank(candidates.len(), self.accepted(plan, candidates))
    }

    /// Aggregate candidates that were scored elsewhere. `scored` must be in
    /// input order; entries below the acceptance threshold are dropped.
    pub fn find_best_scored(&self, scored: Vec<ScoredCandidate>) -> Option<AggregatedMatch> {
        let total = scored.len();
        let accepted = scored
            .into_iter()
            .filter(|sc| is_accepted(sc.score))
            .collect();
        self.rank(total, accepted)
    }

    fn rank(&self, candidates: usize, accepted: Vec<ScoredCandidate>) -> Option<AggregatedMatch> {
        debug!(
            candidates,
            accepted = accepted.len(),
            "ranked candidates"
        );

        let matched = self.aggregate(&accepted);
        if let Some(m) = &matched {
            info!(
                title = %m.title,
                award_id = %m.award_id,
                investigators = m.principal_investigators.len(),
                "award matched"
            );
        }
        matched
    }

    /// Keyword string sent to the award search for `plan`: its normalized title.
    pub fn keywords(&self, plan: &Plan) -> String {
        self.scorer.normalizer().normalize(&plan.title)
    }

    /// Query `search` with the plan's keywords and rank what comes back.
    pub fn match_plan<S>(&self, plan: &Plan, search: &S) -> Option<AggregatedMatch>
    where
        S: AwardSearch + ?Sized,
    {
        let keywords = self.keywords(plan);
        let candidates = search.search(&keywords);
        debug!(keywords = %keywords, candidates = candidates.len(), "award search");
        self.find_best(plan, &candidates)
    }

    /// Fold an acceptance set into one match.
    ///
    /// The highest score wins (first one on ties). Investigators are taken from
    /// every accepted candidate whose raw title equals the winner's exactly.
    pub fn aggregate(&self, accepted: &[ScoredCandidate]) -> Option<AggregatedMatch> {
        let best = first_max(accepted)?;
        let title = best.candidate.title.clone()?;

        let principal_investigators = accepted
            .iter()
            .filter(|sc| sc.candidate.title.as_deref() == Some(title.as_str()))
            .map(|sc| Investigator {
                name: sc.candidate.pi_name().unwrap_or_default(),
                organization: sc.candidate.awardee_name.clone().unwrap_or_default(),
            })
            .collect();

        Some(AggregatedMatch {
            award_id: self.config.award_url(&best.candidate.id),
            title,
            principal_investigators,
        })
    }
}

fn first_max(scored: &[ScoredCandidate]) -> Option<&ScoredCandidate> {
    let mut best: Option<&ScoredCandidate> = None;
    for sc in scored {
        if best.map_or(true, |b| sc.score > b.score) {
            best = Some(sc);
        }
    }
    best
}
