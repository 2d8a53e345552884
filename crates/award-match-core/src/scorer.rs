//! Combined plan/award scoring
//!
//! The score is a sum of three signals:
//!
//! - title similarity of the normalized titles (always)
//! - Σ similarity(author name, award PI name) over the plan's authors
//! - Σ similarity(author organization, awardee organization) over the plan's authors
//!
//! Author and organization evidence only counts once the title similarity
//! reaches [`TITLE_GATE`]. Sums are not averaged, so plans listing many
//! authors score higher; the result is not a probability.

use tracing::debug;

use crate::config::TITLE_GATE;
use crate::normalize::TitleNormalizer;
use crate::similarity::{similarity, similarity_opt};
use crate::types::{Candidate, Plan, ScoredCandidate};

/// Scores one (plan, award) pair.
#[derive(Debug, Clone, Default)]
pub struct MatchScorer {
    normalizer: TitleNormalizer,
}

impl MatchScorer {
    pub fn new(normalizer: TitleNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &TitleNormalizer {
        &self.normalizer
    }

    /// Similarity of the two titles after normalization.
    pub fn title_score(&self, plan_title: &str, candidate_title: &str) -> f64 {
        similarity(
            &self.normalizer.normalize(plan_title),
            &self.normalizer.normalize(candidate_title),
        )
    }

    /// Combined score for a plan against one award's title, PI name and
    /// awardee organization.
    ///
    /// An absent PI name or organization contributes nothing to its sum.
    pub fn score(
        &self,
        plan: &Plan,
        candidate_title: &str,
        candidate_pi_name: Option<&str>,
        candidate_org: Option<&str>,
    ) -> f64 {
        let title_score = self.title_score(&plan.title, candidate_title);

        if plan.authors.is_none() {
            return title_score;
        }

        let authors = plan.author_entries();
        if authors.is_empty() || title_score < TITLE_GATE {
            debug!(
                title_score,
                authors = authors.len(),
                "author evidence skipped"
            );
            return title_score;
        }

        let org_score: f64 = authors
            .iter()
            .filter_map(|a| similarity_opt(Some(a.organization), candidate_org))
            .sum();
        let pi_score: f64 = authors
            .iter()
            .filter_map(|a| similarity_opt(Some(a.name), candidate_pi_name))
            .sum();

        title_score + pi_score + org_score
    }

    /// Like [`score`](Self::score) but tolerates a missing award title, which
    /// scores 0.0.
    pub fn score_opt(
        &self,
        plan: &Plan,
        candidate_title: Option<&str>,
        candidate_pi_name: Option<&str>,
        candidate_org: Option<&str>,
    ) -> f64 {
        match candidate_title {
            Some(title) => self.score(plan, title, candidate_pi_name, candidate_org),
            None => 0.0,
        }
    }

    /// Score an award record. Returns `None` for records without a title or
    /// PI last name.
    pub fn score_candidate(&self, plan: &Plan, candidate: &Candidate) -> Option<ScoredCandidate> {
        let title = candidate.title.as_deref()?;
        let pi_name = candidate.pi_name()?;

        let score = self.score(
            plan,
            title,
            Some(&pi_name),
            candidate.awardee_name.as_deref(),
        );
        debug!(id = %candidate.id, title, score, "scored candidate");

        Some(ScoredCandidate {
            score,
            candidate: candidate.clone(),
        })
    }
}
