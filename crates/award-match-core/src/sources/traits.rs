//! Collaborator trait definitions

use crate::error::MatchResult;
use crate::types::{AggregatedMatch, Candidate, Plan};

/// Award search service.
///
/// Given the normalized keyword string for a plan, returns candidate award
/// records. Implementations translate remote failures into an empty result;
/// the ranker treats "no candidates" and "search failed" the same way.
pub trait AwardSearch {
    fn search(&self, keywords: &str) -> Vec<Candidate>;
}

/// Source of data management plans.
pub trait PlanSource {
    /// Fetch the plans to match. Plans are expected to carry a stable `uri`.
    fn plans(&mut self) -> MatchResult<Vec<Plan>>;
}

/// Writes a matched award back to its plan.
pub trait AwardRegistrar {
    fn register(&mut self, plan_uri: &str, award: &AggregatedMatch) -> MatchResult<()>;
}

/// Record of plans already handled by earlier runs.
pub trait ProcessedSet {
    fn contains(&self, plan_uri: &str) -> bool;

    /// Mark a plan as processed.
    ///
    /// Returns `true` if the URI was newly added.
    fn insert(&mut self, plan_uri: &str) -> MatchResult<bool>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
