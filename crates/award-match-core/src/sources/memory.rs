//! In-memory collaborators
//!
//! Plain Vec/HashSet-backed implementations. Nothing here persists across
//! processes.

use std::collections::HashSet;

use crate::error::{MatchError, MatchResult};
use crate::sources::matches_keywords;
use crate::sources::traits::{AwardRegistrar, AwardSearch, PlanSource, ProcessedSet};
use crate::types::{AggregatedMatch, Candidate, Plan};

/// Award search over a fixed list of award records.
///
/// Returns every record whose title contains any keyword token, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct AwardCatalog {
    awards: Vec<Candidate>,
}

impl AwardCatalog {
    pub fn new(awards: Vec<Candidate>) -> Self {
        Self { awards }
    }

    /// Every award record, unfiltered.
    pub fn awards(&self) -> &[Candidate] {
        &self.awards
    }

    pub fn len(&self) -> usize {
        self.awards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.awards.is_empty()
    }
}

impl AwardSearch for AwardCatalog {
    fn search(&self, keywords: &str) -> Vec<Candidate> {
        self.awards
            .iter()
            .filter(|c| {
                c.title
                    .as_deref()
                    .is_some_and(|title| matches_keywords(title, keywords))
            })
            .cloned()
            .collect()
    }
}

/// Plans held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlanSource {
    plans: Vec<Plan>,
}

impl MemoryPlanSource {
    pub fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }
}

impl PlanSource for MemoryPlanSource {
    fn plans(&mut self) -> MatchResult<Vec<Plan>> {
        Ok(self.plans.clone())
    }
}

/// Registrar that records every registration.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistrar {
    registered: Vec<(String, AggregatedMatch)>,
    reject: HashSet<String>,
}

impl MemoryRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make registration fail for `plan_uri`.
    pub fn reject(mut self, plan_uri: impl Into<String>) -> Self {
        self.reject.insert(plan_uri.into());
        self
    }

    pub fn registered(&self) -> &[(String, AggregatedMatch)] {
        &self.registered
    }
}

impl AwardRegistrar for MemoryRegistrar {
    fn register(&mut self, plan_uri: &str, award: &AggregatedMatch) -> MatchResult<()> {
        if self.reject.contains(plan_uri) {
            return Err(MatchError::Collaborator(format!(
                "registration rejected for {}",
                plan_uri
            )));
        }
        self.registered.push((plan_uri.to_string(), award.clone()));
        Ok(())
    }
}

/// Processed plan URIs held in a set.
#[derive(Debug, Clone, Default)]
pub struct MemoryProcessedSet {
    uris: HashSet<String>,
}

impl MemoryProcessedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_uris<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            uris: uris.into_iter().map(Into::into).collect(),
        }
    }
}

impl ProcessedSet for MemoryProcessedSet {
    fn contains(&self, plan_uri: &str) -> bool {
        self.uris.contains(plan_uri)
    }

    fn insert(&mut self, plan_uri: &str) -> MatchResult<bool> {
        Ok(self.uris.insert(plan_uri.to_string()))
    }

    fn len(&self) -> usize {
        self.uris.len()
    }
}
