//! Batch matching over a plan source
//!
//! For every plan: skip it if it has no URI or was handled by an earlier run,
//! search for awards using its normalized title, rank the results, and register
//! the winner. A plan is marked processed only after its award was registered;
//! plans without a match stay eligible for the next run.

use award_match_core::sources::{AwardRegistrar, AwardSearch, PlanSource, ProcessedSet};
use award_match_core::{CandidateRanker, Plan};
use tracing::{info, warn};

use crate::error::Result;
use crate::scoring;

/// Counts from one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Plans returned by the source
    pub seen: usize,
    /// Plans without a URI or already processed
    pub skipped: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// Matches whose registration or bookkeeping failed
    pub failed: usize,
}

/// Outcome for a single plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutcome {
    Skipped,
    Matched,
    Unmatched,
    Failed,
}

/// Drives the ranker over every plan from a source.
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    ranker: CandidateRanker,
    dry_run: bool,
}

impl BatchRunner {
    pub fn new(ranker: CandidateRanker) -> Self {
        Self {
            ranker,
            dry_run: false,
        }
    }

    /// Match without registering or marking plans processed.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(
        &self,
        plans: &mut dyn PlanSource,
        search: &dyn AwardSearch,
        registrar: &mut dyn AwardRegistrar,
        processed: &mut dyn ProcessedSet,
    ) -> Result<RunSummary> {
        let plans = plans.plans()?;
        info!(
            plans = plans.len(),
            processed = processed.len(),
            dry_run = self.dry_run,
            "starting batch"
        );

        let mut summary = RunSummary::default();
        for plan in &plans {
            summary.seen += 1;
            match self.process(plan, search, registrar, processed) {
                PlanOutcome::Skipped => summary.skipped += 1,
                PlanOutcome::Matched => summary.matched += 1,
                PlanOutcome::Unmatched => summary.unmatched += 1,
                PlanOutcome::Failed => summary.failed += 1,
            }
        }

        info!(
            seen = summary.seen,
            skipped = summary.skipped,
            matched = summary.matched,
            unmatched = summary.unmatched,
            failed = summary.failed,
            "batch complete"
        );
        Ok(summary)
    }

    /// Handle one plan. Collaborator failures are logged, not returned, so one
    /// bad plan does not stop the batch.
    pub fn process(
        &self,
        plan: &Plan,
        search: &dyn AwardSearch,
        registrar: &mut dyn AwardRegistrar,
        processed: &mut dyn ProcessedSet,
    ) -> PlanOutcome {
        let Some(uri) = plan.uri.as_deref() else {
            warn!(title = %plan.title, "plan has no uri, skipping");
            return PlanOutcome::Skipped;
        };
        if processed.contains(uri) {
            return PlanOutcome::Skipped;
        }

        let Some(award) = scoring::match_plan(&self.ranker, plan, search) else {
            info!(uri, title = %plan.title, "no award matched");
            return PlanOutcome::Unmatched;
        };

        if self.dry_run {
            info!(uri, award_id = %award.award_id, "dry run, not registering");
            return PlanOutcome::Matched;
        }

        if let Err(e) = registrar.register(uri, &award) {
            warn!(uri, error = %e, "award registration failed");
            return PlanOutcome::Failed;
        }
        if let Err(e) = processed.insert(uri) {
            warn!(uri, error = %e, "could not record plan as processed");
            return PlanOutcome::Failed;
        }

        info!(uri, award_id = %award.award_id, "award registered");
        PlanOutcome::Matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use award_match_core::sources::{
        AwardCatalog, MemoryPlanSource, MemoryProcessedSet, MemoryRegistrar,
    };
    use award_match_core::Candidate;
    use pretty_assertions::assert_eq;

    fn award(id: &str, title: &str, first: &str, last: &str, org: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            title: Some(title.to_string()),
            pi_first_name: Some(first.to_string()),
            pi_last_name: Some(last.to_string()),
            awardee_name: Some(org.to_string()),
        }
    }

    fn catalog() -> AwardCatalog {
        AwardCatalog::new(vec![
            award("1", "Coastal Resilience", "Jane", "Doe", "MIT"),
            award("2", "Glacier Dynamics", "Ann", "Poe", "Yale"),
        ])
    }

    fn plans() -> MemoryPlanSource {
        MemoryPlanSource::new(vec![
            Plan::new("EAGER: Coastal Resilience")
                .with_authors("Jane Doe | MIT")
                .with_uri("dmp:coastal"),
            Plan::new("Soil Carbon Cycling").with_uri("dmp:soil"),
            Plan::new("Glacier Dynamics").with_uri("dmp:done"),
            Plan::new("Glacier Dynamics"),
        ])
    }

    #[test]
    fn test_batch_registers_matches() {
        let mut registrar = MemoryRegistrar::new();
        let mut processed = MemoryProcessedSet::with_uris(["dmp:done"]);

        let summary = BatchRunner::default()
            .run(&mut plans(), &catalog(), &mut registrar, &mut processed)
            .unwrap();

        assert_eq!(
            summary,
            RunSummary {
                seen: 4,
                skipped: 2,
                matched: 1,
                unmatched: 1,
                failed: 0,
            }
        );
        assert_eq!(registrar.registered().len(), 1);
        assert_eq!(registrar.registered()[0].0, "dmp:coastal");
        assert!(processed.contains("dmp:coastal"));
        assert!(!processed.contains("dmp:soil"));
    }

    #[test]
    fn test_second_run_skips_registered() {
        let mut registrar = MemoryRegistrar::new();
        let mut processed = MemoryProcessedSet::new();
        let runner = BatchRunner::default();

        runner
            .run(&mut plans(), &catalog(), &mut registrar, &mut processed)
            .unwrap();
        let second = runner
            .run(&mut plans(), &catalog(), &mut registrar, &mut processed)
            .unwrap();

        // coastal and glacier were registered the first time
        assert_eq!(second.matched, 0);
        assert_eq!(second.skipped, 3);
        assert_eq!(registrar.registered().len(), 2);
    }

    #[test]
    fn test_failed_registration_not_marked() {
        let mut registrar = MemoryRegistrar::new().reject("dmp:coastal");
        let mut processed = MemoryProcessedSet::new();

        let summary = BatchRunner::default()
            .run(&mut plans(), &catalog(), &mut registrar, &mut processed)
            .unwrap();

        assert_eq!(summary.failed, 1);
        assert!(!processed.contains("dmp:coastal"));
        assert!(processed.contains("dmp:done"));
    }

    #[test]
    fn test_dry_run_leaves_state_untouched() {
        let mut registrar = MemoryRegistrar::new();
        let mut processed = MemoryProcessedSet::new();

        let summary = BatchRunner::default()
            .dry_run(true)
            .run(&mut plans(), &catalog(), &mut registrar, &mut processed)
            .unwrap();

        assert_eq!(summary.matched, 2);
        assert!(registrar.registered().is_empty());
        assert!(processed.is_empty());
    }
}
