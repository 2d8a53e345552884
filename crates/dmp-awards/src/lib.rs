//! # DMP Awards
//!
//! Links data management plans to the awards that funded them. The matching
//! itself lives in `award_match_core`; this crate supplies:
//! - **config**: defaults, environment overrides, ranker construction
//! - **files**: file-backed plan source, award catalog, processed list and registrar
//! - **runner**: the batch loop over plans
//! - **scoring**: candidate scoring, on rayon with the `parallel` feature
//! - **error**: runner error type
//! - **tracing**: logging setup
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dmp_awards::{BatchRunner, RunConfig};
//!
//! let config = RunConfig::new("plans.json", "awards.json");
//! let summary = dmp_awards::run(&config)?;
//! ```

pub mod config;
pub mod error;
pub mod files;
pub mod runner;
pub mod scoring;
pub mod tracing;

pub use config::{MatchSettings, RunConfig};
pub use error::{Error, Result};
pub use runner::{BatchRunner, PlanOutcome, RunSummary};

use std::io;

use award_match_core::sources::AwardRegistrar;

use crate::files::{load_catalog, FileProcessedSet, JsonLinesRegistrar, JsonPlanFile};

/// Run a batch described by `config` against the file-backed collaborators.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let ranker = config.matching.build_ranker()?;
    let catalog = load_catalog(&config.awards)?;
    let mut plans = JsonPlanFile::new(&config.plans);
    let mut processed = FileProcessedSet::open(&config.processed)?;

    let mut registrar: Box<dyn AwardRegistrar> = match &config.output {
        Some(path) => Box::new(JsonLinesRegistrar::append_to(path)?),
        None => Box::new(JsonLinesRegistrar::new(io::stdout())),
    };

    BatchRunner::new(ranker)
        .dry_run(config.dry_run)
        .run(&mut plans, &catalog, registrar.as_mut(), &mut processed)
}
