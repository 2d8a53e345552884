//! Award Match Core
//!
//! Decides whether a data management plan (DMP) was funded by one of the award
//! records an award search returned. Plans and awards share no identifier, so
//! the match is inferred from title, investigator name and organization text.
//!
//! Pure and synchronous: no I/O, no state between calls. Services the matcher
//! depends on are reached through the traits in [`sources`].
//!
//! # Example
//!
//! ```rust
//! use award_match_core::{Candidate, CandidateRanker, Plan};
//!
//! let plan = Plan::new("EAGER: Coastal Resilience")
//!     .with_authors("Jane Doe | MIT, John Roe | Stanford");
//! let candidates = vec![Candidate {
//!     id: "123".into(),
//!     title: Some("Coastal Resilience".into()),
//!     pi_first_name: Some("Jane".into()),
//!     pi_last_name: Some("Doe".into()),
//!     awardee_name: Some("MIT".into()),
//! }];
//!
//! let ranker = CandidateRanker::default();
//! let award = ranker.find_best(&plan, &candidates).unwrap();
//! assert_eq!(award.title, "Coastal Resilience");
//! assert!(award.award_id.ends_with("123"));
//! ```

pub mod config;
pub mod error;
pub mod json;
pub mod normalize;
pub mod ranker;
pub mod scorer;
pub mod similarity;
pub mod sources;
pub mod stopwords;
pub mod types;

// Re-export main types at crate root
pub use config::{MatchConfig, ACCEPTANCE_THRESHOLD, DEFAULT_AWARD_BASE_URL, TITLE_GATE};
pub use error::{MatchError, MatchResult};
pub use json::{find_best_json, MatchInput, MatchOutput};
pub use normalize::TitleNormalizer;
pub use ranker::{is_accepted, CandidateRanker};
pub use scorer::MatchScorer;
pub use similarity::{similarity, similarity_opt};
pub use stopwords::{EnglishStopwords, NoStopwords, StopwordList, StopwordSet};
pub use types::{AggregatedMatch, AuthorEntry, Candidate, Investigator, Plan, ScoredCandidate};
