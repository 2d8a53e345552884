//! Collaborators around the matching core
//!
//! The core never performs I/O. Plans, award candidates, award registration
//! and the record of already-processed plans are reached through these traits.
//! In-memory implementations are provided for tests and for callers that load
//! their data up front:
//!
//! - [`AwardCatalog`]: award search over a fixed list of candidates
//! - [`MemoryPlanSource`]: plans from a vector
//! - [`MemoryRegistrar`]: records registrations
//! - [`MemoryProcessedSet`]: processed plan URIs in a set
//!
//! # Example
//!
//! ```rust
//! use award_match_core::sources::{AwardCatalog, AwardSearch};
//! use award_match_core::Candidate;
//!
//! let catalog = AwardCatalog::new(vec![Candidate {
//!     id: "123".into(),
//!     title: Some("Coastal Resilience".into()),
//!     ..Default::default()
//! }]);
//!
//! assert_eq!(catalog.search("coastal resilience").len(), 1);
//! assert!(catalog.search("glaciers").is_empty());
//! ```

mod memory;
mod traits;

pub use memory::{AwardCatalog, MemoryPlanSource, MemoryProcessedSet, MemoryRegistrar};
pub use traits::{AwardRegistrar, AwardSearch, PlanSource, ProcessedSet};

/// Whether `title` contains any whitespace-separated token of `keywords`,
/// ignoring case. An empty keyword string matches nothing.
pub fn matches_keywords(title: &str, keywords: &str) -> bool {
    let title = title.to_lowercase();
    keywords
        .split_whitespace()
        .any(|kw| title.contains(&kw.to_lowercase()))
}
