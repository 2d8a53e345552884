//! Title normalization
//!
//! Plan and award titles are written by different people for different
//! systems. Before comparing them we:
//!
//! 1. drop everything up to the last colon (`"EAGER: Coastal Study"` → `" Coastal Study"`)
//! 2. lowercase, then strip characters other than alphanumerics, whitespace
//!    and hyphens, unless that would leave nothing
//! 3. split on whitespace and drop stopwords
//!
//! # Example
//!
//! ```rust
//! use award_match_core::TitleNormalizer;
//!
//! let normalizer = TitleNormalizer::default();
//! assert_eq!(normalizer.normalize("EAGER: Sea Level Rise Study"), "sea level rise study");
//! assert_eq!(normalizer.normalize("A Study of the Coast"), "study coast");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::{MatchError, MatchResult};
use crate::stopwords::{EnglishStopwords, StopwordSet};

/// Canonicalizes titles into comparable token strings.
#[derive(Clone)]
pub struct TitleNormalizer {
    stopwords: Arc<dyn StopwordSet>,
}

impl Default for TitleNormalizer {
    fn default() -> Self {
        Self::new(Arc::new(EnglishStopwords))
    }
}

impl fmt::Debug for TitleNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleNormalizer").finish_non_exhaustive()
    }
}

impl TitleNormalizer {
    pub fn new(stopwords: Arc<dyn StopwordSet>) -> Self {
        Self { stopwords }
    }

    /// Normalize a title. Never fails; see [`normalize_opt`](Self::normalize_opt)
    /// for records where the title may be missing.
    pub fn normalize(&self, title: &str) -> String {
        // Lowercasing can expand a char (`İ` -> `i` + U+0307), so the filter
        // must see final-case text for the output to be a fixed point.
        let title = strip_prefix(title).to_lowercase();

        let stripped: String = title
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
            .collect();
        let text = if stripped.is_empty() { &title } else { &stripped };

        text.split_whitespace()
            .filter(|token| !self.stopwords.is_stopword(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Normalize a title that may be absent.
    pub fn normalize_opt(&self, title: Option<&str>) -> MatchResult<String> {
        title
            .map(|t| self.normalize(t))
            .ok_or_else(|| MatchError::InvalidInput("title is absent".to_string()))
    }
}

/// Keep only the text after the last colon.
fn strip_prefix(title: &str) -> &str {
    match title.rfind(':') {
        Some(pos) => &title[pos + 1..],
        None => title,
    }
}
