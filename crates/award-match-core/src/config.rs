//! Matching constants and configuration

use serde::{Deserialize, Serialize};

/// Title similarity a candidate must reach before author and organization
/// evidence is consulted.
pub const TITLE_GATE: f64 = 0.7;

/// Minimum combined score for a candidate to be accepted.
pub const ACCEPTANCE_THRESHOLD: f64 = 0.9;

/// NSF award display page; the award id is appended.
pub const DEFAULT_AWARD_BASE_URL: &str = "https://www.nsf.gov/awardsearch/showAward?AWD_ID=";

/// Ranker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Prefix joined with a candidate id to form [`AggregatedMatch::award_id`](crate::AggregatedMatch).
    pub award_base_url: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            award_base_url: DEFAULT_AWARD_BASE_URL.to_string(),
        }
    }
}

impl MatchConfig {
    pub fn award_url(&self, id: &str) -> String {
        format!("{}{}", self.award_base_url, id)
    }
}
