//! Runner configuration
//!
//! Defaults, overridden by environment variables, overridden by command-line
//! flags.
//!
//! Environment variables:
//! - `DMP_AWARDS_BASE_URL`: award display URL prefix (default: NSF award search)
//! - `DMP_AWARDS_PROCESSED`: processed plan list (default: `processed.txt`)
//! - `DMP_AWARDS_STOPWORDS`: stopword file, one word per line (default: built-in English)
//! - `RUST_LOG`: logging filter (default: info)

use std::path::PathBuf;
use std::sync::Arc;

use award_match_core::{
    CandidateRanker, EnglishStopwords, MatchConfig, MatchScorer, StopwordSet, TitleNormalizer,
    DEFAULT_AWARD_BASE_URL,
};

use crate::error::{Error, Result};
use crate::files::load_stopwords;

pub const ENV_BASE_URL: &str = "DMP_AWARDS_BASE_URL";
pub const ENV_PROCESSED: &str = "DMP_AWARDS_PROCESSED";
pub const ENV_STOPWORDS: &str = "DMP_AWARDS_STOPWORDS";

pub const DEFAULT_PROCESSED_FILE: &str = "processed.txt";

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSettings {
    pub award_base_url: String,
    /// `None` uses the built-in English list.
    pub stopwords: Option<PathBuf>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            award_base_url: DEFAULT_AWARD_BASE_URL.to_string(),
            stopwords: None,
        }
    }
}

impl MatchSettings {
    /// Apply environment overrides through `lookup` (usually `std::env::var(..).ok()`).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            self.award_base_url = url;
        }
        if let Some(path) = lookup(ENV_STOPWORDS).filter(|v| !v.is_empty()) {
            self.stopwords = Some(PathBuf::from(path));
        }
    }

    /// Build the ranker these settings describe.
    pub fn build_ranker(&self) -> Result<CandidateRanker> {
        if self.award_base_url.trim().is_empty() {
            return Err(Error::Config("award base URL is empty".to_string()));
        }

        let stopwords: Arc<dyn StopwordSet> = match &self.stopwords {
            Some(path) => Arc::new(load_stopwords(path)?),
            None => Arc::new(EnglishStopwords),
        };

        Ok(CandidateRanker::new(
            MatchScorer::new(TitleNormalizer::new(stopwords)),
            MatchConfig {
                award_base_url: self.award_base_url.clone(),
            },
        ))
    }
}

/// Configuration for a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub matching: MatchSettings,
    /// JSON array of plans
    pub plans: PathBuf,
    /// Award records: a JSON array or an award search response
    pub awards: PathBuf,
    /// One processed plan URI per line
    pub processed: PathBuf,
    /// JSON-lines registration output; stdout when absent
    pub output: Option<PathBuf>,
    /// Match and log, but neither register nor mark processed
    pub dry_run: bool,
}

impl RunConfig {
    pub fn new(plans: impl Into<PathBuf>, awards: impl Into<PathBuf>) -> Self {
        Self {
            matching: MatchSettings::default(),
            plans: plans.into(),
            awards: awards.into(),
            processed: PathBuf::from(DEFAULT_PROCESSED_FILE),
            output: None,
            dry_run: false,
        }
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.matching.apply_env(&lookup);
        if let Some(path) = lookup(ENV_PROCESSED).filter(|v| !v.is_empty()) {
            self.processed = PathBuf::from(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RunConfig::new("plans.json", "awards.json");
        assert_eq!(config.processed, PathBuf::from("processed.txt"));
        assert_eq!(config.matching.award_base_url, DEFAULT_AWARD_BASE_URL);
        assert!(config.matching.stopwords.is_none());
        assert!(!config.dry_run);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = RunConfig::new("plans.json", "awards.json");
        config.apply_env(env(&[
            (ENV_BASE_URL, "https://awards.example/"),
            (ENV_PROCESSED, "/tmp/done.txt"),
            (ENV_STOPWORDS, "/etc/stopwords.txt"),
        ]));
        assert_eq!(config.matching.award_base_url, "https://awards.example/");
        assert_eq!(config.processed, PathBuf::from("/tmp/done.txt"));
        assert_eq!(
            config.matching.stopwords,
            Some(PathBuf::from("/etc/stopwords.txt"))
        );
    }

    #[test]
    fn test_empty_env_ignored() {
        let mut settings = MatchSettings::default();
        settings.apply_env(env(&[(ENV_BASE_URL, "")]));
        assert_eq!(settings.award_base_url, DEFAULT_AWARD_BASE_URL);
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let settings = MatchSettings {
            award_base_url: "  ".into(),
            stopwords: None,
        };
        assert!(matches!(settings.build_ranker(), Err(Error::Config(_))));
    }

    #[test]
    fn test_build_ranker_uses_base_url() {
        let settings = MatchSettings {
            award_base_url: "https://awards.example/".into(),
            stopwords: None,
        };
        let ranker = settings.build_ranker().unwrap();
        assert_eq!(ranker.config().award_url("7"), "https://awards.example/7");
    }
}
