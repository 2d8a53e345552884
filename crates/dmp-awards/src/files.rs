//! File-backed collaborators
//!
//! - plans: a JSON array of plan records
//! - awards: a JSON array of award records, or a saved award search response
//!   (`{"response": {"award": [...]}}`)
//! - processed plans: one URI per line, appended as plans are registered
//! - registrations: JSON lines `{"plan_uri": ..., "award": {...}}`
//! - stopwords: one word per line

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use award_match_core::sources::{AwardCatalog, AwardRegistrar, PlanSource, ProcessedSet};
use award_match_core::{
    AggregatedMatch, Candidate, MatchError, MatchResult, Plan, StopwordList,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Accepted award file layouts.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AwardFile {
    List(Vec<Candidate>),
    SearchResponse { response: AwardResponse },
}

#[derive(Debug, Deserialize)]
struct AwardResponse {
    #[serde(default)]
    award: Vec<Candidate>,
}

/// Parse award records from JSON text.
pub fn parse_awards(json: &str) -> Result<Vec<Candidate>> {
    let awards = match serde_json::from_str(json)? {
        AwardFile::List(awards) => awards,
        AwardFile::SearchResponse { response } => response.award,
    };
    Ok(awards)
}

/// Load an award catalog. Read and parse errors surface here, before any
/// plan is processed.
pub fn load_catalog(path: &Path) -> Result<AwardCatalog> {
    let awards = parse_awards(&fs::read_to_string(path)?)?;
    debug!(path = %path.display(), awards = awards.len(), "loaded award catalog");
    Ok(AwardCatalog::new(awards))
}

/// Load a single plan record.
pub fn load_plan(path: &Path) -> Result<Plan> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

/// Load a word-per-line stopword file.
pub fn load_stopwords(path: &Path) -> Result<StopwordList> {
    let list = StopwordList::from_lines(&fs::read_to_string(path)?);
    debug!(path = %path.display(), words = list.len(), "loaded stopwords");
    Ok(list)
}

/// Plans read from a JSON array file on every call.
#[derive(Debug, Clone)]
pub struct JsonPlanFile {
    path: PathBuf,
}

impl JsonPlanFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PlanSource for JsonPlanFile {
    fn plans(&mut self) -> MatchResult<Vec<Plan>> {
        let text = fs::read_to_string(&self.path).map_err(|e| {
            MatchError::Collaborator(format!("reading {}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            MatchError::Collaborator(format!("parsing {}: {}", self.path.display(), e))
        })
    }
}

/// Processed plan URIs kept in a line-per-URI file.
///
/// A missing file is an empty set. New URIs are appended immediately, so an
/// interrupted run keeps what it already registered.
#[derive(Debug)]
pub struct FileProcessedSet {
    path: PathBuf,
    uris: HashSet<String>,
}

impl FileProcessedSet {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let uris = match fs::read_to_string(&path) {
            Ok(text) => text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            Err(e) if e.kind() == ErrorKind::NotFound => HashSet::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), processed = uris.len(), "opened processed list");
        Ok(Self { path, uris })
    }

    fn append(&self, plan_uri: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", plan_uri)
    }
}

impl ProcessedSet for FileProcessedSet {
    fn contains(&self, plan_uri: &str) -> bool {
        self.uris.contains(plan_uri)
    }

    fn insert(&mut self, plan_uri: &str) -> MatchResult<bool> {
        if self.uris.contains(plan_uri) {
            return Ok(false);
        }
        self.append(plan_uri).map_err(|e| {
            MatchError::Collaborator(format!("appending to {}: {}", self.path.display(), e))
        })?;
        self.uris.insert(plan_uri.to_string());
        Ok(true)
    }

    fn len(&self) -> usize {
        self.uris.len()
    }
}

/// One line of registrar output.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Registration {
    pub plan_uri: String,
    pub award: AggregatedMatch,
}

/// Registrar writing one JSON object per line.
pub struct JsonLinesRegistrar<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> JsonLinesRegistrar<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl JsonLinesRegistrar<fs::File> {
    /// Append registrations to `path`, creating it if needed.
    pub fn append_to(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> AwardRegistrar for JsonLinesRegistrar<W> {
    fn register(&mut self, plan_uri: &str, award: &AggregatedMatch) -> MatchResult<()> {
        let line = serde_json::to_string(&Registration {
            plan_uri: plan_uri.to_string(),
            award: award.clone(),
        })
        .map_err(|e| MatchError::Collaborator(format!("encoding registration: {}", e)))?;

        writeln!(self.out, "{}", line)
            .and_then(|_| self.out.flush())
            .map_err(|e| MatchError::Collaborator(format!("writing registration: {}", e)))?;
        self.written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use award_match_core::sources::AwardSearch;
    use award_match_core::Investigator;
    use tempfile::TempDir;

    fn sample_match() -> AggregatedMatch {
        AggregatedMatch {
            title: "Coastal Resilience".into(),
            principal_investigators: vec![Investigator {
                name: "Jane Doe".into(),
                organization: "MIT".into(),
            }],
            award_id: "https://awards.example/123".into(),
        }
    }

    #[test]
    fn test_parse_award_list() {
        let awards = parse_awards(
            r#"[{"id":"1","title":"Coastal Resilience","piFirstName":"Jane","piLastName":"Doe"}]"#,
        )
        .unwrap();
        assert_eq!(awards.len(), 1);
        assert_eq!(awards[0].pi_last_name.as_deref(), Some("Doe"));
    }

    #[test]
    fn test_parse_search_response() {
        let awards = parse_awards(
            r#"{"response":{"award":[{"id":"1","title":"A"},{"id":"2","title":"B"}]}}"#,
        )
        .unwrap();
        assert_eq!(awards.len(), 2);

        let empty = parse_awards(r#"{"response":{}}"#).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_parse_awards_rejects_garbage() {
        assert!(parse_awards(r#"{"nope": 1}"#).is_err());
    }

    #[test]
    fn test_load_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("awards.json");
        fs::write(&path, r#"[{"id":"1","title":"Coastal Resilience"}]"#).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.search("coastal").len(), 1);
        assert!(load_catalog(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_processed_set_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("processed.txt");

        let mut processed = FileProcessedSet::open(&path).unwrap();
        assert!(processed.is_empty());
        assert!(processed.insert("dmp:1").unwrap());
        assert!(processed.insert("dmp:2").unwrap());
        assert!(!processed.insert("dmp:1").unwrap());

        let reopened = FileProcessedSet::open(&path).unwrap();
        assert_eq!(reopened.len(), 2);
        assert!(reopened.contains("dmp:1"));
        assert!(reopened.contains("dmp:2"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "dmp:1\ndmp:2\n");
    }

    #[test]
    fn test_plan_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plans.json");
        fs::write(
            &path,
            r#"[{"uri":"dmp:1","title":"Coastal","authors":"Jane Doe | MIT"},{"title":"No uri"}]"#,
        )
        .unwrap();

        let plans = JsonPlanFile::new(&path).plans().unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].uri.as_deref(), Some("dmp:1"));
        assert_eq!(plans[1].uri, None);

        let missing = JsonPlanFile::new(dir.path().join("missing.json")).plans();
        assert!(matches!(missing, Err(MatchError::Collaborator(_))));
    }

    #[test]
    fn test_registrar_writes_json_lines() {
        let mut registrar = JsonLinesRegistrar::new(Vec::new());
        registrar.register("dmp:1", &sample_match()).unwrap();
        registrar.register("dmp:2", &sample_match()).unwrap();
        assert_eq!(registrar.written(), 2);

        let out = String::from_utf8(registrar.into_inner()).unwrap();
        let lines: Vec<Registration> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].plan_uri, "dmp:2");
        assert_eq!(lines[0].award, sample_match());
    }

    #[test]
    fn test_stopword_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stopwords.txt");
        fs::write(&path, "the\nof\n").unwrap();
        let list = load_stopwords(&path).unwrap();
        assert_eq!(list.len(), 2);
    }
}
