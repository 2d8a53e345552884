//! Record shapes exchanged with the DMP and award search services.

use serde::{Deserialize, Serialize};

/// Separator between author entries in [`Plan::authors`].
pub const AUTHOR_SEP: &str = ", ";

/// Separator between name and organization inside one author entry.
pub const AFFILIATION_SEP: char = '|';

/// A data management plan awaiting an award match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Stable identifier assigned by the DMP service. Not used for scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Title, possibly carrying a grant-type prefix such as `"EAGER: "`.
    pub title: String,
    /// `"Name | Organization"` entries joined by `", "`.
    #[serde(default)]
    pub authors: Option<String>,
}

impl Plan {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            uri: None,
            title: title.into(),
            authors: None,
        }
    }

    pub fn with_authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = Some(authors.into());
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Split `authors` into `(name, organization)` pairs.
    ///
    /// An entry without `|` uses its whole text for both fields. Returns an
    /// empty list when `authors` is absent or empty. Entry text is kept
    /// verbatim, whitespace around the separators included, and empty entries
    /// from a stray `", "` are kept as `("", "")`.
    pub fn author_entries(&self) -> Vec<AuthorEntry<'_>> {
        match self.authors.as_deref() {
            None | Some("") => Vec::new(),
            Some(authors) => authors.split(AUTHOR_SEP).map(AuthorEntry::parse).collect(),
        }
    }
}

/// One parsed author from a plan's author list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorEntry<'a> {
    pub name: &'a str,
    pub organization: &'a str,
}

impl<'a> AuthorEntry<'a> {
    fn parse(entry: &'a str) -> Self {
        let mut parts = entry.split(AFFILIATION_SEP);
        match (parts.next(), parts.next()) {
            (Some(name), Some(organization)) => Self { name, organization },
            _ => Self {
                name: entry,
                organization: entry,
            },
        }
    }
}

/// One award record returned by the award search service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub pi_first_name: Option<String>,
    #[serde(default)]
    pub pi_last_name: Option<String>,
    #[serde(default)]
    pub awardee_name: Option<String>,
}

impl Candidate {
    /// Candidates without a title or PI last name cannot be scored.
    pub fn is_eligible(&self) -> bool {
        self.title.is_some() && self.pi_last_name.is_some()
    }

    /// `"<first> <last>"`, or just the last name when no first name is recorded.
    pub fn pi_name(&self) -> Option<String> {
        let last = self.pi_last_name.as_deref()?;
        Some(match self.pi_first_name.as_deref() {
            Some(first) => format!("{} {}", first, last),
            None => last.to_string(),
        })
    }
}

/// A candidate paired with its combined score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// Sum of sub-scores. Not a probability; may exceed 1.0.
    pub score: f64,
    pub candidate: Candidate,
}

/// A principal investigator listed on a matched award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investigator {
    pub name: String,
    pub organization: String,
}

/// The award chosen for a plan, folding co-investigator records together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedMatch {
    pub title: String,
    pub principal_investigators: Vec<Investigator>,
    pub award_id: String,
}
