//! Stopword sets used during title normalization.

use std::collections::HashSet;

/// Read-only stopword membership test.
///
/// Implementations must be safe to share across threads so that candidates
/// can be scored in parallel against one normalizer.
pub trait StopwordSet: Send + Sync {
    /// `token` is compared case-insensitively.
    fn is_stopword(&self, token: &str) -> bool;
}

/// English stopwords (the common NLTK list).
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the",
    "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re",
    "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn",
    "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
    "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// A stopword set built from an arbitrary word list.
#[derive(Debug, Clone, Default)]
pub struct StopwordList {
    words: HashSet<String>,
}

impl StopwordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a word-per-line resource. Blank lines and `#` comments are skipped.
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Same as [`EnglishStopwords`] but owned, so it can be extended.
    pub fn english() -> Self {
        Self::new(ENGLISH.iter())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopwordSet for StopwordList {
    fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }
}

/// The built-in English stopword set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishStopwords;

impl StopwordSet for EnglishStopwords {
    fn is_stopword(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        ENGLISH.contains(&lower.as_str())
    }
}

/// Accepts nothing as a stopword. Useful when comparing raw token streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStopwords;

impl StopwordSet for NoStopwords {
    fn is_stopword(&self, _token: &str) -> bool {
        false
    }
}
