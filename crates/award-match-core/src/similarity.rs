use strsim::normalized_levenshtein;

/// Normalized Levenshtein similarity between two strings.
///
/// `1 - distance / max(len(a), len(b))`, lengths in chars. Two empty strings
/// are identical (1.0). Symmetric, and 1.0 whenever `a == b`.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// [`similarity`] over optional text. Returns `None` if either side is absent.
pub fn similarity_opt(a: Option<&str>, b: Option<&str>) -> Option<f64> {
    Some(similarity(a?, b?))
}
