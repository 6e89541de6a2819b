/// Lowercases a free-text symptom description for keyword matching.
/// Nothing else is stripped: matching is plain substring containment.
pub fn normalize_text(raw: &str) -> String {
    raw.to_lowercase()
}

/// Substring test against already-lowercased text. No word boundaries,
/// so "headache" also matches "headached".
pub fn contains_keyword(normalized_text: &str, keyword: &str) -> bool {
    normalized_text.contains(keyword)
}

pub fn contains_any(normalized_text: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| contains_keyword(normalized_text, keyword))
}
