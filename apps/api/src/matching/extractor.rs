//! Keyword extraction: scans a job description for known skill phrases,
//! technical terms, education/experience phrases and soft skills.
//!
//! Containment is raw substring matching unless the caller asks for
//! `MatchMode::WordBoundary`, so short terms can hit inside longer words
//! (`"java"` inside `"javascript"`). That precision trade-off is kept on purpose.

use std::collections::HashSet;

use tracing::debug;

use crate::matching::dictionary::{EXPERIENCE_TERMS, SKILL_MAP, SOFT_SKILL_SYNONYMS, TECHNICAL_TERMS};
use crate::matching::normalize::normalize;
use crate::matching::{KeywordSet, MatchMode};

/// Shortest single-word alias picked up by token matching. Keeps `"r"` from
/// firing on every stray letter.
const MIN_ALIAS_TOKEN_LEN: usize = 2;

/// Extracts the keyword set of a job description with substring matching.
pub fn extract_keywords(job_description: &str) -> KeywordSet {
    extract_keywords_with(job_description, MatchMode::Substring)
}

/// Extracts the keyword set of a job description using `mode` for containment.
pub fn extract_keywords_with(job_description: &str, mode: MatchMode) -> KeywordSet {
    let text = normalize(job_description);
    let keywords = extract_from_normalized(&text, mode);
    debug!(count = keywords.len(), ?mode, "Extracted JD keywords");
    keywords
}

/// Extraction over text that has already been through `normalize`.
pub(crate) fn extract_from_normalized(text: &str, mode: MatchMode) -> KeywordSet {
    let mut keywords = KeywordSet::new();
    if text.is_empty() {
        return keywords;
    }

    // Multi-word aliases, kept in their alias form
    for alias in SKILL_MAP.keys().filter(|a| a.contains(' ')) {
        if mode.contains(text, alias) {
            keywords.insert((*alias).to_string());
        }
    }

    for term in TECHNICAL_TERMS.iter().chain(EXPERIENCE_TERMS) {
        if mode.contains(text, term) {
            keywords.insert((*term).to_string());
        }
    }

    // Short aliases ("ml", "k8s") only count as whole tokens
    let tokens: HashSet<&str> = text.split(' ').collect();
    for alias in SKILL_MAP
        .keys()
        .filter(|a| !a.contains(' ') && a.len() >= MIN_ALIAS_TOKEN_LEN)
    {
        if tokens.contains(alias) {
            keywords.insert((*alias).to_string());
        }
    }

    for main in SOFT_SKILL_SYNONYMS.keys() {
        if mode.contains(text, main) {
            keywords.insert((*main).to_string());
        }
    }

    keywords
}
