// Keyword matching engine: JD keyword extraction, skill normalization,
// percentage scoring and résumé highlighting.
// Everything here is synchronous and pure; no I/O, no LLM calls.

pub mod dictionary;
pub mod extractor;
pub mod highlight;
pub mod normalize;
pub mod scorer;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use extractor::{extract_keywords, extract_keywords_with};
pub use highlight::highlight;
pub use normalize::normalize;
pub use scorer::{compute_match, compute_match_with, MatchBand, MatchResult};

/// Deduplicated keyword phrases. Ordered so every pass over it is deterministic.
pub type KeywordSet = BTreeSet<String>;

/// How phrase containment is tested against normalized text.
///
/// `Substring` admits partial-word hits (`"ai"` inside `"maintain"`) and is
/// the default. `WordBoundary` requires the phrase to sit on token edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    Substring,
    WordBoundary,
}

impl MatchMode {
    /// Tests whether `phrase` occurs in the already-normalized `text`.
    pub fn contains(self, text: &str, phrase: &str) -> bool {
        match self {
            MatchMode::Substring => text.contains(phrase),
            MatchMode::WordBoundary => normalize::contains_phrase(text, phrase),
        }
    }
}
