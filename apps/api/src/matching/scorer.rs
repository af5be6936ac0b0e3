//! Match scoring: measures how many JD keywords a résumé covers.
//!
//! Each keyword is tried in order, stopping at the first hit:
//! 1. the keyword itself occurs in the normalized résumé
//! 2. its canonical skill form occurs (`"ml"` → `"machine learning"`)
//! 3. any phrase of a soft-skill group it belongs to occurs
//!
//! `percentage = round(100 × matched / keywords, 2)`, rounding half away from
//! zero. No keywords means 0%, never a division.

use std::iter;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::dictionary::{canonical_skill, soft_skill_groups_for};
use crate::matching::extractor::extract_from_normalized;
use crate::matching::normalize::normalize;
use crate::matching::{KeywordSet, MatchMode};

/// Percentage of JD keywords found in a résumé, plus which ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchResult {
    /// 0.0 – 100.0, two decimals
    pub percentage: f64,
    /// Always a subset of the extracted keyword set
    pub matched_keywords: KeywordSet,
}

/// Coarse band of a match percentage, used for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    /// ≥ 70%
    Strong,
    /// 40 – 69.99%
    Moderate,
    /// < 40%
    Weak,
}

impl MatchBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 70.0 {
            MatchBand::Strong
        } else if percentage >= 40.0 {
            MatchBand::Moderate
        } else {
            MatchBand::Weak
        }
    }
}

/// Scores a résumé against a job description with substring matching.
pub fn compute_match(resume_text: &str, job_description: &str) -> MatchResult {
    compute_match_with(resume_text, job_description, MatchMode::Substring)
}

/// Scores a résumé against a job description using `mode` for every
/// containment test (extraction and scoring alike).
pub fn compute_match_with(resume_text: &str, job_description: &str, mode: MatchMode) -> MatchResult {
    let resume = normalize(resume_text);
    let keywords = extract_from_normalized(&normalize(job_description), mode);
    score_keywords(&keywords, &resume, mode)
}

/// Scores an already-extracted keyword set against a normalized résumé.
pub fn score_keywords(keywords: &KeywordSet, normalized_resume: &str, mode: MatchMode) -> MatchResult {
    if keywords.is_empty() {
        return MatchResult::default();
    }

    let matched_keywords: KeywordSet = keywords
        .iter()
        .filter(|kw| keyword_present(kw, normalized_resume, mode))
        .cloned()
        .collect();

    let percentage = round_percentage(matched_keywords.len(), keywords.len());

    debug!(
        matched = matched_keywords.len(),
        total = keywords.len(),
        percentage,
        "Scored résumé against JD keywords"
    );

    MatchResult {
        percentage,
        matched_keywords,
    }
}

fn keyword_present(keyword: &str, resume: &str, mode: MatchMode) -> bool {
    if mode.contains(resume, keyword) {
        return true;
    }

    if let Some(canonical) = canonical_skill(keyword) {
        if mode.contains(resume, canonical) {
            return true;
        }
    }

    soft_skill_groups_for(keyword).any(|(main, synonyms)| {
        synonyms
            .iter()
            .copied()
            .chain(iter::once(main))
            .any(|phrase| mode.contains(resume, phrase))
    })
}

/// `100 × matched / total` rounded to two decimals, half away from zero.
fn round_percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = matched as f64 * 100.0 / total as f64;
    (raw * 100.0).round() / 100.0
}
