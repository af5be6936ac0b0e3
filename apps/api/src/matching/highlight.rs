//! Highlighting: wraps matched keywords in the original résumé text with `**…**`.
//!
//! All keywords go into one case-insensitive alternation anchored on word
//! boundaries and the text is rewritten in a single pass, so a span is never
//! wrapped twice and the result does not depend on keyword order. Longer
//! keywords come first in the alternation so `"javascript"` wins over `"java"`.

use regex::{Captures, Regex};
use tracing::warn;

use crate::matching::KeywordSet;

const BOLD: &str = "**";

/// Returns `resume_text` with every whole-word, case-insensitive occurrence of
/// a keyword wrapped in bold markers. Matched text keeps its original casing.
pub fn highlight(resume_text: &str, keywords: &KeywordSet) -> String {
    let Some(pattern) = build_pattern(keywords) else {
        return resume_text.to_string();
    };

    match Regex::new(&pattern) {
        Ok(re) => re
            .replace_all(resume_text, |caps: &Captures| {
                format!("{BOLD}{}{BOLD}", &caps[0])
            })
            .into_owned(),
        Err(e) => {
            warn!("Highlight pattern rejected, returning text unmarked: {e}");
            resume_text.to_string()
        }
    }
}

/// Builds `(?i)\b(?:kw1|kw2|…)\b`, longest keyword first. Words inside a
/// multi-word keyword may be separated by any whitespace run, so phrases
/// broken across lines by PDF extraction still match.
fn build_pattern(keywords: &KeywordSet) -> Option<String> {
    let mut ordered: Vec<&str> = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect();
    if ordered.is_empty() {
        return None;
    }
    ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    ordered.dedup();

    let alternatives: Vec<String> = ordered
        .iter()
        .map(|k| {
            k.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect();

    Some(format!(r"(?i)\b(?:{})\b", alternatives.join("|")))
}
