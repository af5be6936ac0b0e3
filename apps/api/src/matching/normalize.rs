//! Text normalization shared by keyword extraction and scoring.

/// Lowercases `text`, replaces every character that is not a letter, digit or
/// whitespace with a space, collapses whitespace runs and trims.
///
/// Substitution is per character, so compound terms split apart:
/// `"Node.js"` becomes `"node js"`.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when `phrase` occurs in `text` bounded by token edges.
/// Both sides are expected to be normalized already.
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    format!(" {text} ").contains(&format!(" {phrase} "))
}
