//! Static skill tables: alias → canonical skill, and soft-skill synonym groups.
//!
//! Both tables are built once on first access and never mutated, so any
//! number of requests may read them concurrently without locking.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Alias → canonical form. Every canonical form also appears as its own alias.
const SKILL_ALIASES: &[(&str, &str)] = &[
    ("ml", "machine learning"),
    ("machine learning", "machine learning"),
    ("ai", "artificial intelligence"),
    ("artificial intelligence", "artificial intelligence"),
    ("dl", "deep learning"),
    ("deep learning", "deep learning"),
    ("ds", "data science"),
    ("data science", "data science"),
    ("nlp", "natural language processing"),
    ("natural language processing", "natural language processing"),
    ("r programming", "r"),
    ("r", "r"),
    ("python", "python"),
    ("py", "python"),
    ("sql", "sql"),
    ("mysql", "sql"),
    ("postgresql", "sql"),
    ("aws", "aws"),
    ("amazon web services", "aws"),
    ("hadoop", "hadoop"),
    ("spark", "spark"),
    ("apache spark", "spark"),
    ("tableau", "tableau"),
    ("power bi", "power bi"),
    ("powerbi", "power bi"),
    ("excel", "excel"),
    ("microsoft excel", "excel"),
    ("java", "java"),
    ("javascript", "javascript"),
    ("js", "javascript"),
    ("react", "react"),
    ("react.js", "react"),
    ("reactjs", "react"),
    ("node", "node.js"),
    ("node.js", "node.js"),
    ("nodejs", "node.js"),
    ("docker", "docker"),
    ("kubernetes", "kubernetes"),
    ("k8s", "kubernetes"),
    ("git", "git"),
    ("github", "github"),
    ("gitlab", "gitlab"),
    ("agile", "agile"),
    ("scrum", "scrum"),
];

const SOFT_SKILL_GROUPS: &[(&str, &[&str])] = &[
    (
        "problem solving",
        &[
            "critical thinking",
            "analytical thinking",
            "decision making",
            "troubleshooting",
        ],
    ),
    (
        "teamwork",
        &[
            "collaboration",
            "team player",
            "team collaboration",
            "working with others",
        ],
    ),
    (
        "communication",
        &[
            "presenting",
            "reporting",
            "explaining",
            "written communication",
            "verbal communication",
        ],
    ),
    (
        "leadership",
        &["managing", "supervising", "guiding", "mentoring"],
    ),
    (
        "time management",
        &["organization", "planning", "prioritization"],
    ),
];

/// Single-word language and tool names looked for in every job description.
pub const TECHNICAL_TERMS: &[&str] = &[
    "python",
    "sql",
    "java",
    "javascript",
    "react",
    "node",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "tableau",
    "excel",
];

/// Education and experience phrases looked for in every job description.
pub const EXPERIENCE_TERMS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "degree",
    "years experience",
    "experience with",
    "knowledge of",
    "proficient in",
];

/// Alias → canonical skill map. Sorted by alias so iteration is stable.
pub static SKILL_MAP: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| SKILL_ALIASES.iter().copied().collect());

/// Soft-skill main phrase → ordered synonym list.
pub static SOFT_SKILL_SYNONYMS: LazyLock<BTreeMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| SOFT_SKILL_GROUPS.iter().copied().collect());

/// Canonical form for a known alias.
pub fn canonical_skill(alias: &str) -> Option<&'static str> {
    SKILL_MAP.get(alias).copied()
}

/// Soft-skill groups `keyword` belongs to, either as the main phrase or as a
/// synonym. Each group is yielded as `(main, synonyms)`.
pub fn soft_skill_groups_for<'a>(
    keyword: &'a str,
) -> impl Iterator<Item = (&'static str, &'static [&'static str])> + 'a {
    SOFT_SKILL_SYNONYMS
        .iter()
        .filter(move |(main, synonyms)| **main == keyword || synonyms.contains(&keyword))
        .map(|(main, synonyms)| (*main, *synonyms))
}
