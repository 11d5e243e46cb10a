//! Compiled regex patterns and keyword tables for classification and filtering.
//!
//! All patterns are compiled once at first use using `LazyLock`. Digits are
//! matched as ASCII `[0-9]` only; Unicode `\d` would capture digits that do
//! not parse as integers.
//!
//! Keyword tables are the default policy data behind `FilterPolicy` and the
//! experience classifier; callers that need different tables build their own
//! `FilterPolicy` instead of editing these.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Experience Requirement Patterns
// =============================================================================

/// Years-then-noun form: "3-5 years of experience", "2+ Jahre Erfahrung".
pub static YEARS_THEN_NOUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)([0-9]+)\+?\s*(?:-\s*([0-9]+))?\s*(?:years?|yrs?|jahre)\s*(?:of)?\s*(?:experience|erfahrung)",
    )
    .expect("YEARS_THEN_NOUN regex")
});

/// Noun-then-years form: "Experience: at least 4 years".
pub static NOUN_THEN_YEARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:experience|erfahrung).*?([0-9]+)\+?\s*(?:-\s*([0-9]+))?\s*(?:years?|yrs?|jahre)")
        .expect("NOUN_THEN_YEARS regex")
});

/// Bare years form: "5+ years". Loosest, so it is tried last.
pub static BARE_YEARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\+?\s*(?:-\s*([0-9]+))?\s*(?:jahre|years?|yrs?)").expect("BARE_YEARS regex")
});

/// Experience patterns in precedence order; the first match wins.
pub static EXPERIENCE_PATTERNS: LazyLock<[&'static Regex; 3]> =
    LazyLock::new(|| [&*YEARS_THEN_NOUN, &*NOUN_THEN_YEARS, &*BARE_YEARS]);

// =============================================================================
// Keyword Tables
// =============================================================================

/// Description phrases that imply an entry-level role when no year count is given.
pub const ENTRY_LEVEL_PHRASES: &[&str] = &[
    "entry level",
    "entry-level",
    "berufseinsteiger",
    "no experience",
    "graduate",
    "junior",
];

/// Location gazetteer: country names, major cities and regions.
/// Umlaut and transliterated spellings are listed separately.
pub const GERMANY_LOCATIONS: &[&str] = &[
    // Country
    "germany",
    "deutschland",
    "german",
    // Cities
    "berlin",
    "munich",
    "münchen",
    "hamburg",
    "cologne",
    "köln",
    "frankfurt",
    "stuttgart",
    "düsseldorf",
    "dusseldorf",
    "dortmund",
    "essen",
    "leipzig",
    "bremen",
    "dresden",
    "hanover",
    "hannover",
    "nuremberg",
    "nürnberg",
    "duisburg",
    "bochum",
    "wuppertal",
    "bielefeld",
    "bonn",
    "münster",
    "mannheim",
    "augsburg",
    "karlsruhe",
    "wiesbaden",
    "heidelberg",
    "freiburg",
    "potsdam",
    // Regions
    "bavaria",
    "bayern",
    "nordrhein",
    "westfalen",
    "baden-württemberg",
    "sachsen",
    "hessen",
    // Remote
    "remote germany",
    "remote de",
];

/// Title/location keywords marking a junior role.
pub const JUNIOR_KEYWORDS: &[&str] = &[
    "junior",
    "entry-level",
    "entry level",
    "graduate",
    "berufseinsteiger",
    "trainee",
    "associate",
    "nachwuchs",
];

/// Title/location keywords marking a senior role. Any hit vetoes the posting.
pub const SENIOR_KEYWORDS: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "staff",
    "architect",
    "manager",
    "director",
    "head of",
    "chief",
    "vp",
    "vice president",
];

/// Experience fragments counted as a low-experience signal.
pub const LOW_EXPERIENCE_MARKERS: &[&str] = &["0-", "1-", "2-"];
