//! Experience requirement classification.
//!
//! Infers a canonical "years of experience required" value from free-text
//! posting descriptions. Numeric evidence always outranks keyword evidence:
//! the three year patterns in [`patterns::EXPERIENCE_PATTERNS`] are tried
//! first, most specific to loosest, and entry-level phrases are only consulted
//! when none of them match.

use crate::patterns::{ENTRY_LEVEL_PHRASES, EXPERIENCE_PATTERNS};
use crate::result::ExperienceYears;

/// Value assigned when only entry-level phrases are found.
pub const ENTRY_LEVEL: ExperienceYears = ExperienceYears::Range(0, 2);

/// Classify a description into a canonical experience value.
///
/// # Example
///
/// ```rust
/// use job_scout::classify::classify;
/// use job_scout::ExperienceYears;
///
/// assert_eq!(classify(Some("3-5 years of experience")), ExperienceYears::Range(3, 5));
/// assert_eq!(classify(Some("5+ Jahre Erfahrung")), ExperienceYears::AtLeast(5));
/// assert_eq!(classify(None), ExperienceYears::NotSpecified);
/// ```
#[must_use]
pub fn classify(description: Option<&str>) -> ExperienceYears {
    let Some(text) = description.filter(|d| !d.trim().is_empty()) else {
        return ExperienceYears::NotSpecified;
    };

    if let Some(years) = years_from_patterns(text) {
        return years;
    }

    let lower = text.to_lowercase();
    if ENTRY_LEVEL_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
        return ENTRY_LEVEL;
    }

    ExperienceYears::NotSpecified
}

/// First pattern whose captures canonicalize. A pattern whose captures do not
/// yield a value counts as no match and the next pattern is tried.
fn years_from_patterns(text: &str) -> Option<ExperienceYears> {
    EXPERIENCE_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(text)?;
        let min = years(caps.get(1)?.as_str())?;
        match caps.get(2) {
            Some(max) => Some(ExperienceYears::Range(min, years(max.as_str())?)),
            None => Some(ExperienceYears::AtLeast(min)),
        }
    })
}

/// Parse an ASCII digit run. Counts beyond `u64` saturate so that an absurd
/// requirement still reads as a large one.
fn years(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse().unwrap_or(u64::MAX))
}
