//! Location / seniority / experience filtering and URL deduplication.
//!
//! The keyword tables are data held by [`FilterPolicy`], not code. The
//! predicates only do case-insensitive substring checks against them.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::patterns::{GERMANY_LOCATIONS, JUNIOR_KEYWORDS, LOW_EXPERIENCE_MARKERS, SENIOR_KEYWORDS};
use crate::result::{ExperienceYears, JobPosting};

pub mod stats;

pub use stats::{stats, FilterStats};

/// Keyword tables and thresholds driving the filter predicates.
///
/// `"Not specified"` experience is treated leniently by two predicates: it
/// counts as a low-experience signal for seniority and always passes the
/// experience ceiling. Both are intentional; an unknown requirement should
/// not hide a posting whose title and location already fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterPolicy {
    /// Location gazetteer, matched as lowercase substrings of `location`.
    pub locations: Vec<String>,

    /// Junior indicators, matched against `"{title} {location}"`.
    pub junior_keywords: Vec<String>,

    /// Senior indicators. Any hit vetoes the posting.
    pub senior_keywords: Vec<String>,

    /// Experience fragments counted as a low-experience signal.
    pub low_experience_markers: Vec<String>,

    /// Highest accepted minimum years of experience.
    pub max_years: u32,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        fn owned(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| (*w).to_string()).collect()
        }

        Self {
            locations: owned(GERMANY_LOCATIONS),
            junior_keywords: owned(JUNIOR_KEYWORDS),
            senior_keywords: owned(SENIOR_KEYWORDS),
            low_experience_markers: owned(LOW_EXPERIENCE_MARKERS),
            max_years: 3,
        }
    }
}

impl FilterPolicy {
    /// Load a policy from JSON. Omitted tables keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read filter policy {}: {e}", path.display()))
        })?;
        let policy: Self = serde_json::from_str(&json)?;
        Ok(policy.normalized())
    }

    /// Lowercase every keyword so matching only lowercases the haystack.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        for table in [
            &mut self.locations,
            &mut self.junior_keywords,
            &mut self.senior_keywords,
        ] {
            for word in table.iter_mut() {
                *word = word.to_lowercase();
            }
        }
        self
    }

    /// Location predicate: the location mentions a gazetteer entry.
    #[must_use]
    pub fn matches_location(&self, job: &JobPosting) -> bool {
        contains_any(&job.location, &self.locations)
    }

    /// Seniority predicate: junior signal present and no senior keyword.
    #[must_use]
    pub fn matches_seniority(&self, job: &JobPosting) -> bool {
        let combined = format!("{} {}", job.title, job.location);

        if contains_any(&combined, &self.senior_keywords) {
            return false;
        }

        contains_any(&combined, &self.junior_keywords) || self.has_low_experience(job.experience_years)
    }

    /// Experience ceiling: unspecified passes, otherwise the minimum must be within `max_years`.
    #[must_use]
    pub fn matches_experience(&self, job: &JobPosting) -> bool {
        job.experience_years
            .min_years()
            .is_none_or(|min| min <= u64::from(self.max_years))
    }

    /// All three predicates hold.
    #[must_use]
    pub fn accepts(&self, job: &JobPosting) -> bool {
        self.matches_location(job) && self.matches_seniority(job) && self.matches_experience(job)
    }

    /// Textual check on the canonical form, so `"10-12"` also contains `"0-"`.
    fn has_low_experience(&self, years: ExperienceYears) -> bool {
        if !years.is_specified() {
            return true;
        }
        let text = years.to_string();
        self.low_experience_markers
            .iter()
            .any(|marker| text.contains(marker.as_str()))
    }
}

/// Case-insensitive substring match against lowercase keywords.
fn contains_any(text: &str, keywords: &[String]) -> bool {
    if text.is_empty() {
        return false;
    }
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k.as_str()))
}

/// Applies a [`FilterPolicy`] and removes duplicate URLs.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    policy: FilterPolicy,
}

impl JobFilter {
    #[must_use]
    pub fn new(policy: FilterPolicy) -> Self {
        Self {
            policy: policy.normalized(),
        }
    }

    #[must_use]
    pub fn policy(&self) -> &FilterPolicy {
        &self.policy
    }

    /// Keep postings passing every predicate, then drop repeated URLs.
    ///
    /// The first occurrence of a URL in input order is kept. Running the
    /// filter on its own output returns that output unchanged.
    #[must_use]
    pub fn filter(&self, jobs: &[JobPosting]) -> Vec<JobPosting> {
        let mut seen: HashSet<&str> = HashSet::new();
        let kept: Vec<JobPosting> = jobs
            .iter()
            .filter(|job| self.policy.accepts(job))
            .filter(|job| seen.insert(job.url.as_str()))
            .cloned()
            .collect();

        debug!(input = jobs.len(), kept = kept.len(), "Filtered postings");
        kept
    }

    /// Per-criterion statistics for `original` against `filtered`.
    #[must_use]
    pub fn stats(&self, original: &[JobPosting], filtered: &[JobPosting]) -> FilterStats {
        stats(&self.policy, original, filtered)
    }
}
