//! Result types for scrape output.
//!
//! This module defines the records produced by the pipeline: the plain-data
//! `RawListing` that leaves the document, the enriched `JobPosting`, and the
//! per-source `ScrapeResult`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder used for unresolved locations and unknown experience.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Canonical "years of experience required" value.
///
/// Serialized as one of `"N+"`, `"N-M"` or `"Not specified"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ExperienceYears {
    /// Open-ended minimum, rendered `"N+"`.
    AtLeast(u64),
    /// Explicit range, rendered `"N-M"`.
    Range(u64, u64),
    /// No evidence found in the description.
    #[default]
    NotSpecified,
}

impl ExperienceYears {
    /// Lower bound of the requirement, if any.
    #[must_use]
    pub fn min_years(self) -> Option<u64> {
        match self {
            Self::AtLeast(n) | Self::Range(n, _) => Some(n),
            Self::NotSpecified => None,
        }
    }

    #[must_use]
    pub fn is_specified(self) -> bool {
        !matches!(self, Self::NotSpecified)
    }
}

impl fmt::Display for ExperienceYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLeast(n) => write!(f, "{n}+"),
            Self::Range(min, max) => write!(f, "{min}-{max}"),
            Self::NotSpecified => f.write_str(NOT_SPECIFIED),
        }
    }
}

/// Error returned when a string is not a canonical experience value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a canonical experience value: {0:?}")]
pub struct ParseExperienceError(String);

impl FromStr for ExperienceYears {
    type Err = ParseExperienceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == NOT_SPECIFIED {
            return Ok(Self::NotSpecified);
        }
        let invalid = || ParseExperienceError(s.to_string());

        if let Some(min) = s.strip_suffix('+') {
            return min.parse().map(Self::AtLeast).map_err(|_| invalid());
        }
        let (min, max) = s.split_once('-').ok_or_else(invalid)?;
        Ok(Self::Range(
            min.parse().map_err(|_| invalid())?,
            max.parse().map_err(|_| invalid())?,
        ))
    }
}

impl From<ExperienceYears> for String {
    fn from(value: ExperienceYears) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for ExperienceYears {
    type Error = ParseExperienceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One listing as read out of a page, before enrichment.
///
/// Every field is an already-serialized primitive value; nothing here refers
/// back to the live document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawListing {
    /// Trimmed title text. Never empty.
    pub title: String,

    /// Trimmed location text, if the location selector matched non-empty text.
    pub location: Option<String>,

    /// Absolute link URL, if the link selector matched an element with `href`.
    pub url: Option<String>,

    /// Trimmed description text used for experience classification only.
    pub description: Option<String>,
}

/// Structured job posting produced by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    /// Company name from the source configuration.
    pub company: String,

    /// Posting title. Never empty.
    pub title: String,

    /// Location text, or `"Not specified"`.
    pub location: String,

    /// Absolute posting URL, or the career page URL when no link resolved.
    pub url: String,

    /// Canonical experience requirement.
    pub experience_years: ExperienceYears,

    /// When the listing was captured.
    pub extracted_at: DateTime<Utc>,
}

/// Outcome of scraping one source.
///
/// Only constructible through [`ScrapeResult::succeeded`] and
/// [`ScrapeResult::failed`], so `success` always agrees with `jobs`/`error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeResult {
    success: bool,
    company: String,
    jobs: Vec<JobPosting>,
    error: Option<String>,
}

impl ScrapeResult {
    #[must_use]
    pub fn succeeded(company: impl Into<String>, jobs: Vec<JobPosting>) -> Self {
        Self {
            success: true,
            company: company.into(),
            jobs,
            error: None,
        }
    }

    #[must_use]
    pub fn failed(company: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            company: company.into(),
            jobs: Vec::new(),
            error: Some(error.into()),
        }
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    #[must_use]
    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_display_uses_canonical_forms() {
        assert_eq!(ExperienceYears::AtLeast(5).to_string(), "5+");
        assert_eq!(ExperienceYears::Range(0, 2).to_string(), "0-2");
        assert_eq!(ExperienceYears::NotSpecified.to_string(), "Not specified");
    }

    #[test]
    fn experience_parses_canonical_forms() {
        assert_eq!("3+".parse(), Ok(ExperienceYears::AtLeast(3)));
        assert_eq!("1-3".parse(), Ok(ExperienceYears::Range(1, 3)));
        assert_eq!("Not specified".parse(), Ok(ExperienceYears::NotSpecified));
        assert!("three".parse::<ExperienceYears>().is_err());
        assert!("1-".parse::<ExperienceYears>().is_err());
    }

    #[test]
    fn job_posting_serializes_camel_case_with_string_experience() {
        let job = JobPosting {
            company: "Acme".into(),
            title: "Junior Dev".into(),
            location: "Berlin".into(),
            url: "https://acme.example/jobs/1".into(),
            experience_years: ExperienceYears::Range(0, 2),
            extracted_at: DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["experienceYears"], "0-2");
        assert_eq!(json["extractedAt"], "2026-01-02T03:04:05Z");
        assert!(json.get("description").is_none());

        let back: JobPosting = serde_json::from_value(json).unwrap();
        assert_eq!(back, job);
    }

    #[test]
    fn failed_result_has_no_jobs_and_an_error() {
        let result = ScrapeResult::failed("Acme", "boom");
        assert!(!result.success());
        assert!(result.jobs().is_empty());
        assert_eq!(result.error(), Some("boom"));

        let ok = ScrapeResult::succeeded("Acme", Vec::new());
        assert!(ok.success());
        assert!(ok.error().is_none());
    }
}
