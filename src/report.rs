//! Output artifact for a finished run.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::orchestrator::SourceError;
use crate::result::JobPosting;

/// Result file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeReport {
    pub scraped_at: DateTime<Utc>,
    /// Postings written to `jobs`.
    pub total_jobs: usize,
    /// Postings aggregated before filtering.
    pub total_scraped: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<SourceError>,
    pub jobs: Vec<JobPosting>,
}

impl ScrapeReport {
    #[must_use]
    pub fn new(total_scraped: usize, jobs: Vec<JobPosting>, errors: Vec<SourceError>) -> Self {
        Self {
            scraped_at: Utc::now(),
            total_jobs: jobs.len(),
            total_scraped,
            errors,
            jobs,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as pretty JSON, creating parent directories as needed.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), jobs = self.total_jobs, "Wrote results");
        Ok(())
    }
}
