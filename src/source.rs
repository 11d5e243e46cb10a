//! Source configuration: one company career page plus its selector profile.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Marker in `notes` that flags a template entry rather than a real source.
const EXAMPLE_MARKER: &str = "example";

/// Fallback selector chains for each semantic field of a listing.
///
/// Each value is a comma-separated list of CSS selectors, tried in order.
/// Missing keys deserialize as empty chains, which resolve to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectorProfile {
    pub job_list: String,
    pub job_title: String,
    pub job_location: String,
    pub job_link: String,
    pub job_description: String,
}

/// One configured company career page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub name: String,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub selectors: SelectorProfile,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SourceConfig {
    /// Whether the entry is a template or lacks a URL.
    #[must_use]
    pub fn is_excluded(&self) -> bool {
        let is_example = self
            .notes
            .as_deref()
            .is_some_and(|n| n.to_lowercase().contains(EXAMPLE_MARKER));
        let has_url = self.url.as_deref().is_some_and(|u| !u.trim().is_empty());
        is_example || !has_url
    }

    /// Career page URL. Empty for excluded entries.
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_deref().map_or("", str::trim)
    }
}

/// Top-level shape of the companies file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyFile {
    #[serde(default)]
    pub companies: Vec<SourceConfig>,
}

impl CompanyFile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read companies file {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Drops excluded entries and fails if nothing is left.
    pub fn usable_sources(self) -> Result<Vec<SourceConfig>> {
        let total = self.companies.len();
        let usable: Vec<SourceConfig> = self
            .companies
            .into_iter()
            .filter(|source| {
                let excluded = source.is_excluded();
                if excluded {
                    debug!(company = source.name.as_str(), "Skipping example or url-less source");
                }
                !excluded
            })
            .collect();

        if usable.is_empty() {
            return Err(Error::NoUsableSources);
        }

        info!(usable = usable.len(), total, "Loaded company sources");
        Ok(usable)
    }
}
