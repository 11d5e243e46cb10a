//! Per-criterion filter statistics.
//!
//! Counts are recomputed from the original set one predicate at a time, so an
//! operator can see which criterion removes the most postings. They are
//! independent of the combined filtering decision and of deduplication.

use serde::{Deserialize, Serialize};

use super::FilterPolicy;
use crate::result::JobPosting;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStats {
    pub total_original: usize,
    pub total_filtered: usize,
    pub removed: usize,
    /// Originals passing the location predicate alone.
    pub by_location: usize,
    /// Originals passing the seniority predicate alone.
    pub by_level: usize,
    /// Originals passing the experience ceiling alone.
    pub by_experience: usize,
}

/// Compute statistics for a filter run.
#[must_use]
pub fn stats(policy: &FilterPolicy, original: &[JobPosting], filtered: &[JobPosting]) -> FilterStats {
    let count = |pred: fn(&FilterPolicy, &JobPosting) -> bool| {
        original.iter().filter(|job| pred(policy, job)).count()
    };

    FilterStats {
        total_original: original.len(),
        total_filtered: filtered.len(),
        removed: original.len().saturating_sub(filtered.len()),
        by_location: count(FilterPolicy::matches_location),
        by_level: count(FilterPolicy::matches_seniority),
        by_experience: count(FilterPolicy::matches_experience),
    }
}
