//! # job-scout
//!
//! Collects job postings from a configurable set of company career pages,
//! classifies the experience each posting asks for, and filters the result
//! down to junior-friendly roles in a target region.
//!
//! ## Quick Start
//!
//! ```rust
//! use job_scout::{extractor, ExperienceYears, JobFilter, SelectorProfile};
//! use url::Url;
//!
//! let html = r#"<ul>
//!   <li class="job"><h3>Junior Developer</h3><span class="loc">Berlin</span>
//!     <a href="/jobs/1">Apply</a><p>1-2 years of experience</p></li>
//! </ul>"#;
//! let selectors = SelectorProfile {
//!     job_list: ".job-card, li.job".into(),
//!     job_title: "h3".into(),
//!     job_location: ".location, .loc".into(),
//!     job_link: "a".into(),
//!     job_description: "p".into(),
//! };
//! let page = Url::parse("https://acme.example/careers")?;
//!
//! let jobs: Vec<_> = extractor::extract_html(html, &page, &selectors)
//!     .into_iter()
//!     .map(|raw| extractor::enrich(raw, "Acme", page.as_str(), chrono::Utc::now()))
//!     .collect();
//! assert_eq!(jobs[0].experience_years, ExperienceYears::Range(1, 2));
//!
//! let kept = JobFilter::default().filter(&jobs);
//! assert_eq!(kept.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Selector resolution**: every field is a chain of fallback CSS selectors
//! - **Extraction**: listings are read out of a page snapshot as plain data
//! - **Classification**: years of experience inferred from description text
//! - **Orchestration**: sources scraped sequentially with per-source failure isolation
//! - **Filtering**: location, seniority and experience predicates plus URL dedup

mod error;
mod result;

/// Run configuration.
pub mod config;

/// Company source configuration.
pub mod source;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Fallback selector chains.
pub mod selector;

/// URL utilities for resolving listing links.
pub mod url_utils;

/// Compiled regex patterns and default keyword tables.
pub mod patterns;

/// Character encoding detection for fetched pages.
pub mod encoding;

/// Listing extraction and enrichment.
pub mod extractor;

/// Experience requirement classification.
pub mod classify;

/// Browser capability and backends.
pub mod browser;

/// Single-source scrape session.
pub mod session;

/// Sequential multi-source run.
pub mod orchestrator;

/// Posting filters, deduplication and statistics.
pub mod filter;

/// Output artifact.
pub mod report;

// Public API - re-exports
pub use browser::{Browser, BrowserlessBrowser, HttpBrowser, PageSnapshot};
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{FilterPolicy, FilterStats, JobFilter};
pub use orchestrator::{aggregate, errors, Orchestrator, SourceError};
pub use report::ScrapeReport;
pub use result::{ExperienceYears, JobPosting, ParseExperienceError, RawListing, ScrapeResult, NOT_SPECIFIED};
pub use session::SourceSession;
pub use source::{CompanyFile, SelectorProfile, SourceConfig};
