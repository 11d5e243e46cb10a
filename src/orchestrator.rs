//! Sequential multi-source scrape run.
//!
//! Sources are visited strictly one after another, one browsing context at a
//! time, with a politeness delay between them. Any error inside a source
//! becomes that source's failed [`ScrapeResult`]; the run itself always
//! finishes and always closes the browser exactly once.

use serde::Serialize;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::browser::Browser;
use crate::config::Config;
use crate::result::{JobPosting, ScrapeResult};
use crate::session::SourceSession;
use crate::source::SourceConfig;

/// Error entry for the output report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceError {
    pub company: String,
    pub error: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Orchestrator<'c> {
    config: &'c Config,
}

impl<'c> Orchestrator<'c> {
    #[must_use]
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Scrape every source in order, taking ownership of the browser for the run.
    ///
    /// Returns one result per source, in input order.
    pub async fn run_all<B: Browser>(&self, browser: B, sources: &[SourceConfig]) -> Vec<ScrapeResult> {
        info!(sources = sources.len(), "Starting scrape run");

        let session = SourceSession::new(self.config);
        let mut results = Vec::with_capacity(sources.len());

        for (i, source) in sources.iter().enumerate() {
            let result = match session.run(source, &browser).await {
                Ok(jobs) => ScrapeResult::succeeded(&source.name, jobs),
                Err(e) => {
                    error!(company = source.name.as_str(), error = %e, "Error scraping source");
                    ScrapeResult::failed(&source.name, e.to_string())
                }
            };
            results.push(result);

            if i + 1 < sources.len() {
                info!("Waiting before next company...");
                sleep(self.config.source_delay).await;
            }
        }

        if let Err(e) = browser.close().await {
            warn!(error = %e, "Failed to close browser");
        }

        let failed = results.iter().filter(|r| !r.success()).count();
        info!(
            sources = results.len(),
            failed,
            jobs = results.iter().map(|r| r.jobs().len()).sum::<usize>(),
            "Scrape run finished"
        );
        results
    }
}

/// All postings from successful sources, in source order.
#[must_use]
pub fn aggregate(results: &[ScrapeResult]) -> Vec<JobPosting> {
    results
        .iter()
        .filter(|r| r.success())
        .flat_map(|r| r.jobs().iter().cloned())
        .collect()
}

/// `{company, error}` pairs for every failed source.
#[must_use]
pub fn errors(results: &[ScrapeResult]) -> Vec<SourceError> {
    results
        .iter()
        .filter_map(|r| {
            r.error().map(|error| SourceError {
                company: r.company().to_string(),
                error: error.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::job;
    use crate::result::ExperienceYears;

    #[test]
    fn aggregate_keeps_source_order_and_skips_failures() {
        let results = vec![
            ScrapeResult::succeeded(
                "A",
                vec![
                    job("One", "Berlin", ExperienceYears::NotSpecified, "https://a.example/1"),
                    job("Two", "Berlin", ExperienceYears::NotSpecified, "https://a.example/2"),
                ],
            ),
            ScrapeResult::failed("B", "Navigation timeout"),
            ScrapeResult::succeeded(
                "C",
                vec![job("Three", "Bonn", ExperienceYears::NotSpecified, "https://c.example/3")],
            ),
        ];

        let titles: Vec<String> = aggregate(&results).into_iter().map(|j| j.title).collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);

        assert_eq!(
            errors(&results),
            vec![SourceError {
                company: "B".into(),
                error: "Navigation timeout".into(),
            }]
        );
    }
}
