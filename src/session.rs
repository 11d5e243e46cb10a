//! One source visit: context lifecycle, navigation, lazy-load triggering,
//! extraction and enrichment.

use chrono::Utc;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

use crate::browser::{Browser, ContextOptions, PageSnapshot};
use crate::config::{duration_ms, Config};
use crate::error::{Error, Result};
use crate::extractor::{enrich, extract_html};
use crate::result::JobPosting;
use crate::source::SourceConfig;
use crate::url_utils::parse_page_url;

/// Scrapes a single source inside its own browsing context.
#[derive(Debug, Clone, Copy)]
pub struct SourceSession<'c> {
    config: &'c Config,
}

impl<'c> SourceSession<'c> {
    #[must_use]
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Visit `source` and return its enriched postings.
    ///
    /// The context opened here is closed on every path out, including errors.
    /// A failure to close is logged and never replaces the visit's own outcome.
    pub async fn run<B: Browser>(&self, source: &SourceConfig, browser: &B) -> Result<Vec<JobPosting>> {
        info!(company = source.name.as_str(), url = source.url(), "Scraping source");

        let mut ctx = browser.new_context(&ContextOptions::from(self.config)).await?;
        let outcome = self.visit(source, browser, &mut ctx).await;

        if let Err(e) = browser.close_context(ctx).await {
            warn!(company = source.name.as_str(), error = %e, "Failed to close browsing context");
        }

        outcome
    }

    async fn visit<B: Browser>(
        &self,
        source: &SourceConfig,
        browser: &B,
        ctx: &mut B::Context,
    ) -> Result<Vec<JobPosting>> {
        let url = source.url();
        let bound = self.config.navigation_timeout;

        timeout(browser.navigation_budget(bound), browser.navigate(ctx, url, bound))
            .await
            .map_err(|_| Error::NavigationTimeout {
                url: url.to_string(),
                timeout_ms: duration_ms(bound),
            })??;

        sleep(self.config.settle_delay).await;

        for _ in 0..self.config.scroll_passes {
            browser.scroll_to_bottom(ctx).await?;
            sleep(self.config.scroll_pause).await;
        }

        let snapshot = browser.snapshot(ctx).await?;
        let jobs = Self::postings_from(source, &snapshot)?;
        info!(company = source.name.as_str(), jobs = jobs.len(), "Found job listings");

        sleep(self.config.close_delay).await;
        Ok(jobs)
    }

    /// Extract and enrich. The document lives only inside this synchronous call.
    fn postings_from(source: &SourceConfig, snapshot: &PageSnapshot) -> Result<Vec<JobPosting>> {
        let page_url = parse_page_url(&snapshot.url)?;
        let raw = extract_html(&snapshot.html, &page_url, &source.selectors);
        debug!(company = source.name.as_str(), raw = raw.len(), "Enriching listings");

        let extracted_at = Utc::now();
        Ok(raw
            .into_iter()
            .map(|listing| enrich(listing, &source.name, &snapshot.url, extracted_at))
            .collect())
    }
}
