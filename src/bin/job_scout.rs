//! Scrape configured career pages, filter the postings and write a JSON report.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use job_scout::{
    aggregate, errors, Browser, BrowserlessBrowser, CompanyFile, Config, FilterPolicy, HttpBrowser,
    JobFilter, Orchestrator, ScrapeReport, ScrapeResult, SourceConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Fetch served HTML directly
    Http,
    /// Render pages through a Browserless instance
    Browserless,
}

#[derive(Parser)]
#[command(name = "job-scout")]
#[command(about = "Scrape career pages for junior-friendly job postings")]
#[command(version)]
struct Cli {
    /// Companies file with selector profiles
    #[arg(long, env = "JOB_SCOUT_COMPANIES", default_value = "config/companies.json")]
    companies: PathBuf,

    /// Where to write the JSON report
    #[arg(long, env = "JOB_SCOUT_OUTPUT", default_value = "results/jobs.json")]
    output: PathBuf,

    /// JSON file overriding the location and keyword tables
    #[arg(long, env = "JOB_SCOUT_POLICY")]
    policy: Option<PathBuf>,

    /// Highest accepted minimum years of experience
    #[arg(long, env = "JOB_SCOUT_MAX_YEARS")]
    max_years: Option<u32>,

    /// Write every scraped posting, skipping the filters
    #[arg(long, env = "JOB_SCOUT_NO_FILTER")]
    no_filter: bool,

    #[arg(long, value_enum, env = "JOB_SCOUT_BACKEND", default_value = "http")]
    backend: Backend,

    /// Browserless base URL (browserless backend only)
    #[arg(long, env = "BROWSERLESS_URL", default_value = "http://localhost:3000")]
    browserless_url: String,

    #[arg(long, env = "BROWSERLESS_TOKEN", hide_env_values = true)]
    browserless_token: Option<String>,

    /// Navigation timeout in seconds
    #[arg(long, env = "JOB_SCOUT_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Politeness delay between companies in seconds
    #[arg(long, env = "JOB_SCOUT_DELAY_SECS", default_value_t = 3)]
    delay_secs: u64,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            navigation_timeout: Duration::from_secs(self.timeout_secs),
            source_delay: Duration::from_secs(self.delay_secs),
            ..Config::default()
        }
    }

    fn filter(&self) -> Result<JobFilter> {
        let mut policy = match &self.policy {
            Some(path) => FilterPolicy::load(path)?,
            None => FilterPolicy::default(),
        };
        if let Some(max_years) = self.max_years {
            policy.max_years = max_years;
        }
        Ok(JobFilter::new(policy))
    }
}

async fn scrape<B: Browser>(config: &Config, browser: B, sources: &[SourceConfig]) -> Vec<ScrapeResult> {
    Orchestrator::new(config).run_all(browser, sources).await
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("job_scout=info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    config.log_summary();
    let job_filter = cli.filter()?;

    let sources = CompanyFile::load(&cli.companies)?
        .usable_sources()
        .with_context(|| format!("no companies to scrape in {}", cli.companies.display()))?;

    let results = match cli.backend {
        Backend::Http => scrape(&config, HttpBrowser::new(), &sources).await,
        Backend::Browserless => {
            let render_wait = config.scroll_pause * config.scroll_passes;
            let browser = BrowserlessBrowser::new(
                &cli.browserless_url,
                cli.browserless_token.as_deref(),
                render_wait,
            )?;
            scrape(&config, browser, &sources).await
        }
    };

    for result in &results {
        match result.error() {
            None => info!(company = result.company(), jobs = result.jobs().len(), "ok"),
            Some(error) => info!(company = result.company(), error, "failed"),
        }
    }

    let scraped = aggregate(&results);
    let jobs = if cli.no_filter {
        scraped.clone()
    } else {
        job_filter.filter(&scraped)
    };

    let stats = job_filter.stats(&scraped, &jobs);
    info!(
        total = stats.total_original,
        kept = stats.total_filtered,
        removed = stats.removed,
        by_location = stats.by_location,
        by_level = stats.by_level,
        by_experience = stats.by_experience,
        "Filter statistics"
    );

    ScrapeReport::new(scraped.len(), jobs, errors(&results))
        .write(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(())
}
