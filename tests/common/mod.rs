//! In-memory browser for pipeline tests.
//!
//! Serves canned HTML per URL, can hang or fail navigations, and records every
//! context and browser lifecycle call so tests can check cleanup.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use job_scout::browser::ContextOptions;
use job_scout::{Browser, Error, PageSnapshot, Result, SelectorProfile, SourceConfig};

#[derive(Debug, Clone)]
pub enum Fixture {
    /// Serve this HTML.
    Page(String),
    /// Serve this HTML after the delay.
    Slow(Duration, String),
    /// Never finish loading.
    Hang,
    /// Answer with an HTTP error status.
    Status(u16),
}

#[derive(Debug, Default, Clone)]
pub struct Calls {
    pub contexts_opened: usize,
    pub contexts_closed: usize,
    pub browser_closed: usize,
    pub navigations: Vec<String>,
    pub scrolls: usize,
    pub user_agents: Vec<String>,
}

#[derive(Default)]
pub struct FixtureBrowser {
    pages: HashMap<String, Fixture>,
    refuse_contexts: bool,
    budget_slack: Duration,
    calls: Arc<Mutex<Calls>>,
}

pub struct FixtureContext {
    page: Option<PageSnapshot>,
}

impl FixtureBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, fixture: Fixture) -> Self {
        self.pages.insert(url.to_string(), fixture);
        self
    }

    pub fn refusing_contexts(mut self) -> Self {
        self.refuse_contexts = true;
        self
    }

    /// Extra navigation allowance on top of the page-load bound.
    pub fn with_budget_slack(mut self, slack: Duration) -> Self {
        self.budget_slack = slack;
        self
    }

    /// Shared handle to the call log; stays readable after the browser is consumed.
    pub fn calls(&self) -> Arc<Mutex<Calls>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, f: impl FnOnce(&mut Calls)) {
        f(&mut self.calls.lock().unwrap());
    }
}

#[async_trait]
impl Browser for FixtureBrowser {
    type Context = FixtureContext;

    async fn new_context(&self, options: &ContextOptions) -> Result<FixtureContext> {
        if self.refuse_contexts {
            return Err(Error::Network("browser refused a new context".into()));
        }
        self.record(|c| {
            c.contexts_opened += 1;
            c.user_agents.push(options.user_agent.clone());
        });
        Ok(FixtureContext { page: None })
    }

    fn navigation_budget(&self, timeout: Duration) -> Duration {
        timeout + self.budget_slack
    }

    async fn navigate(&self, ctx: &mut FixtureContext, url: &str, _timeout: Duration) -> Result<()> {
        self.record(|c| c.navigations.push(url.to_string()));

        match self.pages.get(url) {
            Some(Fixture::Slow(delay, html)) => {
                tokio::time::sleep(*delay).await;
                ctx.page = Some(PageSnapshot {
                    url: url.to_string(),
                    html: html.clone(),
                });
                Ok(())
            }
            Some(Fixture::Page(html)) => {
                ctx.page = Some(PageSnapshot {
                    url: url.to_string(),
                    html: html.clone(),
                });
                Ok(())
            }
            Some(Fixture::Hang) => {
                std::future::pending::<()>().await;
                Ok(())
            }
            Some(Fixture::Status(status)) => Err(Error::Http {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(Error::Http {
                url: url.to_string(),
                status: 404,
            }),
        }
    }

    async fn scroll_to_bottom(&self, _ctx: &mut FixtureContext) -> Result<()> {
        self.record(|c| c.scrolls += 1);
        Ok(())
    }

    async fn snapshot(&self, ctx: &FixtureContext) -> Result<PageSnapshot> {
        ctx.page.clone().ok_or(Error::NotNavigated)
    }

    async fn close_context(&self, _ctx: FixtureContext) -> Result<()> {
        self.record(|c| c.contexts_closed += 1);
        Ok(())
    }

    async fn close(self) -> Result<()> {
        self.record(|c| c.browser_closed += 1);
        Ok(())
    }
}

pub fn source(name: &str, url: &str) -> SourceConfig {
    SourceConfig {
        name: name.to_string(),
        url: Some(url.to_string()),
        selectors: SelectorProfile {
            job_list: ".job-card, li.opening".into(),
            job_title: ".job-title, h3".into(),
            job_location: ".job-location, .location".into(),
            job_link: "a.job-link, a".into(),
            job_description: ".job-description, p".into(),
        },
        notes: None,
    }
}

/// Career page with three listings in the `li.opening` layout.
pub const THREE_LISTINGS: &str = r#"
<html><body>
  <ul class="openings">
    <li class="opening">
      <h3>Junior Backend Developer</h3>
      <span class="location">Berlin, Germany</span>
      <a href="/jobs/101">View</a>
      <p>1-2 years of experience with Rust or Go</p>
    </li>
    <li class="opening">
      <h3>Senior Platform Engineer</h3>
      <span class="location">München</span>
      <a href="/jobs/102">View</a>
      <p>5+ years experience running Kubernetes</p>
    </li>
    <li class="opening">
      <h3>Graduate Data Analyst</h3>
      <span class="location">Hamburg (Hybrid)</span>
      <a href="https://jobs.acme.example/103">View</a>
      <p>We welcome graduates from any quantitative field</p>
    </li>
  </ul>
</body></html>
"#;
