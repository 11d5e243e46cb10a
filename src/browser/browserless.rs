//! Browserless backend.
//!
//! Renders pages in a remote headless Chrome through the Browserless `/content`
//! endpoint. A render is a single request, so the scroll passes are folded
//! into it as an injected script plus a trailing wait; `scroll_to_bottom` only
//! records that the session asked for them.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};
use url::Url;

use super::{Browser, ContextOptions, PageSnapshot};
use crate::config::duration_ms;
use crate::error::{Error, Result};

/// Scrolls halfway, then to the bottom, mirroring a reader skimming the list.
const SCROLL_SCRIPT: &str = "window.scrollTo(0, document.body.scrollHeight / 2);\
setTimeout(() => window.scrollTo(0, document.body.scrollHeight), 1000);";

/// Slack on top of the navigation bound for the HTTP round trip itself.
const REQUEST_SLACK: Duration = Duration::from_secs(10);

pub struct BrowserlessBrowser {
    client: reqwest::Client,
    content_url: Url,
    token: Option<String>,
    render_wait: Duration,
}

impl fmt::Debug for BrowserlessBrowser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserlessBrowser")
            .field("content_url", &self.content_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("render_wait", &self.render_wait)
            .finish_non_exhaustive()
    }
}

/// Browserless context: identity plus the last rendered page.
#[derive(Debug)]
pub struct BrowserlessContext {
    options: ContextOptions,
    page: Option<PageSnapshot>,
    scroll_passes: u32,
}

impl BrowserlessBrowser {
    /// `render_wait` is how long the renderer waits after load, covering the scroll passes.
    pub fn new(base_url: &str, token: Option<&str>, render_wait: Duration) -> Result<Self> {
        let content_url = Url::parse(&format!("{}/content", base_url.trim_end_matches('/')))?;
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            content_url,
            token: token.map(String::from),
            render_wait,
        })
    }

    fn endpoint(&self) -> Url {
        let mut endpoint = self.content_url.clone();
        if let Some(token) = &self.token {
            endpoint.query_pairs_mut().append_pair("token", token);
        }
        endpoint
    }

    fn render_body(&self, ctx: &BrowserlessContext, url: &str, timeout: Duration) -> serde_json::Value {
        json!({
            "url": url,
            "gotoOptions": {
                "waitUntil": "networkidle2",
                "timeout": duration_ms(timeout),
            },
            "userAgent": ctx.options.user_agent,
            "setExtraHTTPHeaders": {
                "Accept-Language": ctx.options.accept_language,
            },
            "addScriptTag": [{ "content": SCROLL_SCRIPT }],
            "waitForTimeout": duration_ms(self.render_wait),
        })
    }
}

#[async_trait]
impl Browser for BrowserlessBrowser {
    type Context = BrowserlessContext;

    async fn new_context(&self, options: &ContextOptions) -> Result<BrowserlessContext> {
        Ok(BrowserlessContext {
            options: options.clone(),
            page: None,
            scroll_passes: 0,
        })
    }

    /// Page load plus the post-load render wait plus the round trip itself.
    fn navigation_budget(&self, timeout: Duration) -> Duration {
        timeout + self.render_wait + REQUEST_SLACK
    }

    async fn navigate(&self, ctx: &mut BrowserlessContext, url: &str, timeout: Duration) -> Result<()> {
        let body = self.render_body(ctx, url, timeout);

        let resp = self
            .client
            .post(self.endpoint())
            .timeout(self.navigation_budget(timeout))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::NavigationTimeout {
                        url: url.to_string(),
                        timeout_ms: duration_ms(timeout),
                    }
                } else {
                    Error::from(e)
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(Error::Browserless {
                status: status.as_u16(),
                message,
            });
        }

        let html = resp.text().await?;
        debug!(url, bytes = html.len(), "Rendered page via Browserless");
        ctx.page = Some(PageSnapshot {
            url: url.to_string(),
            html,
        });
        Ok(())
    }

    async fn scroll_to_bottom(&self, ctx: &mut BrowserlessContext) -> Result<()> {
        ctx.scroll_passes += 1;
        Ok(())
    }

    async fn snapshot(&self, ctx: &BrowserlessContext) -> Result<PageSnapshot> {
        ctx.page.clone().ok_or(Error::NotNavigated)
    }

    async fn close_context(&self, ctx: BrowserlessContext) -> Result<()> {
        if ctx.page.is_some() && ctx.scroll_passes == 0 {
            warn!("Context closed without scroll passes; lazy listings may be missing");
        }
        Ok(())
    }

    async fn close(self) -> Result<()> {
        Ok(())
    }
}
