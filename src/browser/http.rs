//! Plain HTTP backend.
//!
//! Each context is its own `reqwest::Client`, so headers and connection pools
//! are never shared between sources. Pages are served HTML only: no script
//! runs, so scrolling has nothing to trigger and is a no-op.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, USER_AGENT};
use tracing::{debug, trace};

use super::{Browser, ContextOptions, PageSnapshot};
use crate::config::duration_ms;
use crate::encoding::decode_body;
use crate::error::{Error, Result};

/// Browser backed by direct HTTP requests.
#[derive(Debug, Default)]
pub struct HttpBrowser;

impl HttpBrowser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Isolated HTTP browsing context.
#[derive(Debug)]
pub struct HttpContext {
    client: reqwest::Client,
    page: Option<PageSnapshot>,
}

fn header(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::Config(format!("invalid header value {value:?}: {e}")))
}

/// Map a transport error, reporting expired timeouts as navigation timeouts.
fn navigation_error(err: reqwest::Error, url: &str, timeout: Duration) -> Error {
    if err.is_timeout() {
        Error::NavigationTimeout {
            url: url.to_string(),
            timeout_ms: duration_ms(timeout),
        }
    } else {
        Error::from(err)
    }
}

#[async_trait]
impl Browser for HttpBrowser {
    type Context = HttpContext;

    async fn new_context(&self, options: &ContextOptions) -> Result<HttpContext> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header(&options.user_agent)?);
        headers.insert(ACCEPT_LANGUAGE, header(&options.accept_language)?);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
        );

        let client = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(HttpContext { client, page: None })
    }

    async fn navigate(&self, ctx: &mut HttpContext, url: &str, timeout: Duration) -> Result<()> {
        let resp = ctx
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| navigation_error(e, url, timeout))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = resp.url().to_string();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp
            .bytes()
            .await
            .map_err(|e| navigation_error(e, url, timeout))?;

        debug!(url = final_url.as_str(), bytes = body.len(), "Fetched page");
        ctx.page = Some(PageSnapshot {
            url: final_url,
            html: decode_body(content_type.as_deref(), &body),
        });
        Ok(())
    }

    async fn scroll_to_bottom(&self, _ctx: &mut HttpContext) -> Result<()> {
        trace!("Static page, nothing to scroll");
        Ok(())
    }

    async fn snapshot(&self, ctx: &HttpContext) -> Result<PageSnapshot> {
        ctx.page.clone().ok_or(Error::NotNavigated)
    }

    async fn close_context(&self, ctx: HttpContext) -> Result<()> {
        drop(ctx);
        Ok(())
    }

    async fn close(self) -> Result<()> {
        Ok(())
    }
}
