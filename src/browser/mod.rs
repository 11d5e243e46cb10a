//! Browser capability used by source sessions.
//!
//! The pipeline needs very little from a browser: isolated contexts, bounded
//! navigation, a way to trigger lazy loading, and a read-only serialized view
//! of the loaded document. Cookies, forms and clicks are deliberately absent.
//!
//! Two backends are provided:
//! - [`HttpBrowser`]: plain HTTP fetch of the served HTML.
//! - [`BrowserlessBrowser`]: fully rendered HTML from a Browserless `/content` endpoint.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::Result;

pub mod browserless;
pub mod http;

pub use browserless::BrowserlessBrowser;
pub use http::HttpBrowser;

/// Identity presented by a browsing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextOptions {
    pub user_agent: String,
    pub accept_language: String,
}

impl From<&Config> for ContextOptions {
    fn from(config: &Config) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            accept_language: config.accept_language.clone(),
        }
    }
}

/// Serialized state of a loaded page.
///
/// This is what crosses from the browser into the extractor: plain strings,
/// never live document handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    /// Final URL of the page, after redirects.
    pub url: String,
    /// Document HTML at snapshot time.
    pub html: String,
}

/// Headless browsing capability.
///
/// One value represents the shared browser resource for a whole run. Contexts
/// are owned values; [`Browser::close_context`] consumes them so a context
/// cannot be reused after it is released.
#[async_trait]
pub trait Browser: Send + Sync {
    /// Per-source browsing context.
    type Context: Send;

    /// Open a fresh, isolated browsing context.
    async fn new_context(&self, options: &ContextOptions) -> Result<Self::Context>;

    /// Wall-clock allowance for one [`Browser::navigate`] call given the page-load bound.
    ///
    /// Backends that do more than load the page inside `navigate` (rendering,
    /// waiting for scripts) widen this so the extra work is not counted
    /// against the page load.
    fn navigation_budget(&self, timeout: Duration) -> Duration {
        timeout
    }

    /// Load `url` in the context, failing with `NavigationTimeout` once `timeout` expires.
    async fn navigate(&self, ctx: &mut Self::Context, url: &str, timeout: Duration) -> Result<()>;

    /// Scroll the current document to the bottom to trigger lazy loading.
    async fn scroll_to_bottom(&self, ctx: &mut Self::Context) -> Result<()>;

    /// Serialized view of the current document.
    async fn snapshot(&self, ctx: &Self::Context) -> Result<PageSnapshot>;

    /// Release a context.
    async fn close_context(&self, ctx: Self::Context) -> Result<()>;

    /// Release the browser resource itself.
    async fn close(self) -> Result<()>
    where
        Self: Sized;
}
