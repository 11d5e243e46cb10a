//! Run configuration for scraping.
//!
//! The `Config` struct is built once at process start (from CLI flags and the
//! environment in the binary) and passed by reference into the orchestrator
//! and source sessions. Core code never reads the environment itself.

use std::time::Duration;

use tracing::info;

/// User agent presented to career pages.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for a scrape run.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use job_scout::Config;
///
/// let config = Config {
///     navigation_timeout: Duration::from_secs(10),
///     source_delay: Duration::ZERO,
///     ..Config::default()
/// };
/// assert_eq!(config.scroll_passes, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Upper bound for loading one career page. Expiry fails that source only.
    ///
    /// Default: 30 s
    pub navigation_timeout: Duration,

    /// Pause after navigation so client-side rendering can finish.
    ///
    /// Default: 2 s
    pub settle_delay: Duration,

    /// Number of scroll-to-bottom passes used to trigger lazy loading.
    ///
    /// Default: `2`
    pub scroll_passes: u32,

    /// Pause after each scroll pass.
    ///
    /// Default: 1 s
    pub scroll_pause: Duration,

    /// Pause after extraction, before the context is closed.
    ///
    /// Default: 2 s
    pub close_delay: Duration,

    /// Politeness delay between consecutive sources. Not applied after the last one.
    ///
    /// Default: 3 s
    pub source_delay: Duration,

    /// `User-Agent` header for every browsing context.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// `Accept-Language` header for every browsing context.
    ///
    /// Default: `"de-DE,de;q=0.9,en-US;q=0.8,en;q=0.7"`
    pub accept_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            navigation_timeout: Duration::from_secs(30),
            settle_delay: Duration::from_secs(2),
            scroll_passes: 2,
            scroll_pause: Duration::from_secs(1),
            close_delay: Duration::from_secs(2),
            source_delay: Duration::from_secs(3),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: "de-DE,de;q=0.9,en-US;q=0.8,en;q=0.7".to_string(),
        }
    }
}

impl Config {
    /// Log the effective settings once at startup.
    pub fn log_summary(&self) {
        info!(
            navigation_timeout_ms = duration_ms(self.navigation_timeout),
            source_delay_ms = duration_ms(self.source_delay),
            scroll_passes = self.scroll_passes,
            "Scrape configuration"
        );
    }
}

/// Milliseconds in a duration, saturating at `u64::MAX`.
#[must_use]
pub fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
