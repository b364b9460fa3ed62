//! Docket detail-page fetching.
//!
//! The browser-automation capability is confined behind [`Session`]: open,
//! navigate once, read the rendered markup, close. A session is never
//! shared or pooled; [`DocketFetcher`] opens a fresh one per page load and
//! releases it before returning on every path, success or failure.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::{docket_url, fallback_docket_url, DOCKET_HOST, HTTP_TIMEOUT_SECS, SETTLE_DELAY_MS};
use crate::error::{HarvestError, Result};

/// User agent string identifying this harvester.
const USER_AGENT: &str = concat!("caselog-harvester/", env!("CARGO_PKG_VERSION"));

/// A single page-load session against the docket site.
///
/// Owns the underlying connection resources for one navigation. Release is
/// guaranteed: [`Session::close`] consumes the session, and dropping an
/// unclosed session on an early-return path tears the resources down just
/// the same.
pub struct Session {
    client: Client,
    settle_delay: Duration,
}

impl Session {
    /// Open a new session.
    pub fn open(settle_delay: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            settle_delay,
        })
    }

    /// Navigate to `url` and return the rendered page markup.
    ///
    /// Applies the fixed settle delay after navigation so client-side
    /// rendering can complete before the markup is read.
    pub fn navigate(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?.error_for_status()?;
        thread::sleep(self.settle_delay);
        Ok(response.text()?)
    }

    /// Release all session resources.
    pub fn close(self) {
        // Consuming self drops the client and its connection pool.
    }
}

/// Fetches docket detail pages, one fresh session per page load.
#[derive(Debug, Clone)]
pub struct DocketFetcher {
    base_url: String,
    settle_delay: Duration,
}

impl DocketFetcher {
    /// Create a fetcher against the production docket site.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DOCKET_HOST)
    }

    /// Create a fetcher against a different host.
    ///
    /// Tests point this at a local mock server.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            settle_delay: Duration::from_millis(SETTLE_DELAY_MS),
        }
    }

    /// Override the settle delay.
    #[must_use]
    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    /// Fetch the primary detail page for a docket.
    pub fn fetch_primary(&self, docket_id: &str) -> Result<String> {
        self.fetch(&docket_url(&self.base_url, docket_id), docket_id)
    }

    /// Fetch the fallback detail page for a docket.
    pub fn fetch_fallback(&self, docket_id: &str) -> Result<String> {
        self.fetch(&fallback_docket_url(&self.base_url, docket_id), docket_id)
    }

    fn fetch(&self, url: &str, docket_id: &str) -> Result<String> {
        tracing::debug!(docket = docket_id, url, "opening session");
        let session = Session::open(self.settle_delay)?;
        let markup = session.navigate(url);
        session.close();
        markup.map_err(|e| match e {
            HarvestError::Http(source) => HarvestError::Fetch {
                docket: docket_id.to_string(),
                source,
            },
            other => other,
        })
    }
}

impl Default for DocketFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_open() {
        let session = Session::open(Duration::ZERO);
        assert!(session.is_ok());
    }

    // Fetch behavior is covered by the mock-server integration tests in
    // tests/pipeline_test.rs.
}
