//! Configuration constants and validation functions for the harvester.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{HarvestError, Result};

/// Base URL of the court's docket site.
pub const DOCKET_HOST: &str = "https://www.supremecourt.gov";

/// HTTP timeout in seconds.
///
/// Set to 30 seconds to accommodate slow responses from the docket site.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Fixed wait after navigation, in milliseconds, so client-side rendering
/// can finish before the page markup is read.
pub const SETTLE_DELAY_MS: u64 = 2000;

/// Default number of worker groups for the enrichment pipeline.
pub const DEFAULT_GROUP_COUNT: usize = 12;

/// Docket id pattern: letters, digits, dashes and dots.
///
/// Docket numbers come in several shapes ("21A612", "22-915", "155-orig"),
/// so the pattern is deliberately loose; it mainly rejects ids that still
/// carry whitespace-separated annotation text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOCKET_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z][0-9A-Za-z.-]*$").expect("valid regex"));

/// Validate a canonical docket id.
///
/// # Arguments
/// * `docket_id` - The docket id to validate, already canonicalized
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(HarvestError::InvalidDocketId)` if invalid
///
/// # Examples
/// ```
/// use caselog_harvester::config::validate_docket_id;
///
/// assert!(validate_docket_id("21A612").is_ok());
/// assert!(validate_docket_id("22-915").is_ok());
/// assert!(validate_docket_id("21A612 (stay application)").is_err());
/// ```
pub fn validate_docket_id(docket_id: &str) -> Result<()> {
    if DOCKET_ID_PATTERN.is_match(docket_id) {
        Ok(())
    } else {
        Err(HarvestError::InvalidDocketId(docket_id.to_string()))
    }
}

/// Build the primary detail-page URL for a docket.
///
/// # Arguments
/// * `base` - Site base URL without a trailing slash
/// * `docket_id` - Canonical docket id
///
/// # Panics
/// Debug builds panic if the docket id still contains whitespace.
pub fn docket_url(base: &str, docket_id: &str) -> String {
    debug_assert!(
        !docket_id.contains(char::is_whitespace),
        "docket_id should be canonicalized before building a URL"
    );
    format!("{base}/search.aspx?filename=/docketfiles/{docket_id}.htm")
}

/// Build the fallback detail-page URL for a docket.
///
/// Newer dockets are published under a different path convention; this is
/// the single retry target when the primary page yields no entries.
///
/// # Panics
/// Debug builds panic if the docket id still contains whitespace.
pub fn fallback_docket_url(base: &str, docket_id: &str) -> String {
    debug_assert!(
        !docket_id.contains(char::is_whitespace),
        "docket_id should be canonicalized before building a URL"
    );
    format!("{base}/search.aspx?filename=/docket/docketfiles/html/public/{docket_id}.html")
}
