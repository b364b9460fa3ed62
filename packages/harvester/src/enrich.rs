//! Per-case enrichment: fetch the docket detail page and attach its
//! proceedings to the case record.

use crate::extract::extract_entries;
use crate::fetch::DocketFetcher;
use crate::types::{canonical_docket_id, Case};

/// Diagnostic counters from enriching one case.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnrichStats {
    /// Entries attached to the case.
    pub entry_count: usize,
    /// Whether the fallback URL was fetched.
    pub used_fallback: bool,
    /// Whether any fetch attempt failed outright.
    pub fetch_failed: bool,
}

/// Enriches cases with their docket proceedings.
pub struct CaseEnricher<'a> {
    fetcher: &'a DocketFetcher,
}

impl<'a> CaseEnricher<'a> {
    /// Create an enricher over the given fetcher.
    #[must_use]
    pub fn new(fetcher: &'a DocketFetcher) -> Self {
        Self { fetcher }
    }

    /// Enrich a single case in place.
    ///
    /// Canonicalizes the docket id, fetches the primary detail page, and
    /// extracts proceeding entries. When extraction yields nothing the
    /// fallback URL is fetched once and extraction re-runs. An empty result
    /// is a valid terminal outcome: dockets without published proceedings
    /// are indistinguishable from extraction failures at this layer.
    ///
    /// A fetch error is logged and treated as an empty page; it never
    /// propagates to the caller's loop.
    pub fn enrich(&self, case: &mut Case) -> EnrichStats {
        let docket = canonical_docket_id(&case.id).to_string();
        let mut stats = EnrichStats::default();

        let markup = match self.fetcher.fetch_primary(&docket) {
            Ok(markup) => markup,
            Err(e) => {
                tracing::warn!(docket = %docket, error = %e, "primary fetch failed");
                stats.fetch_failed = true;
                String::new()
            }
        };
        let mut entries = extract_entries(&markup);

        if entries.is_empty() {
            stats.used_fallback = true;
            tracing::debug!(docket = %docket, "no entries from primary page, trying fallback");
            match self.fetcher.fetch_fallback(&docket) {
                Ok(markup) => entries = extract_entries(&markup),
                Err(e) => {
                    tracing::warn!(docket = %docket, error = %e, "fallback fetch failed");
                    stats.fetch_failed = true;
                }
            }
        }

        stats.entry_count = entries.len();
        case.entries = entries;
        case.id = docket;
        stats
    }
}
