//! Core data types for the harvester.

use serde::{Deserialize, Serialize};

/// One row of procedural history on a docket: a (date, detail) pair.
///
/// Both fields are free-form text taken from the page, tag-stripped and
/// trimmed. Dates are kept as opaque strings; they are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub date: String,
    pub detail: String,
}

impl Entry {
    /// Create a new entry.
    #[must_use]
    pub fn new(date: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            detail: detail.into(),
        }
    }
}

/// A court case record as produced by the search crawler.
///
/// Only `id` is required on input. The remaining scalar fields default to
/// empty strings and are passed through unchanged; `entries` stays empty
/// until enrichment runs and is never reordered afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// Docket identifier. Raw ids from the crawler may carry trailing
    /// annotation text; enrichment replaces this with the canonical id.
    pub id: String,

    /// Full case title.
    #[serde(default)]
    pub title: String,

    /// Party before the "v." in the title.
    #[serde(default)]
    pub petitioner: String,

    /// Party after the "v." in the title.
    #[serde(default)]
    pub prevailing: String,

    /// Any additional information from the search result.
    #[serde(default)]
    pub additional: String,

    /// Chronological proceeding entries; empty until enrichment runs.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// Truncate a raw docket id at its first whitespace character.
///
/// Search results carry trailing annotation after the docket number
/// ("21A612 (stay application)"); only the leading token is the docket id.
///
/// # Examples
/// ```
/// use caselog_harvester::types::canonical_docket_id;
///
/// assert_eq!(canonical_docket_id("21A612 (stay application)"), "21A612");
/// assert_eq!(canonical_docket_id("22-915"), "22-915");
/// ```
#[must_use]
pub fn canonical_docket_id(raw: &str) -> &str {
    raw.split_whitespace().next().unwrap_or("")
}
