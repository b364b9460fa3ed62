//! CaseLog Harvester - enrich court case records with docket proceedings.
//!
//! This crate downloads the docket detail page for every case in an input
//! corpus, extracts the chronological table of proceedings, and writes the
//! enriched records incrementally, one output file per worker group.
//!
//! # Example
//!
//! ```
//! use caselog_harvester::types::canonical_docket_id;
//! use caselog_harvester::extract_entries;
//!
//! assert_eq!(canonical_docket_id("21A612 (stay application)"), "21A612");
//!
//! let entries = extract_entries("~~~Date~~~<br>Jan 1, 2020<br>Order entered<hr>");
//! assert_eq!(entries[0].date, "Jan 1, 2020");
//! ```
//!
//! # Architecture
//!
//! The harvester is organized into several modules:
//!
//! - [`config`]: Configuration constants, docket-id validation, URL templates
//! - [`types`]: Core data types (Case, Entry)
//! - [`error`]: Error types and Result alias
//! - [`extract`]: Proceedings-table extraction for both page layouts
//! - [`fetch`]: Page sessions and the docket fetcher
//! - [`enrich`]: Per-case enrichment with the single fallback retry
//! - [`worker`]: Group worker with incremental persistence
//! - [`pipeline`]: Partitioning and the parallel orchestrator
//! - [`output`]: Corpus loading and group output artifacts
//! - [`compare`]: Reconciliation of two case files by docket id
//! - [`export`]: CSV flattening of enriched cases
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod compare;
pub mod config;
pub mod enrich;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod types;
pub mod worker;

// Re-export main entry points
pub use enrich::{CaseEnricher, EnrichStats};
pub use error::{HarvestError, Result};
pub use extract::extract_entries;
pub use pipeline::{run_pipeline, PipelineOptions};
pub use types::{canonical_docket_id, Case, Entry};
pub use worker::GroupReport;
