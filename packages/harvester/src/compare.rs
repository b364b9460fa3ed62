//! Reconciliation of two case files by canonical docket id.
//!
//! Used to check a crawl against an earlier one, or an enriched output
//! against its input corpus.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::Result;
use crate::output::load_cases;
use crate::types::canonical_docket_id;

/// Outcome of comparing the docket ids in two case files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Ids present in both files, sorted.
    pub common: Vec<String>,
    /// Ids only in the left file, sorted.
    pub only_in_left: Vec<String>,
    /// Ids only in the right file, sorted.
    pub only_in_right: Vec<String>,
}

/// Compare the canonical docket ids of two case files.
pub fn compare_files(left: &Path, right: &Path) -> Result<Comparison> {
    let left_ids = load_ids(left)?;
    let right_ids = load_ids(right)?;
    Ok(compare_ids(&left_ids, &right_ids))
}

fn load_ids(path: &Path) -> Result<BTreeSet<String>> {
    Ok(load_cases(path)?
        .iter()
        .map(|case| canonical_docket_id(&case.id).to_string())
        .filter(|id| !id.is_empty())
        .collect())
}

fn compare_ids(left: &BTreeSet<String>, right: &BTreeSet<String>) -> Comparison {
    Comparison {
        common: left.intersection(right).cloned().collect(),
        only_in_left: left.difference(right).cloned().collect(),
        only_in_right: right.difference(left).cloned().collect(),
    }
}
