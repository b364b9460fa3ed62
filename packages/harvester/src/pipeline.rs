//! Pipeline orchestration: partition the corpus and run one worker per
//! group.
//!
//! Groups are isolated units of execution. Each worker thread owns its
//! slice of the case list, its own fetcher, and its own output artifact;
//! the only coordination points are the initial partition handoff and the
//! final join. A hang or failure in one group never disturbs the others.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::config::{DEFAULT_GROUP_COUNT, DOCKET_HOST, SETTLE_DELAY_MS};
use crate::error::{HarvestError, Result};
use crate::fetch::DocketFetcher;
use crate::types::Case;
use crate::worker::{GroupReport, GroupWorker};

/// Options controlling a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Number of worker groups to partition the corpus into.
    pub groups: usize,
    /// Directory receiving one output file per group.
    pub output_dir: PathBuf,
    /// Docket site base URL.
    pub base_url: String,
    /// Settle delay applied after every navigation.
    pub settle_delay: Duration,
}

impl PipelineOptions {
    /// Create options with production defaults.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            groups: DEFAULT_GROUP_COUNT,
            output_dir: output_dir.into(),
            base_url: DOCKET_HOST.to_string(),
            settle_delay: Duration::from_millis(SETTLE_DELAY_MS),
        }
    }

    /// Override the group count.
    #[must_use]
    pub fn with_groups(mut self, groups: usize) -> Self {
        self.groups = groups;
        self
    }

    /// Override the docket site base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the settle delay.
    #[must_use]
    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }
}

/// Split `cases` into contiguous chunks of ceil(len / groups) cases each.
///
/// Trailing chunks may be shorter, and chunks past the end of the input are
/// omitted entirely, so fewer than `groups` chunks can come back. Order is
/// preserved and every case lands in exactly one chunk.
#[must_use]
pub fn partition(cases: Vec<Case>, groups: usize) -> Vec<Vec<Case>> {
    if cases.is_empty() || groups == 0 {
        return Vec::new();
    }
    let chunk = cases.len().div_ceil(groups);
    let mut parts = Vec::with_capacity(groups);
    let mut rest = cases;
    while !rest.is_empty() {
        let tail = rest.split_off(rest.len().min(chunk));
        parts.push(rest);
        rest = tail;
    }
    parts
}

/// Run the full enrichment pipeline.
///
/// Spawns one worker thread per non-empty group and blocks until every
/// worker has terminated. Reports come back in group order; a failed or
/// panicked group surfaces as an `Err` entry without affecting the rest.
pub fn run_pipeline(cases: Vec<Case>, options: &PipelineOptions) -> Vec<Result<GroupReport>> {
    let total = cases.len();
    let parts = partition(cases, options.groups);
    tracing::info!(
        total_cases = total,
        groups = parts.len(),
        output_dir = %options.output_dir.display(),
        "starting enrichment pipeline"
    );

    let mut handles = Vec::with_capacity(parts.len());
    for (group, slice) in parts.into_iter().enumerate() {
        let fetcher = DocketFetcher::with_base_url(&options.base_url)
            .with_settle_delay(options.settle_delay);
        let worker = GroupWorker::new(group, slice, fetcher, options.output_dir.clone());
        let handle = thread::Builder::new()
            .name(format!("group-{group}"))
            .spawn(move || worker.run());
        handles.push((group, handle));
    }

    let mut reports = Vec::with_capacity(handles.len());
    for (group, handle) in handles {
        let outcome = match handle {
            Ok(handle) => match handle.join() {
                Ok(Ok(report)) => Ok(report),
                Ok(Err(e)) => Err(HarvestError::Group {
                    group,
                    message: e.to_string(),
                }),
                Err(_) => Err(HarvestError::Group {
                    group,
                    message: "worker panicked".to_string(),
                }),
            },
            Err(e) => Err(HarvestError::Group {
                group,
                message: format!("failed to spawn worker: {e}"),
            }),
        };
        reports.push(outcome);
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cases(n: usize) -> Vec<Case> {
        (0..n)
            .map(|i| Case {
                id: format!("21-{i:03}"),
                title: String::new(),
                petitioner: String::new(),
                prevailing: String::new(),
                additional: String::new(),
                entries: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn test_partition_covers_every_case_once() {
        let input = cases(25);
        let parts = partition(input.clone(), 12);

        let flattened: Vec<Case> = parts.iter().flatten().cloned().collect();
        assert_eq!(flattened, input);
    }

    #[test]
    fn test_partition_chunk_sizes() {
        let parts = partition(cases(25), 12);
        // ceil(25 / 12) = 3: eight full chunks and one remainder chunk.
        assert_eq!(parts.len(), 9);
        assert!(parts[..8].iter().all(|p| p.len() == 3));
        assert_eq!(parts[8].len(), 1);
    }

    #[test]
    fn test_partition_exact_division() {
        let parts = partition(cases(24), 12);
        assert_eq!(parts.len(), 12);
        assert!(parts.iter().all(|p| p.len() == 2));
    }

    #[test]
    fn test_partition_fewer_cases_than_groups() {
        let parts = partition(cases(5), 12);
        // Empty trailing groups are omitted, never launched.
        assert_eq!(parts.len(), 5);
        assert!(parts.iter().all(|p| p.len() == 1));
    }

    #[test]
    fn test_partition_empty_input() {
        assert!(partition(Vec::new(), 12).is_empty());
    }

    #[test]
    fn test_partition_zero_groups() {
        assert!(partition(cases(3), 0).is_empty());
    }

    #[test]
    fn test_options_defaults() {
        let options = PipelineOptions::new("out");
        assert_eq!(options.groups, DEFAULT_GROUP_COUNT);
        assert_eq!(options.base_url, DOCKET_HOST);
        assert_eq!(options.settle_delay, Duration::from_millis(SETTLE_DELAY_MS));
    }
}
