//! Group worker: sequential enrichment over one partition slice.

use std::path::PathBuf;

use crate::enrich::CaseEnricher;
use crate::error::Result;
use crate::fetch::DocketFetcher;
use crate::output::{group_file_name, write_group};
use crate::types::Case;

/// Summary of one group's completed run.
#[derive(Debug, Clone)]
pub struct GroupReport {
    /// Group index within the partition.
    pub group: usize,
    /// Cases processed.
    pub processed: usize,
    /// Total entries attached across the group's cases.
    pub entries_found: usize,
    /// Cases for which the fallback URL was fetched.
    pub fallback_used: usize,
    /// Cases with at least one failed fetch attempt.
    pub fetch_failures: usize,
    /// Path of the group's output artifact.
    pub output_path: PathBuf,
}

/// Processes one contiguous slice of the case list, persisting progress
/// after every case.
///
/// The worker owns its slice, its fetcher and its accumulator; nothing is
/// shared with other groups.
pub struct GroupWorker {
    group: usize,
    cases: Vec<Case>,
    fetcher: DocketFetcher,
    output_dir: PathBuf,
}

impl GroupWorker {
    /// Create a worker for one group.
    #[must_use]
    pub fn new(group: usize, cases: Vec<Case>, fetcher: DocketFetcher, output_dir: PathBuf) -> Self {
        Self {
            group,
            cases,
            fetcher,
            output_dir,
        }
    }

    /// Run the group to completion.
    ///
    /// Cases are processed strictly in input order. Enrichment failures are
    /// per-case and never abort the group; an error writing the group's
    /// output artifact does, since that artifact is the sole durable record
    /// of progress.
    pub fn run(self) -> Result<GroupReport> {
        let GroupWorker {
            group,
            cases,
            fetcher,
            output_dir,
        } = self;

        let total = cases.len();
        let enricher = CaseEnricher::new(&fetcher);
        let mut done: Vec<Case> = Vec::with_capacity(total);
        let mut entries_found = 0;
        let mut fallback_used = 0;
        let mut fetch_failures = 0;
        let mut output_path = output_dir.join(group_file_name(group));

        for (index, mut case) in cases.into_iter().enumerate() {
            tracing::info!(
                group,
                case = index + 1,
                total,
                docket = %case.id,
                "processing case"
            );

            let stats = enricher.enrich(&mut case);
            entries_found += stats.entry_count;
            if stats.used_fallback {
                fallback_used += 1;
            }
            if stats.fetch_failed {
                fetch_failures += 1;
            }
            tracing::info!(
                group,
                docket = %case.id,
                entries = stats.entry_count,
                "case enriched"
            );

            done.push(case);
            output_path = write_group(&output_dir, group, &done)?;
        }

        tracing::info!(group, processed = done.len(), entries_found, "group finished");
        Ok(GroupReport {
            group,
            processed: done.len(),
            entries_found,
            fallback_used,
            fetch_failures,
            output_path,
        })
    }
}
