//! Command-line interface for the harvester.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::compare::compare_files;
use crate::config::{validate_docket_id, DEFAULT_GROUP_COUNT, SETTLE_DELAY_MS};
use crate::error::Result;
use crate::export::export_csv;
use crate::extract::extract_entries;
use crate::fetch::DocketFetcher;
use crate::output::load_cases;
use crate::pipeline::{run_pipeline, PipelineOptions};
use crate::types::canonical_docket_id;

/// CaseLog Harvester - enrich court case records with docket proceedings.
#[derive(Parser)]
#[command(name = "caselog-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enrich a case file with docket proceedings, in parallel worker groups.
    Enrich {
        /// Input JSON file with case records
        input: PathBuf,

        /// Directory for per-group output files (default: current directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Number of worker groups
        #[arg(short, long, default_value_t = DEFAULT_GROUP_COUNT)]
        groups: usize,

        /// Settle delay after navigation, in milliseconds
        #[arg(long, default_value_t = SETTLE_DELAY_MS)]
        settle_ms: u64,
    },

    /// Fetch and print the proceedings for a single docket.
    Fetch {
        /// Docket id (e.g., 21A612)
        docket_id: String,

        /// Print the entries as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compare the docket ids in two case files.
    Compare {
        /// Left case file
        left: PathBuf,

        /// Right case file
        right: PathBuf,
    },

    /// Flatten an enriched case file into CSV, one row per entry.
    Export {
        /// Enriched case file (JSON array)
        input: PathBuf,

        /// Output CSV path (default: input path with a .csv extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Enrich {
            input,
            output_dir,
            groups,
            settle_ms,
        } => enrich_command(&input, output_dir, groups, settle_ms),
        Commands::Fetch { docket_id, json } => fetch_command(&docket_id, json),
        Commands::Compare { left, right } => compare_command(&left, &right),
        Commands::Export { input, output } => export_command(&input, output),
    }
}

/// Execute the enrich command.
fn enrich_command(
    input: &Path,
    output_dir: Option<PathBuf>,
    groups: usize,
    settle_ms: u64,
) -> Result<()> {
    let cases = load_cases(input)?;
    let output_dir = output_dir.unwrap_or_else(|| PathBuf::from("."));

    println!(
        "{} {} cases in {} groups",
        style("Enriching").bold(),
        style(cases.len()).cyan(),
        style(groups).cyan()
    );
    println!();

    let options = PipelineOptions::new(output_dir)
        .with_groups(groups)
        .with_settle_delay(Duration::from_millis(settle_ms));
    let mut reports = run_pipeline(cases, &options);

    println!();
    for report in &reports {
        match report {
            Ok(r) => println!(
                "  group {:02}: {} cases, {} entries, {} fallback, {} fetch failures -> {}",
                r.group,
                r.processed,
                r.entries_found,
                r.fallback_used,
                r.fetch_failures,
                style(r.output_path.display()).green()
            ),
            Err(e) => println!("  {} {e}", style("failed:").red().bold()),
        }
    }

    // Partial results are already on disk; a failed group still makes the
    // run exit non-zero so operators notice.
    match reports.iter().position(Result::is_err) {
        Some(index) => reports.swap_remove(index).map(|_| ()),
        None => Ok(()),
    }
}

/// Execute the fetch command for a single docket.
fn fetch_command(raw_id: &str, json: bool) -> Result<()> {
    let docket = canonical_docket_id(raw_id).to_string();
    validate_docket_id(&docket)?;

    println!(
        "{} docket {}",
        style("Fetching").bold(),
        style(&docket).cyan()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Fetching detail page...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let fetcher = DocketFetcher::new();
    let markup = match fetcher.fetch_primary(&docket) {
        Ok(markup) => markup,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    let mut entries = extract_entries(&markup);

    let mut used_fallback = false;
    if entries.is_empty() {
        pb.set_message("No entries on primary page, trying fallback...");
        used_fallback = true;
        let markup = match fetcher.fetch_fallback(&docket) {
            Ok(markup) => markup,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };
        entries = extract_entries(&markup);
    }

    pb.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("  Entries: {}", style(entries.len()).green());
    if used_fallback {
        println!("  Source: {}", style("fallback page").yellow());
    }
    println!();
    for entry in &entries {
        println!("{}  {}", style(&entry.date).green(), entry.detail);
    }

    Ok(())
}

/// Execute the compare command.
fn compare_command(left: &Path, right: &Path) -> Result<()> {
    let comparison = compare_files(left, right)?;

    println!("{} {}", style("Only in").bold(), left.display());
    for id in &comparison.only_in_left {
        println!("  {id}");
    }
    println!();
    println!("{} {}", style("Only in").bold(), right.display());
    for id in &comparison.only_in_right {
        println!("  {id}");
    }
    println!();
    println!(
        "{} {}",
        style("Common:").bold(),
        style(comparison.common.len()).green()
    );

    Ok(())
}

/// Execute the export command.
fn export_command(input: &Path, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| input.with_extension("csv"));
    let rows = export_csv(input, &output)?;

    println!(
        "{} {} rows to {}",
        style("Exported").green().bold(),
        rows,
        output.display()
    );

    Ok(())
}
