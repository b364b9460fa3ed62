//! Input corpus loading and per-group output artifacts.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::Case;

/// File name of a group's output artifact.
#[must_use]
pub fn group_file_name(group: usize) -> String {
    format!("enriched_cases_group_{group:02}.json")
}

/// Load the input case corpus from a JSON array file.
pub fn load_cases(path: &Path) -> Result<Vec<Case>> {
    let file = File::open(path)?;
    let cases = serde_json::from_reader(BufReader::new(file))?;
    Ok(cases)
}

/// Overwrite a group's output artifact with its accumulated cases.
///
/// The whole accumulated list is rewritten on every call, so the file on
/// disk always reflects every case the group has completed; a crash loses
/// at most the in-flight case.
pub fn write_group(dir: &Path, group: usize, cases: &[Case]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(group_file_name(group));
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, cases)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(path)
}
