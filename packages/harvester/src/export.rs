//! Flatten enriched cases into spreadsheet-friendly CSV rows.
//!
//! Each proceeding entry becomes one row carrying its parent case's scalar
//! fields next to the entry's date and detail, so the output opens directly
//! in a spreadsheet without any nesting.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::output::load_cases;
use crate::types::Case;

/// Column headers for the flattened export.
const HEADERS: [&str; 7] = [
    "id",
    "title",
    "petitioner",
    "prevailing",
    "additional",
    "date",
    "detail",
];

/// Load an enriched case file and write its flattened CSV form.
///
/// Returns the number of data rows written.
pub fn export_csv(input: &Path, output: &Path) -> Result<usize> {
    let cases = load_cases(input)?;
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let rows = write_csv(&mut writer, &cases)?;
    writer.flush()?;
    Ok(rows)
}

/// Write enriched cases as CSV, one row per proceeding entry.
///
/// A case without entries still produces one row with empty date/detail
/// columns so it is not silently dropped from the export.
pub fn write_csv<W: Write>(mut w: W, cases: &[Case]) -> io::Result<usize> {
    write_row(&mut w, &HEADERS.map(String::from))?;
    let mut rows = 0;
    for case in cases {
        if case.entries.is_empty() {
            write_row(&mut w, &flat_row(case, "", ""))?;
            rows += 1;
            continue;
        }
        for entry in &case.entries {
            write_row(&mut w, &flat_row(case, &entry.date, &entry.detail))?;
            rows += 1;
        }
    }
    Ok(rows)
}

fn flat_row(case: &Case, date: &str, detail: &str) -> Vec<String> {
    vec![
        case.id.clone(),
        case.title.clone(),
        case.petitioner.clone(),
        case.prevailing.clone(),
        case.additional.clone(),
        date.to_string(),
        detail.to_string(),
    ]
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row, quoting fields that need it.
fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{escaped}\"")?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}
