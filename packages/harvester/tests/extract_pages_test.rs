//! Extraction tests over full captured-page fixtures, one per layout.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use caselog_harvester::extract_entries;

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

#[test]
fn test_marker_layout_full_page() {
    let markup = load_fixture("docket_marker.html");
    let entries = extract_entries(&markup);

    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].date, "Feb 23, 2022");
    assert_eq!(
        entries[0].detail,
        "Application (21A612) for a stay, submitted to Justice Alito."
    );
    // Markup inside a detail line is stripped.
    assert_eq!(entries[2].detail, "Reply of applicant filed.");
    assert_eq!(entries[3].date, "Mar 4, 2022");
}

#[test]
fn test_marker_layout_excludes_page_chrome() {
    let markup = load_fixture("docket_marker.html");
    let entries = extract_entries(&markup);

    // Title and lower-court lines sit before the header marker; the
    // address block sits after the rule. None of them leak into entries.
    for entry in &entries {
        assert!(!entry.detail.contains("Lower Ct"));
        assert!(!entry.detail.contains("Supreme Court of the United States"));
    }
}

#[test]
fn test_proceedings_layout_full_page() {
    let markup = load_fixture("docket_proceedings.html");
    let entries = extract_entries(&markup);

    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].date, "Mar 17, 2023");
    assert_eq!(entries[0].detail, "Petition for a writ of certiorari filed.");
    assert_eq!(entries[1].detail, "Petition GRANTED.");
    // Anchor markup inside a cell is stripped, text preserved.
    assert_eq!(
        entries[3].detail,
        "Judgment REVERSED and case REMANDED. Opinion by Chief Justice Roberts."
    );
}

#[test]
fn test_layouts_preserve_document_order() {
    let marker = extract_entries(&load_fixture("docket_marker.html"));
    let dates: Vec<&str> = marker.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["Feb 23, 2022", "Feb 28, 2022", "Mar 2, 2022", "Mar 4, 2022"]
    );

    let table = extract_entries(&load_fixture("docket_proceedings.html"));
    let dates: Vec<&str> = table.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["Mar 17, 2023", "Jun 30, 2023", "Nov 7, 2023", "Jun 21, 2024"]
    );
}
