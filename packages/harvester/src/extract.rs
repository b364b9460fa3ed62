//! Proceedings-table extraction from docket detail pages.
//!
//! The docket site serves two page layouts. Older dockets render the
//! proceedings as a plain-text table delimited by a `~~~Date~~~` header
//! and a horizontal rule; newer dockets render a structured HTML table
//! carrying an `id="proceedings"` anchor. Both extractors are pure
//! functions over the markup and total over arbitrary input: absence of
//! the expected structure yields an empty list, never an error.

use crate::types::Entry;

/// Header marker opening the plain-text proceedings table.
pub const DATE_HEADER_MARKER: &str = "~~~Date~~~";

/// Horizontal-rule prefix closing the plain-text proceedings table.
pub const HR_TAG_PREFIX: &str = "<hr";

/// Attribute identifying the structured proceedings table.
pub const PROCEEDINGS_ANCHOR: &str = "id=\"proceedings\"";

/// Extract proceeding entries from docket page markup.
///
/// Selects the structured-table strategy when the `id="proceedings"`
/// anchor is present anywhere in the markup, the marker-delimited strategy
/// otherwise. Entries come back in document order.
#[must_use]
pub fn extract_entries(markup: &str) -> Vec<Entry> {
    if markup.contains(PROCEEDINGS_ANCHOR) {
        extract_anchored_table(markup)
    } else {
        extract_marker_table(markup)
    }
}

/// Plain-text layout: the window runs from the first `~~~Date~~~` marker to
/// the first `<hr` after it (or end of document). Tag-stripped non-empty
/// lines pair up as (date, detail); the header line and a trailing unpaired
/// line are dropped.
fn extract_marker_table(markup: &str) -> Vec<Entry> {
    let Some(start) = markup.find(DATE_HEADER_MARKER) else {
        return Vec::new();
    };
    let lower = ascii_lower(markup);
    let end = lower[start..]
        .find(HR_TAG_PREFIX)
        .map_or(markup.len(), |i| start + i);
    let window = break_tags_to_newlines(&markup[start..end]);

    let lines: Vec<String> = window
        .lines()
        .map(|line| strip_tags(line).trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    let content = match lines.first() {
        Some(first) if first.starts_with(DATE_HEADER_MARKER) => &lines[1..],
        _ => &lines[..],
    };

    content
        .chunks(2)
        .filter_map(|pair| match pair {
            [date, detail] => Some(Entry::new(date.clone(), detail.clone())),
            _ => None, // trailing unpaired line
        })
        .collect()
}

/// Structured layout: the window runs from the opening tag carrying the
/// `id="proceedings"` anchor to its matching close tag (or end of
/// document). The first row is the header; each remaining row yields an
/// entry when its first two cells are non-empty after tag stripping.
fn extract_anchored_table(markup: &str) -> Vec<Entry> {
    let Some(anchor) = markup.find(PROCEEDINGS_ANCHOR) else {
        return Vec::new();
    };
    let open = markup[..anchor].rfind('<').unwrap_or(0);
    let tag_name: String = markup[open..]
        .chars()
        .skip(1)
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();

    let end = if tag_name.is_empty() {
        markup.len()
    } else {
        let lower = ascii_lower(markup);
        let close_pat = format!("</{}", ascii_lower(&tag_name));
        lower[anchor..]
            .find(&close_pat)
            .map_or(markup.len(), |i| anchor + i)
    };
    let window = &markup[open..end];

    let mut entries = Vec::new();
    for row in tag_blocks(window, "tr").iter().skip(1) {
        let cells: Vec<String> = tag_blocks(row, "td")
            .iter()
            .map(|cell| strip_tags(cell).trim().to_string())
            .collect();
        if let [date, detail, ..] = cells.as_slice() {
            if !date.is_empty() && !detail.is_empty() {
                entries.push(Entry::new(date.clone(), detail.clone()));
            }
        }
    }
    entries
}

/// Lowercase ASCII copy for position-stable case-insensitive scanning.
fn ascii_lower(s: &str) -> String {
    s.chars().map(|c| c.to_ascii_lowercase()).collect()
}

/// Remove markup tags from a piece of text.
fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Replace `<br>` variants with newlines so line pairing sees one value per
/// line even when the source packs the whole table into a single line.
fn break_tags_to_newlines(s: &str) -> String {
    let lower = ascii_lower(s);
    let mut out = String::with_capacity(s.len());
    let mut at = 0;
    while let Some(rel) = lower[at..].find("<br") {
        let start = at + rel;
        let is_break = matches!(
            lower[start + 3..].chars().next(),
            Some('>' | '/' | ' ') | None
        );
        if !is_break {
            out.push_str(&s[at..start + 3]);
            at = start + 3;
            continue;
        }
        out.push_str(&s[at..start]);
        out.push('\n');
        at = lower[start..]
            .find('>')
            .map_or(lower.len(), |i| start + i + 1);
    }
    out.push_str(&s[at..]);
    out
}

/// Inner content of successive `<name ...>` blocks within `s`.
///
/// Tolerates markup that never closes a tag: a block ends at its close tag,
/// at the next opening tag of the same name, or at the end of input.
fn tag_blocks(s: &str, name: &str) -> Vec<String> {
    let lower = ascii_lower(s);
    let open_pat = format!("<{name}");
    let close_pat = format!("</{name}");
    let mut blocks = Vec::new();
    let mut at = 0;

    while let Some(rel) = lower[at..].find(&open_pat) {
        let open = at + rel;
        let after_name = open + open_pat.len();
        // Require a tag boundary so "<td" does not match "<tdata".
        match lower[after_name..].chars().next() {
            Some(c) if c.is_ascii_alphanumeric() => {
                at = after_name;
                continue;
            }
            None => break,
            _ => {}
        }
        let Some(content_rel) = lower[after_name..].find('>') else {
            break;
        };
        let content = after_name + content_rel + 1;

        let close = lower[content..].find(&close_pat).map(|i| content + i);
        let next_open = lower[content..].find(&open_pat).map(|i| content + i);
        let end = match (close, next_open) {
            (Some(c), Some(n)) => c.min(n),
            (Some(c), None) => c,
            (None, Some(n)) => n,
            (None, None) => s.len(),
        };
        blocks.push(s[content..end].to_string());
        at = end;
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_table_single_line() {
        let markup = "~~~Date~~~<br>Jan 1, 2020<br>Order entered<hr>";
        let entries = extract_entries(markup);
        assert_eq!(entries, vec![Entry::new("Jan 1, 2020", "Order entered")]);
    }

    #[test]
    fn test_marker_table_multiline() {
        let markup = "\
<html><body><pre>
No. 21A612
~~~Date~~~&nbsp;&nbsp;Proceedings and Orders
Feb 23, 2022
Application for a stay, submitted to Justice Alito.
Feb 28, 2022
<b>Response requested.</b>
</pre>
<hr>
footer text
</body></html>";
        let entries = extract_entries(markup);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, "Feb 23, 2022");
        assert_eq!(
            entries[0].detail,
            "Application for a stay, submitted to Justice Alito."
        );
        assert_eq!(entries[1].detail, "Response requested.");
    }

    #[test]
    fn test_marker_absent_yields_empty() {
        assert!(extract_entries("<html>no table here</html>").is_empty());
        assert!(extract_entries("").is_empty());
    }

    #[test]
    fn test_marker_without_hr_extends_to_end() {
        let markup = "~~~Date~~~\nJan 1, 2020\nOrder entered";
        let entries = extract_entries(markup);
        assert_eq!(entries, vec![Entry::new("Jan 1, 2020", "Order entered")]);
    }

    #[test]
    fn test_trailing_unpaired_line_dropped() {
        let markup = "~~~Date~~~\nJan 1, 2020\nOrder entered\nJan 5, 2020\n<hr>";
        let entries = extract_entries(markup);
        // Three content lines pair to exactly one entry.
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, "Jan 1, 2020");
    }

    #[test]
    fn test_content_before_marker_excluded() {
        let markup = "Skip me\nAnd me\n~~~Date~~~\nJan 1, 2020\nOrder entered\n<hr>After";
        let entries = extract_entries(markup);
        assert_eq!(entries, vec![Entry::new("Jan 1, 2020", "Order entered")]);
    }

    #[test]
    fn test_anchored_table_basic() {
        let markup = "<table id=\"proceedings\">\
<tr><td>H1</td><td>H2</td></tr>\
<tr><td>Feb 2</td><td>Filed</td></tr>\
</table>";
        let entries = extract_entries(markup);
        assert_eq!(entries, vec![Entry::new("Feb 2", "Filed")]);
    }

    #[test]
    fn test_anchor_preferred_over_marker() {
        let markup = "~~~Date~~~\nJan 1\nIgnored by strategy selection\n\
<table id=\"proceedings\">\
<tr><td>Date</td><td>Detail</td></tr>\
<tr><td>Feb 2</td><td>Filed</td></tr>\
</table>";
        let entries = extract_entries(markup);
        assert_eq!(entries, vec![Entry::new("Feb 2", "Filed")]);
    }

    #[test]
    fn test_anchored_row_with_one_cell_skipped() {
        let markup = "<table id=\"proceedings\">\
<tr><td>Date</td><td>Detail</td></tr>\
<tr><td>Mar 1</td></tr>\
<tr><td>Mar 2</td><td>Filed</td></tr>\
</table>";
        let entries = extract_entries(markup);
        assert_eq!(entries, vec![Entry::new("Mar 2", "Filed")]);
    }

    #[test]
    fn test_anchored_row_with_empty_cell_skipped() {
        let markup = "<table id=\"proceedings\">\
<tr><td>Date</td><td>Detail</td></tr>\
<tr><td>Mar 1</td><td>  </td></tr>\
</table>";
        assert!(extract_entries(markup).is_empty());
    }

    #[test]
    fn test_anchored_extra_cells_ignored() {
        let markup = "<table id=\"proceedings\">\
<tr><td>Date</td><td>Detail</td><td>Extra</td></tr>\
<tr><td>Apr 4</td><td>Distributed</td><td>ignored</td></tr>\
</table>";
        let entries = extract_entries(markup);
        assert_eq!(entries, vec![Entry::new("Apr 4", "Distributed")]);
    }

    #[test]
    fn test_anchored_cell_markup_stripped() {
        let markup = "<table id=\"proceedings\">\
<tr><td>Date</td><td>Detail</td></tr>\
<tr><td><span>May 5</span></td><td>Reply of <a href=\"#\">applicant</a> filed.</td></tr>\
</table>";
        let entries = extract_entries(markup);
        assert_eq!(entries, vec![Entry::new("May 5", "Reply of applicant filed.")]);
    }

    #[test]
    fn test_anchored_table_unclosed_extends_to_end() {
        let markup = "<table id=\"proceedings\">\
<tr><td>Date</td><td>Detail</td></tr>\
<tr><td>Jun 6</td><td>Filed</td></tr>";
        let entries = extract_entries(markup);
        assert_eq!(entries, vec![Entry::new("Jun 6", "Filed")]);
    }

    #[test]
    fn test_anchored_mixed_case_tags() {
        let markup = "<TABLE id=\"proceedings\">\
<TR><TD>Date</TD><TD>Detail</TD></TR>\
<TR><TD>Jul 7</TD><TD>Filed</TD></TR>\
</TABLE>";
        let entries = extract_entries(markup);
        assert_eq!(entries, vec![Entry::new("Jul 7", "Filed")]);
    }

    #[test]
    fn test_extraction_is_pure() {
        let markup = "~~~Date~~~<br>Jan 1, 2020<br>Order entered<hr>";
        assert_eq!(extract_entries(markup), extract_entries(markup));
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<b>bold</b> text"), "bold text");
        assert_eq!(strip_tags("no tags"), "no tags");
        assert_eq!(strip_tags("<unclosed"), "");
    }
}
