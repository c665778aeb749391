//! Text slicing stages that locate the breakdown table inside a solver log.
//!
//! The solver prints a timing section that looks like:
//!
//! Breakdown of solve time by level...
//! <two blank lines>
//! level        0         1         2     total
//! -
//! smooth       0.00213   0.00104   ...   0.00391
//! residual     0.00088   0.00041   ...   0.00152
//! -
//! <four blank lines>
//!
//! The section proper is the text between the two blank lines after the
//! marker and the four blank lines that end it. Each stage here is
//! independent so a failure names exactly what was missing.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no breakdown section found (\"Breakdown\" marker, two blank lines, then a blank-line terminator)")]
    SectionNotFound,

    #[error("no dash-delimited table found inside the breakdown section")]
    TableNotFound,
}

lazy_static! {
    // Capture the text between the two blank lines after the "Breakdown"
    // marker and the four blank lines that terminate the section.
    static ref SECTION_RE: Regex =
        Regex::new(r"(?s)Breakdown.*?\n{3}(.*?)\n{5}").unwrap();

    // Between a line holding a single dash and the next such line.
    static ref BLOCK_RE: Regex =
        Regex::new(r"(?ms)^-[ \t]*$(.*?)^-[ \t]*$").unwrap();

    // A single space wedged between two letters, an artifact of the log's
    // fixed-width columns splitting multi-word labels ("Ghost Zone").
    static ref SPLIT_LABEL_RE: Regex =
        Regex::new(r"([A-Za-z]) ([A-Za-z])").unwrap();
}

/// Locate the breakdown section: the text between the first two blank lines
/// after the literal `Breakdown` marker and the four blank lines that end
/// the section.
pub fn breakdown_section(text: &str) -> Result<&str, ExtractError> {
    SECTION_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or(ExtractError::SectionNotFound)
}

/// Locate the tabular block between two single-dash delimiter lines,
/// matching non-greedily across lines.
pub fn dashed_block(section: &str) -> Result<&str, ExtractError> {
    BLOCK_RE
        .captures(section)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim_matches('\n'))
        .ok_or(ExtractError::TableNotFound)
}

/// Collapse every single space that sits directly between two letters,
/// repeatedly until a fixed point, so labels split across a column boundary
/// read as one word again ("G host Zone" -> "GhostZone").
///
/// This is a repair heuristic tied to this one log layout; it is not a
/// general whitespace normalizer.
pub fn collapse_split_labels(block: &str) -> String {
    let mut cur = block.to_string();
    loop {
        let next = SPLIT_LABEL_RE.replace_all(&cur, "${1}${2}").into_owned();
        if next == cur {
            return next;
        }
        cur = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn section_sits_between_blank_line_delimiters() {
        // Marker line, two blank lines, the table, four blank lines.
        let text =
            "setup done\nBreakdown by level\n\n\nlevel 0 1 total\n- \nrows\n-\n\n\n\n\ntrailer\n";
        let section = breakdown_section(text).unwrap();
        assert_eq!(section, "level 0 1 total\n- \nrows\n-");
    }

    #[test]
    fn missing_marker_is_section_not_found() {
        let err = breakdown_section("no timing output here\n\n\n\n\n").unwrap_err();
        assert_eq!(err, ExtractError::SectionNotFound);
    }

    #[test]
    fn missing_terminator_is_section_not_found() {
        // Marker present but the log was truncated before the closing blanks.
        let err = breakdown_section("Breakdown by level\n\n\n-\nrows\n-\n").unwrap_err();
        assert_eq!(err, ExtractError::SectionNotFound);
    }

    #[test]
    fn dashed_block_is_inner_rows_only() {
        let section = "level 0 total\n-\nsmooth 1.0\nresidual 2.0\n- ";
        let block = dashed_block(section).unwrap();
        assert_eq!(block, "smooth 1.0\nresidual 2.0");
    }

    #[test]
    fn section_without_dashes_is_table_not_found() {
        let err = dashed_block("level 0 total\nno table\n").unwrap_err();
        assert_eq!(err, ExtractError::TableNotFound);
    }

    #[test]
    fn split_labels_collapse_to_fixed_point() {
        assert_eq!(collapse_split_labels("Ghost Zone"), "GhostZone");
        // One pass is not enough here; the rule must run to a fixed point.
        assert_eq!(
            collapse_split_labels("G host Zone Exchange"),
            "GhostZoneExchange"
        );
    }

    #[test]
    fn collapse_leaves_numbers_and_wide_gaps_alone() {
        assert_eq!(
            collapse_split_labels("smooth   0.00213 0.00104"),
            "smooth   0.00213 0.00104"
        );
    }
}
