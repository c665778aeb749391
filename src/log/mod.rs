//! Breakdown-table extraction from multigrid solver benchmark logs.

pub mod extract;
pub mod table;

pub use extract::ExtractError;
pub use table::{BreakdownTable, ParseError, TOTAL_LABEL};

use anyhow::Context;
use std::fs;

/// Run all extraction stages over a log's text and return the table in
/// chart orientation: rows are levels (plus the total row), columns are
/// operations.
pub fn parse_breakdown(text: &str) -> anyhow::Result<BreakdownTable> {
    let section = extract::breakdown_section(text)?;
    let block = extract::dashed_block(section)?;
    let cleaned = extract::collapse_split_labels(block);
    let parsed = table::parse_block(&cleaned)?;
    Ok(parsed.transposed())
}

/// Read one run's log file and extract its breakdown table.
pub fn load_breakdown_table(path: &str) -> anyhow::Result<BreakdownTable> {
    let text = fs::read_to_string(path).with_context(|| format!("read log file {}", path))?;
    parse_breakdown(&text).with_context(|| format!("extract breakdown table from {}", path))
}
