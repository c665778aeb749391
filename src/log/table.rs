//! Whitespace-delimited breakdown table: parse, label, transpose.

use thiserror::Error;

/// Label of the reserved aggregate column (per-operation time accumulated
/// across all levels).
pub const TOTAL_LABEL: &str = "Total";

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("breakdown block contains no data rows")]
    Empty,

    #[error("row {label:?} has no value fields")]
    NoValues { label: String },

    #[error("row {label:?} has {found} value fields, expected {expected}")]
    Ragged {
        label: String,
        found: usize,
        expected: usize,
    },

    #[error("duplicate operation label {0:?}")]
    DuplicateLabel(String),

    #[error("row {label:?}: cannot parse {field:?} as a number")]
    BadNumber { label: String, field: String },
}

/// A rectangular table of timing values with named rows and columns.
///
/// As parsed, rows are operations and columns are level labels `"0"`..`"N-1"`
/// plus [`TOTAL_LABEL`]. [`BreakdownTable::transposed`] flips the orientation
/// for the chart (one line per operation across levels). Values are never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownTable {
    /// Row labels.
    pub index: Vec<String>,
    /// Column labels.
    pub columns: Vec<String>,
    /// `index.len()` rows of `columns.len()` values each.
    pub values: Vec<Vec<f64>>,
}

impl BreakdownTable {
    /// Values of the row named `label`, if present.
    pub fn row(&self, label: &str) -> Option<&[f64]> {
        let at = self.index.iter().position(|l| l == label)?;
        Some(&self.values[at])
    }

    /// Position of the column named `name`, if present.
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Number of solver levels (columns minus the reserved total column).
    pub fn level_count(&self) -> usize {
        self.columns.len().saturating_sub(1)
    }

    /// Swap rows and columns.
    pub fn transposed(&self) -> BreakdownTable {
        let mut values = vec![vec![0.0f64; self.index.len()]; self.columns.len()];
        for (r, row) in self.values.iter().enumerate() {
            for (c, v) in row.iter().enumerate() {
                values[c][r] = *v;
            }
        }
        BreakdownTable {
            index: self.columns.clone(),
            columns: self.index.clone(),
            values,
        }
    }
}

/// Parse a cleaned dash-delimited block into a [`BreakdownTable`].
///
/// Each line is `label  v0 v1 .. v{N-1} total`, whitespace separated. All
/// rows must carry the same number of values and labels must be unique
/// (a duplicate after label repair means the repair mangled the block, so
/// it is an error rather than a silent merge).
pub fn parse_block(block: &str) -> Result<BreakdownTable, ParseError> {
    let mut index: Vec<String> = Vec::new();
    let mut values: Vec<Vec<f64>> = Vec::new();
    let mut width: Option<usize> = None;

    for line in block.lines() {
        let mut fields = line.split_whitespace();
        let Some(label) = fields.next() else {
            continue;
        };
        let fields: Vec<&str> = fields.collect();

        match width {
            None => {
                if fields.is_empty() {
                    return Err(ParseError::NoValues {
                        label: label.to_string(),
                    });
                }
                width = Some(fields.len());
            }
            Some(w) if fields.len() != w => {
                return Err(ParseError::Ragged {
                    label: label.to_string(),
                    found: fields.len(),
                    expected: w,
                });
            }
            Some(_) => {}
        }

        if index.iter().any(|l| l == label) {
            return Err(ParseError::DuplicateLabel(label.to_string()));
        }

        let mut row = Vec::with_capacity(fields.len());
        for field in &fields {
            let v: f64 = field.parse().map_err(|_| ParseError::BadNumber {
                label: label.to_string(),
                field: field.to_string(),
            })?;
            row.push(v);
        }

        index.push(label.to_string());
        values.push(row);
    }

    let Some(width) = width else {
        return Err(ParseError::Empty);
    };

    // Level columns 0..N-1, then the reserved total column.
    let mut columns: Vec<String> = (0..width - 1).map(|i| i.to_string()).collect();
    columns.push(TOTAL_LABEL.to_string());

    Ok(BreakdownTable {
        index,
        columns,
        values,
    })
}
