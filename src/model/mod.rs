//! Series model: select operation columns from a transposed table and turn
//! them into per-level plot series.

use crate::Result;
use crate::log::BreakdownTable;
use anyhow::bail;

/// One chart line: an operation's timing per level, already scaled.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationSeries {
    pub name: String,
    /// (level index, scaled value) pairs, level 0 first.
    pub points: Vec<(f64, f64)>,
}

/// Build one series per requested operation from a table in chart
/// orientation (rows = levels plus the trailing total row).
///
/// The total row is dropped: an all-levels aggregate has no place on a
/// per-level axis. Every value is multiplied by `scale` (unit conversion,
/// e.g. x100 for the solver's second-scale fractions); the transform is
/// monotonic, so ordering within a level is unchanged.
pub fn build_series(
    table: &BreakdownTable,
    operations: &[String],
    scale: f64,
) -> Result<Vec<OperationSeries>> {
    if table.index.len() < 2 {
        bail!(
            "table has {} rows; need at least one level row plus the total row",
            table.index.len()
        );
    }
    let levels = table.index.len() - 1;

    let mut out = Vec::with_capacity(operations.len());
    for op in operations {
        let Some(col) = table.column_position(op) else {
            bail!(
                "operation {:?} not present in breakdown table (available: {})",
                op,
                table.columns.join(", ")
            );
        };
        let points = (0..levels)
            .map(|level| (level as f64, table.values[level][col] * scale))
            .collect();
        out.push(OperationSeries {
            name: op.clone(),
            points,
        });
    }
    Ok(out)
}
