//! Spec layer: plot configuration (JSON file or CLI flags) + validation.
//!
//! Kept separate from log parsing and rendering; it owns which runs exist,
//! where their logs live, and what the chart selects.

pub mod plot;

pub use plot::{DEFAULT_OPERATIONS, DEFAULT_SCALE, PlotSpec, ValidatedPlot};
