//! Chart output for parsed breakdown tables.

pub mod chart;

pub use chart::render_level_chart;
