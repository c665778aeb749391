//! Plot spec: which runs to chart and where their logs live.
//!
//! JSON shape (all fields after `template` and `runs` optional):
//! {
//!   "template": "hpgmg-fv-{}.log",
//!   "runs": ["openmp", "agency", "agency-openmp"],
//!   "operations": ["smooth", "residual"],
//!   "scale": 100.0,
//!   "out_dir": "figures"
//! }
//!
//! The same fields can come from CLI flags instead; either way they pass
//! through `validate_and_build` before use.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Operation columns charted when the spec lists none.
pub const DEFAULT_OPERATIONS: [&str; 7] = [
    "smooth",
    "residual",
    "BLAS1",
    "BoundaryConditions",
    "Restriction",
    "Interpolation",
    "GhostZoneExchange",
];

/// Default value multiplier. The solver logs second-scale fractions; x100
/// brings them onto the millisecond scale the chart's axis is labeled in.
pub const DEFAULT_SCALE: f64 = 100.0;

/// Raw spec as it appears in plot.json or assembled from CLI flags.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlotSpec {
    #[serde(default)]
    pub template: String,

    #[serde(default)]
    pub runs: Vec<String>,

    #[serde(default)]
    pub operations: Vec<String>,

    #[serde(default)]
    pub scale: Option<f64>,

    #[serde(default)]
    pub out_dir: Option<String>,
}

/// Validated spec with defaults filled in.
#[derive(Debug, Clone)]
pub struct ValidatedPlot {
    pub template: String,
    pub runs: Vec<String>,
    pub operations: Vec<String>,
    pub scale: f64,
    pub out_dir: PathBuf,
}

impl PlotSpec {
    /// Check every field and fill defaults:
    /// - at least one run, no duplicates
    /// - template carries the `{}` placeholder
    /// - operations unique (defaulted when empty)
    /// - scale finite and positive
    pub fn validate_and_build(&self) -> anyhow::Result<ValidatedPlot> {
        use anyhow::bail;

        if self.runs.is_empty() {
            bail!("plot spec must list at least 1 run");
        }
        let mut seen = BTreeSet::new();
        for run in &self.runs {
            if !seen.insert(run) {
                bail!("duplicate run name in plot spec: {}", run);
            }
        }

        if self.template.is_empty() {
            bail!("no filename template given (use --template or the config file)");
        }
        if !self.template.contains("{}") {
            bail!(
                "filename template must contain a {{}} placeholder: {}",
                self.template
            );
        }

        let operations = if self.operations.is_empty() {
            DEFAULT_OPERATIONS.iter().map(|s| s.to_string()).collect()
        } else {
            self.operations.clone()
        };
        let mut seen = BTreeSet::new();
        for op in &operations {
            if !seen.insert(op) {
                bail!("duplicate operation in plot spec: {}", op);
            }
        }

        let scale = self.scale.unwrap_or(DEFAULT_SCALE);
        if !scale.is_finite() || scale <= 0.0 {
            bail!("scale must be finite and > 0, got {}", scale);
        }

        let out_dir = PathBuf::from(self.out_dir.as_deref().unwrap_or("."));

        Ok(ValidatedPlot {
            template: self.template.clone(),
            runs: self.runs.clone(),
            operations,
            scale,
            out_dir,
        })
    }
}

/// Substitute a run name into the filename template.
pub fn log_path(template: &str, run: &str) -> String {
    template.replacen("{}", run, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal() -> PlotSpec {
        PlotSpec {
            template: "hpgmg-fv-{}.log".to_string(),
            runs: vec!["openmp".to_string()],
            ..PlotSpec::default()
        }
    }

    #[test]
    fn defaults_fill_in() {
        let plot = minimal().validate_and_build().unwrap();
        assert_eq!(plot.operations, DEFAULT_OPERATIONS.to_vec());
        assert_eq!(plot.scale, DEFAULT_SCALE);
        assert_eq!(plot.out_dir, PathBuf::from("."));
    }

    #[test]
    fn empty_runs_rejected() {
        let spec = PlotSpec {
            runs: vec![],
            ..minimal()
        };
        assert!(spec.validate_and_build().is_err());
    }

    #[test]
    fn duplicate_runs_rejected() {
        let spec = PlotSpec {
            runs: vec!["openmp".to_string(), "openmp".to_string()],
            ..minimal()
        };
        assert!(spec.validate_and_build().is_err());
    }

    #[test]
    fn template_needs_placeholder() {
        let spec = PlotSpec {
            template: "hpgmg-fv.log".to_string(),
            ..minimal()
        };
        assert!(spec.validate_and_build().is_err());
    }

    #[test]
    fn bad_scale_rejected() {
        for bad in [0.0, -1.0, f64::NAN] {
            let spec = PlotSpec {
                scale: Some(bad),
                ..minimal()
            };
            assert!(spec.validate_and_build().is_err());
        }
    }

    #[test]
    fn log_path_substitutes_run_name() {
        assert_eq!(log_path("hpgmg-fv-{}.log", "agency"), "hpgmg-fv-agency.log");
    }

    #[test]
    fn spec_parses_from_json() {
        let spec: PlotSpec = serde_json::from_str(
            r#"{"template": "run-{}.log", "runs": ["a", "b"], "scale": 1.0}"#,
        )
        .unwrap();
        let plot = spec.validate_and_build().unwrap();
        assert_eq!(plot.runs, vec!["a", "b"]);
        assert_eq!(plot.scale, 1.0);
    }
}
