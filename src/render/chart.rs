//! Log-scale line chart of per-level operation timings (SVG via plotters).

use crate::Result;
use crate::model::OperationSeries;
use anyhow::bail;
use plotters::prelude::*;
use std::path::Path;

const SIZE: (u32, u32) = (900, 540);

/// Draw one line (with point markers) per operation, level index on x and
/// time on a logarithmic y axis, legend at the lower middle. Non-positive
/// samples cannot sit on a log axis and are skipped.
pub fn render_level_chart(series: &[OperationSeries], title: &str, out_path: &Path) -> Result<()> {
    let positive: Vec<f64> = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.1))
        .filter(|v| *v > 0.0)
        .collect();
    if positive.is_empty() {
        bail!("no positive samples to plot for {}", title);
    }
    let y_lo = positive.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_hi = positive.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let levels = series.iter().map(|s| s.points.len()).max().unwrap_or(0);
    let x_hi = levels.saturating_sub(1).max(1) as f64;

    let root = SVGBackend::new(out_path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_hi, (y_lo * 0.5..y_hi * 2.0).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Level")
        .y_desc("Time (ms)")
        .draw()?;

    for (i, s) in series.iter().enumerate() {
        let color = Palette99::pick(i).mix(1.0);
        let pts: Vec<(f64, f64)> = s.points.iter().copied().filter(|p| p.1 > 0.0).collect();
        chart
            .draw_series(LineSeries::new(pts.clone(), color))?
            .label(s.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart.draw_series(pts.into_iter().map(|p| Circle::new(p, 3, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerMiddle)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Vec<OperationSeries> {
        vec![
            OperationSeries {
                name: "smooth".into(),
                points: vec![(0.0, 50.0), (1.0, 25.0), (2.0, 12.5)],
            },
            OperationSeries {
                name: "residual".into(),
                points: vec![(0.0, 20.0), (1.0, 10.0), (2.0, 5.0)],
            },
        ]
    }

    #[test]
    fn writes_svg_with_one_polyline_per_operation() {
        let out = std::env::temp_dir().join(format!(
            "mg_breakdown_chart_test_{}.svg",
            std::process::id()
        ));
        render_level_chart(&series(), "openmp", &out).unwrap();
        let svg = std::fs::read_to_string(&out).unwrap();
        std::fs::remove_file(&out).ok();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("smooth"));
        assert!(svg.contains("residual"));
    }

    #[test]
    fn all_nonpositive_values_is_an_error() {
        let flat = vec![OperationSeries {
            name: "smooth".into(),
            points: vec![(0.0, 0.0), (1.0, -1.0)],
        }];
        let out = std::env::temp_dir().join(format!(
            "mg_breakdown_chart_flat_{}.svg",
            std::process::id()
        ));
        assert!(render_level_chart(&flat, "openmp", &out).is_err());
    }
}
