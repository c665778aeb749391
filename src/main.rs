use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

mod log;
mod model;
mod render;
mod spec;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "mg-breakdown")]
#[command(about = "Multigrid timing-breakdown visualizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one log-scale chart per run from its breakdown table.
    Plot {
        /// JSON plot spec; the flags below override its fields.
        #[arg(long)]
        config: Option<String>,

        /// Filename template with a {} placeholder for the run name.
        #[arg(long)]
        template: Option<String>,

        /// Run names, comma separated.
        #[arg(long, value_delimiter = ',')]
        runs: Vec<String>,

        /// Operation columns to chart, comma separated.
        #[arg(long, value_delimiter = ',')]
        ops: Vec<String>,

        /// Multiplier applied to every charted value.
        #[arg(long)]
        scale: Option<f64>,

        /// Directory the figures are written to.
        #[arg(short = 'o', long)]
        out_dir: Option<String>,
    },
    /// Print one level's row of a parsed breakdown table.
    Show {
        /// Filename template with a {} placeholder for the run name.
        #[arg(long)]
        template: String,

        /// Run name substituted into the template.
        #[arg(long)]
        run: String,

        /// Level row to print ("0".."N-1", or the aggregate "Total").
        #[arg(long, default_value = log::TOTAL_LABEL)]
        level: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Plot {
            config,
            template,
            runs,
            ops,
            scale,
            out_dir,
        } => {
            // 1) Start from plot.json when given, then apply flag overrides.
            let mut raw = match &config {
                Some(path) => {
                    let text = std::fs::read_to_string(path)
                        .with_context(|| format!("read plot spec {}", path))?;
                    serde_json::from_str::<spec::PlotSpec>(&text)
                        .with_context(|| format!("parse plot spec {}", path))?
                }
                None => spec::PlotSpec::default(),
            };
            if let Some(t) = template {
                raw.template = t;
            }
            if !runs.is_empty() {
                raw.runs = runs;
            }
            if !ops.is_empty() {
                raw.operations = ops;
            }
            if let Some(s) = scale {
                raw.scale = Some(s);
            }
            if let Some(d) = out_dir {
                raw.out_dir = Some(d);
            }
            let plot = raw.validate_and_build()?;

            // 2) One chart per run; each log is processed independently and
            //    the first failure aborts the whole invocation.
            for run in &plot.runs {
                let path = spec::plot::log_path(&plot.template, run);
                let table = log::load_breakdown_table(&path)?;
                let series = model::build_series(&table, &plot.operations, plot.scale)?;
                let out = plot.out_dir.join(format!("{}_figure.svg", run));
                render::render_level_chart(&series, run, &out)?;
                println!("Wrote {}", out.display());
            }
        }

        Commands::Show {
            template,
            run,
            level,
        } => {
            let path = spec::plot::log_path(&template, &run);
            let table = log::load_breakdown_table(&path)?;
            let Some(row) = table.row(&level) else {
                bail!(
                    "level {:?} not found in {} (available: {})",
                    level,
                    path,
                    table.index.join(", ")
                );
            };
            for (op, value) in table.columns.iter().zip(row) {
                println!("{:<24} {:>12.6}", op, value);
            }
        }
    }

    Ok(())
}
