use clap::Parser;
use sort_bench_plot::config::{PlotConfig, DEFAULT_HEIGHT, DEFAULT_SNAPSHOT_SIZE, DEFAULT_WIDTH};
use sort_bench_plot::plot::png::PngPlotter;
use sort_bench_plot::render::render_all;
use sort_bench_plot::report::load_reports;
use sort_bench_plot::summary::{print_summary, write_json};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Plot sorting benchmark reports.
///
/// Reads the pipe-delimited tables printed by the benchmark harness and
/// writes, for every scenario, a bar chart at one array size
/// ("<scenario> <size>.png") and a log-log scaling chart ("<scenario>.png").
#[derive(Parser)]
#[command(name = "plot_report", version, about, long_about = None)]
struct Cli {
    /// Report files, read in order. Reads standard input when empty or "-".
    inputs: Vec<PathBuf>,

    /// Array size compared by the bar charts.
    #[arg(long, default_value_t = DEFAULT_SNAPSHOT_SIZE)]
    snapshot_size: u64,

    /// Directory the images are written to.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Print the aggregated measurements as tables.
    #[arg(long)]
    summary: bool,

    /// Also write the aggregated measurements as JSON.
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,
}

fn run(cli: Cli) -> sort_bench_plot::Result<()> {
    let config = PlotConfig {
        snapshot_size: cli.snapshot_size,
        output_dir: cli.output_dir,
        width: cli.width,
        height: cli.height,
    };

    let (table, stats) = load_reports(&cli.inputs)?;
    info!(
        lines = stats.lines,
        accepted = stats.accepted,
        skipped = stats.total_skipped(),
        measurements = table.len(),
        "aggregated report"
    );

    if cli.summary {
        print_summary(&table, &stats);
    }
    if let Some(path) = &cli.json {
        write_json(&table, path)?;
        info!("wrote {}", path.display());
    }

    let mut plotter = PngPlotter::new(config.width, config.height);
    let written = render_all(&table, &config, &mut plotter)?;
    info!(charts = written.len(), "done");

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
