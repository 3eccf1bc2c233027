use anyhow::{Context, Result};
use clap::Parser;

use bench_plot::{app, render};
use bench_plot::cli::PlotArgs;
use bench_plot::data::loader;
use bench_plot::state::PlotState;

fn main() -> Result<()> {
    env_logger::init();

    let args = PlotArgs::parse();
    if args.cumulative {
        log::warn!("--cumulative is accepted but has no effect");
    }

    if let Some(path) = &args.out_file {
        render::OutputFormat::from_path(path)?;
    }

    let series = loader::load_all(&args.data_files, args.cutoff)?;
    if series.iter().all(|s| s.is_empty()) {
        log::warn!("No samples matched in any data file");
    }

    let options = args.plot_options();
    if options.out_file.is_none() && !options.interactive {
        log::warn!("Neither --out-file nor --interactive given; nothing to show");
    }

    let state = PlotState::new(series, options);

    if let Some(path) = state.options.out_file.clone() {
        render::render_to_file(&state.chart_lines(), &state.options, &path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if state.options.interactive {
        app::run_viewer(state).map_err(|e| anyhow::anyhow!("viewer failed: {e}"))?;
    }

    Ok(())
}
