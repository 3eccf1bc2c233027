use anyhow::{Context, Result};
use clap::Parser;

use bench_plot::cli::StatsArgs;
use bench_plot::data::{stats, trials};

fn main() -> Result<()> {
    env_logger::init();

    let args = StatsArgs::parse();
    let groups = trials::load_trial_groups(&args.data_file, args.num_trials)?;

    for row in stats::summarize(&groups) {
        if row.samples == 0 {
            log::debug!("Group {} has no measurements", row.group);
        }
        let line = stats::format_row(&row, args.json).context("encoding group as JSON")?;
        println!("{line}");
    }

    Ok(())
}
