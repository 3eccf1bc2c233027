//! Command-line interface definitions for both tools.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{LegendLoc, PlotOptions};

/// Plot one or more `x y` benchmark data files.
#[derive(Parser, Debug)]
#[command(name = "bench-plot", version, about)]
pub struct PlotArgs {
    /// Data file with one `<index> <value>` sample per line (repeatable).
    #[arg(short = 'd', long = "data-file")]
    pub data_files: Vec<PathBuf>,

    /// Image file to write: png, bmp, jpg/jpeg or svg, picked by extension.
    #[arg(short = 'o', long)]
    pub out_file: Option<PathBuf>,

    /// Logarithmic x axis.
    #[arg(long)]
    pub log_x: bool,

    /// Logarithmic y axis.
    #[arg(long)]
    pub log_y: bool,

    /// Chart title.
    #[arg(long, default_value = "title")]
    pub title: String,

    /// X axis label.
    #[arg(long, default_value = "xlabel")]
    pub xlabel: String,

    /// Y axis label.
    #[arg(long, default_value = "ylabel")]
    pub ylabel: String,

    /// Legend position, e.g. "upper left", "lower right", "center".
    #[arg(long, default_value = "upper left")]
    pub legend_loc: LegendLoc,

    /// Show the plot in a window.
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Accepted for compatibility; has no effect.
    #[arg(short = 'c', long)]
    pub cumulative: bool,

    /// Drop samples whose index is greater than this.
    #[arg(short = 'x', long, allow_negative_numbers = true)]
    pub cutoff: Option<i64>,

    /// Image width in pixels.
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}

impl PlotArgs {
    /// Rendering configuration resolved from the arguments.
    pub fn plot_options(&self) -> PlotOptions {
        PlotOptions {
            title: self.title.clone(),
            x_label: self.xlabel.clone(),
            y_label: self.ylabel.clone(),
            legend_loc: self.legend_loc,
            log_x: self.log_x,
            log_y: self.log_y,
            out_file: self.out_file.clone(),
            interactive: self.interactive,
            size: (self.width, self.height),
        }
    }
}

/// Mean and standard deviation of packet rates per trial group.
#[derive(Parser, Debug)]
#[command(name = "pps_stats", version, about)]
pub struct StatsArgs {
    /// Measurement log containing `<d.ddde±dd> pps` values.
    #[arg(short = 'd', long = "data-file")]
    pub data_file: PathBuf,

    /// Consecutive measurements per trial group.
    #[arg(short = 't', long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub num_trials: u32,

    /// Print one JSON object per group instead of text rows.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_defaults() {
        let args = PlotArgs::try_parse_from(["bench-plot", "--data-file", "a.dat"]).unwrap();
        assert_eq!(args.data_files, vec![PathBuf::from("a.dat")]);
        assert_eq!(args.legend_loc, LegendLoc::UpperLeft);
        assert_eq!(args.title, "title");
        assert_eq!(args.xlabel, "xlabel");
        assert_eq!(args.ylabel, "ylabel");
        assert!(args.cutoff.is_none());
        assert!(!args.log_x && !args.log_y && !args.interactive && !args.cumulative);

        let options = args.plot_options();
        assert_eq!(options.size, (1200, 800));
        assert!(options.out_file.is_none());
    }

    #[test]
    fn data_file_repeats_in_order() {
        let args = PlotArgs::try_parse_from([
            "bench-plot",
            "--data-file",
            "b.dat",
            "--data-file",
            "a.dat",
            "--cutoff",
            "100",
            "--legend-loc",
            "lower right",
            "--log-y",
        ])
        .unwrap();
        assert_eq!(
            args.data_files,
            vec![PathBuf::from("b.dat"), PathBuf::from("a.dat")]
        );
        assert_eq!(args.cutoff, Some(100));
        assert_eq!(args.legend_loc, LegendLoc::LowerRight);
        assert!(args.plot_options().log_y);
    }

    #[test]
    fn short_flags_match_long_ones() {
        let args = PlotArgs::try_parse_from([
            "bench-plot", "-d", "a.dat", "-d", "b.dat", "-o", "out.png", "-i", "-c", "-x", "100",
        ])
        .unwrap();
        assert_eq!(
            args.data_files,
            vec![PathBuf::from("a.dat"), PathBuf::from("b.dat")]
        );
        assert_eq!(args.out_file, Some(PathBuf::from("out.png")));
        assert!(args.interactive && args.cumulative);
        assert_eq!(args.cutoff, Some(100));

        let stats = StatsArgs::try_parse_from(["pps_stats", "-d", "run.log", "-t", "5"]).unwrap();
        assert_eq!(stats.data_file, PathBuf::from("run.log"));
        assert_eq!(stats.num_trials, 5);
    }

    #[test]
    fn plot_accepts_no_data_file() {
        let args = PlotArgs::try_parse_from(["bench-plot"]).unwrap();
        assert!(args.data_files.is_empty());
    }

    #[test]
    fn bad_legend_location_is_rejected() {
        let res = PlotArgs::try_parse_from([
            "bench-plot",
            "--data-file",
            "a.dat",
            "--legend-loc",
            "somewhere",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn stats_defaults_to_ten_trials() {
        let args = StatsArgs::try_parse_from(["pps_stats", "--data-file", "run.log"]).unwrap();
        assert_eq!(args.num_trials, 10);
        assert!(!args.json);
    }

    #[test]
    fn stats_rejects_zero_trials() {
        let res = StatsArgs::try_parse_from([
            "pps_stats",
            "--data-file",
            "run.log",
            "--num-trials",
            "0",
        ]);
        assert!(res.is_err());
    }
}
