use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

use super::model::TrialGroups;

lazy_static! {
    /// e.g. `rx 1.234e+06 pps`: one leading digit, three fractional, two exponent.
    static ref PPS_MEASUREMENT: Regex = Regex::new(r"([0-9]\.[0-9]{3}e[+-][0-9]{2}) pps").unwrap();
}

/// pps → Mpps.
const PPS_PER_MPPS: f64 = 1_000_000.0;

// ---------------------------------------------------------------------------
// TrialGrouper – two-counter state machine over log lines
// ---------------------------------------------------------------------------

/// Splits consecutive measurements into fixed-size trial groups.
///
/// Groups are created eagerly: the first line read while a group is
/// empty opens it, even if that line carries no measurement. A trailing
/// group therefore shows up even when it is short or empty.
#[derive(Debug)]
pub struct TrialGrouper {
    num_trials: u32,
    /// Current group number, starting at 1.
    group: u32,
    /// Measurements already placed in the current group.
    in_group: u32,
    groups: TrialGroups,
}

impl TrialGrouper {
    /// `num_trials` must be at least 1.
    pub fn new(num_trials: u32) -> Self {
        debug_assert!(num_trials > 0);
        TrialGrouper {
            num_trials: num_trials.max(1),
            group: 1,
            in_group: 0,
            groups: TrialGroups::new(),
        }
    }

    /// Feed one log line.
    pub fn push_line(&mut self, line: &str) {
        if self.in_group == 0 {
            self.groups.entry(self.group).or_default();
        }

        let Some(value) = parse_pps(line) else {
            return;
        };
        self.groups
            .entry(self.group)
            .or_default()
            .push(value / PPS_PER_MPPS);

        self.in_group += 1;
        if self.in_group == self.num_trials {
            self.in_group = 0;
            self.group += 1;
        }
    }

    /// Consume the grouper and return groups in group-number order.
    pub fn finish(self) -> TrialGroups {
        self.groups
    }
}

/// Extract the raw pps value from a line, if present.
pub fn parse_pps(line: &str) -> Option<f64> {
    let caps = PPS_MEASUREMENT.captures(line)?;
    caps[1].parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a measurement log and group it into trials of `num_trials`.
pub fn load_trial_groups(path: &Path, num_trials: u32) -> Result<TrialGroups> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let groups = read_trial_groups(BufReader::new(file), num_trials)
        .with_context(|| format!("reading {}", path.display()))?;

    log::info!(
        "Read {} trial groups of up to {num_trials} from {}",
        groups.len(),
        path.display()
    );
    Ok(groups)
}

/// Group measurements from any line source.
pub fn read_trial_groups<R: BufRead>(reader: R, num_trials: u32) -> Result<TrialGroups> {
    let mut grouper = TrialGrouper::new(num_trials);
    for line in reader.lines() {
        grouper.push_line(&line.context("reading line")?);
    }
    Ok(grouper.finish())
}
