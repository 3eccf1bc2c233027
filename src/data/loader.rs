use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

use super::filter::passes_cutoff;
use super::model::{Sample, Series};

lazy_static! {
    /// `<int> <number>` at the start of a line; trailing text is ignored.
    /// ASCII digits only, matching what `str::parse` accepts.
    static ref SAMPLE_LINE: Regex = Regex::new(r"^([0-9]+)\s+([-+]?[0-9]*\.[0-9]+|[0-9]+)").unwrap();
}

const COMMENT_MARKER: char = '#';

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load every data file in order, one [`Series`] per file.
///
/// The first file that cannot be opened or read aborts the whole load.
pub fn load_all(paths: &[PathBuf], cutoff: Option<i64>) -> Result<Vec<Series>> {
    paths.iter().map(|p| load_series(p, cutoff)).collect()
}

/// Load a single whitespace-separated `x y` data file.
pub fn load_series(path: &Path, cutoff: Option<i64>) -> Result<Series> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut series = Series::new(path);
    series.samples = read_samples(BufReader::new(file), cutoff)
        .with_context(|| format!("reading {}", path.display()))?;

    log::info!(
        "Loaded {} samples from {}",
        series.len(),
        path.display()
    );
    Ok(series)
}

/// Parse samples from any line source.
///
/// Comment lines and lines that do not match the sample pattern are
/// skipped; only I/O failures are errors.
pub fn read_samples<R: BufRead>(reader: R, cutoff: Option<i64>) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();
    let mut skipped = 0usize;
    let mut beyond_cutoff = 0usize;

    for line in reader.lines() {
        let line = line.context("reading line")?;
        let Some(sample) = parse_sample_line(&line) else {
            skipped += 1;
            continue;
        };
        if passes_cutoff(&sample, cutoff) {
            samples.push(sample);
        } else {
            beyond_cutoff += 1;
        }
    }

    log::debug!(
        "{} samples kept, {skipped} lines skipped, {beyond_cutoff} beyond cutoff",
        samples.len()
    );
    Ok(samples)
}

/// Extract a sample from one line, or `None` for comments and noise.
pub fn parse_sample_line(line: &str) -> Option<Sample> {
    if line.starts_with(COMMENT_MARKER) {
        return None;
    }
    let caps = SAMPLE_LINE.captures(line)?;
    // An index too large for i64 is treated like any other malformed line.
    let x = caps[1].parse::<i64>().ok()?;
    let y = caps[2].parse::<f64>().ok()?;
    Some(Sample { x, y })
}
