use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

// ---------------------------------------------------------------------------
// Sample – a single (x, y) point parsed from one line
// ---------------------------------------------------------------------------

/// One data point of a plot series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Integer index column (x).
    pub x: i64,
    /// Measured value (y).
    pub y: f64,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Series – all samples of one input file
// ---------------------------------------------------------------------------

/// Ordered samples read from a single data file, in file order.
#[derive(Debug, Clone)]
pub struct Series {
    /// Legend label (the file name).
    pub name: String,
    /// Where the samples were read from.
    pub path: PathBuf,
    pub samples: Vec<Sample>,
}

impl Series {
    /// Create an empty series labelled after the file name of `path`.
    pub fn new(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| path.display().to_string());
        Series {
            name,
            path: path.to_path_buf(),
            samples: Vec::new(),
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples as `(x, y)` float pairs, ready for a chart backend.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples.iter().map(|s| (s.x as f64, s.y))
    }
}

// ---------------------------------------------------------------------------
// Trial groups and their aggregate
// ---------------------------------------------------------------------------

/// Group number (starting at 1) → scaled measurements (Mpps).
/// `BTreeMap` keeps groups in creation order since numbers only grow.
pub type TrialGroups = BTreeMap<u32, Vec<f64>>;

/// Mean and population standard deviation of one trial group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupStats {
    pub group: u32,
    pub mean: f64,
    pub std_dev: f64,
    /// Number of measurements that went into the group.
    pub samples: usize,
}

impl fmt::Display for GroupStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.group,
            fixed4(self.mean),
            fixed4(self.std_dev)
        )
    }
}

/// Four decimal places; NaN prints as `nan`.
fn fixed4(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else {
        format!("{v:.4}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_is_named_after_file() {
        let s = Series::new(Path::new("/tmp/results/latency_64B.dat"));
        assert_eq!(s.name, "latency_64B.dat");
        assert!(s.is_empty());
    }

    #[test]
    fn group_stats_row_format() {
        let row = GroupStats {
            group: 3,
            mean: 2.0,
            std_dev: 0.816_496_580_927_726,
            samples: 3,
        };
        assert_eq!(row.to_string(), "3 2.0000 0.8165");
    }

    #[test]
    fn empty_group_prints_nan() {
        let row = GroupStats {
            group: 1,
            mean: f64::NAN,
            std_dev: f64::NAN,
            samples: 0,
        };
        assert_eq!(row.to_string(), "1 nan nan");
    }

    #[test]
    fn json_row_shape() {
        let row = GroupStats {
            group: 2,
            mean: 2.5,
            std_dev: 0.5,
            samples: 4,
        };
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"group":2,"mean":2.5,"std_dev":0.5,"samples":4}"#
        );
    }

    #[test]
    fn json_writes_nan_as_null() {
        let row = GroupStats {
            group: 1,
            mean: f64::NAN,
            std_dev: f64::NAN,
            samples: 0,
        };
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"group":1,"mean":null,"std_dev":null,"samples":0}"#
        );
    }
}
