use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use egui_plot::Corner;
use plotters::chart::SeriesLabelPosition;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Legend location
// ---------------------------------------------------------------------------

/// Where the legend box sits, using matplotlib's location names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendLoc {
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    Right,
    CenterLeft,
    CenterRight,
    LowerCenter,
    UpperCenter,
    Center,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown legend location '{0}' (try \"upper left\", \"lower right\", \"center\", ...)")]
pub struct UnknownLegendLoc(pub String);

impl LegendLoc {
    /// Indexed by matplotlib's numeric location code.
    const NAMES: [(&'static str, LegendLoc); 11] = [
        ("best", LegendLoc::Best),
        ("upper right", LegendLoc::UpperRight),
        ("upper left", LegendLoc::UpperLeft),
        ("lower left", LegendLoc::LowerLeft),
        ("lower right", LegendLoc::LowerRight),
        ("right", LegendLoc::Right),
        ("center left", LegendLoc::CenterLeft),
        ("center right", LegendLoc::CenterRight),
        ("lower center", LegendLoc::LowerCenter),
        ("upper center", LegendLoc::UpperCenter),
        ("center", LegendLoc::Center),
    ];

    /// Position for the static (plotters) renderer. `best` has no
    /// automatic placement there and falls back to upper right.
    pub fn series_label_position(self) -> SeriesLabelPosition {
        match self {
            LegendLoc::Best | LegendLoc::UpperRight => SeriesLabelPosition::UpperRight,
            LegendLoc::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendLoc::LowerLeft => SeriesLabelPosition::LowerLeft,
            LegendLoc::LowerRight => SeriesLabelPosition::LowerRight,
            LegendLoc::Right | LegendLoc::CenterRight => SeriesLabelPosition::MiddleRight,
            LegendLoc::CenterLeft => SeriesLabelPosition::MiddleLeft,
            LegendLoc::LowerCenter => SeriesLabelPosition::LowerMiddle,
            LegendLoc::UpperCenter => SeriesLabelPosition::UpperMiddle,
            LegendLoc::Center => SeriesLabelPosition::MiddleMiddle,
        }
    }

    /// Nearest corner for the interactive plot, which only anchors legends
    /// in corners.
    pub fn corner(self) -> Corner {
        match self {
            LegendLoc::UpperLeft | LegendLoc::CenterLeft => Corner::LeftTop,
            LegendLoc::LowerLeft | LegendLoc::LowerCenter => Corner::LeftBottom,
            LegendLoc::LowerRight => Corner::RightBottom,
            _ => Corner::RightTop,
        }
    }
}

impl FromStr for LegendLoc {
    type Err = UnknownLegendLoc;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_ascii_lowercase()
            .replace(['-', '_'], " ");
        if let Ok(code) = normalized.parse::<usize>() {
            return Self::NAMES
                .get(code)
                .map(|(_, loc)| *loc)
                .ok_or_else(|| UnknownLegendLoc(s.to_string()));
        }
        Self::NAMES
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, loc)| *loc)
            .ok_or_else(|| UnknownLegendLoc(s.to_string()))
    }
}

impl fmt::Display for LegendLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = Self::NAMES
            .iter()
            .find(|(_, loc)| loc == self)
            .map(|(name, _)| *name)
            .unwrap_or("best");
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Plot options – everything the renderers need besides the data
// ---------------------------------------------------------------------------

/// Resolved rendering configuration, shared by the file and window output.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_loc: LegendLoc,
    pub log_x: bool,
    pub log_y: bool,
    /// Image file to write, if any.
    pub out_file: Option<PathBuf>,
    /// Open the interactive viewer after writing the file.
    pub interactive: bool,
    /// Static image size in pixels.
    pub size: (u32, u32),
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: "title".to_string(),
            x_label: "xlabel".to_string(),
            y_label: "ylabel".to_string(),
            legend_loc: LegendLoc::UpperLeft,
            log_x: false,
            log_y: false,
            out_file: None,
            interactive: false,
            size: (1200, 800),
        }
    }
}
