use std::path::Path;

use crate::color::{generate_palette, SeriesColor};
use crate::config::PlotOptions;
use crate::data::filter::visible_indices;
use crate::data::model::Series;
use crate::render::{self, ChartLine};

// ---------------------------------------------------------------------------
// Plot state
// ---------------------------------------------------------------------------

/// Everything both renderers draw from, independent of the output.
pub struct PlotState {
    /// Parsed series, one per data file, in argument order.
    pub series: Vec<Series>,

    /// Per-series colour, index-aligned with `series`.
    pub colors: Vec<SeriesColor>,

    /// Per-series visibility toggled from the side panel.
    pub visible: Vec<bool>,

    /// Indices of series that are drawn (cached).
    pub visible_indices: Vec<usize>,

    /// Title, labels, axis scaling and legend placement.
    pub options: PlotOptions,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl PlotState {
    /// Colour every series and show all of them.
    pub fn new(series: Vec<Series>, options: PlotOptions) -> Self {
        let colors = generate_palette(series.len());
        let visible = vec![true; series.len()];
        let visible_indices = visible_indices(&series, &visible);
        Self {
            series,
            colors,
            visible,
            visible_indices,
            options,
            status_message: None,
        }
    }

    /// Lines to draw, in input order, skipping hidden and empty series.
    pub fn chart_lines(&self) -> Vec<ChartLine<'_>> {
        self.visible_indices
            .iter()
            .map(|&i| ChartLine {
                series: &self.series[i],
                color: self.colors[i],
            })
            .collect()
    }

    /// Flip one series' visibility and refresh the cache.
    pub fn toggle_series(&mut self, idx: usize) {
        if let Some(v) = self.visible.get_mut(idx) {
            *v = !*v;
            self.refilter();
        }
    }

    /// Show or hide every series.
    pub fn set_all_visible(&mut self, on: bool) {
        self.visible.iter_mut().for_each(|v| *v = on);
        self.refilter();
    }

    /// Recompute `visible_indices` after a visibility change.
    pub fn refilter(&mut self) {
        self.visible_indices = visible_indices(&self.series, &self.visible);
    }

    /// Total number of samples across all series.
    pub fn total_samples(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    /// Render what is currently visible to `path`, reporting the outcome
    /// in the status line.
    pub fn save_to(&mut self, path: &Path) {
        match render::render_to_file(&self.chart_lines(), &self.options, path) {
            Ok(()) => {
                self.status_message = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to save plot: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Sample;

    fn series(name: &str, n: usize) -> Series {
        let mut s = Series::new(Path::new(name));
        s.samples = (0..n as i64).map(|x| Sample { x, y: x as f64 }).collect();
        s
    }

    #[test]
    fn new_state_shows_non_empty_series() {
        let state = PlotState::new(
            vec![series("a", 3), series("b", 0), series("c", 1)],
            PlotOptions::default(),
        );
        assert_eq!(state.colors.len(), 3);
        assert_eq!(state.visible_indices, vec![0, 2]);
        assert_eq!(state.total_samples(), 4);
    }

    #[test]
    fn toggling_hides_and_restores() {
        let mut state = PlotState::new(vec![series("a", 1), series("b", 1)], PlotOptions::default());
        state.toggle_series(0);
        let names: Vec<&str> = state.chart_lines().iter().map(|l| l.series.name.as_str()).collect();
        assert_eq!(names, vec!["b"]);

        state.toggle_series(0);
        assert_eq!(state.chart_lines().len(), 2);

        state.set_all_visible(false);
        assert!(state.chart_lines().is_empty());
        // Out of range is ignored.
        state.toggle_series(9);
    }

    #[test]
    fn lines_keep_their_colour_when_others_hide() {
        let mut state = PlotState::new(vec![series("a", 1), series("b", 1)], PlotOptions::default());
        let b_color = state.colors[1];
        state.toggle_series(0);
        assert_eq!(state.chart_lines()[0].color, b_color);
    }
}
