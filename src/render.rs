//! Static chart rendering to an image file.
//!
//! The backend is picked from the output extension: `.svg` goes through
//! plotters' SVG backend, `.png`, `.bmp` and `.jpg`/`.jpeg` through the
//! bitmap backend. Anything else (PDF included) is refused up front.

use std::path::Path;

use plotters::coord::ranged1d::{AsRangedCoord, ValueFormatter};
use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use crate::color::SeriesColor;
use crate::config::PlotOptions;
use crate::data::model::Series;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unsupported output format '{0}' (expected png, bmp, jpg, jpeg or svg)")]
    UnsupportedFormat(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Image formats the static renderer can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Bmp,
    Jpeg,
    Svg,
}

impl OutputFormat {
    /// Format implied by the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "png" => Ok(OutputFormat::Png),
            "bmp" => Ok(OutputFormat::Bmp),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(PlotError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// A series together with the colour it is drawn in.
#[derive(Debug, Clone, Copy)]
pub struct ChartLine<'a> {
    pub series: &'a Series,
    pub color: SeriesColor,
}

/// Write every line onto one chart at `path`.
pub fn render_to_file(lines: &[ChartLine<'_>], options: &PlotOptions, path: &Path) -> Result<()> {
    let format = OutputFormat::from_path(path)?;
    let (width, height) = options.size;
    if width == 0 || height == 0 {
        return Err(PlotError::InvalidData(format!(
            "image size {width}x{height} has no area"
        )));
    }

    match format {
        OutputFormat::Svg => {
            draw(SVGBackend::new(path, options.size).into_drawing_area(), lines, options)?
        }
        OutputFormat::Png | OutputFormat::Bmp | OutputFormat::Jpeg => {
            draw(BitMapBackend::new(path, options.size).into_drawing_area(), lines, options)?
        }
    }

    log::info!("Wrote {} series to {}", lines.len(), path.display());
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    lines: &[ChartLine<'_>],
    options: &PlotOptions,
) -> Result<()> {
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let (x_lo, x_hi) = axis_bounds(
        lines.iter().flat_map(|l| l.series.points().map(|(x, _)| x)),
        options.log_x,
    );
    let (y_lo, y_hi) = axis_bounds(
        lines.iter().flat_map(|l| l.series.points().map(|(_, y)| y)),
        options.log_y,
    );

    match (options.log_x, options.log_y) {
        (false, false) => draw_chart(&root, x_lo..x_hi, y_lo..y_hi, lines, options)?,
        (true, false) => draw_chart(&root, (x_lo..x_hi).log_scale(), y_lo..y_hi, lines, options)?,
        (false, true) => draw_chart(&root, x_lo..x_hi, (y_lo..y_hi).log_scale(), lines, options)?,
        (true, true) => draw_chart(
            &root,
            (x_lo..x_hi).log_scale(),
            (y_lo..y_hi).log_scale(),
            lines,
            options,
        )?,
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))
}

fn draw_chart<DB, X, Y>(
    root: &DrawingArea<DB, Shift>,
    x_spec: X,
    y_spec: Y,
    lines: &[ChartLine<'_>],
    options: &PlotOptions,
) -> Result<()>
where
    DB: DrawingBackend,
    X: AsRangedCoord<Value = f64>,
    Y: AsRangedCoord<Value = f64>,
    X::CoordDescType: ValueFormatter<f64>,
    Y::CoordDescType: ValueFormatter<f64>,
{
    let mut builder = ChartBuilder::on(root);
    builder.margin(20).x_label_area_size(60).y_label_area_size(85);
    if !options.title.is_empty() {
        builder.caption(&options.title, ("sans-serif", 36));
    }
    let mut chart = builder
        .build_cartesian_2d(x_spec, y_spec)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(options.x_label.as_str())
        .y_desc(options.y_label.as_str())
        .axis_desc_style(("sans-serif", 26))
        .label_style(("sans-serif", 20))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for line in lines {
        let color = line.color.to_plotters();
        // Log axes cannot show non-positive values; drop them like the bounds do.
        let points: Vec<(f64, f64)> = line
            .series
            .points()
            .filter(|&(x, y)| (!options.log_x || x > 0.0) && (!options.log_y || y > 0.0))
            .collect();

        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(line.series.name.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(options.legend_loc.series_label_position())
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .label_font(("sans-serif", 20))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Axis range covering `values`.
///
/// Non-finite values are ignored, and so are non-positive ones on a log
/// axis. Linear ranges get 5% headroom on both sides; degenerate ranges
/// are widened so the chart always has extent.
pub fn axis_bounds(values: impl Iterator<Item = f64>, log: bool) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite() && (!log || *v > 0.0))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if lo > hi {
        return if log { (1.0, 10.0) } else { (0.0, 1.0) };
    }
    if log {
        return if lo == hi { (lo / 10.0, hi * 10.0) } else { (lo, hi) };
    }
    if lo == hi {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
        return (lo - pad, hi + pad);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn linear_bounds_have_headroom() {
        let b = axis_bounds([0.0, 10.0, 5.0].into_iter(), false);
        assert!(close(b, (-0.5, 10.5)));
    }

    #[test]
    fn log_bounds_skip_non_positive() {
        let b = axis_bounds([-3.0, 0.0, 2.0, 200.0].into_iter(), true);
        assert!(close(b, (2.0, 200.0)));
    }

    #[test]
    fn degenerate_ranges_are_widened() {
        assert!(close(axis_bounds([4.0].into_iter(), false), (3.6, 4.4)));
        assert!(close(axis_bounds([0.0, 0.0].into_iter(), false), (-1.0, 1.0)));
        assert!(close(axis_bounds([5.0].into_iter(), true), (0.5, 50.0)));
    }

    #[test]
    fn empty_input_gets_default_range() {
        assert_eq!(axis_bounds(std::iter::empty(), false), (0.0, 1.0));
        assert_eq!(axis_bounds([-1.0, f64::NAN].into_iter(), true), (1.0, 10.0));
    }

    #[test]
    fn formats_follow_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a.png")).unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("a.JPEG")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(Path::new("dir/a.svg")).unwrap(), OutputFormat::Svg);
        assert!(matches!(
            OutputFormat::from_path(Path::new("plot")),
            Err(PlotError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn pdf_is_refused_before_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");

        let err = render_to_file(&[], &PlotOptions::default(), &path).unwrap_err();
        assert!(matches!(err, PlotError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("png, bmp, jpg, jpeg or svg"));
        assert!(!path.exists());
    }

    #[test]
    fn zero_sized_image_is_rejected() {
        let options = PlotOptions {
            size: (0, 600),
            ..PlotOptions::default()
        };
        let err = render_to_file(&[], &options, Path::new("unused.png")).unwrap_err();
        assert!(matches!(err, PlotError::InvalidData(_)));
    }
}
