use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// One line colour, convertible for either backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SeriesColor {
    pub fn to_egui(self) -> Color32 {
        Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn to_plotters(self) -> RGBColor {
        RGBColor(self.r, self.g, self.b)
    }
}

/// Generates `n` visually distinct colours using evenly spaced hues.
///
/// Series keep the colour of their position in the input, so the file
/// output and the viewer agree.
pub fn generate_palette(n: usize) -> Vec<SeriesColor> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            SeriesColor {
                r: (rgb.red * 255.0) as u8,
                g: (rgb.green * 255.0) as u8,
                b: (rgb.blue * 255.0) as u8,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_colour_per_series() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(4);
        assert_eq!(colors.len(), 4);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn conversions_keep_channels() {
        let c = SeriesColor { r: 10, g: 20, b: 30 };
        assert_eq!(c.to_egui(), Color32::from_rgb(10, 20, 30));
        let RGBColor(r, g, b) = c.to_plotters();
        assert_eq!((r, g, b), (10, 20, 30));
    }
}
