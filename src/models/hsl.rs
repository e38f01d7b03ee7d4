//! HSL color handling with RGB conversion for terminal rendering.

/// HSL color value.
///
/// Hue is in degrees (0-360), saturation and lightness are percentages
/// (0-100). This is the native output format of the color assigner; the
/// terminal renderer converts it to RGB per cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    /// Hue in degrees (0.0-360.0)
    pub h: f64,
    /// Saturation in percent (0.0-100.0)
    pub s: f64,
    /// Lightness in percent (0.0-100.0)
    pub l: f64,
}

impl HslColor {
    /// Creates a new `HslColor` from hue, saturation, and lightness.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Converts the color to RGB channels (0-255 each).
    #[must_use]
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let h = self.h.rem_euclid(360.0);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = h / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let m = l - c / 2.0;
        (
            ((r1 + m) * 255.0).round() as u8,
            ((g1 + m) * 255.0).round() as u8,
            ((b1 + m) * 255.0).round() as u8,
        )
    }

    /// Converts the color to a Ratatui color for terminal cells.
    #[must_use]
    pub fn to_color(&self) -> ratatui::style::Color {
        let (r, g, b) = self.to_rgb();
        ratatui::style::Color::Rgb(r, g, b)
    }

    /// Returns a dimmed copy at the given percentage of the original
    /// lightness (used for segment separators).
    #[must_use]
    pub fn dim(&self, percent: f64) -> Self {
        Self {
            h: self.h,
            s: self.s,
            l: self.l * (percent / 100.0).clamp(0.0, 1.0),
        }
    }
}
