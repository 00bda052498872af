//! Color mapping functions for heatmaps and contours.

use ratatui::style::Color;

/// Color palette for gridded charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPalette {
    /// Viridis colormap (perceptually uniform, colorblind-friendly).
    #[default]
    Viridis,
    /// Plasma colormap (perceptually uniform).
    Plasma,
    /// Rainbow/Spectral colormap (traditional, high contrast).
    Rainbow,
    /// Blue-White-Red diverging colormap.
    BlueRed,
}

impl ColorPalette {
    /// Get the next palette in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Viridis => Self::Plasma,
            Self::Plasma => Self::Rainbow,
            Self::Rainbow => Self::BlueRed,
            Self::BlueRed => Self::Viridis,
        }
    }

    /// Get palette name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
            Self::Rainbow => "Rainbow",
            Self::BlueRed => "Blue-Red",
        }
    }

    /// Map a normalized value (0.0 to 1.0) to an RGB color.
    pub fn color(self, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            Self::Viridis => two_segment(t, (68.0, 1.0, 84.0), (33.0, 104.0, 109.0), (253.0, 231.0, 37.0)),
            Self::Plasma => two_segment(t, (13.0, 8.0, 135.0), (180.0, 54.0, 121.0), (240.0, 175.0, 12.0)),
            Self::Rainbow => rainbow_color(t),
            Self::BlueRed => bluered_color(t),
        }
    }
}

/// Piecewise linear interpolation through three anchor colors.
fn two_segment(t: f64, lo: (f64, f64, f64), mid: (f64, f64, f64), hi: (f64, f64, f64)) -> Color {
    let (a, b, s) = if t < 0.5 {
        (lo, mid, t * 2.0)
    } else {
        (mid, hi, (t - 0.5) * 2.0)
    };
    let lerp = |x: f64, y: f64| (x + s * (y - x)).round() as u8;
    Color::Rgb(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Rainbow/Spectral colormap.
fn rainbow_color(t: f64) -> Color {
    // HSV to RGB with H going from 240° (blue) to 0° (red)
    let h = (1.0 - t) * 240.0;
    let c = 1.0;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else {
        (0.0, x, c)
    };

    Color::Rgb(
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
    )
}

/// Blue-White-Red diverging colormap.
fn bluered_color(t: f64) -> Color {
    if t < 0.5 {
        let v = (t * 2.0 * 255.0) as u8;
        Color::Rgb(v, v, 255)
    } else {
        let v = ((1.0 - (t - 0.5) * 2.0) * 255.0) as u8;
        Color::Rgb(255, v, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viridis_endpoints() {
        assert_eq!(ColorPalette::Viridis.color(0.0), Color::Rgb(68, 1, 84));
        assert_eq!(ColorPalette::Viridis.color(1.0), Color::Rgb(253, 231, 37));
        assert_eq!(ColorPalette::Viridis.color(0.5), Color::Rgb(33, 104, 109));
    }

    #[test]
    fn out_of_range_is_clamped() {
        for p in [ColorPalette::Viridis, ColorPalette::Plasma, ColorPalette::Rainbow, ColorPalette::BlueRed] {
            assert_eq!(p.color(-3.0), p.color(0.0));
            assert_eq!(p.color(7.0), p.color(1.0));
            assert_eq!(p.color(f64::NAN), p.color(0.0));
        }
    }

    #[test]
    fn diverging_center_is_white() {
        assert_eq!(ColorPalette::BlueRed.color(0.5), Color::Rgb(255, 255, 255));
        assert_eq!(ColorPalette::BlueRed.color(0.0), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn rainbow_runs_blue_to_red() {
        assert_eq!(ColorPalette::Rainbow.color(0.0), Color::Rgb(0, 0, 255));
        assert_eq!(ColorPalette::Rainbow.color(1.0), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn cycle_returns_to_start() {
        let mut p = ColorPalette::default();
        for _ in 0..4 {
            p = p.next();
        }
        assert_eq!(p, ColorPalette::Viridis);
        assert_eq!(ColorPalette::BlueRed.name(), "Blue-Red");
    }
}
