//! Chart descriptions.
//!
//! A [`ChartSpec`] is column-oriented data plus a [`ChartKind`]. Drawing is
//! delegated to `ratatui` widgets in `ui::chart`; nothing here touches the
//! terminal.

mod colormaps;

pub use colormaps::ColorPalette;

use ndarray::Array2;

/// How a chart is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Markers only.
    Scatter,
    /// Connected line.
    Line,
    /// Dense colored grid.
    Heatmap,
    /// Grid quantized into `levels` color bands.
    Contour {
        /// Number of bands.
        levels: usize,
    },
}

impl ChartKind {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Scatter => "Scatter",
            ChartKind::Line => "Line",
            ChartKind::Heatmap => "Heatmap",
            ChartKind::Contour { .. } => "Contour",
        }
    }
}

/// A named sequence of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend name.
    pub name: String,
    /// `(x, y)` pairs.
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Create a new series.
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Data behind a chart.
#[derive(Debug, Clone)]
pub enum ChartData {
    /// One or more point series.
    Series(Vec<Series>),
    /// Values indexed `[row, col]`.
    Grid(Array2<f64>),
}

/// Everything needed to draw one chart.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    /// Title shown on the chart border.
    pub title: String,
    /// Chart kind.
    pub kind: ChartKind,
    /// Chart data.
    pub data: ChartData,
}

impl ChartSpec {
    /// Scatter chart over one or more series.
    pub fn scatter(title: impl Into<String>, series: Vec<Series>) -> Self {
        Self {
            title: title.into(),
            kind: ChartKind::Scatter,
            data: ChartData::Series(series),
        }
    }

    /// Line chart over one or more series.
    pub fn line(title: impl Into<String>, series: Vec<Series>) -> Self {
        Self {
            title: title.into(),
            kind: ChartKind::Line,
            data: ChartData::Series(series),
        }
    }

    /// Heatmap of a grid.
    pub fn heatmap(title: impl Into<String>, grid: Array2<f64>) -> Self {
        Self {
            title: title.into(),
            kind: ChartKind::Heatmap,
            data: ChartData::Grid(grid),
        }
    }

    /// Contour-banded heatmap of a grid.
    pub fn contour(title: impl Into<String>, grid: Array2<f64>, levels: usize) -> Self {
        Self {
            title: title.into(),
            kind: ChartKind::Contour { levels },
            data: ChartData::Grid(grid),
        }
    }
}

/// Bounds of a set of series: `([x_min, x_max], [y_min, y_max])`.
///
/// Only finite points count. The y range is padded by `padding` times its
/// span; degenerate ranges are widened to one unit. `None` when no point is
/// finite.
pub fn series_bounds(series: &[Series], padding: f64) -> Option<([f64; 2], [f64; 2])> {
    let mut x = [f64::INFINITY, f64::NEG_INFINITY];
    let mut y = [f64::INFINITY, f64::NEG_INFINITY];

    for &(px, py) in series.iter().flat_map(|s| s.points.iter()) {
        if px.is_finite() && py.is_finite() {
            x = [x[0].min(px), x[1].max(px)];
            y = [y[0].min(py), y[1].max(py)];
        }
    }

    if !x[0].is_finite() {
        return None;
    }

    let widen = |r: [f64; 2]| {
        if (r[1] - r[0]).abs() < 1e-12 {
            [r[0] - 0.5, r[1] + 0.5]
        } else {
            r
        }
    };
    let x = widen(x);
    let y = widen(y);
    let pad = (y[1] - y[0]) * padding;

    Some((x, [y[0] - pad, y[1] + pad]))
}

/// Finite min and max of a grid, with a non-zero range.
pub fn grid_range(grid: &Array2<f64>) -> Option<(f64, f64)> {
    let (min, max) = grid
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if !min.is_finite() {
        return None;
    }
    if (max - min).abs() < 1e-10 {
        return Some((min, min + 1.0));
    }
    Some((min, max))
}

/// Snap a normalized value onto the lower edge of one of `levels` bands,
/// rescaled so the first band maps to 0.0 and the last to 1.0.
pub fn quantize(t: f64, levels: usize) -> f64 {
    if levels < 2 {
        return 0.0;
    }
    let t = t.clamp(0.0, 1.0);
    let band = ((t * levels as f64).floor() as usize).min(levels - 1);
    band as f64 / (levels - 1) as f64
}
