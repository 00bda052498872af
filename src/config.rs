//! Layout configuration for the dashboard pages.

/// Grid used when laying out generated nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Units a full row spans; the first row is split evenly across it.
    pub total_width: u16,
    /// Fixed width of every node below the first level.
    pub deep_width: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            total_width: 12,
            deep_width: 2,
        }
    }
}

/// Configuration for line and scatter charts.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Padding factor for Y-axis (0.15 = 15% margin).
    pub y_axis_padding_factor: f64,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.15,
        }
    }
}

/// Configuration for heatmap and contour charts.
#[derive(Debug, Clone)]
pub struct HeatmapLayoutConfig {
    /// Terminal characters per pixel horizontally (for aspect ratio correction).
    pub pixel_width: usize,
    /// Width of colorbar in characters.
    pub colorbar_width: usize,
    /// Width reserved for Y-axis labels.
    pub left_margin: u16,
}

impl Default for HeatmapLayoutConfig {
    fn default() -> Self {
        Self {
            pixel_width: 2, // 2:1 aspect ratio correction
            colorbar_width: 40,
            left_margin: 8,
        }
    }
}

/// Combined configuration, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct DashConfig {
    /// Node grid.
    pub grid: GridConfig,
    /// Line and scatter charts.
    pub plot: PlotLayoutConfig,
    /// Heatmap and contour charts.
    pub heatmap: HeatmapLayoutConfig,
}
