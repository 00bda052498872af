//! Gridded raster page.

use crate::data::{read_raster, RasterGrid, SampleData};
use std::path::{Path, PathBuf};

/// File and variable to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSource {
    /// NetCDF file.
    pub path: PathBuf,
    /// Variable name (or group path).
    pub variable: String,
}

/// Loaded raster, or the reason it could not be loaded.
#[derive(Debug, Clone)]
pub struct RasterState {
    /// Grid to draw.
    pub grid: RasterGrid,
    /// Where the grid came from.
    pub origin: String,
    /// Load error, when a file was requested but could not be read.
    pub error: Option<String>,
}

impl RasterState {
    /// Load `source`, falling back to the sample surface.
    pub fn load(source: Option<&RasterSource>, sample: &SampleData) -> Self {
        let fallback = || RasterGrid::from_array("cos(x) + cos(y)", sample.surface.clone());

        match source {
            None => Self {
                grid: fallback(),
                origin: "sample surface".to_string(),
                error: None,
            },
            Some(src) => match read_raster(&src.path, &src.variable) {
                Ok(grid) => Self {
                    grid,
                    origin: display_name(&src.path),
                    error: None,
                },
                Err(e) => {
                    tracing::error!("Error loading raster: {}", e);
                    Self {
                        grid: fallback(),
                        origin: "sample surface".to_string(),
                        error: Some(e.to_string()),
                    }
                },
            },
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
