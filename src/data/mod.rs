//! Data feeding the chart pages.
//!
//! Built-in sample tables and grids, plus gridded rasters read from NetCDF
//! files. Data is loaded once at startup and never mutated afterwards.

mod raster;
mod sample;

pub use raster::{leading_slice, read_raster, GridStats, RasterGrid};
pub use sample::{linspace, SampleData, MARKDOWN};
