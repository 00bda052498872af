//! Dashgrid - A terminal dashboard with hierarchically generated controls.
//!
//! Dashgrid renders a handful of dashboard pages in the terminal. The core of
//! the crate is the [`forest`] module: a reducer that folds button clicks into
//! rows of generated buttons, each of which can generate more buttons one level
//! deeper. Pages are wired together by a small reactive [`reactive::Session`]
//! that routes component events to bindings.
//!
//! # Features
//!
//! - Hierarchical button generation with grid-width rebalancing
//! - Reactive bindings keyed by component id or id pattern
//! - Scatter, line, heatmap and contour charts
//! - NetCDF raster viewing
//! - Gruvbox color themes
//! - Clipboard export of the generated outline
//!
//! # Example
//!
//! ```
//! use dashgrid::config::GridConfig;
//! use dashgrid::forest::{grow, Forest, Trigger};
//!
//! let grid = GridConfig::default();
//! let forest = grow(Forest::new(), Trigger::Root { clicks: 1 }, &grid);
//! let forest = grow(forest, Trigger::FromNode { level: 1, clicks: 1 }, &grid);
//! assert_eq!(forest.depth(), 2);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod clipboard;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod forest;
pub mod pages;
pub mod reactive;
pub mod ui;

pub use error::{DashgridError, Result};
