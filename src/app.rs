//! Application state and logic.

use crate::chart::ColorPalette;
use crate::config::DashConfig;
use crate::data::SampleData;
use crate::error::Result;
use crate::export;
use crate::forest::{Forest, ROOT_COMPONENT};
use crate::pages::callbacks::{self, CallbacksState};
use crate::pages::hierarchy::{self, HierarchyCursor};
use crate::pages::interactive::{self, InteractiveState};
use crate::pages::plots::{self, PlotsState};
use crate::pages::raster::{RasterSource, RasterState};
use crate::pages::{build_session, dynamic, Page};
use crate::reactive::{Session, Value};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Layout configuration.
    pub config: DashConfig,
    /// Reactive store and bindings for every page.
    pub session: Session,
    /// Visible page.
    pub page: Page,
    /// Current theme.
    pub theme: Theme,
    /// Palette for heatmaps and contours.
    pub palette: ColorPalette,
    /// Status message.
    pub status: String,
    /// Built-in chart data.
    pub sample: SampleData,
    /// Dropdown selection on the plots page.
    pub plots: PlotsState,
    /// Input focus on the callbacks page.
    pub callbacks: CallbacksState,
    /// Chart cursor and range on the interactive page.
    pub interactive: InteractiveState,
    /// Button cursor on the hierarchy page.
    pub hierarchy: HierarchyCursor,
    /// Raster page data.
    pub raster: RasterState,
}

impl App {
    /// Create a new application instance.
    pub fn new(config: DashConfig, page: Page, raster: Option<RasterSource>) -> Result<Self> {
        let session = build_session(&config)?;
        let sample = SampleData::new();
        let raster = RasterState::load(raster.as_ref(), &sample);

        let status = match &raster.error {
            Some(e) => format!("Raster not loaded: {}", e),
            None => "Ready".to_string(),
        };

        Ok(Self {
            config,
            session,
            page,
            theme: Theme::GruvboxDark,
            palette: ColorPalette::default(),
            status,
            sample,
            plots: PlotsState::new(),
            callbacks: CallbacksState::new(),
            interactive: InteractiveState::new(),
            hierarchy: HierarchyCursor::default(),
            raster,
        })
    }

    /// Show the next page.
    pub fn next_page(&mut self) {
        self.show(self.page.next());
    }

    /// Show the previous page.
    pub fn prev_page(&mut self) {
        self.show(self.page.prev());
    }

    fn show(&mut self, page: Page) {
        self.page = page;
        self.status = format!("Page: {}", page.name());
        tracing::info!(page = page.name(), "page switched");
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Cycle the heatmap palette.
    pub fn cycle_palette(&mut self) {
        self.palette = self.palette.next();
        self.status = format!("Palette: {}", self.palette.name());
    }

    fn dispatch(&mut self, id: &str, value: Value) -> bool {
        match self.session.set_input(id, value) {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(id, "dispatch failed: {}", e);
                self.status = format!("Error: {}", e);
                false
            },
        }
    }

    fn click(&mut self, id: &str) -> bool {
        match self.session.click(id) {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(id, "click failed: {}", e);
                self.status = format!("Error: {}", e);
                false
            },
        }
    }

    /// Move the dropdown selection.
    pub fn dropdown_step(&mut self, delta: isize) {
        let value = self.plots.step(delta);
        if self.dispatch(plots::DROPDOWN, Value::text(value)) {
            self.status = format!("Selected {}", value);
        }
    }

    /// Type a character into the focused input.
    pub fn type_char(&mut self, c: char) {
        let id = self.callbacks.focused();
        let next = callbacks::typed(self.session.text(id), c);
        self.dispatch(id, Value::Text(next));
    }

    /// Delete the last character of the focused input.
    pub fn backspace(&mut self) {
        let id = self.callbacks.focused();
        let next = callbacks::erased(self.session.text(id));
        self.dispatch(id, Value::Text(next));
    }

    /// Move focus to the other input.
    pub fn toggle_focus(&mut self) {
        self.callbacks.toggle_focus();
        self.status = format!("Editing {}", self.callbacks.focused());
    }

    /// Move the chart cursor along its trace.
    pub fn hover_move(&mut self, delta: isize) {
        let p = self.interactive.move_point(delta);
        self.dispatch(interactive::HOVER, Value::Point(p));
    }

    /// Move the chart cursor to the other trace.
    pub fn hover_switch_trace(&mut self) {
        let p = self.interactive.switch_trace();
        self.dispatch(interactive::HOVER, Value::Point(p));
    }

    /// Click the point under the chart cursor.
    pub fn click_point(&mut self) {
        let p = self.interactive.current();
        if self.dispatch(interactive::CLICK, Value::Point(p)) {
            self.status = format!("Clicked ({}, {})", p.x, p.y);
        }
    }

    /// Select every point inside the visible x-range.
    pub fn select_visible(&mut self) {
        let points = self.interactive.selection();
        let count = points.len();
        if self.dispatch(interactive::SELECT, Value::Selection(points)) {
            self.status = format!("Selected {} point(s)", count);
        }
    }

    /// Zoom the interactive chart in.
    pub fn zoom_in(&mut self) {
        let r = self.interactive.zoom_in();
        self.dispatch(interactive::RELAYOUT, Value::Range(r));
    }

    /// Zoom the interactive chart out.
    pub fn zoom_out(&mut self) {
        let r = self.interactive.zoom_out();
        self.dispatch(interactive::RELAYOUT, Value::Range(r));
    }

    /// Pan the interactive chart.
    pub fn pan(&mut self, direction: f64) {
        let r = self.interactive.pan(direction);
        self.dispatch(interactive::RELAYOUT, Value::Range(r));
    }

    /// Reset the interactive chart range.
    pub fn reset_zoom(&mut self) {
        let r = self.interactive.reset();
        self.dispatch(interactive::RELAYOUT, Value::Range(r));
    }

    /// Add a column on the dynamic page.
    pub fn add_column(&mut self) {
        if self.click(dynamic::BUTTON) {
            let count = self.dynamic_forest().node_count();
            self.status = format!("{} columns", count);
        }
    }

    /// Add a first-level button on the hierarchy page.
    pub fn add_level(&mut self) {
        if self.click(ROOT_COMPONENT) {
            let forest = self.hierarchy_forest();
            self.status = format!(
                "{} levels, {} buttons",
                forest.depth(),
                forest.node_count()
            );
        }
    }

    /// Click the button under the hierarchy cursor.
    pub fn click_selected(&mut self) {
        let forest = self.hierarchy_forest();
        let Some(node) = self.hierarchy.node(&forest) else {
            self.status = "No button selected".to_string();
            return;
        };

        let id = node.component_id();
        if self.click(&id) {
            self.status = format!("Clicked {}", node.label());
        }
    }

    /// Move the hierarchy cursor between rows.
    pub fn cursor_row(&mut self, delta: isize) {
        let forest = self.hierarchy_forest();
        self.hierarchy.move_row(&forest, delta);
    }

    /// Move the hierarchy cursor within a row.
    pub fn cursor_col(&mut self, delta: isize) {
        let forest = self.hierarchy_forest();
        self.hierarchy.move_col(&forest, delta);
    }

    /// Copy the hierarchy outline to the clipboard.
    pub fn copy_outline(&mut self) {
        let forest = self.hierarchy_forest();
        match export::copy_forest(&forest, Some(hierarchy::DISPLAY_AREA)) {
            Ok(()) => self.status = "Outline copied!".to_string(),
            Err(e) => {
                tracing::error!("copy failed: {}", e);
                self.status = format!("Copy failed: {}", e);
            },
        }
    }

    /// Rows on the hierarchy page.
    pub fn hierarchy_forest(&self) -> Forest {
        hierarchy::forest(&self.session)
    }

    /// Columns on the dynamic page.
    pub fn dynamic_forest(&self) -> Forest {
        dynamic::forest(&self.session)
    }
}
