//! Dashboard pages.
//!
//! Every page registers its bindings on the shared [`Session`] once at
//! startup. Page modules also carry the small amount of per-page UI state
//! (focus, cursors) that is not part of the reactive store.

pub mod callbacks;
pub mod dynamic;
pub mod hierarchy;
pub mod interactive;
pub mod plots;
pub mod raster;

use crate::config::DashConfig;
use crate::error::Result;
use crate::reactive::Session;

/// One dashboard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Page {
    /// Dropdown echo and the chart gallery.
    #[default]
    Plots,
    /// Two text inputs echoed into two outputs.
    Callbacks,
    /// Hover, click and zoom events on a chart.
    Interactive,
    /// A single row of columns that rebalance as they grow.
    Dynamic,
    /// Buttons that generate buttons one level deeper.
    Hierarchy,
    /// Gridded raster drawn as a heatmap.
    Raster,
}

impl Page {
    /// Every page in tab order.
    pub const ALL: [Page; 6] = [
        Page::Plots,
        Page::Callbacks,
        Page::Interactive,
        Page::Dynamic,
        Page::Hierarchy,
        Page::Raster,
    ];

    /// Tab title.
    pub fn name(self) -> &'static str {
        match self {
            Page::Plots => "Plots",
            Page::Callbacks => "Callbacks",
            Page::Interactive => "Interactive",
            Page::Dynamic => "Dynamic",
            Page::Hierarchy => "Hierarchy",
            Page::Raster => "Raster",
        }
    }

    /// Position in tab order.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&p| p == self).unwrap_or(0)
    }

    /// Next page, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous page, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Build a session with every page's bindings registered and fired once.
pub fn build_session(config: &DashConfig) -> Result<Session> {
    let mut session = Session::new();
    plots::register(&mut session);
    callbacks::register(&mut session);
    interactive::register(&mut session);
    dynamic::register(&mut session, config.grid);
    hierarchy::register(&mut session, config.grid);
    session.fire_initial()?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_wrap_both_ways() {
        assert_eq!(Page::Plots.prev(), Page::Raster);
        assert_eq!(Page::Raster.next(), Page::Plots);
        assert_eq!(Page::Dynamic.next(), Page::Hierarchy);
        for page in Page::ALL {
            assert_eq!(page.next().prev(), page);
        }
    }

    #[test]
    fn session_is_ready_after_build() {
        let session = build_session(&DashConfig::default()).unwrap();
        assert_eq!(session.binding_count(), 8);
        assert_eq!(session.text(plots::OUTPUT), "NYC");
        assert_eq!(session.text(callbacks::OUTPUT_2), "Second input: second value");
        assert!(hierarchy::forest(&session).is_empty());
        assert!(dynamic::forest(&session).is_empty());
    }
}
