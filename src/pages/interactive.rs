//! Chart interaction events (hover, click, selection, zoom) echoed into panels.

use crate::chart::{ChartSpec, Series};
use crate::reactive::{AxisRange, Binding, PointEvent, Session, Source, Value};

/// Hover event input.
pub const HOVER: &str = "graph.hover";
/// Click event input.
pub const CLICK: &str = "graph.click";
/// Range selection event input.
pub const SELECT: &str = "graph.selected";
/// Zoom/pan event input.
pub const RELAYOUT: &str = "graph.relayout";
/// Hover readout.
pub const HOVER_DATA: &str = "hover-data";
/// Click readout.
pub const CLICK_DATA: &str = "click-data";
/// Selection readout.
pub const SELECTED_DATA: &str = "selected-data";
/// Zoom/pan readout.
pub const RELAYOUT_DATA: &str = "relayout-data";

/// The two traces shown on the interactive chart.
pub const TRACES: [(&str, [(f64, f64); 4]); 2] = [
    ("Trace 1", [(1.0, 4.0), (2.0, 1.0), (3.0, 3.0), (4.0, 5.0)]),
    ("Trace 2", [(1.0, 9.0), (2.0, 4.0), (3.0, 1.0), (4.0, 4.0)]),
];

const ZOOM_STEP: f64 = 0.8;
const PAN_STEP: f64 = 0.1;

/// Register one echo binding per event kind.
pub fn register(session: &mut Session) {
    for (input, output, title) in [
        (HOVER, HOVER_DATA, "Hover Data"),
        (CLICK, CLICK_DATA, "Click Data"),
        (SELECT, SELECTED_DATA, "Selected Data"),
        (RELAYOUT, RELAYOUT_DATA, "Zoom/Pan Data"),
    ] {
        session.register(
            Binding::new(move |ctx| Ok(vec![Value::text(describe(title, ctx.value(input)))]))
                .output(output)
                .input(Source::id(input)),
        );
    }
}

/// Readout text for an event value.
pub fn describe(title: &str, value: Option<&Value>) -> String {
    match value {
        Some(Value::Point(p)) => format!(
            "{}\n  trace: {}\n  point: {}\n  x: {}\n  y: {}",
            title,
            trace_name(p.trace),
            p.index,
            p.x,
            p.y
        ),
        Some(Value::Selection(points)) => {
            let mut text = format!("{}\n  points: {}", title, points.len());
            for p in points {
                text.push_str(&format!(
                    "\n  {} #{}: ({}, {})",
                    trace_name(p.trace),
                    p.index,
                    p.x,
                    p.y
                ));
            }
            text
        },
        Some(Value::Range(r)) => format!("{}\n  x_range: [{:.2}, {:.2}]", title, r.min, r.max),
        _ => format!("{}\n  null", title),
    }
}

fn trace_name(trace: usize) -> &'static str {
    TRACES.get(trace).map(|t| t.0).unwrap_or("?")
}

/// Cursor over the chart points plus the visible x-range.
#[derive(Debug, Clone)]
pub struct InteractiveState {
    trace: usize,
    index: usize,
    x_range: AxisRange,
}

impl InteractiveState {
    /// Create a new state with the full x-range visible.
    pub fn new() -> Self {
        Self {
            trace: 0,
            index: 0,
            x_range: Self::full_range(),
        }
    }

    fn full_range() -> AxisRange {
        AxisRange::new(0.5, 4.5)
    }

    /// Current visible x-range.
    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    /// Point under the cursor.
    pub fn current(&self) -> PointEvent {
        let (x, y) = TRACES[self.trace].1[self.index];
        PointEvent {
            trace: self.trace,
            index: self.index,
            x,
            y,
        }
    }

    /// Every point of every trace inside the visible x-range.
    pub fn selection(&self) -> Vec<PointEvent> {
        TRACES
            .iter()
            .enumerate()
            .flat_map(|(trace, (_, points))| {
                points
                    .iter()
                    .enumerate()
                    .map(move |(index, &(x, y))| PointEvent { trace, index, x, y })
            })
            .filter(|p| self.x_range.contains(p.x))
            .collect()
    }

    /// Move along the current trace, clamped to its ends.
    pub fn move_point(&mut self, delta: isize) -> PointEvent {
        let last = TRACES[self.trace].1.len() as isize - 1;
        self.index = (self.index as isize + delta).clamp(0, last) as usize;
        self.current()
    }

    /// Switch to the other trace, keeping the point index.
    pub fn switch_trace(&mut self) -> PointEvent {
        self.trace = (self.trace + 1) % TRACES.len();
        self.current()
    }

    /// Zoom in around the range center.
    pub fn zoom_in(&mut self) -> AxisRange {
        self.x_range = self.x_range.zoomed(ZOOM_STEP);
        self.x_range
    }

    /// Zoom out around the range center.
    pub fn zoom_out(&mut self) -> AxisRange {
        self.x_range = self.x_range.zoomed(1.0 / ZOOM_STEP);
        self.x_range
    }

    /// Pan by a fraction of the span; negative pans left.
    pub fn pan(&mut self, direction: f64) -> AxisRange {
        self.x_range = self.x_range.panned(PAN_STEP * direction);
        self.x_range
    }

    /// Reset to the full range.
    pub fn reset(&mut self) -> AxisRange {
        self.x_range = Self::full_range();
        self.x_range
    }
}

impl Default for InteractiveState {
    fn default() -> Self {
        Self::new()
    }
}

/// Scatter chart of both traces.
pub fn chart() -> ChartSpec {
    ChartSpec::scatter(
        "Interactive Graph",
        TRACES
            .iter()
            .map(|(name, points)| Series::new(*name, points.to_vec()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let mut session = Session::new();
        register(&mut session);
        session.fire_initial().unwrap();
        session
    }

    #[test]
    fn initial_readouts_are_null() {
        let session = session();
        assert_eq!(session.text(HOVER_DATA), "Hover Data\n  null");
        assert_eq!(session.text(RELAYOUT_DATA), "Zoom/Pan Data\n  null");
    }

    #[test]
    fn hover_and_click_are_independent() {
        let mut session = session();
        let mut state = InteractiveState::new();

        let p = state.move_point(2);
        session.set_input(HOVER, Value::Point(p)).unwrap();
        assert_eq!(
            session.text(HOVER_DATA),
            "Hover Data\n  trace: Trace 1\n  point: 2\n  x: 3\n  y: 3"
        );
        assert_eq!(session.text(CLICK_DATA), "Click Data\n  null");

        let p = state.switch_trace();
        session.set_input(CLICK, Value::Point(p)).unwrap();
        assert!(session.text(CLICK_DATA).contains("trace: Trace 2"));
        assert!(session.text(CLICK_DATA).contains("y: 1"));
    }

    #[test]
    fn cursor_is_clamped() {
        let mut state = InteractiveState::new();
        assert_eq!(state.move_point(-5).index, 0);
        assert_eq!(state.move_point(10).index, 3);
    }

    #[test]
    fn zoom_round_trip_restores_span() {
        let mut state = InteractiveState::new();
        let zoomed = state.zoom_in();
        assert!(zoomed.span() < 4.0);
        let back = state.zoom_out();
        assert!((back.span() - 4.0).abs() < 1e-9);
        assert_eq!(state.reset(), AxisRange::new(0.5, 4.5));
    }

    #[test]
    fn relayout_readout_shows_range() {
        let mut session = session();
        let mut state = InteractiveState::new();
        let r = state.pan(1.0);
        session.set_input(RELAYOUT, Value::Range(r)).unwrap();
        assert_eq!(session.text(RELAYOUT_DATA), "Zoom/Pan Data\n  x_range: [0.90, 4.90]");
    }

    #[test]
    fn selection_follows_visible_range() {
        let mut session = session();
        assert_eq!(session.text(SELECTED_DATA), "Selected Data\n  null");

        let mut state = InteractiveState::new();
        assert_eq!(state.selection().len(), 8);

        state.zoom_in();
        state.zoom_in();
        session
            .set_input(SELECT, Value::Selection(state.selection()))
            .unwrap();
        assert_eq!(
            session.text(SELECTED_DATA),
            "Selected Data\n  points: 4\n  Trace 1 #1: (2, 1)\n  Trace 1 #2: (3, 3)\n  Trace 2 #1: (2, 4)\n  Trace 2 #2: (3, 1)"
        );
        assert_eq!(session.text(HOVER_DATA), "Hover Data\n  null");
    }

    #[test]
    fn selection_outside_data_is_empty() {
        let mut session = session();
        let mut state = InteractiveState::new();
        state.pan(10.0);
        assert!(state.selection().is_empty());
        session
            .set_input(SELECT, Value::Selection(state.selection()))
            .unwrap();
        assert_eq!(session.text(SELECTED_DATA), "Selected Data\n  points: 0");
    }

    #[test]
    fn chart_has_both_traces() {
        match chart().data {
            crate::chart::ChartData::Series(s) => assert_eq!(s.len(), 2),
            crate::chart::ChartData::Grid(_) => panic!("expected series"),
        }
    }
}
