//! Plot gallery with a dropdown echoed into an output cell.

use crate::chart::{ChartSpec, Series};
use crate::data::SampleData;
use crate::reactive::{Binding, Session, Source, Value};

/// Dropdown component id.
pub const DROPDOWN: &str = "demo-dropdown";
/// Output cell echoing the dropdown value.
pub const OUTPUT: &str = "output";

/// Dropdown options as `(label, value)`.
pub const CITIES: [(&str, &str); 3] = [
    ("New York City", "NYC"),
    ("Montreal", "MTL"),
    ("San Francisco", "SF"),
];

/// Register the dropdown echo.
pub fn register(session: &mut Session) {
    session.seed(DROPDOWN, Value::text(CITIES[0].1));
    session.register(
        Binding::new(|ctx| {
            let echoed = match ctx.value(DROPDOWN) {
                Some(Value::Text(v)) => Value::text(v.clone()),
                _ => Value::Empty,
            };
            Ok(vec![echoed])
        })
        .output(OUTPUT)
        .input(Source::id(DROPDOWN)),
    );
}

/// Dropdown selection state.
#[derive(Debug, Clone, Default)]
pub struct PlotsState {
    selected: usize,
}

impl PlotsState {
    /// Create a new state with the first option selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the selected option.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the selection by `delta`, wrapping, and return the new value.
    pub fn step(&mut self, delta: isize) -> &'static str {
        let n = CITIES.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(n) as usize;
        CITIES[self.selected].1
    }
}

/// The chart gallery built from sample data.
pub fn charts(data: &SampleData) -> Vec<ChartSpec> {
    vec![
        ChartSpec::scatter("Scatter", vec![Series::new("age/height", data.age_height())]),
        ChartSpec::line("Weight", vec![Series::new("weight", data.weight_series())]),
        ChartSpec::heatmap("Surface", data.surface.clone()),
        ChartSpec::contour("Contour", data.surface.clone(), 8),
    ]
}
