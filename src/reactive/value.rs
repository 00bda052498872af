//! Values held in the session store.

use crate::forest::Forest;

/// A point picked on a chart (hover, click or selection).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointEvent {
    /// Trace (series) index.
    pub trace: usize,
    /// Point index within the trace.
    pub index: usize,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

/// Visible range along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl AxisRange {
    /// Create a new range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the range.
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Scale the range around its center.
    pub fn zoomed(&self, factor: f64) -> Self {
        let half = self.span() * factor / 2.0;
        let c = self.center();
        Self::new(c - half, c + half)
    }

    /// Shift the range by a fraction of its span.
    pub fn panned(&self, fraction: f64) -> Self {
        let d = self.span() * fraction;
        Self::new(self.min + d, self.max + d)
    }

    /// Check whether `x` lies within the range, bounds included.
    pub fn contains(&self, x: f64) -> bool {
        (self.min..=self.max).contains(&x)
    }
}

/// Current value of a component property.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value yet.
    #[default]
    Empty,
    /// Text (input boxes, dropdowns, echoed output).
    Text(String),
    /// Click counter of a button.
    Clicks(u64),
    /// Picked chart point.
    Point(PointEvent),
    /// Chart x-range after zoom or pan.
    Range(AxisRange),
    /// Points picked by a range selection.
    Selection(Vec<PointEvent>),
    /// Generated rows of nodes.
    Forest(Forest),
}

impl Value {
    /// Create a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Click count, if this is a counter.
    pub fn as_clicks(&self) -> Option<u64> {
        match self {
            Self::Clicks(n) => Some(*n),
            _ => None,
        }
    }

    /// Forest, if this value holds one.
    pub fn as_forest(&self) -> Option<&Forest> {
        match self {
            Self::Forest(f) => Some(f),
            _ => None,
        }
    }

    /// Check whether no value has been set.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_keeps_center() {
        let r = AxisRange::new(0.0, 10.0).zoomed(0.5);
        assert_eq!(r, AxisRange::new(2.5, 7.5));
        assert_eq!(r.center(), 5.0);
    }

    #[test]
    fn pan_shifts_by_span_fraction() {
        let r = AxisRange::new(0.0, 4.0).panned(-0.25);
        assert_eq!(r, AxisRange::new(-1.0, 3.0));
    }

    #[test]
    fn contains_includes_bounds() {
        let r = AxisRange::new(1.0, 2.0);
        assert!(r.contains(1.0));
        assert!(r.contains(2.0));
        assert!(!r.contains(2.5));
    }

    #[test]
    fn accessors_match_variant() {
        assert_eq!(Value::text("a").as_text(), Some("a"));
        assert_eq!(Value::Clicks(3).as_clicks(), Some(3));
        assert!(Value::Clicks(3).as_text().is_none());
        assert!(Value::default().is_empty());
        assert!(Value::Forest(Forest::new()).as_forest().is_some());
    }
}
