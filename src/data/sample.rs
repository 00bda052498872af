//! Built-in sample data for the chart pages.

use ndarray::Array2;
use std::f64::consts::PI;

/// Markdown shown next to the dropdown on the plots page.
pub const MARKDOWN: &str = "### Title
Here I talk about some cool stuff, **bold** maybe some code?

```
my code
```";

/// Small synthetic tables and grids.
#[derive(Debug, Clone)]
pub struct SampleData {
    /// Ages of three people.
    pub age: Vec<f64>,
    /// Heights in meters.
    pub height: Vec<f64>,
    /// Weights (normalized).
    pub weight: Vec<f64>,
    /// Coordinates along both surface axes.
    pub axis: Vec<f64>,
    /// `cos(X) + cos(Y)` over the axis meshgrid.
    pub surface: Array2<f64>,
}

impl SampleData {
    /// Build the default sample set: a 20x20 surface over [-π, π].
    pub fn new() -> Self {
        Self::with_resolution(20)
    }

    /// Build the sample set with `n` points per surface axis.
    pub fn with_resolution(n: usize) -> Self {
        let axis = linspace(-PI, PI, n);
        let surface = Array2::from_shape_fn((n, n), |(i, j)| axis[i].cos() + axis[j].cos());

        Self {
            age: vec![20.0, 23.0, 45.0],
            height: vec![1.5, 1.8, 1.9],
            weight: vec![0.42, 0.77, 0.13],
            axis,
            surface,
        }
    }

    /// Age/height pairs for a scatter chart.
    pub fn age_height(&self) -> Vec<(f64, f64)> {
        self.age.iter().copied().zip(self.height.iter().copied()).collect()
    }

    /// Weight against sample index.
    pub fn weight_series(&self) -> Vec<(f64, f64)> {
        self.weight
            .iter()
            .enumerate()
            .map(|(i, &w)| (i as f64, w))
            .collect()
    }
}

impl Default for SampleData {
    fn default() -> Self {
        Self::new()
    }
}

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn surface_peaks_at_center_and_bottoms_out_at_corners() {
        let data = SampleData::with_resolution(21);
        assert_eq!(data.surface.dim(), (21, 21));
        assert!((data.surface[[10, 10]] - 2.0).abs() < 1e-12);
        assert!((data.surface[[0, 0]] + 2.0).abs() < 1e-12);
    }

    #[test]
    fn table_pairs_line_up() {
        let data = SampleData::new();
        assert_eq!(data.age_height(), vec![(20.0, 1.5), (23.0, 1.8), (45.0, 1.9)]);
        assert_eq!(data.weight_series()[2], (2.0, 0.13));
    }
}
