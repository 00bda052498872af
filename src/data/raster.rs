//! Gridded raster loading.

use crate::error::{DashgridError, Result};
use ndarray::{Array2, ArrayD, Axis, IxDyn};
use netcdf::types::{FloatType, IntType, NcVariableType};
use std::path::Path;

/// Summary statistics over the finite cells of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStats {
    /// Smallest finite value.
    pub min: f64,
    /// Largest finite value.
    pub max: f64,
    /// Mean of finite values.
    pub mean: f64,
    /// Number of finite values.
    pub valid_count: usize,
}

impl GridStats {
    /// Compute statistics, or `None` when no cell is finite.
    pub fn compute(data: &Array2<f64>) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0f64;
        let mut count = 0usize;
        for &v in data.iter() {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
                sum += v;
                count += 1;
            }
        }

        (count > 0).then(|| Self {
            min,
            max,
            mean: sum / count as f64,
            valid_count: count,
        })
    }
}

/// A 2-D slice of a gridded variable, ready to draw.
#[derive(Debug, Clone)]
pub struct RasterGrid {
    /// Variable name.
    pub name: String,
    /// Row and column dimension names.
    pub dim_names: (String, String),
    /// Units attribute, if any.
    pub units: Option<String>,
    /// Values indexed `[row, col]`.
    pub data: Array2<f64>,
    /// Statistics over finite values.
    pub stats: Option<GridStats>,
}

impl RasterGrid {
    /// Build a grid from an in-memory array.
    pub fn from_array(name: impl Into<String>, data: Array2<f64>) -> Self {
        let stats = GridStats::compute(&data);
        Self {
            name: name.into(),
            dim_names: ("y".to_string(), "x".to_string()),
            units: None,
            data,
            stats,
        }
    }

    /// Number of rows and columns.
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }
}

/// Read `variable` from a NetCDF file as a 2-D grid.
///
/// Leading dimensions beyond the last two are fixed at index 0. CF
/// `scale_factor` and `add_offset` attributes are applied.
pub fn read_raster(path: &Path, variable: &str) -> Result<RasterGrid> {
    let file = netcdf::open(path)
        .map_err(|e| DashgridError::NetCDF(format!("Failed to open file: {}", e)))?;

    let var = file
        .variable(variable.trim_start_matches('/'))
        .ok_or_else(|| DashgridError::NetCDF(format!("Variable '{}' not found", variable)))?;

    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    let dim_names: Vec<String> = var
        .dimensions()
        .iter()
        .map(|d| d.name().to_string())
        .collect();

    if shape.len() < 2 {
        return Err(DashgridError::NetCDF(format!(
            "Variable '{}' has {} dimension(s), a raster needs at least 2",
            variable,
            shape.len()
        )));
    }

    let scale_factor = numeric_attribute(&var, "scale_factor").unwrap_or(1.0);
    let add_offset = numeric_attribute(&var, "add_offset").unwrap_or(0.0);
    let units = var.attribute("units").and_then(|a| match a.value() {
        Ok(netcdf::AttributeValue::Str(s)) => Some(s),
        _ => None,
    });

    let full = read_variable_array(&var, &shape)?;
    let mut data = leading_slice(full)?;
    if scale_factor != 1.0 || add_offset != 0.0 {
        data.mapv_inplace(|v| v * scale_factor + add_offset);
    }

    let n = dim_names.len();
    let stats = GridStats::compute(&data);
    tracing::info!(variable, rows = data.nrows(), cols = data.ncols(), "raster loaded");

    Ok(RasterGrid {
        name: variable.trim_start_matches('/').to_string(),
        dim_names: (dim_names[n - 2].clone(), dim_names[n - 1].clone()),
        units,
        data,
        stats,
    })
}

/// Collapse every dimension but the last two by taking index 0.
pub fn leading_slice(mut data: ArrayD<f64>) -> Result<Array2<f64>> {
    while data.ndim() > 2 {
        if data.len_of(Axis(0)) == 0 {
            return Err(DashgridError::NetCDF(
                "Variable has an empty leading dimension".to_string(),
            ));
        }
        data = data.index_axis_move(Axis(0), 0);
    }
    data.into_dimensionality()
        .map_err(|e| DashgridError::NetCDF(format!("Invalid raster shape: {}", e)))
}

fn numeric_attribute(var: &netcdf::Variable<'_>, name: &str) -> Option<f64> {
    use netcdf::AttributeValue;

    match var.attribute(name)?.value().ok()? {
        AttributeValue::Double(v) => Some(v),
        AttributeValue::Float(v) => Some(f64::from(v)),
        AttributeValue::Int(v) => Some(f64::from(v)),
        AttributeValue::Short(v) => Some(f64::from(v)),
        AttributeValue::Doubles(v) => v.first().copied(),
        AttributeValue::Floats(v) => v.first().map(|&x| f64::from(x)),
        _ => None,
    }
}

fn read_variable_array(var: &netcdf::Variable<'_>, shape: &[usize]) -> Result<ArrayD<f64>> {
    let from_vec = |v: Vec<f64>| -> Result<ArrayD<f64>> {
        ArrayD::from_shape_vec(IxDyn(shape), v)
            .map_err(|e| DashgridError::NetCDF(format!("Invalid shape/data size: {}", e)))
    };

    let read_err = |e: netcdf::Error| DashgridError::NetCDF(format!("Failed to read data: {}", e));

    match var.vartype() {
        NcVariableType::Float(FloatType::F64) => {
            from_vec(var.get_values::<f64, _>(..).map_err(read_err)?)
        },
        NcVariableType::Float(FloatType::F32) => from_vec(
            var.get_values::<f32, _>(..)
                .map_err(read_err)?
                .into_iter()
                .map(f64::from)
                .collect(),
        ),
        NcVariableType::Int(IntType::I64) => from_vec(
            var.get_values::<i64, _>(..)
                .map_err(read_err)?
                .into_iter()
                .map(|x| x as f64)
                .collect(),
        ),
        NcVariableType::Int(IntType::I32) => from_vec(
            var.get_values::<i32, _>(..)
                .map_err(read_err)?
                .into_iter()
                .map(f64::from)
                .collect(),
        ),
        NcVariableType::Int(IntType::I16) => from_vec(
            var.get_values::<i16, _>(..)
                .map_err(read_err)?
                .into_iter()
                .map(f64::from)
                .collect(),
        ),
        NcVariableType::Int(IntType::I8) => from_vec(
            var.get_values::<i8, _>(..)
                .map_err(read_err)?
                .into_iter()
                .map(f64::from)
                .collect(),
        ),
        NcVariableType::Int(IntType::U8) => from_vec(
            var.get_values::<u8, _>(..)
                .map_err(read_err)?
                .into_iter()
                .map(f64::from)
                .collect(),
        ),
        NcVariableType::Int(IntType::U16) => from_vec(
            var.get_values::<u16, _>(..)
                .map_err(read_err)?
                .into_iter()
                .map(f64::from)
                .collect(),
        ),
        NcVariableType::Int(IntType::U32) => from_vec(
            var.get_values::<u32, _>(..)
                .map_err(read_err)?
                .into_iter()
                .map(f64::from)
                .collect(),
        ),
        NcVariableType::Char | NcVariableType::String => Err(DashgridError::NetCDF(
            "Character/string data cannot be drawn as a raster".to_string(),
        )),
        other => Err(DashgridError::NetCDF(format!(
            "Unsupported variable type: {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn stats_skip_non_finite_cells() {
        let grid = array![[1.0, f64::NAN], [3.0, 5.0]];
        let stats = GridStats::compute(&grid).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.valid_count, 3);
        assert!(GridStats::compute(&array![[f64::NAN]]).is_none());
    }

    #[test]
    fn leading_slice_takes_first_index_of_extra_dims() {
        let data = ArrayD::from_shape_fn(IxDyn(&[2, 3, 2, 2]), |idx| {
            (idx[0] * 100 + idx[1] * 10 + idx[2] * 2 + idx[3]) as f64
        });
        let slice = leading_slice(data).unwrap();
        assert_eq!(slice, array![[0.0, 1.0], [2.0, 3.0]]);
    }

    #[test]
    fn leading_slice_rejects_one_dimension() {
        let data = ArrayD::from_shape_vec(IxDyn(&[3]), vec![1.0, 2.0, 3.0]).unwrap();
        assert!(leading_slice(data).is_err());
    }

    #[test]
    fn leading_slice_rejects_empty_leading_dimension() {
        let data = ArrayD::<f64>::zeros(IxDyn(&[0, 2, 2]));
        let err = leading_slice(data).unwrap_err();
        assert!(err.to_string().contains("empty leading dimension"));

        let data = ArrayD::<f64>::zeros(IxDyn(&[1, 0, 2, 2]));
        assert!(leading_slice(data).is_err());
    }

    #[test]
    fn read_raster_slices_and_scales() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packed.nc");
        {
            let mut file = netcdf::create(&path).unwrap();
            file.add_dimension("time", 2).unwrap();
            file.add_dimension("lat", 2).unwrap();
            file.add_dimension("lon", 3).unwrap();
            let mut var = file
                .add_variable::<i16>("temp", &["time", "lat", "lon"])
                .unwrap();
            var.put_attribute("scale_factor", 0.5f64).unwrap();
            var.put_attribute("add_offset", 10.0f64).unwrap();
            var.put_attribute("units", "K").unwrap();
            let values: Vec<i16> = (0..12).collect();
            var.put_values(&values, ..).unwrap();
        }

        let grid = read_raster(&path, "temp").unwrap();
        assert_eq!(grid.name, "temp");
        assert_eq!(grid.dim_names, ("lat".to_string(), "lon".to_string()));
        assert_eq!(grid.units.as_deref(), Some("K"));
        assert_eq!(grid.data, array![[10.0, 10.5, 11.0], [11.5, 12.0, 12.5]]);
        let stats = grid.stats.unwrap();
        assert_eq!(stats.valid_count, 6);
        assert_eq!(stats.mean, 11.25);
    }

    #[test]
    fn read_raster_rejects_unknown_variable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.nc");
        {
            let mut file = netcdf::create(&path).unwrap();
            file.add_dimension("x", 2).unwrap();
            let mut var = file.add_variable::<f64>("line", &["x"]).unwrap();
            var.put_values(&[1.0, 2.0], ..).unwrap();
        }

        let err = read_raster(&path, "missing").unwrap_err();
        assert!(err.to_string().contains("'missing' not found"));
        let err = read_raster(&path, "line").unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn from_array_computes_stats() {
        let grid = RasterGrid::from_array("z", array![[0.0, 2.0]]);
        assert_eq!(grid.shape(), (1, 2));
        assert_eq!(grid.stats.map(|s| s.mean), Some(1.0));
    }

    #[test]
    fn missing_file_is_a_netcdf_error() {
        let err = read_raster(Path::new("/definitely/not/here.nc"), "t").unwrap_err();
        assert!(matches!(err, DashgridError::NetCDF(_)));
    }
}
