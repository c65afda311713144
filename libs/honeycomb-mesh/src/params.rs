//! # Grid Parameters
//!
//! The validated value object the tiler consumes. Hosts construct it through
//! [`GridParameters::new`], which enforces the documented bounds, so the
//! geometry kernel itself never has to re-check its inputs.

use config::constants::{
    DEFAULT_COLUMNS, DEFAULT_HEIGHT, DEFAULT_ROWS, DEFAULT_SCALE, DEFAULT_SPACING,
    MAX_GRID_CELLS, MIN_GRID_COLUMNS, MIN_GRID_ROWS,
};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// Parameters describing one honeycomb grid.
///
/// Invariants held by construction: `rows >= 2`, `columns >= 2`,
/// `rows * columns <= MAX_GRID_CELLS` (so combined face indices fit `u32`),
/// `scale > 0`, `spacing >= 0`, `height >= 0`.
///
/// # Examples
/// ```
/// use honeycomb_mesh::GridParameters;
///
/// let params = GridParameters::new(3, 4, 1.0, 0.1, 0.5).unwrap();
/// assert_eq!(params.rows(), 3);
/// assert_eq!(params.cell_count(), 12);
///
/// assert!(GridParameters::new(1, 4, 1.0, 0.1, 0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridParameters {
    rows: u32,
    columns: u32,
    scale: f64,
    spacing: f64,
    height: f64,
}

impl GridParameters {
    /// Builds a parameter set, validating every field.
    ///
    /// Returns [`MeshError::InvalidParameter`] naming the offending field
    /// when a value falls outside its accepted range.
    pub fn new(
        rows: u32,
        columns: u32,
        scale: f64,
        spacing: f64,
        height: f64,
    ) -> Result<Self, MeshError> {
        if rows < MIN_GRID_ROWS {
            return Err(MeshError::invalid_parameter(
                "rows",
                format!("must be at least {MIN_GRID_ROWS}: {rows}"),
            ));
        }
        if columns < MIN_GRID_COLUMNS {
            return Err(MeshError::invalid_parameter(
                "columns",
                format!("must be at least {MIN_GRID_COLUMNS}: {columns}"),
            ));
        }
        if u64::from(rows) * u64::from(columns) > MAX_GRID_CELLS {
            return Err(MeshError::invalid_parameter(
                "cells",
                format!("rows * columns must not exceed {MAX_GRID_CELLS}: {rows} x {columns}"),
            ));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(MeshError::invalid_parameter(
                "scale",
                format!("must be positive: {scale}"),
            ));
        }
        if !spacing.is_finite() || spacing < 0.0 {
            return Err(MeshError::invalid_parameter(
                "spacing",
                format!("must be non-negative: {spacing}"),
            ));
        }
        if !height.is_finite() || height < 0.0 {
            return Err(MeshError::invalid_parameter(
                "height",
                format!("must be non-negative: {height}"),
            ));
        }

        Ok(Self {
            rows,
            columns,
            scale,
            spacing,
            height,
        })
    }

    /// Number of grid rows (hexagons along the x axis).
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of grid columns (hexagons along the y axis).
    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Uniform scale applied to the hexagon footprint (never to height).
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Gap between adjacent hexagons.
    #[inline]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Extrusion height; zero produces flat hexagons.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Total number of grid cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

impl Default for GridParameters {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            scale: DEFAULT_SCALE,
            spacing: DEFAULT_SPACING,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters() {
        let params = GridParameters::new(2, 2, 1.0, 0.0, 0.0).unwrap();
        assert_eq!(params.rows(), 2);
        assert_eq!(params.columns(), 2);
        assert_eq!(params.cell_count(), 4);
    }

    #[test]
    fn test_default_parameters_are_valid() {
        let d = GridParameters::default();
        let rebuilt =
            GridParameters::new(d.rows(), d.columns(), d.scale(), d.spacing(), d.height());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_too_few_rows() {
        let err = GridParameters::new(1, 2, 1.0, 0.0, 0.0).unwrap_err();
        match err {
            MeshError::InvalidParameter { field, .. } => assert_eq!(field, "rows"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_too_few_columns() {
        let err = GridParameters::new(2, 0, 1.0, 0.0, 0.0).unwrap_err();
        match err {
            MeshError::InvalidParameter { field, .. } => assert_eq!(field, "columns"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_oversized_grid_rejected() {
        // 70_000^2 cells would wrap the u32 face-index offsets.
        let err = GridParameters::new(70_000, 70_000, 1.0, 0.0, 0.0).unwrap_err();
        match err {
            MeshError::InvalidParameter { field, .. } => assert_eq!(field, "cells"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_grid_at_cell_bound_accepted() {
        // 4096 * 4096 sits exactly on the documented limit.
        assert!(GridParameters::new(4096, 4096, 1.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_non_positive_scale() {
        assert!(GridParameters::new(2, 2, 0.0, 0.0, 0.0).is_err());
        assert!(GridParameters::new(2, 2, -1.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_negative_spacing() {
        let err = GridParameters::new(2, 2, 1.0, -0.1, 0.0).unwrap_err();
        match err {
            MeshError::InvalidParameter { field, .. } => assert_eq!(field, "spacing"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_height() {
        let err = GridParameters::new(2, 2, 1.0, 0.0, -1.0).unwrap_err();
        match err {
            MeshError::InvalidParameter { field, .. } => assert_eq!(field, "height"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert!(GridParameters::new(2, 2, f64::NAN, 0.0, 0.0).is_err());
        assert!(GridParameters::new(2, 2, 1.0, f64::INFINITY, 0.0).is_err());
        assert!(GridParameters::new(2, 2, 1.0, 0.0, f64::NAN).is_err());
    }
}
