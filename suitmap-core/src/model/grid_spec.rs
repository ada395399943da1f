use crate::engine::EngineError;
use geo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// placement of a raster in map units. rows count downward from the top edge
/// at `y_max` and columns count rightward from `x_min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub x_min: f64,
    pub y_max: f64,
    pub cell_size: f64,
    pub n_cols: usize,
    pub n_rows: usize,
}

impl GridSpec {
    pub fn new(
        x_min: f64,
        y_max: f64,
        cell_size: f64,
        n_cols: usize,
        n_rows: usize,
    ) -> Result<GridSpec, EngineError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(EngineError::InvalidGrid(format!(
                "cell size must be a positive number, found {cell_size}"
            )));
        }
        if n_cols == 0 || n_rows == 0 {
            return Err(EngineError::InvalidGrid(format!(
                "grid must have at least one cell, found {n_cols}x{n_rows}"
            )));
        }
        Ok(GridSpec {
            x_min,
            y_max,
            cell_size,
            n_cols,
            n_rows,
        })
    }

    /// the smallest grid anchored at the upper-left corner of `extent` whose
    /// cells cover all of it.
    pub fn covering(extent: &Rect<f64>, cell_size: f64) -> Result<GridSpec, EngineError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(EngineError::InvalidGrid(format!(
                "cell size must be a positive number, found {cell_size}"
            )));
        }
        let n_cols = ((extent.width() / cell_size).ceil() as usize).max(1);
        let n_rows = ((extent.height() / cell_size).ceil() as usize).max(1);
        GridSpec::new(extent.min().x, extent.max().y, cell_size, n_cols, n_rows)
    }

    pub fn len(&self) -> usize {
        self.n_cols * self.n_rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn x_max(&self) -> f64 {
        self.x_min + self.cell_size * self.n_cols as f64
    }

    pub fn y_min(&self) -> f64 {
        self.y_max - self.cell_size * self.n_rows as f64
    }

    /// center of the cell at (row, col)
    pub fn cell_center(&self, row: usize, col: usize) -> Point<f64> {
        let half = self.cell_size / 2.0;
        Point::new(
            self.x_min + col as f64 * self.cell_size + half,
            self.y_max - row as f64 * self.cell_size - half,
        )
    }

    /// row-major index of the cell at (row, col)
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.n_cols + col
    }
}
