use super::GridSpec;
use crate::engine::EngineError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// value of a single raster cell. `None` is no-data.
pub type CellValue = Option<i64>;

/// an integer-valued raster stored row-major from the upper-left cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Raster {
    pub grid: GridSpec,
    cells: Vec<CellValue>,
}

impl Raster {
    /// a raster of no-data cells
    pub fn empty(grid: GridSpec) -> Raster {
        Raster {
            grid,
            cells: vec![None; grid.len()],
        }
    }

    pub fn from_cells(grid: GridSpec, cells: Vec<CellValue>) -> Result<Raster, EngineError> {
        if cells.len() != grid.len() {
            return Err(EngineError::InvalidGrid(format!(
                "expected {} cells for a {}x{} grid, found {}",
                grid.len(),
                grid.n_cols,
                grid.n_rows,
                cells.len()
            )));
        }
        Ok(Raster { grid, cells })
    }

    pub fn get(&self, row: usize, col: usize) -> CellValue {
        self.cells
            .get(self.grid.index(row, col))
            .copied()
            .flatten()
    }

    pub fn set(&mut self, row: usize, col: usize, value: CellValue) {
        let idx = self.grid.index(row, col);
        if let Some(cell) = self.cells.get_mut(idx) {
            *cell = value;
        }
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// cells grouped into rows, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.cells.chunks(self.grid.n_cols)
    }

    /// applies `op` to every cell, keeping the grid.
    pub fn map_cells<F>(&self, op: F) -> Raster
    where
        F: Fn(CellValue) -> CellValue,
    {
        Raster {
            grid: self.grid,
            cells: self.cells.iter().map(|c| op(*c)).collect(),
        }
    }

    /// number of cells carrying data
    pub fn data_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// distinct data values, ascending
    pub fn distinct_values(&self) -> Vec<i64> {
        self.cells.iter().flatten().copied().unique().sorted().collect()
    }
}
