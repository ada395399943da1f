//! ESRI ASCII grid reading and writing for raster artifacts.
use crate::SuitabilityError;
use itertools::Itertools;
use std::{collections::HashMap, io::Write, path::Path};
use suitmap_core::model::{CellValue, GridSpec, Raster};

pub const NODATA_VALUE: i64 = -9999;

/// writes `raster` as an ESRI ASCII grid. no-data cells are written as
/// [`NODATA_VALUE`].
pub fn write_ascii_grid(path: &Path, raster: &Raster) -> Result<(), SuitabilityError> {
    let write_err = |e: std::io::Error| SuitabilityError::ArtifactWriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    };
    let file = std::fs::File::create(path).map_err(write_err)?;
    let mut w = std::io::BufWriter::new(file);
    let grid = &raster.grid;
    writeln!(w, "ncols {}", grid.n_cols).map_err(write_err)?;
    writeln!(w, "nrows {}", grid.n_rows).map_err(write_err)?;
    writeln!(w, "xllcorner {}", grid.x_min).map_err(write_err)?;
    writeln!(w, "yllcorner {}", grid.y_min()).map_err(write_err)?;
    writeln!(w, "cellsize {}", grid.cell_size).map_err(write_err)?;
    writeln!(w, "NODATA_value {NODATA_VALUE}").map_err(write_err)?;
    for row in raster.rows() {
        let line = row
            .iter()
            .map(|c| c.unwrap_or(NODATA_VALUE).to_string())
            .join(" ");
        writeln!(w, "{line}").map_err(write_err)?;
    }
    w.flush().map_err(write_err)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// reads an ESRI ASCII grid of integer values
pub fn read_ascii_grid(path: &Path) -> Result<Raster, SuitabilityError> {
    let read_err = |message: String| SuitabilityError::LayerReadError {
        layer: path.display().to_string(),
        message,
    };
    let contents = std::fs::read_to_string(path).map_err(|e| read_err(e.to_string()))?;
    let mut lines = contents.lines();
    let mut header: HashMap<String, String> = HashMap::new();
    for _ in 0..6 {
        let line = lines
            .next()
            .ok_or_else(|| read_err(String::from("truncated header")))?;
        let (key, value) = line
            .split_once(char::is_whitespace)
            .ok_or_else(|| read_err(format!("invalid header line '{line}'")))?;
        header.insert(key.to_lowercase(), value.trim().to_string());
    }
    let get = |key: &str| -> Result<f64, SuitabilityError> {
        header
            .get(key)
            .ok_or_else(|| read_err(format!("header missing {key}")))?
            .parse::<f64>()
            .map_err(|e| read_err(format!("header {key} is not a number: {e}")))
    };
    let n_cols = get("ncols")? as usize;
    let n_rows = get("nrows")? as usize;
    let cell_size = get("cellsize")?;
    let x_min = get("xllcorner")?;
    let y_min = get("yllcorner")?;
    let nodata = get("nodata_value")? as i64;
    let grid = GridSpec::new(x_min, y_min + cell_size * n_rows as f64, cell_size, n_cols, n_rows)?;

    let cells = lines
        .flat_map(|l| l.split_whitespace())
        .map(|v| {
            let value = v
                .parse::<i64>()
                .map_err(|e| read_err(format!("cell value '{v}' is not an integer: {e}")))?;
            Ok(if value == nodata { None } else { Some(value) })
        })
        .collect::<Result<Vec<CellValue>, SuitabilityError>>()?;
    Ok(Raster::from_cells(grid, cells)?)
}
