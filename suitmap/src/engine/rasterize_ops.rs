use geo::{BoundingRect, Intersects, Point, Rect};
use itertools::Itertools;
use kdam::{Bar, BarExt};
use rayon::prelude::*;
use std::sync::{Arc, Mutex};
use suitmap_core::{
    engine::EngineError,
    model::{CellValue, GridSpec, Raster, RingBuffer, SamplePoint},
};

/// burns ring labels into a raster on `grid`. each cell takes the label of the
/// innermost ring containing the cell center. cells outside every ring are no-data.
pub fn rasterize_rings(
    rings: &[RingBuffer],
    grid: &GridSpec,
    parallelize: bool,
) -> Result<Raster, EngineError> {
    let ordered = rings
        .iter()
        .sorted_by(|a, b| a.distance.total_cmp(&b.distance))
        .map(|ring| (ring, ring.geometry.bounding_rect()))
        .collect_vec();

    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .total(grid.n_rows)
            .desc("rasterize")
            .build()
            .map_err(EngineError::InternalError)?,
    ));

    let burn_row = |row: usize| -> Vec<CellValue> {
        let cells = (0..grid.n_cols)
            .map(|col| {
                let center = grid.cell_center(row, col);
                ordered
                    .iter()
                    .find(|(ring, bbox)| in_bbox(bbox, &center) && ring.geometry.intersects(&center))
                    .map(|(ring, _)| ring.label)
            })
            .collect_vec();
        if let Ok(mut b) = bar.clone().lock() {
            let _ = b.update(1);
        }
        cells
    };

    let rows = if parallelize {
        (0..grid.n_rows).into_par_iter().map(burn_row).collect::<Vec<_>>()
    } else {
        (0..grid.n_rows).map(burn_row).collect::<Vec<_>>()
    };
    eprintln!();

    Raster::from_cells(*grid, rows.into_iter().flatten().collect())
}

fn in_bbox(bbox: &Option<Rect<f64>>, point: &Point<f64>) -> bool {
    match bbox {
        Some(rect) => rect.intersects(point),
        None => false,
    }
}

/// one sample per data cell, located at the cell center
pub fn raster_to_points(raster: &Raster) -> Vec<SamplePoint> {
    let grid = raster.grid;
    (0..grid.n_rows)
        .cartesian_product(0..grid.n_cols)
        .filter_map(|(row, col)| {
            raster
                .get(row, col)
                .map(|value| SamplePoint::new(grid.cell_center(row, col), value))
        })
        .collect()
}
