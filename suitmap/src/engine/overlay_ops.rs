use suitmap_core::{
    engine::EngineError,
    model::{CellValue, OverlayTable, Raster},
};

/// combines the table's rasters cell by cell.
///
/// each input cell is first passed through its contribution's remap; values
/// without a remap entry become no-data. the output cell is the weighted average
/// of the remapped values, rounded to the nearest integer and bounded to the
/// table's scale. a cell that is no-data in any input is no-data in the output.
///
/// # Arguments
///
/// * `table` - contributions sharing one grid, with the evaluation scale
///
/// # Returns
///
/// * the combined raster on the shared grid
pub fn weighted_overlay(table: &OverlayTable) -> Result<Raster, EngineError> {
    let contributions = table.contributions();
    let first = contributions
        .first()
        .ok_or(EngineError::EmptyOverlayTable)?;
    let grid = first.raster.grid;
    if let Some(other) = contributions.iter().find(|c| c.raster.grid != grid) {
        return Err(EngineError::GridMismatch(other.name.clone()));
    }
    let total_weight = table.total_weight();
    if total_weight == 0 {
        return Err(EngineError::ZeroTotalWeight);
    }

    let cells = (0..grid.len())
        .map(|idx| -> CellValue {
            let mut weighted_sum = 0.0;
            for c in contributions.iter() {
                let value = c.remap.apply_or_nodata(c.raster.cells()[idx])?;
                weighted_sum += value as f64 * f64::from(c.weight);
            }
            let average = (weighted_sum / total_weight as f64).round() as i64;
            Some(table.scale.clamp(average))
        })
        .collect();

    Raster::from_cells(grid, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use suitmap_core::model::{EvaluationScale, GridSpec, OverlayContribution, Remap};

    fn grid() -> GridSpec {
        GridSpec::new(0.0, 10.0, 10.0, 3, 1).unwrap()
    }

    fn contribution(name: &str, cells: Vec<CellValue>, weight: u32) -> OverlayContribution {
        let raster = Raster::from_cells(grid(), cells).unwrap();
        OverlayContribution::new(name, raster, weight, Remap::identity(&EvaluationScale::default()))
    }

    #[test]
    fn single_input_passes_through() {
        let table = OverlayTable::new(EvaluationScale::default())
            .with(contribution("economic", vec![Some(5), Some(4), None], 3));
        let result = weighted_overlay(&table).unwrap();
        assert_eq!(result.cells(), &[Some(5), Some(4), None]);
    }

    #[test]
    fn weighted_average_rounds() {
        // (5 * 3 + 2 * 1) / 4 = 4.25 -> 4 ; (1 * 3 + 4 * 1) / 4 = 1.75 -> 2
        let table = OverlayTable::new(EvaluationScale::default())
            .with(contribution("economic", vec![Some(5), Some(1), Some(3)], 3))
            .with(contribution("park", vec![Some(2), Some(4), None], 1));
        let result = weighted_overlay(&table).unwrap();
        assert_eq!(result.cells(), &[Some(4), Some(2), None]);
    }

    #[test]
    fn out_of_scale_scores_become_nodata() {
        let table = OverlayTable::new(EvaluationScale::default())
            .with(contribution("bus", vec![Some(0), Some(-1), Some(1)], 1));
        let result = weighted_overlay(&table).unwrap();
        assert_eq!(result.cells(), &[None, None, Some(1)]);
    }

    #[test]
    fn empty_table_fails() {
        let table = OverlayTable::new(EvaluationScale::default());
        assert!(matches!(
            weighted_overlay(&table),
            Err(EngineError::EmptyOverlayTable)
        ));
    }

    #[test]
    fn zero_weight_fails() {
        let table = OverlayTable::new(EvaluationScale::default())
            .with(contribution("school", vec![Some(1), Some(1), Some(1)], 0));
        assert!(matches!(
            weighted_overlay(&table),
            Err(EngineError::ZeroTotalWeight)
        ));
    }

    #[test]
    fn grid_mismatch_fails() {
        let other_grid = GridSpec::new(5.0, 10.0, 10.0, 3, 1).unwrap();
        let other = OverlayContribution::new(
            "park",
            Raster::empty(other_grid),
            1,
            Remap::identity(&EvaluationScale::default()),
        );
        let table = OverlayTable::new(EvaluationScale::default())
            .with(contribution("economic", vec![None, None, None], 1))
            .with(other);
        match weighted_overlay(&table) {
            Err(EngineError::GridMismatch(name)) => assert_eq!(name, "park"),
            other => panic!("expected grid mismatch, found {other:?}"),
        }
    }
}
