use geo::{Distance, Euclidean, Geometry, Intersects, Point};
use kdam::{Bar, BarExt};
use rayon::prelude::*;
use rstar::{primitives::GeomWithData, RTree};
use std::sync::{Arc, Mutex};
use suitmap_core::{engine::EngineError, model::SamplePoint, util::geo_utils};
use wkt::ToWkt;

pub type SampleNode = GeomWithData<[f64; 2], i64>;

/// attaches to each target the largest sample value found within
/// `search_radius` of it. samples are indexed in an rtree and candidates inside
/// the target's padded bounding box are refined by exact distance.
///
/// # Arguments
///
/// * `targets`       - building footprints (or any polygonal/point geometry)
/// * `samples`       - scored points
/// * `search_radius` - inclusive distance in map units; negative values act as zero
/// * `parallelize`   - refine targets on the rayon thread pool
///
/// # Returns
///
/// * one entry per target, `None` when no sample lies within range
pub fn spatial_join_max(
    targets: &[Geometry<f64>],
    samples: &[SamplePoint],
    search_radius: f64,
    parallelize: bool,
) -> Result<Vec<Option<i64>>, EngineError> {
    let radius = search_radius.max(0.0);
    let rtree: RTree<SampleNode> = RTree::bulk_load(
        samples
            .iter()
            .map(|s| GeomWithData::new([s.point.x(), s.point.y()], s.grid_code))
            .collect(),
    );
    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .total(targets.len())
            .desc("spatial join")
            .build()
            .map_err(EngineError::InternalError)?,
    ));

    let join_one = |target: &Geometry<f64>| -> Result<Option<i64>, EngineError> {
        let result = max_within(&rtree, target, radius);
        if let Ok(mut b) = bar.clone().lock() {
            let _ = b.update(1);
        }
        result
    };

    let result = if parallelize {
        targets.par_iter().map(join_one).collect::<Result<Vec<_>, _>>()
    } else {
        targets.iter().map(join_one).collect::<Result<Vec<_>, _>>()
    };
    eprintln!();
    result
}

fn max_within(
    rtree: &RTree<SampleNode>,
    target: &Geometry<f64>,
    radius: f64,
) -> Result<Option<i64>, EngineError> {
    let envelope = match geo_utils::get_padded_envelope(target, radius) {
        Some(e) => e,
        None => return Ok(None),
    };
    let mut best: Option<i64> = None;
    for node in rtree.locate_in_envelope(&envelope) {
        if best.is_some_and(|b| b >= node.data) {
            continue;
        }
        let [x, y] = *node.geom();
        if distance_to(&Point::new(x, y), target)? <= radius {
            best = Some(node.data);
        }
    }
    Ok(best)
}

/// planar distance from a point to a geometry, zero when the point touches it.
pub fn distance_to(point: &Point<f64>, geometry: &Geometry<f64>) -> Result<f64, EngineError> {
    if geometry.intersects(point) {
        return Ok(0.0);
    }
    match geometry {
        Geometry::Point(p) => Ok(Euclidean.distance(*point, *p)),
        Geometry::MultiPoint(mp) => Ok(mp
            .iter()
            .map(|p| Euclidean.distance(*point, *p))
            .fold(f64::INFINITY, f64::min)),
        Geometry::Polygon(p) => Ok(Euclidean.distance(point, p)),
        Geometry::MultiPolygon(mp) => Ok(mp
            .iter()
            .map(|p| Euclidean.distance(point, p))
            .fold(f64::INFINITY, f64::min)),
        Geometry::Rect(r) => Ok(Euclidean.distance(point, &r.to_polygon())),
        _ => Err(EngineError::UnsupportedGeometry {
            operation: String::from("spatial join"),
            geometry: geometry.wkt_string(),
        }),
    }
}
