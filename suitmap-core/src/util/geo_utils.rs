use crate::engine::EngineError;
use geo::{BooleanOps, BoundingRect, Geometry, MultiPolygon};
use rstar::AABB;
use wkt::ToWkt;

/// creates an envelope from the bounding box of a geometry, grown on every side
/// by `padding` map units.
///
/// since a bounding box may not exist (for example, empty geometries), the result may be None
///
/// # Arguments
///
/// * `geometry` - value to create an envelope from
/// * `padding`  - distance to grow the envelope by
///
/// # Returns
///
/// * an envelope if possible, otherwise None
pub fn get_padded_envelope(geometry: &Geometry<f64>, padding: f64) -> Option<AABB<[f64; 2]>> {
    let rect = geometry.bounding_rect()?;
    let (min, max) = (rect.min(), rect.max());
    Some(AABB::from_corners(
        [min.x - padding, min.y - padding],
        [max.x + padding, max.y + padding],
    ))
}

/// dissolves polygonal geometries into a single multipolygon.
///
/// # Arguments
///
/// * `geometries` - POLYGON, MULTIPOLYGON or RECT values
///
/// # Returns
///
/// * the union of all inputs, or an error naming the first non-polygonal input
pub fn dissolve_polygonal(geometries: &[Geometry<f64>]) -> Result<MultiPolygon<f64>, EngineError> {
    let mut result = MultiPolygon::new(vec![]);
    for geometry in geometries.iter() {
        let next = as_multipolygon(geometry).ok_or_else(|| EngineError::UnsupportedGeometry {
            operation: String::from("dissolve"),
            geometry: geometry.wkt_string(),
        })?;
        result = if result.0.is_empty() {
            next
        } else {
            result.union(&next)
        };
    }
    Ok(result)
}

/// views polygonal geometries as a multipolygon, None for anything else.
pub fn as_multipolygon(geometry: &Geometry<f64>) -> Option<MultiPolygon<f64>> {
    match geometry {
        Geometry::Polygon(p) => Some(MultiPolygon::new(vec![p.clone()])),
        Geometry::MultiPolygon(mp) => Some(mp.clone()),
        Geometry::Rect(r) => Some(MultiPolygon::new(vec![r.to_polygon()])),
        Geometry::Triangle(t) => Some(MultiPolygon::new(vec![t.to_polygon()])),
        _ => None,
    }
}
