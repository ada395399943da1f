use geo::{BooleanOps, Coord, Geometry, LineString, MultiPolygon, Point, Polygon};
use rayon::prelude::*;
use std::f64::consts::TAU;
use suitmap_core::engine::EngineError;
use wkt::ToWkt;

/// offsets a geometry outward by a distance in map units
pub trait Buffer {
    fn buffer(&self, distance: f64, segments: usize) -> Result<MultiPolygon<f64>, EngineError>;
}

impl Buffer for Geometry<f64> {
    fn buffer(&self, distance: f64, segments: usize) -> Result<MultiPolygon<f64>, EngineError> {
        match self {
            Geometry::Point(p) => Ok(buffer_point(p, distance, segments)),
            Geometry::MultiPoint(mp) => {
                let circles = mp
                    .iter()
                    .map(|p| buffer_point(p, distance, segments))
                    .collect::<Vec<_>>();
                Ok(union_all(circles))
            }
            Geometry::Polygon(p) => Ok(geo_buffer::buffer_polygon(p, distance)),
            Geometry::MultiPolygon(mp) => Ok(geo_buffer::buffer_multi_polygon(mp, distance)),
            Geometry::Rect(r) => Ok(geo_buffer::buffer_polygon(&r.to_polygon(), distance)),
            Geometry::Triangle(t) => Ok(geo_buffer::buffer_polygon(&t.to_polygon(), distance)),
            _ => Err(EngineError::UnsupportedGeometry {
                operation: String::from("buffer"),
                geometry: self.wkt_string(),
            }),
        }
    }
}

/// approximates a circle of `radius` around `center` with a regular polygon.
/// a non-positive radius has no area and gives an empty result.
pub fn buffer_point(center: &Point<f64>, radius: f64, segments: usize) -> MultiPolygon<f64> {
    if !(radius > 0.0) {
        return MultiPolygon::new(vec![]);
    }
    let n = segments.max(3);
    let coords = (0..n)
        .map(|i| {
            let theta = TAU * i as f64 / n as f64;
            Coord {
                x: center.x() + radius * theta.cos(),
                y: center.y() + radius * theta.sin(),
            }
        })
        .collect::<Vec<_>>();
    MultiPolygon::new(vec![Polygon::new(LineString::from(coords), vec![])])
}

/// buffers every feature by `distance` and dissolves the results.
pub fn dissolved_buffer(
    features: &[Geometry<f64>],
    distance: f64,
    segments: usize,
    parallelize: bool,
) -> Result<MultiPolygon<f64>, EngineError> {
    let pieces = if parallelize {
        features
            .par_iter()
            .map(|f| f.buffer(distance, segments))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        features
            .iter()
            .map(|f| f.buffer(distance, segments))
            .collect::<Result<Vec<_>, _>>()?
    };
    Ok(union_all(pieces))
}

/// unions polygons pairwise until one remains
pub fn union_all(mut pieces: Vec<MultiPolygon<f64>>) -> MultiPolygon<f64> {
    pieces.retain(|p| !p.0.is_empty());
    while pieces.len() > 1 {
        pieces = pieces
            .chunks(2)
            .map(|pair| match pair {
                [a, b] => a.union(b),
                [a] => a.clone(),
                _ => MultiPolygon::new(vec![]),
            })
            .collect();
    }
    pieces.pop().unwrap_or_else(|| MultiPolygon::new(vec![]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{point, polygon, Area, Contains};

    #[test]
    fn point_buffer_approximates_circle() {
        let circle = buffer_point(&point! { x: 0.0, y: 0.0 }, 100.0, 64);
        let expected = std::f64::consts::PI * 100.0 * 100.0;
        let area = circle.unsigned_area();
        assert!(area < expected);
        assert!(area > expected * 0.99, "area {area} too small");
        assert!(circle.contains(&point! { x: 99.0, y: 0.0 }));
        assert!(!circle.contains(&point! { x: 0.0, y: 101.0 }));
    }

    #[test]
    fn zero_radius_is_empty() {
        assert!(buffer_point(&point! { x: 0.0, y: 0.0 }, 0.0, 16).0.is_empty());
        assert!(buffer_point(&point! { x: 0.0, y: 0.0 }, -5.0, 16).0.is_empty());
    }

    #[test]
    fn polygon_buffer_grows_area() {
        let square = Geometry::Polygon(polygon![
            (x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0), (x: 0.0, y: 0.0)
        ]);
        let grown = square.buffer(5.0, 16).unwrap();
        assert!(grown.unsigned_area() > 100.0);
        assert!(grown.contains(&point! { x: -4.0, y: 5.0 }));
        assert!(!grown.contains(&point! { x: -6.0, y: 5.0 }));
    }

    #[test]
    fn overlapping_circles_dissolve() {
        let features = vec![
            Geometry::Point(point! { x: 0.0, y: 0.0 }),
            Geometry::Point(point! { x: 10.0, y: 0.0 }),
        ];
        let dissolved = dissolved_buffer(&features, 10.0, 32, false).unwrap();
        assert_eq!(dissolved.0.len(), 1);
        let separate = dissolved_buffer(&features, 4.0, 32, true).unwrap();
        assert_eq!(separate.0.len(), 2);
    }

    #[test]
    fn lines_are_unsupported() {
        let line = Geometry::LineString(LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]));
        assert!(line.buffer(1.0, 8).is_err());
    }
}
