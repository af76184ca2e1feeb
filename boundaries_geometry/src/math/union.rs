use crate::{MultiPolygonGeometry, PolygonGeometry};
use geo::unary_union;

/// Unions polygons into one multi-polygon with normalised winding
/// (outer rings counter-clockwise, holes clockwise).
#[must_use]
pub fn union_polygons(polygons: &[PolygonGeometry]) -> MultiPolygonGeometry {
	let polygons: Vec<geo::Polygon<f64>> = polygons.iter().map(PolygonGeometry::to_geo).collect();
	let mut result = MultiPolygonGeometry::from(unary_union(&polygons));
	result.normalize_winding();
	result
}
