use crate::{Geometry, LineStringGeometry, MultiLineStringGeometry, MultiPolygonGeometry, PolygonGeometry, RingGeometry};
use geo::Simplify;
use log::trace;

/// Douglas–Peucker simplification of a polygon. Every ring is checked on its own: a
/// ring that would collapse below four coordinates is kept unchanged.
fn simplify_polygon(polygon: &PolygonGeometry, tolerance: f64) -> PolygonGeometry {
	let simplified = PolygonGeometry::from(polygon.to_geo().simplify(tolerance));
	PolygonGeometry(
		polygon
			.0
			.iter()
			.zip(simplified.0)
			.map(|(original, ring)| keep_valid_ring(original, ring))
			.collect(),
	)
}

fn keep_valid_ring(original: &RingGeometry, simplified: RingGeometry) -> RingGeometry {
	if simplified.0.len() < 4 {
		trace!("keeping ring of {} points, simplification would collapse it", original.0.len());
		original.clone()
	} else {
		simplified
	}
}

fn simplify_line(line: &LineStringGeometry, tolerance: f64) -> LineStringGeometry {
	LineStringGeometry::from(line.to_geo().simplify(tolerance))
}

/// Simplifies lines and polygon rings with the given tolerance. Points are returned
/// unchanged, and so is everything when the tolerance is not positive.
#[must_use]
pub fn simplify_geometry(geometry: &Geometry, tolerance: f64) -> Geometry {
	if tolerance <= 0.0 {
		return geometry.clone();
	}
	match geometry {
		Geometry::Point(_) | Geometry::MultiPoint(_) => geometry.clone(),
		Geometry::LineString(g) => Geometry::LineString(simplify_line(g, tolerance)),
		Geometry::MultiLineString(g) => Geometry::MultiLineString(MultiLineStringGeometry(
			g.0.iter().map(|line| simplify_line(line, tolerance)).collect(),
		)),
		Geometry::Polygon(g) => Geometry::Polygon(simplify_polygon(g, tolerance)),
		Geometry::MultiPolygon(g) => Geometry::MultiPolygon(MultiPolygonGeometry(
			g.0.iter().map(|polygon| simplify_polygon(polygon, tolerance)).collect(),
		)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;
	use pretty_assertions::assert_eq;

	#[test]
	fn drops_near_collinear_points() {
		let line = LineStringGeometry::from(&[[0.0, 0.0], [5.0, 0.1], [10.0, 0.0], [10.0, 10.0]]);
		let simplified = simplify_geometry(&Geometry::LineString(line), 0.5);
		assert_eq!(
			simplified,
			Geometry::new_line_string(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]])
		);
	}

	#[test]
	fn keeps_points_above_tolerance() {
		let line = Geometry::new_line_string(&[[0.0, 0.0], [5.0, 3.0], [10.0, 0.0]]);
		assert_eq!(simplify_geometry(&line, 1.0), line);
		assert_eq!(
			simplify_geometry(&line, 5.0),
			Geometry::new_line_string(&[[0.0, 0.0], [10.0, 0.0]])
		);
	}

	#[test]
	fn zero_tolerance_is_identity() {
		let geometry = Geometry::new_line_string(&[[0.0, 0.0], [5.0, 0.0], [10.0, 0.0]]);
		assert_eq!(simplify_geometry(&geometry, 0.0), geometry);
	}

	#[test]
	fn rings_never_collapse() {
		let triangle = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]];
		let hole = vec![[0.2, 0.1], [0.3, 0.1], [0.3, 0.2], [0.2, 0.1]];
		let geometry = Geometry::new_polygon(&[triangle, hole]);
		assert_eq!(simplify_geometry(&geometry, 100.0), geometry);
	}

	#[test]
	fn polygon_outline_is_simplified() {
		let geometry = Geometry::new_polygon(&[vec![
			[0.0, 0.0],
			[5.0, 0.05],
			[10.0, 0.0],
			[10.0, 10.0],
			[0.0, 10.0],
			[0.0, 0.0],
		]]);
		let Geometry::Polygon(simplified) = simplify_geometry(&geometry, 0.25) else {
			panic!("expected a polygon");
		};
		assert_eq!(simplified.first().unwrap().0.len(), 5);
	}

	#[test]
	fn points_are_unchanged() {
		let point = Geometry::new_point([3, 4]);
		assert_eq!(simplify_geometry(&point, 10.0), point);
	}
}
