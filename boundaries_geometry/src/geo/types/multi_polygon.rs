use super::{CompositeGeometryTrait, GeometryTrait, PolygonGeometry, merge_bounds};
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A collection of polygons, each with an outer ring and optional holes.
/// Boundaries such as municipalities with exclaves and merged parcel groups use this type.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl MultiPolygonGeometry {
	/// Converts into a `geo` multi-polygon for boolean operations and distances.
	#[must_use]
	pub fn to_geo(&self) -> geo::MultiPolygon<f64> {
		geo::MultiPolygon::new(self.0.iter().map(PolygonGeometry::to_geo).collect())
	}

	/// Normalises the winding of every part, see [`PolygonGeometry::normalize_winding`].
	pub fn normalize_winding(&mut self) {
		self.0.iter_mut().for_each(PolygonGeometry::normalize_winding);
	}
}

impl GeometryTrait for MultiPolygonGeometry {
	/// Sum of the areas of all parts.
	fn area(&self) -> f64 {
		self.0.iter().map(PolygonGeometry::area).sum()
	}

	fn verify(&self) -> Result<()> {
		for polygon in &self.0 {
			polygon.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(
			self
				.0
				.iter()
				.map(|poly| poly.to_coord_json(precision))
				.collect::<Vec<_>>(),
		)
	}

	/// Whether any part contains the point.
	fn contains_point(&self, x: f64, y: f64) -> bool {
		self.0.iter().any(|poly| poly.contains_point(x, y))
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(PolygonGeometry::compute_bounds))
	}
}

/// Gives access to the internal vector of polygons.
impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	/// Creates a new, empty `MultiPolygonGeometry`.
	fn new() -> Self {
		Self(Vec::new())
	}
	/// Returns an immutable reference to the internal vector of polygons.
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	/// Returns a mutable reference to the internal vector of polygons.
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	/// Consumes the geometry and returns the internal vector of polygons.
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_geometry_from_list!(MultiPolygonGeometry => PolygonGeometry);

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		MultiPolygonGeometry(geometry.into_iter().map(PolygonGeometry::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn two_squares() -> MultiPolygonGeometry {
		MultiPolygonGeometry::from(&[
			[[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]],
			[[[20, 5], [30, 5], [30, 15], [20, 15], [20, 5]]],
		])
	}

	#[test]
	fn contains_point_multiple_polygons() {
		let multi = two_squares();
		assert!(multi.contains_point(5.0, 5.0));
		assert!(multi.contains_point(25.0, 10.0));
		assert!(!multi.contains_point(15.0, 5.0));
		assert!(!MultiPolygonGeometry::new().contains_point(0.0, 0.0));
	}

	#[test]
	fn area_is_sum_of_parts() {
		assert_eq!(two_squares().area(), 200.0);
	}

	#[test]
	fn compute_bounds() {
		assert_eq!(two_squares().compute_bounds(), Some([0.0, 0.0, 30.0, 15.0]));
		assert_eq!(MultiPolygonGeometry::new().compute_bounds(), None);
	}

	#[test]
	fn geo_round_trip() {
		let multi = two_squares();
		assert_eq!(MultiPolygonGeometry::from(multi.to_geo()), multi);
	}
}
