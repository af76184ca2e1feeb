use super::{CompositeGeometryTrait, GeometryTrait, PointGeometry, merge_bounds};
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A collection of points, e.g. several label anchors of one feature.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

/// - `area()` returns 0 because points have no area.
/// - `verify()` checks every contained point.
/// - `contains_point()` is always `false`.
impl GeometryTrait for MultiPointGeometry {
	fn area(&self) -> f64 {
		0.0
	}

	fn verify(&self) -> Result<()> {
		for point in &self.0 {
			point.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(
			self
				.0
				.iter()
				.map(|point| point.to_coord_json(precision))
				.collect::<Vec<_>>(),
		)
	}

	fn contains_point(&self, _x: f64, _y: f64) -> bool {
		false
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(PointGeometry::compute_bounds))
	}
}

/// Gives access to the internal vector of points.
impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	/// Creates a new, empty `MultiPointGeometry`.
	fn new() -> Self {
		Self(Vec::new())
	}
	/// Returns an immutable reference to the internal vector of points.
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	/// Returns a mutable reference to the internal vector of points.
	fn as_mut_vec(&mut self) -> &mut Vec<PointGeometry> {
		&mut self.0
	}
	/// Consumes the geometry and returns the internal vector of points.
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

// Conversions from vectors, slices and arrays of anything that converts into a point.
crate::impl_geometry_from_list!(MultiPointGeometry => PointGeometry);
