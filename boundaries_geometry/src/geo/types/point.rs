use super::{Coordinates, GeometryTrait, MultiPointGeometry, SingleGeometryTrait};
use crate::GeometryError;
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A single point, e.g. the label anchor computed for a boundary polygon.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	/// Creates a point from coordinates.
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}
	/// Returns the x-coordinate.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}
	/// Returns the y-coordinate.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}
}

impl GeometryTrait for PointGeometry {
	/// Points have no area.
	fn area(&self) -> f64 {
		0.0
	}

	fn verify(&self) -> Result<()> {
		if !self.0.is_finite() {
			return Err(GeometryError::NonFinite(self.x(), self.y()).into());
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		self.0.to_json(precision)
	}

	/// A point never contains another point.
	fn contains_point(&self, _x: f64, _y: f64) -> bool {
		false
	}

	/// The bounding box of a point is the point itself.
	fn compute_bounds(&self) -> Option<[f64; 4]> {
		Some([self.0.x(), self.0.y(), self.0.x(), self.0.y()])
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}
