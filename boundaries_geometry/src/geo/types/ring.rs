use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, coordinate_bounds};
use crate::GeometryError;
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A closed ring: the first and last coordinates are identical.
/// Rings are the building blocks of polygons.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Whether the ring runs counter-clockwise in a Y-up frame (positive signed area).
	#[must_use]
	pub fn is_ccw(&self) -> bool {
		self.area() > 0.0
	}

	/// Reverses the ring in place when its orientation differs from `ccw`.
	pub fn orient(&mut self, ccw: bool) {
		if self.is_ccw() != ccw {
			self.0.reverse();
		}
	}

	/// Converts into a closed `geo` line string.
	#[must_use]
	pub fn to_geo(&self) -> geo::LineString<f64> {
		geo::LineString::new(self.0.iter().map(Coordinates::to_geo).collect())
	}

	/// Iterates over the ring's segments as coordinate pairs.
	pub fn segments(&self) -> impl Iterator<Item = (&Coordinates, &Coordinates)> {
		self.0.windows(2).map(|w| (&w[0], &w[1]))
	}
}

impl GeometryTrait for RingGeometry {
	/// Signed area using the shoelace formula: positive for counter-clockwise rings,
	/// negative for clockwise ones.
	fn area(&self) -> f64 {
		let mut sum = 0f64;
		if let Some(mut p2) = self.0.last() {
			for p1 in &self.0 {
				sum += (p2.x() - p1.x()) * (p1.y() + p2.y());
				p2 = p1;
			}
		}
		sum / 2.0
	}

	/// A valid ring has at least 4 coordinates (3 distinct points plus the closing point),
	/// is closed and contains only finite coordinates.
	fn verify(&self) -> Result<()> {
		if self.0.len() < 4 {
			return Err(GeometryError::InvalidRing(format!("{} points, at least 4 required", self.0.len())).into());
		}
		if self.0.first() != self.0.last() {
			return Err(GeometryError::InvalidRing("ring is not closed".to_string()).into());
		}
		if let Some(c) = self.0.iter().find(|c| !c.is_finite()) {
			return Err(GeometryError::NonFinite(c.x(), c.y()).into());
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|coord| coord.to_json(precision)).collect::<Vec<_>>())
	}

	/// Even-odd ray casting. Rings with fewer than four coordinates contain nothing.
	fn contains_point(&self, x: f64, y: f64) -> bool {
		let coords = &self.0;
		if coords.len() < 4 {
			return false;
		}

		let mut inside = false;
		let mut j = coords.len() - 1;

		for i in 0..coords.len() {
			let (xi, yi) = (coords[i].x(), coords[i].y());
			let (xj, yj) = (coords[j].x(), coords[j].y());

			if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
				inside = !inside;
			}
			j = i;
		}

		inside
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		coordinate_bounds(&self.0)
	}
}

/// Gives access to the internal vector of coordinates.
impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	/// Creates a new, empty `RingGeometry`.
	fn new() -> Self {
		Self(Vec::new())
	}
	/// Returns an immutable reference to the internal vector of coordinates.
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	/// Returns a mutable reference to the internal vector of coordinates.
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	/// Consumes the geometry and returns the internal vector of coordinates.
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_geometry_from_list!(RingGeometry => Coordinates);

impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}
