use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, MultiLineStringGeometry, SingleGeometryTrait};
use crate::GeometryError;
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// A connected sequence of coordinates, e.g. a street centre line.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl LineStringGeometry {
	/// Converts into a `geo` line string, e.g. for simplification.
	#[must_use]
	pub fn to_geo(&self) -> geo::LineString<f64> {
		geo::LineString::new(self.0.iter().map(Coordinates::to_geo).collect())
	}
}

impl GeometryTrait for LineStringGeometry {
	/// Lines have no area.
	fn area(&self) -> f64 {
		0.0
	}

	/// A line needs at least two finite coordinates.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 2, "LineString must have at least two points");
		if let Some(c) = self.0.iter().find(|c| !c.is_finite()) {
			return Err(GeometryError::NonFinite(c.x(), c.y()).into());
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|c| c.to_json(precision)).collect::<Vec<_>>())
	}

	fn contains_point(&self, _x: f64, _y: f64) -> bool {
		false
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		coordinate_bounds(&self.0)
	}
}

/// Gives access to the internal vector of coordinates.
impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	/// Creates a new, empty `LineStringGeometry`.
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

impl SingleGeometryTrait<MultiLineStringGeometry> for LineStringGeometry {
	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry(vec![self])
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_geometry_from_list!(LineStringGeometry => Coordinates);

impl From<geo::LineString<f64>> for LineStringGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		LineStringGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

/// Bounding box of a coordinate list, `None` when it is empty.

pub(crate) fn coordinate_bounds(coords: &[Coordinates]) -> Option<[f64; 4]> {
	let first = coords.first()?;
	let mut bounds = [first.x(), first.y(), first.x(), first.y()];
	for c in &coords[1..] {
		bounds[0] = bounds[0].min(c.x());
		bounds[1] = bounds[1].min(c.y());
		bounds[2] = bounds[2].max(c.x());
		bounds[3] = bounds[3].max(c.y());
	}
	Some(bounds)
}
