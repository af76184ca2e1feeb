use super::*;
use crate::GeometryError;
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A polygon: the first ring is the outer boundary, every further ring is a hole.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	/// The outer ring, `None` for an empty polygon.
	#[must_use]
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	/// Iterates over the inner rings.
	pub fn holes(&self) -> impl Iterator<Item = &RingGeometry> {
		self.0.iter().skip(1)
	}

	/// Converts into a `geo` polygon. An empty polygon becomes one with an empty exterior.
	#[must_use]
	pub fn to_geo(&self) -> geo::Polygon<f64> {
		let mut rings = self.0.iter().map(RingGeometry::to_geo);
		let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(vec![]));
		geo::Polygon::new(exterior, rings.collect())
	}

	/// Normalises winding: outer ring counter-clockwise, holes clockwise (Y-up frame).
	pub fn normalize_winding(&mut self) {
		for (index, ring) in self.0.iter_mut().enumerate() {
			ring.orient(index == 0);
		}
	}
}

impl GeometryTrait for PolygonGeometry {
	/// Area of the outer ring minus the area of all holes, independent of winding.
	fn area(&self) -> f64 {
		let mut rings = self.0.iter();
		let Some(outer) = rings.next() else {
			return 0.0;
		};
		rings.fold(outer.area().abs(), |sum, hole| sum - hole.area().abs())
	}

	/// A polygon needs at least one ring and every ring has to be valid.
	fn verify(&self) -> Result<()> {
		if self.0.is_empty() {
			return Err(GeometryError::EmptyGeometry.into());
		}
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|c| c.to_coord_json(precision)).collect::<Vec<_>>())
	}

	fn contains_point(&self, x: f64, y: f64) -> bool {
		match self.exterior() {
			Some(outer) => outer.contains_point(x, y) && !self.holes().any(|hole| hole.contains_point(x, y)),
			None => false,
		}
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		self.exterior().and_then(RingGeometry::compute_bounds)
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

/// Gives access to the internal vector of rings.
impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	/// Creates a new, empty `PolygonGeometry`.
	fn new() -> Self {
		Self(Vec::new())
	}
	/// Returns an immutable reference to the internal vector of rings.
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	/// Returns a mutable reference to the internal vector of rings.
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	/// Consumes the geometry and returns the internal vector of rings.
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_geometry_from_list!(PolygonGeometry => RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		rings.extend(interiors.into_iter().map(RingGeometry::from));
		PolygonGeometry(rings)
	}
}
