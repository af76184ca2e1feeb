use super::{CompositeGeometryTrait, GeometryTrait, LineStringGeometry, merge_bounds};
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A collection of line strings, e.g. a street split into several pieces or the
/// outline of a polygon rendered as lines.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	/// Lines have no area.
	fn area(&self) -> f64 {
		0.0
	}

	/// Verifies every line.
	fn verify(&self) -> Result<()> {
		for line in &self.0 {
			line.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(
			self
				.0
				.iter()
				.map(|line| line.to_coord_json(precision))
				.collect::<Vec<_>>(),
		)
	}

	fn contains_point(&self, _x: f64, _y: f64) -> bool {
		false
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(LineStringGeometry::compute_bounds))
	}
}

/// Gives access to the internal vector of line strings.
impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	/// Creates a new, empty `MultiLineStringGeometry`.
	fn new() -> Self {
		Self(Vec::new())
	}
	/// Returns an immutable reference to the internal vector of line strings.
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	/// Returns a mutable reference to the internal vector of line strings.
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.0
	}
	/// Consumes the geometry and returns the internal vector of line strings.
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_geometry_from_list!(MultiLineStringGeometry => LineStringGeometry);
