use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// Common interface of all geometric primitives.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Returns the area of the geometry. Points and lines have none.
	fn area(&self) -> f64;

	/// Verifies the geometric validity of the geometry: enough points, closed rings,
	/// finite coordinates. Failures are [`crate::GeometryError`]s wrapped in `anyhow`.
	fn verify(&self) -> Result<()>;

	/// Converts the geometry into the GeoJSON `coordinates` member.
	/// Optionally rounds coordinate values to the given number of decimals.
	fn to_coord_json(&self, precision: Option<u8>) -> Value;

	/// Checks if a point is inside this geometry.
	///
	/// Only area geometries (rings, polygons, multi-polygons) can contain points; holes are
	/// excluded. Points exactly on the boundary may return either value.
	fn contains_point(&self, x: f64, y: f64) -> bool;

	/// Returns `Some([x_min, y_min, x_max, y_max])`, or `None` for an empty geometry.
	fn compute_bounds(&self) -> Option<[f64; 4]>;
}

/// Geometries that can be wrapped into the corresponding multi-geometry.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	/// Wraps the geometry into a multi-geometry with one element.
	fn into_multi(self) -> Multi;
}

/// Composite geometries that are collections of simpler elements:
/// a polygon is made of rings, a multilinestring of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the geometry and returns its elements.
	fn into_inner(self) -> Vec<Item>;

	/// Consumes the geometry and iterates over its elements.
	fn into_iter(self) -> impl Iterator<Item = Item> {
		self.into_inner().into_iter()
	}

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Number of elements.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}

/// Merges several optional bounding boxes into one.
pub(crate) fn merge_bounds(bounds: impl Iterator<Item = Option<[f64; 4]>>) -> Option<[f64; 4]> {
	bounds.flatten().reduce(|a, b| {
		[a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]
	})
}
