use super::*;
use anyhow::Result;
use serde_json::{Value, json};
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

macro_rules! dispatch {
	($self:expr, $g:ident => $body:expr) => {
		match $self {
			Geometry::Point($g) => $body,
			Geometry::LineString($g) => $body,
			Geometry::Polygon($g) => $body,
			Geometry::MultiPoint($g) => $body,
			Geometry::MultiLineString($g) => $body,
			Geometry::MultiPolygon($g) => $body,
		}
	};
}

impl Geometry {
	pub fn new_point<T: Copy + Into<f64>>(value: [T; 2]) -> Self {
		Self::Point(PointGeometry::from(&value))
	}
	pub fn new_line_string<T: Copy + Into<f64>>(value: &[[T; 2]]) -> Self {
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T: Copy + Into<f64>>(value: &[Vec<[T; 2]>]) -> Self {
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_polygon<T: Copy + Into<f64>>(value: &[Vec<Vec<[T; 2]>>]) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	#[must_use]
	pub fn get_type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiPoint(_) | Geometry::MultiLineString(_) | Geometry::MultiPolygon(_) => self,
		}
	}

	/// Unwraps multi-geometries that contain exactly one part.
	#[must_use]
	pub fn into_single(self) -> Self {
		match self {
			Geometry::MultiPoint(mut g) if g.len() == 1 => Geometry::Point(g.0.remove(0)),
			Geometry::MultiLineString(mut g) if g.len() == 1 => Geometry::LineString(g.0.remove(0)),
			Geometry::MultiPolygon(mut g) if g.len() == 1 => Geometry::Polygon(g.0.remove(0)),
			other => other,
		}
	}

	#[must_use]
	pub fn is_polygonal(&self) -> bool {
		matches!(self, Geometry::Polygon(_) | Geometry::MultiPolygon(_))
	}

	#[must_use]
	pub fn is_lineal(&self) -> bool {
		matches!(self, Geometry::LineString(_) | Geometry::MultiLineString(_))
	}

	#[must_use]
	pub fn is_puntal(&self) -> bool {
		matches!(self, Geometry::Point(_) | Geometry::MultiPoint(_))
	}

	/// Polygon parts as a multi-polygon; `None` for points and lines.
	#[must_use]
	pub fn to_multi_polygon(&self) -> Option<MultiPolygonGeometry> {
		match self {
			Geometry::Polygon(g) => Some(g.clone().into_multi()),
			Geometry::MultiPolygon(g) => Some(g.clone()),
			_ => None,
		}
	}

	/// Lineal view of the geometry: lines as they are, polygon rings as closed lines.
	/// `None` for points.
	#[must_use]
	pub fn to_lines(&self) -> Option<MultiLineStringGeometry> {
		let rings_to_lines = |polygon: &PolygonGeometry| {
			polygon
				.0
				.iter()
				.map(|ring| LineStringGeometry(ring.0.clone()))
				.collect::<Vec<_>>()
		};
		match self {
			Geometry::LineString(g) => Some(g.clone().into_multi()),
			Geometry::MultiLineString(g) => Some(g.clone()),
			Geometry::Polygon(g) => Some(MultiLineStringGeometry(rings_to_lines(g))),
			Geometry::MultiPolygon(g) => Some(MultiLineStringGeometry(g.0.iter().flat_map(rings_to_lines).collect())),
			Geometry::Point(_) | Geometry::MultiPoint(_) => None,
		}
	}

	#[must_use]
	pub fn area(&self) -> f64 {
		dispatch!(self, g => g.area())
	}

	pub fn verify(&self) -> Result<()> {
		dispatch!(self, g => g.verify())
	}

	#[must_use]
	pub fn contains_point(&self, x: f64, y: f64) -> bool {
		dispatch!(self, g => g.contains_point(x, y))
	}

	#[must_use]
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		dispatch!(self, g => g.compute_bounds())
	}

	/// GeoJSON geometry object.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let coordinates = dispatch!(self, g => g.to_coord_json(precision));
		json!({ "type": self.get_type_name(), "coordinates": coordinates })
	}
}

impl From<MultiPolygonGeometry> for Geometry {
	fn from(geometry: MultiPolygonGeometry) -> Self {
		Geometry::MultiPolygon(geometry)
	}
}

impl From<PolygonGeometry> for Geometry {
	fn from(geometry: PolygonGeometry) -> Self {
		Geometry::Polygon(geometry)
	}
}

impl From<PointGeometry> for Geometry {
	fn from(geometry: PointGeometry) -> Self {
		Geometry::Point(geometry)
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = dispatch!(self, g => g);
		f.debug_tuple(self.get_type_name()).field(inner).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn square() -> Geometry {
		Geometry::new_polygon(&[vec![[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]]])
	}

	#[test]
	fn capabilities() {
		assert!(square().is_polygonal());
		assert!(!square().is_lineal());
		assert!(Geometry::new_line_string(&[[0, 0], [1, 1]]).is_lineal());
		assert!(Geometry::new_point([1, 1]).is_puntal());
	}

	#[test]
	fn into_multi_and_back() {
		let multi = square().into_multi();
		assert_eq!(multi.get_type_name(), "MultiPolygon");
		assert_eq!(multi.into_single(), square());
	}

	#[test]
	fn to_lines_uses_rings() {
		let lines = square().to_lines().unwrap();
		assert_eq!(lines.len(), 1);
		assert_eq!(lines.0[0].len(), 5);
		assert!(Geometry::new_point([0, 0]).to_lines().is_none());
	}

	#[test]
	fn to_json() {
		assert_eq!(
			Geometry::new_point([1.5, 2.0]).to_json(None),
			json!({"type": "Point", "coordinates": [1.5, 2.0]})
		);
	}

	#[test]
	fn debug() {
		assert_eq!(format!("{:?}", Geometry::new_point([1, 2])), "Point([1.0, 2.0])");
	}

	#[test]
	fn area_and_bounds() {
		assert_eq!(square().area(), 16.0);
		assert_eq!(square().compute_bounds(), Some([0.0, 0.0, 4.0, 4.0]));
	}
}
