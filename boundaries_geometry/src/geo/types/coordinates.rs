use serde_json::{Value, json};
use std::fmt::Debug;

/// A 2D position stored as `[x, y]`.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	/// Creates coordinates from x and y.
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	/// Whether both values are finite, i.e. neither NaN nor infinite.
	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.0[0].is_finite() && self.0[1].is_finite()
	}

	#[must_use]
	pub fn to_geo(&self) -> geo::Coord {
		geo::Coord { x: self.0[0], y: self.0[1] }
	}

	/// JSON array `[x, y]`, optionally rounded to `precision` decimals.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		if let Some(prec) = precision {
			let factor = 10f64.powi(i32::from(prec));
			let x = (self.0[0] * factor).round() / factor;
			let y = (self.0[1] * factor).round() / factor;
			json!([x, y])
		} else {
			json!(self.0)
		}
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates([value.x, value.y])
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
