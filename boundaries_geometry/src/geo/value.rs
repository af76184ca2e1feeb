use serde_json::{Number, Value};
use std::{
	cmp::Ordering,
	fmt::{Debug, Display},
	hash::Hash,
};

/// A single tag or attribute value.
///
/// Source tags arrive either typed (from GeoJSON numbers and booleans) or as strings
/// (from table columns); both forms are kept as they are so attributes are emitted unmodified.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Bool(bool),
	Double(f64),
	Int(i64),
	Null,
	String(String),
	UInt(u64),
}

impl GeoValue {
	fn variant_order(&self) -> u8 {
		match self {
			GeoValue::String(_) => 0,
			GeoValue::Double(_) => 1,
			GeoValue::Int(_) => 2,
			GeoValue::UInt(_) => 3,
			GeoValue::Bool(_) => 4,
			GeoValue::Null => 5,
		}
	}

	/// Numeric reading of the value. Numeric strings such as `"401"` or `" 0.0 "` count as numbers.
	#[must_use]
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			GeoValue::Double(v) => Some(*v),
			GeoValue::Int(v) => Some(*v as f64),
			GeoValue::UInt(v) => Some(*v as f64),
			GeoValue::String(v) => v.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
			GeoValue::Bool(_) | GeoValue::Null => None,
		}
	}

	/// Reads the value as a stable feature id: non-negative integers or integer strings.
	#[must_use]
	pub fn as_u64(&self) -> Option<u64> {
		match self {
			GeoValue::UInt(v) => Some(*v),
			GeoValue::Int(v) => u64::try_from(*v).ok(),
			GeoValue::Double(v) if v.fract() == 0.0 && *v >= 0.0 && *v <= u64::MAX as f64 => Some(*v as u64),
			GeoValue::String(v) => v.trim().parse::<u64>().ok(),
			_ => None,
		}
	}

	/// Whether the value is a numeric zero in any representation.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.as_f64() == Some(0.0)
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, GeoValue::Null)
	}

	#[must_use]
	pub fn to_json(&self) -> Value {
		match self {
			GeoValue::Bool(v) => Value::Bool(*v),
			GeoValue::Double(v) => Number::from_f64(*v).map_or(Value::Null, Value::Number),
			GeoValue::Int(v) => Value::from(*v),
			GeoValue::Null => Value::Null,
			GeoValue::String(v) => Value::String(v.clone()),
			GeoValue::UInt(v) => Value::from(*v),
		}
	}

	/// Converts a scalar JSON value. Arrays and objects are kept as their JSON text.
	#[must_use]
	pub fn from_json(value: &Value) -> Self {
		match value {
			Value::Null => GeoValue::Null,
			Value::Bool(v) => GeoValue::Bool(*v),
			Value::Number(n) => {
				if let Some(v) = n.as_u64() {
					GeoValue::UInt(v)
				} else if let Some(v) = n.as_i64() {
					GeoValue::Int(v)
				} else {
					GeoValue::Double(n.as_f64().unwrap_or(f64::NAN))
				}
			}
			Value::String(v) => GeoValue::String(v.clone()),
			other => GeoValue::String(other.to_string()),
		}
	}
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			GeoValue::Int(i64::from(value))
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<u32> for GeoValue {
	fn from(value: u32) -> Self {
		GeoValue::UInt(u64::from(value))
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		GeoValue::Int(value)
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

impl Eq for GeoValue {}

impl Hash for GeoValue {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		core::mem::discriminant(self).hash(state);
		match self {
			GeoValue::Bool(v) => v.hash(state),
			GeoValue::Double(v) => v.to_bits().hash(state),
			GeoValue::Int(v) => v.hash(state),
			GeoValue::Null => (),
			GeoValue::String(v) => v.hash(state),
			GeoValue::UInt(v) => v.hash(state),
		}
	}
}

impl PartialOrd for GeoValue {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for GeoValue {
	fn cmp(&self, other: &Self) -> Ordering {
		use GeoValue::*;
		match (self, other) {
			(String(a), String(b)) => a.cmp(b),
			(Double(a), Double(b)) => a.total_cmp(b),
			(Int(a), Int(b)) => a.cmp(b),
			(UInt(a), UInt(b)) => a.cmp(b),
			(Bool(a), Bool(b)) => a.cmp(b),
			_ => self.variant_order().cmp(&other.variant_order()),
		}
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::Bool(v) => write!(f, "{v}"),
			GeoValue::Double(v) => write!(f, "{v}"),
			GeoValue::Int(v) => write!(f, "{v}"),
			GeoValue::Null => write!(f, "null"),
			GeoValue::String(v) => write!(f, "{v}"),
			GeoValue::UInt(v) => write!(f, "{v}"),
		}
	}
}
