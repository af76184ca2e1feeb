use super::GeoFeature;
use serde_json::{Value, json};

/// A list of features, read from or written as a GeoJSON `FeatureCollection`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	/// GeoJSON `FeatureCollection` object.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		json!({
			"type": "FeatureCollection",
			"features": self.features.iter().map(|f| f.to_json(precision)).collect::<Vec<_>>(),
		})
	}
}
