use super::*;
use serde_json::{Value, json};

/// A feature as handed to the tile encoder: optional id, geometry and properties.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<u64>,
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry,
			properties: GeoProperties::new(),
		}
	}

	pub fn set_id(&mut self, id: u64) {
		self.id = Some(id);
	}

	pub fn set_property<T>(&mut self, key: &str, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key.to_string(), GeoValue::from(value));
	}

	/// GeoJSON `Feature` object.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let mut json = json!({
			"type": "Feature",
			"geometry": self.geometry.to_json(precision),
			"properties": self.properties.to_json(),
		});
		if let Some(id) = self.id {
			json["id"] = Value::from(id);
		}
		json
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn to_json_with_id() {
		let mut feature = GeoFeature::new(Geometry::new_point([25.28, 54.69]));
		feature.set_id(13);
		feature.set_property("name", "Vilnius");
		assert_eq!(
			feature.to_json(None),
			json!({
				"type": "Feature",
				"id": 13,
				"geometry": {"type": "Point", "coordinates": [25.28, 54.69]},
				"properties": {"name": "Vilnius"}
			})
		);
	}

	#[test]
	fn to_json_without_id() {
		let feature = GeoFeature::new(Geometry::new_point([0, 0]));
		assert!(feature.to_json(None).get("id").is_none());
	}
}
