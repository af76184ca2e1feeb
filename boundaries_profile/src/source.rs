use boundaries_geometry::{GeoFeature, GeoProperties, GeoValue, Geometry};

/// A raw feature read from one of the sources. Read-only input of the profile.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceFeature {
	/// Identifier of the source the feature was read from, e.g. `municipalities`.
	pub source: String,
	/// Layer inside a multi-layer source, e.g. `parcels` in `boundaries`.
	pub source_layer: Option<String>,
	pub geometry: Geometry,
	pub tags: GeoProperties,
}

impl SourceFeature {
	pub fn new(source: &str, geometry: Geometry) -> Self {
		Self {
			source: source.to_string(),
			source_layer: None,
			geometry,
			tags: GeoProperties::new(),
		}
	}

	/// Wraps a parsed GeoJSON feature; its properties become the tags.
	pub fn from_geo_feature(source: &str, source_layer: Option<&str>, feature: GeoFeature) -> Self {
		Self {
			source: source.to_string(),
			source_layer: source_layer.map(str::to_string),
			geometry: feature.geometry,
			tags: feature.properties,
		}
	}

	pub fn with_source_layer(mut self, source_layer: &str) -> Self {
		self.source_layer = Some(source_layer.to_string());
		self
	}

	pub fn with_tags(mut self, tags: GeoProperties) -> Self {
		self.tags = tags;
		self
	}

	/// Tag value; explicit `null`s read as missing.
	#[must_use]
	pub fn tag(&self, key: &str) -> Option<&GeoValue> {
		self.tags.get(key).filter(|value| !value.is_null())
	}

	#[must_use]
	pub fn can_be_polygon(&self) -> bool {
		self.geometry.is_polygonal()
	}

	/// Lines qualify, and so do polygons, whose outlines can be drawn as lines.
	#[must_use]
	pub fn can_be_line(&self) -> bool {
		self.geometry.is_lineal() || self.geometry.is_polygonal()
	}

	#[must_use]
	pub fn can_be_point(&self) -> bool {
		self.geometry.is_puntal()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn capabilities() {
		let polygon = SourceFeature::new(
			"s",
			Geometry::new_multi_polygon(&[vec![vec![[0, 0], [1, 0], [1, 1], [0, 0]]]]),
		);
		assert!(polygon.can_be_polygon() && polygon.can_be_line() && !polygon.can_be_point());

		let line = SourceFeature::new("s", Geometry::new_line_string(&[[0, 0], [1, 1]]));
		assert!(!line.can_be_polygon() && line.can_be_line() && !line.can_be_point());

		let point = SourceFeature::new("s", Geometry::new_point([0, 0]));
		assert!(!point.can_be_polygon() && !point.can_be_line() && point.can_be_point());
	}

	#[test]
	fn null_tags_are_missing() {
		let feature = SourceFeature::new("s", Geometry::new_point([0, 0])).with_tags(GeoProperties::from(vec![
			("name", GeoValue::from("Vilnius")),
			("code", GeoValue::Null),
		]));
		assert_eq!(feature.tag("name"), Some(&GeoValue::from("Vilnius")));
		assert_eq!(feature.tag("code"), None);
		assert_eq!(feature.tag("area"), None);
	}

	#[test]
	fn from_geo_feature() {
		let mut geo_feature = GeoFeature::new(Geometry::new_point([1, 2]));
		geo_feature.set_property("name", "Kaunas");
		let feature = SourceFeature::from_geo_feature("boundaries", Some("streets"), geo_feature);
		assert_eq!(feature.source, "boundaries");
		assert_eq!(feature.source_layer.as_deref(), Some("streets"));
		assert_eq!(feature.tag("name"), Some(&GeoValue::from("Kaunas")));
	}
}
