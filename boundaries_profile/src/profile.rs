use crate::{
	EmittedFeature, GeometryEmitter, LayerClassifier, MatchRole, OnGeometryError, PolygonMerger, ProfileConfig,
	SourceFeature,
};
use anyhow::Result;
use boundaries_geometry::GeoFeature;
use log::warn;
use std::collections::HashMap;

/// The rule table ready for use: classification, emission and per-tile post-processing.
///
/// Built once at start and shared between workers; every operation takes `&self`.
#[derive(Debug)]
pub struct Profile {
	config: ProfileConfig,
	mergers: HashMap<String, PolygonMerger>,
}

impl Profile {
	pub fn new(config: ProfileConfig) -> Result<Self> {
		config.validate()?;
		let mergers = config
			.layers
			.iter()
			.filter_map(|rule| Some((rule.layer.clone(), PolygonMerger::new(rule.merge.clone()?))))
			.collect();
		Ok(Self { config, mergers })
	}

	/// Profile of the built-in rule table.
	pub fn builtin() -> Result<Self> {
		Self::new(ProfileConfig::builtin()?)
	}

	#[must_use]
	pub fn config(&self) -> &ProfileConfig {
		&self.config
	}

	pub fn classifier(&self) -> LayerClassifier<'_> {
		LayerClassifier::new(&self.config.layers)
	}

	/// Classifies a source feature and emits one record per match.
	///
	/// A failed label point is logged and dropped while the primary feature is
	/// kept, unless the profile is configured to abort on geometry errors.
	pub fn process_feature(&self, feature: &SourceFeature) -> Result<Vec<EmittedFeature>> {
		let mut emitted = Vec::with_capacity(2);
		for layer_match in self.classifier().classify(feature) {
			match GeometryEmitter::emit(&layer_match, feature) {
				Ok(record) => emitted.push(record),
				Err(error) if layer_match.role == MatchRole::Label && self.skips_geometry_errors() => {
					warn!("skipping label of feature in layer '{}': {error:#}", layer_match.rule.layer);
				}
				Err(error) => return Err(error),
			}
		}
		Ok(emitted)
	}

	/// Whether the layer's tiles are rewritten by [`Profile::post_process`].
	#[must_use]
	pub fn has_post_process(&self, layer: &str) -> bool {
		self.mergers.contains_key(layer)
	}

	/// Rewrites the rendered features of one layer in one tile. Layers without merge
	/// parameters are returned unchanged. When the merge fails and geometry errors are
	/// skipped, the unmerged input is returned.
	pub fn post_process(&self, layer: &str, zoom: u8, features: Vec<GeoFeature>) -> Result<Vec<GeoFeature>> {
		let Some(merger) = self.mergers.get(layer) else {
			return Ok(features);
		};

		if let Err(error) = merger.check(zoom, &features) {
			if !self.skips_geometry_errors() {
				return Err(error.context(format!("merging layer '{layer}'")));
			}
			warn!("leaving layer '{layer}' unmerged at zoom {zoom}: {error:#}");
			return Ok(features);
		}
		Ok(merger.merge_checked(zoom, features))
	}

	fn skips_geometry_errors(&self) -> bool {
		self.config.on_geometry_error == OnGeometryError::Skip
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{TileContext, Visibility};
	use boundaries_geometry::{GeoProperties, GeoValue, Geometry, GeometryError, GeometryTrait, PolygonGeometry};
	use pretty_assertions::assert_eq;

	fn vilnius() -> SourceFeature {
		SourceFeature::new(
			"municipalities",
			Geometry::new_polygon(&[vec![
				[25.0, 54.6],
				[25.4, 54.6],
				[25.4, 54.8],
				[25.2, 54.7],
				[25.0, 54.8],
				[25.0, 54.6],
			]]),
		)
		.with_tags(GeoProperties::from(vec![
			("code", "15"),
			("name", "Vilnius"),
			("county_code", "10"),
			("area", "401"),
		]))
	}

	fn degenerate(source: &str) -> SourceFeature {
		SourceFeature::new(source, Geometry::new_polygon(&[vec![[0, 0], [5, 0], [10, 0], [0, 0]]]))
	}

	#[test]
	fn municipality_end_to_end() {
		let profile = Profile::builtin().unwrap();
		let feature = vilnius();
		let emitted = profile.process_feature(&feature).unwrap();
		assert_eq!(emitted.len(), 2);

		let context = TileContext::new(8, 1000.0);
		let municipality = emitted[0].render(&context).unwrap();
		assert_eq!(emitted[0].layer, "municipalities");
		assert_eq!(municipality.geometry, feature.geometry);
		assert_eq!(
			municipality.properties,
			GeoProperties::from(vec![
				("code", "15"),
				("name", "Vilnius"),
				("county_code", "10"),
				("area", "401"),
			])
		);

		let label = emitted[1].render(&context).unwrap();
		assert_eq!(emitted[1].layer, "municipalities_label");
		assert_eq!(label.properties, GeoProperties::from(vec![("code", "15"), ("name", "Vilnius")]));
		let Geometry::Point(point) = &label.geometry else {
			panic!("label must be a point");
		};
		assert!(feature.geometry.contains_point(point.x(), point.y()));
	}

	#[test]
	fn only_the_matching_layer_receives_the_feature() {
		let profile = Profile::builtin().unwrap();
		let emitted = profile.process_feature(&vilnius()).unwrap();
		let layers: Vec<&str> = emitted.iter().map(|e| e.layer.as_str()).collect();
		assert_eq!(layers, vec!["municipalities", "municipalities_label"]);
	}

	#[test]
	fn zero_area_is_omitted() {
		let profile = Profile::builtin().unwrap();
		let mut feature = vilnius();
		feature.tags.insert("area".to_string(), GeoValue::from(0));
		let emitted = profile.process_feature(&feature).unwrap();
		assert!(!emitted[0].properties_at(0).contains_key("area"));

		feature.tags.insert("area".to_string(), GeoValue::from(7));
		let emitted = profile.process_feature(&feature).unwrap();
		assert_eq!(emitted[0].properties_at(0).get("area"), Some(&GeoValue::from(7)));
	}

	#[test]
	fn street_attributes_by_zoom() {
		let profile = Profile::builtin().unwrap();
		let street = SourceFeature::new("boundaries", Geometry::new_line_string(&[[0, 0], [1, 1]]))
			.with_source_layer("streets")
			.with_tags(GeoProperties::from(vec![
				("feature_id", GeoValue::from(12)),
				("name", GeoValue::from("Pilies")),
				("full_name", GeoValue::from("Pilies g.")),
			]));
		let emitted = profile.process_feature(&street).unwrap();
		let context = |zoom| TileContext::new(zoom, 1.0);

		assert_eq!(emitted[0].render(&context(9)), None);
		let at_12 = emitted[0].render(&context(12)).unwrap();
		assert_eq!(at_12.properties, GeoProperties::from(vec![("id", GeoValue::from(12))]));
		let at_13 = emitted[0].render(&context(13)).unwrap();
		assert_eq!(at_13.properties.get("full_name"), Some(&GeoValue::from("Pilies g.")));
		assert_eq!(emitted[0].attributes.get("name").map(|(_, v)| v), Some(Visibility::FromZoom(13)));
	}

	#[test]
	fn unmatched_feature_emits_nothing() {
		let profile = Profile::builtin().unwrap();
		let feature = SourceFeature::new("roads", Geometry::new_line_string(&[[0, 0], [1, 1]]));
		assert!(profile.process_feature(&feature).unwrap().is_empty());
	}

	#[test]
	fn label_failure_is_skipped() {
		let profile = Profile::builtin().unwrap();
		let emitted = profile.process_feature(&degenerate("elderships")).unwrap();
		assert_eq!(emitted.len(), 1);
		assert_eq!(emitted[0].layer, "elderships");
	}

	#[test]
	fn label_failure_aborts() {
		let mut config = ProfileConfig::builtin().unwrap();
		config.on_geometry_error = OnGeometryError::Abort;
		let profile = Profile::new(config).unwrap();
		let error = profile.process_feature(&degenerate("elderships")).unwrap_err();
		assert!(matches!(
			error.downcast_ref::<GeometryError>(),
			Some(GeometryError::NoInteriorPoint(_))
		));
	}

	fn square(x: f64, number: &str) -> GeoFeature {
		let mut feature = GeoFeature::new(Geometry::new_polygon(&[vec![
			[x, 0.0],
			[x + 10.0, 0.0],
			[x + 10.0, 10.0],
			[x, 10.0],
			[x, 0.0],
		]]));
		feature.set_property("unique_number", number);
		feature
	}

	#[test]
	fn post_process_merges_parcels_only() {
		let profile = Profile::builtin().unwrap();
		assert!(profile.has_post_process("parcels"));
		assert!(!profile.has_post_process("municipalities"));

		let tile = vec![square(0.0, "1"), square(11.0, "2")];
		assert_eq!(profile.post_process("parcels", 12, tile.clone()).unwrap().len(), 1);
		assert_eq!(profile.post_process("parcels", 14, tile.clone()).unwrap().len(), 2);
		assert_eq!(profile.post_process("municipalities", 12, tile.clone()).unwrap(), tile);
	}

	#[test]
	fn post_process_failure_handling() {
		let mut broken = square(0.0, "1");
		if let Geometry::Polygon(PolygonGeometry(rings)) = &mut broken.geometry {
			rings[0].0.pop();
		}
		let tile = vec![broken, square(11.0, "2")];

		let profile = Profile::builtin().unwrap();
		assert_eq!(profile.post_process("parcels", 12, tile.clone()).unwrap(), tile);

		let mut config = ProfileConfig::builtin().unwrap();
		config.on_geometry_error = OnGeometryError::Abort;
		let error = Profile::new(config)
			.unwrap()
			.post_process("parcels", 12, tile)
			.unwrap_err();
		assert!(error.to_string().starts_with("merging layer 'parcels'"));
		assert!(error.downcast_ref::<GeometryError>().is_some());
	}
}
