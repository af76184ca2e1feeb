use super::{FieldRule, GeometryKind, LayerRule};
use anyhow::{Context, Result, bail, ensure};
use regex::Regex;
use serde::Deserialize;
use std::{
	collections::HashSet,
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

lazy_static::lazy_static! {
	static ref RE_LAYER_NAME: Regex = Regex::new(r"^[a-z][a-z0-9_]*$").unwrap();
}

const DEFAULT_CONFIG: &str = include_str!("../../config/default.yml");

/// What happens when a geometry operation fails for a single feature or tile.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OnGeometryError {
	/// Log a warning and keep going with what could be produced.
	#[default]
	Skip,
	/// Return the error to the caller.
	Abort,
}

/// The complete rule table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
	#[serde(default)]
	pub on_geometry_error: OnGeometryError,

	/// Layer rules in evaluation order.
	#[serde(default)]
	pub layers: Vec<LayerRule>,
}

impl ProfileConfig {
	/// The rule table of the national boundaries tiles.
	pub fn builtin() -> Result<Self> {
		Self::from_string(DEFAULT_CONFIG).context("parsing built-in rule table")
	}

	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let config: Self = serde_yaml_ng::from_reader(reader)?;
		config.validate()?;
		Ok(config)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		let config: Self = serde_yaml_ng::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening rule table {path:?}"))?;
		Self::from_reader(BufReader::new(file)).with_context(|| format!("loading rule table {path:?}"))
	}

	/// Checks the constraints serde cannot express.
	pub fn validate(&self) -> Result<()> {
		let mut layer_names = HashSet::new();

		for rule in &self.layers {
			let name = &rule.layer;
			for layer in rule.output_layers() {
				ensure!(
					RE_LAYER_NAME.is_match(layer),
					"invalid layer name '{layer}', expected lowercase letters, digits and underscores"
				);
				ensure!(layer_names.insert(layer), "layer '{layer}' is defined more than once");
			}

			check_fields(&rule.attributes).with_context(|| format!("layer '{name}'"))?;

			if let Some(label) = &rule.label {
				ensure!(
					rule.geometry == GeometryKind::Polygon,
					"layer '{name}': labels require polygon geometry, not {}",
					rule.geometry
				);
				check_fields(&label.attributes).with_context(|| format!("layer '{}'", label.layer))?;
			}

			ensure!(
				rule.min_pixel_size >= 0.0,
				"layer '{name}': min_pixel_size must not be negative"
			);

			if let Some(simplify) = &rule.simplify {
				ensure!(
					simplify.tolerance >= 0.0,
					"layer '{name}': simplify tolerance must not be negative"
				);
			}

			if let Some(merge) = &rule.merge {
				if rule.geometry != GeometryKind::Polygon {
					bail!("layer '{name}': merging requires polygon geometry, not {}", rule.geometry);
				}
				ensure!(merge.buffer >= 0.0, "layer '{name}': merge buffer must not be negative");
				ensure!(
					(0.0..=1.0).contains(&merge.min_overlap_ratio),
					"layer '{name}': min_overlap_ratio must be between 0 and 1"
				);
				ensure!(
					merge.min_area >= 0.0 && merge.min_hole_area >= 0.0,
					"layer '{name}': merge area thresholds must not be negative"
				);
			}
		}
		Ok(())
	}

	/// The rule that writes the given output layer, including label layers.
	#[must_use]
	pub fn rule_for_layer(&self, layer: &str) -> Option<&LayerRule> {
		self.layers.iter().find(|rule| rule.output_layers().any(|name| name == layer))
	}
}

fn check_fields(fields: &[FieldRule]) -> Result<()> {
	let mut targets = HashSet::new();
	for field in fields {
		ensure!(!field.target.is_empty(), "attribute with empty target name");
		ensure!(
			targets.insert(field.target.as_str()),
			"attribute '{}' is mapped more than once",
			field.target
		);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::SimplifyConfig;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[test]
	fn parse_builtin_config() {
		let config = ProfileConfig::builtin().unwrap();
		assert_eq!(config.on_geometry_error, OnGeometryError::Skip);
		assert_eq!(
			config.layers.iter().map(|rule| rule.layer.as_str()).collect::<Vec<_>>(),
			vec![
				"counties",
				"municipalities",
				"elderships",
				"residential_areas",
				"residentials",
				"streets",
				"parcels"
			]
		);
		assert!(config.layers.iter().all(|rule| rule.buffer_pixels == 4));
		assert!(config.layers.iter().all(|rule| rule.min_pixel_size == 0.0));
	}

	#[test]
	fn builtin_municipalities() {
		let config = ProfileConfig::builtin().unwrap();
		let rule = config.rule_for_layer("municipalities_label").unwrap();
		assert_eq!(rule.layer, "municipalities");
		assert_eq!(rule.id_tag.as_deref(), Some("feature_id"));
		assert_eq!(
			rule.attributes,
			vec![
				FieldRule::new("code"),
				FieldRule::new("name"),
				FieldRule::new("county_code"),
				FieldRule::new("area").with_zero_as_null(),
			]
		);
		let label = rule.label.as_ref().unwrap();
		assert_eq!(label.attributes, vec![FieldRule::new("code"), FieldRule::new("name")]);
	}

	#[test]
	fn builtin_area_only_where_emitted() {
		let config = ProfileConfig::builtin().unwrap();
		let has_area = |layer: &str| {
			let rule = config.rule_for_layer(layer).unwrap();
			rule.attributes.iter().any(|field| field.target == "area")
		};
		assert!(has_area("municipalities"));
		assert!(has_area("residentials"));
		assert!(!has_area("counties"));
		assert!(!has_area("elderships"));
		assert!(!has_area("residential_areas"));
	}

	#[test]
	fn builtin_streets_and_parcels() {
		let config = ProfileConfig::builtin().unwrap();

		let streets = config.rule_for_layer("streets").unwrap();
		assert_eq!(streets.geometry, GeometryKind::Line);
		assert_eq!(streets.min_zoom, Some(10));
		assert_eq!(streets.attributes[0], FieldRule::new("id").with_source("feature_id"));
		assert!(streets.attributes[1..].iter().all(|f| f.min_zoom == Some(13)));

		let parcels = config.rule_for_layer("parcels").unwrap();
		assert_eq!(parcels.min_zoom, Some(12));
		assert_eq!(parcels.id_tag, None);
		assert_eq!(
			parcels.simplify,
			Some(SimplifyConfig {
				tolerance: 0.25,
				below_zoom: 13
			})
		);
		let merge = parcels.merge.as_ref().unwrap();
		assert_eq!((merge.zoom, merge.buffer, merge.min_overlap_ratio), (14, 2.0, 0.5));
		assert_eq!((merge.min_area, merge.min_hole_area), (2.0, 2.0));
	}

	#[test]
	fn parse_empty_config() {
		assert_eq!(ProfileConfig::from_string("").unwrap(), ProfileConfig::default());
	}

	#[test]
	fn parse_from_path() {
		let path = Path::new("config/default.yml");
		assert_eq!(ProfileConfig::from_path(path).unwrap(), ProfileConfig::builtin().unwrap());
	}

	#[test]
	fn missing_file() {
		let error = ProfileConfig::from_path(Path::new("config/missing.yml")).unwrap_err();
		assert!(error.to_string().starts_with("opening rule table"));
	}

	#[test]
	fn unknown_field() {
		assert!(ProfileConfig::from_string("layers: []\nlayer_order: [a]").is_err());
	}

	#[rstest]
	#[case(
		"layers: [{ layer: Parcels, source: b }]",
		"invalid layer name 'Parcels', expected lowercase letters, digits and underscores"
	)]
	#[case(
		"layers: [{ layer: a, source: b }, { layer: a, source: c }]",
		"layer 'a' is defined more than once"
	)]
	#[case(
		"layers: [{ layer: a, source: b, label: { layer: a } }]",
		"layer 'a' is defined more than once"
	)]
	#[case(
		"layers: [{ layer: a, source: b, geometry: line, label: { layer: a_label } }]",
		"layer 'a': labels require polygon geometry, not line"
	)]
	#[case(
		"layers: [{ layer: a, source: b, merge: { min_overlap_ratio: 1.5 } }]",
		"layer 'a': min_overlap_ratio must be between 0 and 1"
	)]
	#[case(
		"layers: [{ layer: a, source: b, merge: { buffer: -1 } }]",
		"layer 'a': merge buffer must not be negative"
	)]
	#[case(
		"layers: [{ layer: a, source: b, geometry: point, merge: {} }]",
		"layer 'a': merging requires polygon geometry, not point"
	)]
	#[case(
		"layers: [{ layer: a, source: b, simplify: { tolerance: -0.5, below_zoom: 3 } }]",
		"layer 'a': simplify tolerance must not be negative"
	)]
	#[case(
		"layers: [{ layer: a, source: b, min_pixel_size: -1 }]",
		"layer 'a': min_pixel_size must not be negative"
	)]
	fn validation_errors(#[case] yaml: &str, #[case] message: &str) {
		let error = ProfileConfig::from_string(yaml).unwrap_err();
		assert_eq!(error.to_string(), message);
	}

	#[test]
	fn duplicate_attribute() {
		let error = ProfileConfig::from_string("layers: [{ layer: a, source: b, attributes: [{ target: x }, { target: x }] }]")
			.unwrap_err();
		assert_eq!(format!("{error:#}"), "layer 'a': attribute 'x' is mapped more than once");
	}

	#[test]
	fn on_geometry_error_abort() {
		let config = ProfileConfig::from_string("on_geometry_error: abort").unwrap();
		assert_eq!(config.on_geometry_error, OnGeometryError::Abort);
	}
}
