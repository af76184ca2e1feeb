use super::{FieldRule, MergeConfig, SimplifyConfig};
use crate::{RenderParams, SourceFeature};
use serde::Deserialize;
use std::fmt::Display;

/// Geometry a rule requires from a source feature.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GeometryKind {
	#[default]
	Polygon,
	Line,
	Point,
}

impl GeometryKind {
	#[must_use]
	pub fn accepts(&self, feature: &SourceFeature) -> bool {
		match self {
			GeometryKind::Polygon => feature.can_be_polygon(),
			GeometryKind::Line => feature.can_be_line(),
			GeometryKind::Point => feature.can_be_point(),
		}
	}
}

impl Display for GeometryKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			GeometryKind::Polygon => "polygon",
			GeometryKind::Line => "line",
			GeometryKind::Point => "point",
		})
	}
}

/// Secondary point layer carrying a label position for each polygon.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LabelRule {
	pub layer: String,
	#[serde(default)]
	pub attributes: Vec<FieldRule>,
}

/// One entry of the rule table: which source features go to which output layer
/// and how they are rendered.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LayerRule {
	/// Name of the output layer.
	pub layer: String,

	/// Source identifier the feature must come from.
	pub source: String,

	/// Layer inside the source. When set, the feature's source layer must match.
	#[serde(default)]
	pub source_layer: Option<String>,

	#[serde(default)]
	pub geometry: GeometryKind,

	/// Tag holding the stable numeric feature id.
	#[serde(default)]
	pub id_tag: Option<String>,

	#[serde(default)]
	pub attributes: Vec<FieldRule>,

	#[serde(default)]
	pub label: Option<LabelRule>,

	#[serde(default = "default_buffer_pixels")]
	pub buffer_pixels: u32,

	/// Features smaller than this many pixels in both axes are not rendered. `0` disables.
	#[serde(default)]
	pub min_pixel_size: f64,

	#[serde(default)]
	pub min_zoom: Option<u8>,

	#[serde(default)]
	pub simplify: Option<SimplifyConfig>,

	#[serde(default)]
	pub merge: Option<MergeConfig>,

	/// File name of the archive this layer is packaged into.
	#[serde(default)]
	pub archive: Option<String>,

	#[serde(default)]
	pub description: Option<String>,
}

fn default_buffer_pixels() -> u32 {
	4
}

impl LayerRule {
	pub fn new(layer: &str, source: &str, geometry: GeometryKind) -> Self {
		Self {
			layer: layer.to_string(),
			source: source.to_string(),
			source_layer: None,
			geometry,
			id_tag: None,
			attributes: Vec::new(),
			label: None,
			buffer_pixels: default_buffer_pixels(),
			min_pixel_size: 0.0,
			min_zoom: None,
			simplify: None,
			merge: None,
			archive: None,
			description: None,
		}
	}

	/// Whether the source feature satisfies source, source layer and geometry of this rule.
	#[must_use]
	pub fn matches(&self, feature: &SourceFeature) -> bool {
		if feature.source != self.source {
			return false;
		}
		if let Some(source_layer) = &self.source_layer
			&& feature.source_layer.as_ref() != Some(source_layer)
		{
			return false;
		}
		self.geometry.accepts(feature)
	}

	#[must_use]
	pub fn render_params(&self) -> RenderParams {
		RenderParams {
			buffer_pixels: self.buffer_pixels,
			min_pixel_size: self.min_pixel_size,
			min_zoom: self.min_zoom,
			simplify: self.simplify,
		}
	}

	/// Names of all layers this rule writes to.
	pub fn output_layers(&self) -> impl Iterator<Item = &str> {
		std::iter::once(self.layer.as_str()).chain(self.label.iter().map(|label| label.layer.as_str()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use boundaries_geometry::Geometry;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn square() -> Geometry {
		Geometry::new_polygon(&[vec![[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]])
	}

	#[test]
	fn defaults() {
		let rule: LayerRule = serde_yaml_ng::from_str("{ layer: counties, source: counties }").unwrap();
		assert_eq!(rule, LayerRule::new("counties", "counties", GeometryKind::Polygon));
		assert_eq!(rule.buffer_pixels, 4);
	}

	#[test]
	fn source_layer_must_match_when_set() {
		let mut rule = LayerRule::new("parcels", "boundaries", GeometryKind::Polygon);
		rule.source_layer = Some("parcels".to_string());

		let parcel = SourceFeature::new("boundaries", square()).with_source_layer("parcels");
		let street = SourceFeature::new("boundaries", square()).with_source_layer("streets");
		let unlayered = SourceFeature::new("boundaries", square());

		assert!(rule.matches(&parcel));
		assert!(!rule.matches(&street));
		assert!(!rule.matches(&unlayered));
	}

	#[rstest]
	#[case(GeometryKind::Polygon, true, false, false)]
	#[case(GeometryKind::Line, true, true, false)]
	#[case(GeometryKind::Point, false, false, true)]
	fn geometry_requirement(
		#[case] kind: GeometryKind,
		#[case] polygon: bool,
		#[case] line: bool,
		#[case] point: bool,
	) {
		let rule = LayerRule::new("layer", "src", kind);
		assert_eq!(rule.matches(&SourceFeature::new("src", square())), polygon);
		assert_eq!(
			rule.matches(&SourceFeature::new("src", Geometry::new_line_string(&[[0, 0], [1, 1]]))),
			line
		);
		assert_eq!(rule.matches(&SourceFeature::new("src", Geometry::new_point([0, 0]))), point);
	}

	#[test]
	fn output_layers_include_label() {
		let mut rule = LayerRule::new("counties", "counties", GeometryKind::Polygon);
		rule.label = Some(LabelRule {
			layer: "counties_label".to_string(),
			attributes: vec![],
		});
		assert_eq!(rule.output_layers().collect::<Vec<_>>(), vec!["counties", "counties_label"]);
	}

	#[test]
	fn geometry_kind_names() {
		assert_eq!(GeometryKind::Line.to_string(), "line");
		let kind: GeometryKind = serde_yaml_ng::from_str("point").unwrap();
		assert_eq!(kind, GeometryKind::Point);
	}
}
