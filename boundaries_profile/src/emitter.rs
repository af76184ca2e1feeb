use crate::{AttributeProjector, AttributeSet, GeometryKind, LayerMatch, MatchRole, SimplifyConfig, SourceFeature};
use anyhow::{Context, Result};
use boundaries_geometry::{
	GeoFeature, GeoProperties, Geometry, MultiLineStringGeometry,
	math::{interior_point, simplify_geometry},
};

/// Rendering parameters carried from the rule to every emitted feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
	/// Pixels rendered beyond the tile edge.
	pub buffer_pixels: u32,
	/// `0` disables the size filter.
	pub min_pixel_size: f64,
	pub min_zoom: Option<u8>,
	pub simplify: Option<SimplifyConfig>,
}

impl Default for RenderParams {
	fn default() -> Self {
		Self {
			buffer_pixels: 4,
			min_pixel_size: 0.0,
			min_zoom: None,
			simplify: None,
		}
	}
}

/// The zoom level being rendered and the scale of the tile grid at that zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileContext {
	pub zoom: u8,
	/// Tile pixels per source coordinate unit.
	pub pixels_per_unit: f64,
}

impl TileContext {
	pub fn new(zoom: u8, pixels_per_unit: f64) -> Self {
		Self { zoom, pixels_per_unit }
	}
}

/// A feature assigned to an output layer, valid for one tile-building pass.
#[derive(Debug, Clone, PartialEq)]
pub struct EmittedFeature {
	pub layer: String,
	pub id: Option<u64>,
	pub geometry: Geometry,
	pub params: RenderParams,
	pub attributes: AttributeSet,
}

impl EmittedFeature {
	/// Attributes visible at `zoom`.
	#[must_use]
	pub fn properties_at(&self, zoom: u8) -> GeoProperties {
		self.attributes.at_zoom(zoom)
	}

	#[must_use]
	pub fn is_visible_at(&self, zoom: u8) -> bool {
		self.params.min_zoom.is_none_or(|min_zoom| zoom >= min_zoom)
	}

	/// Whether the bounding box is smaller than `min_pixel_size` in both axes.
	/// Points are never too small.
	fn is_too_small(&self, pixels_per_unit: f64) -> bool {
		let min_size = self.params.min_pixel_size;
		if min_size <= 0.0 || self.geometry.is_puntal() {
			return false;
		}
		match self.geometry.compute_bounds() {
			Some([x_min, y_min, x_max, y_max]) => {
				(x_max - x_min) * pixels_per_unit < min_size && (y_max - y_min) * pixels_per_unit < min_size
			}
			None => true,
		}
	}

	/// The tile feature for the given zoom, or `None` when the feature is hidden at
	/// this zoom or too small to be drawn.
	#[must_use]
	pub fn render(&self, context: &TileContext) -> Option<GeoFeature> {
		if !self.is_visible_at(context.zoom) || self.is_too_small(context.pixels_per_unit) {
			return None;
		}

		let geometry = match self.params.simplify {
			Some(simplify) if context.zoom < simplify.below_zoom && context.pixels_per_unit > 0.0 => {
				simplify_geometry(&self.geometry, simplify.tolerance / context.pixels_per_unit)
			}
			_ => self.geometry.clone(),
		};

		Some(GeoFeature {
			id: self.id,
			geometry,
			properties: self.properties_at(context.zoom),
		})
	}
}

/// Builds emitted features from classification matches.
pub struct GeometryEmitter;

impl GeometryEmitter {
	/// Primary matches keep the source geometry (polygon outlines become lines for
	/// line rules); label matches get an interior point of the polygon.
	///
	/// # Errors
	/// Fails with a [`boundaries_geometry::GeometryError`] when no label point can be
	/// computed.
	pub fn emit(layer_match: &LayerMatch, feature: &SourceFeature) -> Result<EmittedFeature> {
		let rule = layer_match.rule;
		let layer = layer_match.layer();

		let geometry = match layer_match.role {
			MatchRole::Primary => primary_geometry(rule.geometry, &feature.geometry),
			MatchRole::Label => Geometry::Point(
				interior_point(&feature.geometry).with_context(|| format!("computing label point for layer '{layer}'"))?,
			),
		};

		let id = rule
			.id_tag
			.as_deref()
			.and_then(|tag| feature.tag(tag))
			.and_then(|value| value.as_u64());

		Ok(EmittedFeature {
			layer: layer.to_string(),
			id,
			geometry,
			params: rule.render_params(),
			attributes: AttributeProjector::attributes(layer_match.fields(), feature),
		})
	}
}

fn primary_geometry(kind: GeometryKind, geometry: &Geometry) -> Geometry {
	match kind {
		GeometryKind::Line if geometry.is_polygonal() => {
			let lines = geometry.to_lines().unwrap_or_else(|| MultiLineStringGeometry(Vec::new()));
			Geometry::MultiLineString(lines).into_single()
		}
		_ => geometry.clone(),
	}
}
