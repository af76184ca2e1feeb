use serde::Deserialize;

/// Parameters of the per-tile polygon merge. Distances are in tile pixels,
/// areas in square pixels.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MergeConfig {
	/// From this zoom on, only fragments of the same feature are merged (lossless).
	/// Below it, nearby polygons are merged (lossy).
	#[serde(default = "default_zoom")]
	pub zoom: u8,

	/// Maximum gap between two polygons that are merged below `zoom`.
	#[serde(default = "default_buffer")]
	pub buffer: f64,

	/// Minimum share of the smaller polygon's extent, measured across the gap,
	/// that two nearby polygons must have in common.
	#[serde(default = "default_min_overlap_ratio")]
	pub min_overlap_ratio: f64,

	/// Polygon parts smaller than this are dropped after a lossy merge. `0` disables.
	#[serde(default)]
	pub min_area: f64,

	/// Holes smaller than this are filled after a lossy merge. `0` disables.
	#[serde(default)]
	pub min_hole_area: f64,
}

fn default_zoom() -> u8 {
	14
}

fn default_buffer() -> f64 {
	2.0
}

fn default_min_overlap_ratio() -> f64 {
	0.5
}

impl Default for MergeConfig {
	fn default() -> Self {
		Self {
			zoom: default_zoom(),
			buffer: default_buffer(),
			min_overlap_ratio: default_min_overlap_ratio(),
			min_area: 0.0,
			min_hole_area: 0.0,
		}
	}
}

/// Render-time simplification of lines and rings.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SimplifyConfig {
	/// Douglas–Peucker tolerance in tile pixels.
	pub tolerance: f64,
	/// Simplification applies to zoom levels strictly below this one.
	pub below_zoom: u8,
}
