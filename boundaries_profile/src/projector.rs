use crate::{FieldRule, SourceFeature};
use boundaries_geometry::{GeoProperties, GeoValue};

/// From which zoom level an attribute is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
	Always,
	FromZoom(u8),
}

impl Visibility {
	#[must_use]
	pub fn is_visible_at(&self, zoom: u8) -> bool {
		match self {
			Visibility::Always => true,
			Visibility::FromZoom(min_zoom) => zoom >= *min_zoom,
		}
	}
}

/// Projected attributes of one feature with their visibility, in table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
	entries: Vec<(String, GeoValue, Visibility)>,
}

impl AttributeSet {
	pub fn push(&mut self, key: &str, value: GeoValue, visibility: Visibility) {
		self.entries.push((key.to_string(), value, visibility));
	}

	/// The attributes visible at the given zoom level.
	#[must_use]
	pub fn at_zoom(&self, zoom: u8) -> GeoProperties {
		self
			.entries
			.iter()
			.filter(|(_, _, visibility)| visibility.is_visible_at(zoom))
			.map(|(key, value, _)| (key.clone(), value.clone()))
			.collect()
	}

	pub fn get(&self, key: &str) -> Option<(&GeoValue, Visibility)> {
		self
			.entries
			.iter()
			.find(|(k, _, _)| k == key)
			.map(|(_, value, visibility)| (value, *visibility))
	}

	pub fn iter(&self) -> impl Iterator<Item = &(String, GeoValue, Visibility)> {
		self.entries.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Maps source tags to output attributes.
///
/// For every field the source tag is read; missing tags are skipped, and so are
/// numeric zeros on fields marked `zero_as_null`. Everything else is copied
/// unmodified, so numeric strings keep their string form.
pub struct AttributeProjector;

impl AttributeProjector {
	/// Zoom-independent attributes, each tagged with its visibility.
	pub fn attributes(fields: &[FieldRule], feature: &SourceFeature) -> AttributeSet {
		let mut set = AttributeSet::default();
		for field in fields {
			let Some(value) = feature.tag(field.source_tag()) else {
				continue;
			};
			if field.zero_as_null && value.is_zero() {
				continue;
			}
			let visibility = field.min_zoom.map_or(Visibility::Always, Visibility::FromZoom);
			set.push(&field.target, value.clone(), visibility);
		}
		set
	}

	/// Attributes visible at `zoom`.
	pub fn project(fields: &[FieldRule], feature: &SourceFeature, zoom: u8) -> GeoProperties {
		Self::attributes(fields, feature).at_zoom(zoom)
	}
}
