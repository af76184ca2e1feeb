use serde::Deserialize;

/// Maps one source tag to one output attribute.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FieldRule {
	/// Attribute name in the output layer.
	pub target: String,

	/// Tag name in the source feature. Defaults to `target`.
	#[serde(default)]
	pub source: Option<String>,

	/// The attribute is only emitted from this zoom level on.
	#[serde(default)]
	pub min_zoom: Option<u8>,

	/// A raw numeric zero means "no value" and the attribute is omitted.
	#[serde(default)]
	pub zero_as_null: bool,
}

impl FieldRule {
	pub fn new(target: &str) -> Self {
		Self {
			target: target.to_string(),
			source: None,
			min_zoom: None,
			zero_as_null: false,
		}
	}

	pub fn with_source(mut self, source: &str) -> Self {
		self.source = Some(source.to_string());
		self
	}

	pub fn with_min_zoom(mut self, min_zoom: u8) -> Self {
		self.min_zoom = Some(min_zoom);
		self
	}

	pub fn with_zero_as_null(mut self) -> Self {
		self.zero_as_null = true;
		self
	}

	/// Name of the tag that is read from the source feature.
	#[must_use]
	pub fn source_tag(&self) -> &str {
		self.source.as_deref().unwrap_or(&self.target)
	}
}

impl From<&str> for FieldRule {
	fn from(target: &str) -> Self {
		Self::new(target)
	}
}
