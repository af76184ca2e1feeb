use crate::{FieldRule, LayerRule, SourceFeature};
use log::trace;

/// Role of an emission produced for a source feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRole {
	/// The feature's own geometry in the rule's layer.
	Primary,
	/// A label point in the rule's label layer.
	Label,
}

/// A rule that matched a source feature, together with the role of the emission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerMatch<'a> {
	pub rule: &'a LayerRule,
	pub role: MatchRole,
}

impl LayerMatch<'_> {
	/// Name of the output layer.
	#[must_use]
	pub fn layer(&self) -> &str {
		match (self.role, &self.rule.label) {
			(MatchRole::Label, Some(label)) => &label.layer,
			_ => &self.rule.layer,
		}
	}

	/// Attribute table of the output layer.
	#[must_use]
	pub fn fields(&self) -> &[FieldRule] {
		match (self.role, &self.rule.label) {
			(MatchRole::Label, Some(label)) => &label.attributes,
			_ => &self.rule.attributes,
		}
	}
}

/// Finds the output layers a source feature belongs to.
#[derive(Debug, Clone)]
pub struct LayerClassifier<'a> {
	rules: &'a [LayerRule],
}

impl<'a> LayerClassifier<'a> {
	pub fn new(rules: &'a [LayerRule]) -> Self {
		Self { rules }
	}

	/// Returns the primary match (first matching rule in table order), followed by a
	/// label match when that rule defines a label layer. Returns nothing when no rule matches.
	pub fn classify(&self, feature: &SourceFeature) -> Vec<LayerMatch<'a>> {
		let Some(rule) = self.rules.iter().find(|rule| rule.matches(feature)) else {
			trace!(
				"no rule for feature from {}/{} ({})",
				feature.source,
				feature.source_layer.as_deref().unwrap_or("-"),
				feature.geometry.get_type_name()
			);
			return Vec::new();
		};

		let mut matches = vec![LayerMatch {
			rule,
			role: MatchRole::Primary,
		}];
		if rule.label.is_some() {
			matches.push(LayerMatch {
				rule,
				role: MatchRole::Label,
			});
		}
		matches
	}
}
