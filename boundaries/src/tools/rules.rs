use super::load_profile;
use anyhow::Result;
use boundaries_profile::{FieldRule, LayerRule, ProfileConfig};
use std::{fmt::Write, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// YAML rule table, defaults to the built-in one
	#[arg(long, short)]
	config: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let profile = load_profile(arguments.config.as_deref())?;
	print!("{}", describe(profile.config())?);
	Ok(())
}

fn describe(config: &ProfileConfig) -> Result<String> {
	let mut text = String::new();
	for rule in &config.layers {
		describe_rule(&mut text, rule)?;
	}
	Ok(text)
}

fn describe_rule(text: &mut String, rule: &LayerRule) -> Result<()> {
	write!(text, "{}", rule.layer)?;
	if let Some(description) = &rule.description {
		write!(text, ": {description}")?;
	}
	writeln!(text)?;

	let source = match &rule.source_layer {
		Some(layer) => format!("{}/{layer}", rule.source),
		None => rule.source.clone(),
	};
	writeln!(text, "  source:     {source} ({})", rule.geometry)?;
	if let Some(archive) = &rule.archive {
		writeln!(text, "  archive:    {archive}")?;
	}
	if let Some(min_zoom) = rule.min_zoom {
		writeln!(text, "  min zoom:   {min_zoom}")?;
	}
	if let Some(id_tag) = &rule.id_tag {
		writeln!(text, "  id:         {id_tag}")?;
	}
	writeln!(text, "  attributes: {}", describe_fields(&rule.attributes))?;
	if let Some(label) = &rule.label {
		writeln!(text, "  label:      {} [{}]", label.layer, describe_fields(&label.attributes))?;
	}
	if let Some(simplify) = &rule.simplify {
		writeln!(
			text,
			"  simplify:   {}px below zoom {}",
			simplify.tolerance, simplify.below_zoom
		)?;
	}
	if let Some(merge) = &rule.merge {
		writeln!(
			text,
			"  merge:      from zoom {}, buffer {}px, overlap {}",
			merge.zoom, merge.buffer, merge.min_overlap_ratio
		)?;
	}
	Ok(())
}

fn describe_fields(fields: &[FieldRule]) -> String {
	fields
		.iter()
		.map(|field| {
			let mut text = field.target.clone();
			if field.source_tag() != field.target {
				text.push_str(&format!("<-{}", field.source_tag()));
			}
			if let Some(min_zoom) = field.min_zoom {
				text.push_str(&format!("@{min_zoom}"));
			}
			if field.zero_as_null {
				text.push('?');
			}
			text
		})
		.collect::<Vec<_>>()
		.join(", ")
}
