pub mod classify;
pub mod merge;
pub mod rules;

use anyhow::Result;
use boundaries_profile::{Profile, ProfileConfig};
use std::path::Path;

/// Loads the rule table from `path`, or the built-in one.
pub fn load_profile(path: Option<&Path>) -> Result<Profile> {
	let config = match path {
		Some(path) => ProfileConfig::from_path(path)?,
		None => ProfileConfig::builtin()?,
	};
	log::debug!("loaded {} layer rules", config.layers.len());
	Profile::new(config)
}
