use crate::{EmittedFeature, Profile, SourceFeature};
use anyhow::{Error, Result};
use boundaries_geometry::GeoFeature;
use futures::{Stream, StreamExt};
use std::sync::Arc;

/// Runs [`Profile::process_feature`] on the tokio runtime, one task per feature and
/// one task per CPU in flight. Results keep the order of the input.
pub fn process_feature_stream<S>(profile: Arc<Profile>, features: S) -> impl Stream<Item = Result<Vec<EmittedFeature>>>
where
	S: Stream<Item = SourceFeature>,
{
	features
		.map(move |feature| {
			let profile = Arc::clone(&profile);
			tokio::spawn(async move { profile.process_feature(&feature) })
		})
		.buffered(num_cpus::get())
		.map(|joined| match joined {
			Ok(result) => result,
			Err(e) => Err(Error::from(e)),
		})
}

/// Runs [`Profile::post_process`] for every tile of one layer, given as
/// `(zoom, features)`. Results keep the order of the input.
pub fn merge_tiles_stream<S>(
	profile: Arc<Profile>,
	layer: &str,
	tiles: S,
) -> impl Stream<Item = Result<Vec<GeoFeature>>> + use<S>
where
	S: Stream<Item = (u8, Vec<GeoFeature>)>,
{
	let layer: Arc<str> = Arc::from(layer);
	tiles
		.map(move |(zoom, features)| {
			let profile = Arc::clone(&profile);
			let layer = Arc::clone(&layer);
			tokio::spawn(async move { profile.post_process(&layer, zoom, features) })
		})
		.buffered(num_cpus::get())
		.map(|joined| match joined {
			Ok(result) => result,
			Err(e) => Err(Error::from(e)),
		})
}
