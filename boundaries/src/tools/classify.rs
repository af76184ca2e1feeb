use super::load_profile;
use anyhow::{Context, Result};
use boundaries_geometry::{GeoFeature, read_geojson, read_ndgeojson_stream};
use boundaries_profile::{SourceFeature, TileContext, process_feature_stream};
use futures::{StreamExt, TryStreamExt, stream};
use log::info;
use serde_json::Value;
use std::{
	fs::File,
	io::{BufReader, Write},
	path::{Path, PathBuf},
	sync::Arc,
};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file with source features.
	/// Files ending in .ndjson, .geojsonl or .geojsons are read as one feature per line.
	#[arg(required = true, verbatim_doc_comment)]
	input: PathBuf,

	/// source identifier of the features, e.g. "municipalities" or "boundaries"
	#[arg(long, short)]
	source: String,

	/// layer inside the source, e.g. "parcels"
	#[arg(long)]
	source_layer: Option<String>,

	/// zoom level to render
	#[arg(long, short, default_value_t = 14)]
	zoom: u8,

	/// tile pixels per source coordinate unit at this zoom level
	#[arg(long, default_value_t = 1.0)]
	pixels_per_unit: f64,

	/// YAML rule table, defaults to the built-in one
	#[arg(long, short)]
	config: Option<PathBuf>,

	/// number of decimal places in the output coordinates
	#[arg(long)]
	precision: Option<u8>,
}

fn is_line_delimited(path: &Path) -> bool {
	matches!(
		path.extension().and_then(|e| e.to_str()),
		Some("ndjson" | "geojsonl" | "geojsons")
	)
}

async fn read_features(path: &Path) -> Result<Vec<GeoFeature>> {
	let file = File::open(path).with_context(|| format!("opening {path:?}"))?;
	let features = if is_line_delimited(path) {
		read_ndgeojson_stream(BufReader::new(file)).try_collect::<Vec<_>>().await?
	} else {
		read_geojson(BufReader::new(file))?.features
	};
	Ok(features)
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let profile = Arc::new(load_profile(arguments.config.as_deref())?);
	let context = TileContext::new(arguments.zoom, arguments.pixels_per_unit);

	let features = read_features(&arguments.input)
		.await
		.with_context(|| format!("reading {:?}", arguments.input))?;
	info!("read {} features from {:?}", features.len(), arguments.input);

	let source = arguments.source.as_str();
	let source_layer = arguments.source_layer.as_deref();
	let sources = features
		.into_iter()
		.map(|feature| SourceFeature::from_geo_feature(source, source_layer, feature))
		.collect::<Vec<_>>();

	let mut results = process_feature_stream(profile, stream::iter(sources));
	let mut stdout = std::io::stdout().lock();
	let (mut unmatched, mut rendered) = (0usize, 0usize);

	while let Some(result) = results.next().await {
		let emitted = result?;
		if emitted.is_empty() {
			unmatched += 1;
		}
		for record in emitted {
			let Some(feature) = record.render(&context) else {
				continue;
			};
			let mut json = feature.to_json(arguments.precision);
			json["layer"] = Value::from(record.layer);
			writeln!(stdout, "{json}")?;
			rendered += 1;
		}
	}

	info!("rendered {rendered} features at zoom {}, {unmatched} source features matched no rule", context.zoom);
	Ok(())
}
