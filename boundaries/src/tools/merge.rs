use super::load_profile;
use anyhow::{Context, Result, ensure};
use boundaries_geometry::{GeoCollection, read_geojson};
use std::{fs::File, io::BufReader, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON FeatureCollection with the features of one tile, in tile pixel coordinates
	#[arg(required = true)]
	input: PathBuf,

	/// zoom level of the tile
	#[arg(long, short)]
	zoom: u8,

	/// output layer whose merge rule applies
	#[arg(long, short, default_value = "parcels")]
	layer: String,

	/// YAML rule table, defaults to the built-in one
	#[arg(long, short)]
	config: Option<PathBuf>,

	/// number of decimal places in the output coordinates
	#[arg(long)]
	precision: Option<u8>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let profile = load_profile(arguments.config.as_deref())?;
	let layer = arguments.layer.as_str();
	ensure!(profile.has_post_process(layer), "layer '{layer}' has no merge rule");

	let file = File::open(&arguments.input).with_context(|| format!("opening {:?}", arguments.input))?;
	let collection = read_geojson(BufReader::new(file)).with_context(|| format!("reading {:?}", arguments.input))?;
	let count = collection.features.len();

	let merged = profile.post_process(layer, arguments.zoom, collection.features)?;
	log::info!("merged {count} features into {} at zoom {}", merged.len(), arguments.zoom);

	println!("{}", GeoCollection::from(merged).to_json(arguments.precision));
	Ok(())
}
