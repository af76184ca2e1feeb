mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

/// Layer rules, label points and parcel merging for the national boundaries vector tiles.
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Show the layer rules
	Rules(tools::rules::Subcommand),

	/// Assign source features to output layers and render them for one zoom level
	Classify(tools::classify::Subcommand),

	/// Merge the polygons of one tile
	Merge(tools::merge::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
	match &cli.command {
		Commands::Rules(arguments) => tools::rules::run(arguments),
		Commands::Classify(arguments) => tools::classify::run(arguments),
		Commands::Merge(arguments) => tools::merge::run(arguments),
	}
}
