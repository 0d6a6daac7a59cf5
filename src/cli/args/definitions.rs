use std::path::PathBuf;

use clap::{ArgAction, Args, ColorChoice, Parser, Subcommand};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `photogrid` binary.
#[derive(Parser, Debug)]
#[command(
	name = "photogrid",
	version,
	long_version = long_version(),
	about = "Browse a photo search endpoint page by page and export selections",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PHOTOGRID_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		global = true,
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		global = true,
		help = "Increase log verbosity, repeat for more (default: warnings only)"
	)]
	pub(crate) verbose: u8,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		global = true,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'b',
		long = "base-url",
		value_name = "URL",
		global = true,
		help = "Base url of the photo site (default: http://localhost:8000)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long = "timeout",
		value_name = "SECONDS",
		global = true,
		help = "Request timeout in seconds (default: 30)"
	)]
	pub(crate) timeout: Option<u64>,
	#[command(subcommand)]
	pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
	/// Run a fresh search, then keep scrolling for more pages.
	Search(SearchArgs),
	/// Select photos by id and submit them to the photographers page.
	Export(ExportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Place name typed into the search box (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long,
		value_name = "SLUG",
		help = "Restrict results to a category (default: all categories)"
	)]
	pub(crate) category: Option<String>,
	#[arg(
		long = "hide",
		value_delimiter = ',',
		value_name = "ID",
		help = "Comma-separated photo ids to exclude (default: none)"
	)]
	pub(crate) hide: Option<Vec<String>>,
	#[arg(
		short = 'P',
		long,
		value_name = "NUM",
		help = "Scroll continuations to fetch after the first page (default: 0)"
	)]
	pub(crate) pages: Option<u32>,
	#[command(flatten)]
	pub(crate) location: LocationArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
	#[arg(
		value_delimiter = ',',
		value_name = "ID",
		required = true,
		help = "Comma-separated photo ids to export"
	)]
	pub(crate) ids: Vec<String>,
	#[command(flatten)]
	pub(crate) location: LocationArgs,
}

/// Location and radius shared by every subcommand.
#[derive(Args, Debug, Default)]
pub(crate) struct LocationArgs {
	#[arg(
		long,
		value_name = "DEG",
		allow_hyphen_values = true,
		help = "Latitude of the searched place (default: none)"
	)]
	pub(crate) lat: Option<f64>,
	#[arg(
		long,
		value_name = "DEG",
		allow_hyphen_values = true,
		help = "Longitude of the searched place (default: none)"
	)]
	pub(crate) lng: Option<f64>,
	#[arg(
		short = 'r',
		long,
		value_name = "KM",
		help = "Search radius sent to the endpoint (default: endpoint default)"
	)]
	pub(crate) range: Option<String>,
	#[arg(
		long = "export-range",
		value_name = "VALUE",
		help = "Radius sent with exports (default: same as --range)"
	)]
	pub(crate) export_range: Option<String>,
}

impl Command {
	pub(crate) fn location(&self) -> &LocationArgs {
		match self {
			Command::Search(args) => &args.location,
			Command::Export(args) => &args.location,
		}
	}
}
