mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{Command, OutputFormat, parse_cli, print_json, print_plain};
use photogrid::logging;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = SearchWorkflow::from_config(resolved)?;
	match cli.command {
		Command::Search(_) => emit(cli.output, &workflow.run_search()?),
		Command::Export(args) => emit(cli.output, &workflow.run_export(args.ids)?),
	}
}

/// Print the report in the chosen format.
fn emit(format: OutputFormat, report: &impl cli::Report) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(report),
		OutputFormat::Json => print_json(report)?,
	}

	Ok(())
}
