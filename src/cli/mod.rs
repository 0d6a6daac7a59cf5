mod args;
mod output;

pub(crate) use args::{CliArgs, Command, OutputFormat, parse_cli};
pub(crate) use output::{Report, print_json, print_plain};
