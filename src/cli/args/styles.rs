use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use photogrid::app_dirs;

/// Version banner naming the directories configuration is read from.
pub(super) fn long_version() -> &'static str {
	let banner = version_banner(app_dirs::get_config_dir(), app_dirs::get_data_dir());
	Box::leak(banner.into_boxed_str())
}

fn version_banner(config_dir: anyhow::Result<PathBuf>, data_dir: anyhow::Result<PathBuf>) -> String {
	let describe = |dir: anyhow::Result<PathBuf>| match dir {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	format!(
		"photogrid {}\nconfig directory: {}\ndata directory: {}\nlog filter: ${}\n",
		env!("CARGO_PKG_VERSION"),
		describe(config_dir),
		describe(data_dir),
		photogrid::logging::LOG_ENV,
	)
}

pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
