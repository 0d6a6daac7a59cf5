use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;
use photogrid::app_dirs;

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("photogrid")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("search.hidden_ids"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".photogrid.toml"));
		files.push(current_dir.join("photogrid.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".photogrid.toml")));
		assert!(files.iter().any(|path| path.ends_with("photogrid.toml")));
	}

	#[test]
	fn explicit_config_file_is_merged() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("custom.toml");
		fs::write(
			&path,
			"[endpoint]\nbase_url = \"https://photos.example\"\n\n[grid]\npages = 3\n",
		)
		.expect("write config");

		let cli = CliArgs::parse_from([
			"photogrid",
			"--no-config",
			"--config",
			path.to_str().expect("utf8 path"),
			"search",
		]);
		let config = build_config(&cli).expect("config builds");

		assert_eq!(
			config.get_string("endpoint.base_url").expect("base url"),
			"https://photos.example"
		);
		assert_eq!(config.get_int("grid.pages").expect("pages"), 3);
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from([
			"photogrid",
			"--no-config",
			"--config",
			path.to_str().expect("utf8 path"),
			"search",
		]);

		assert!(build_config(&cli).is_err());
	}
}
