use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod endpoint;
mod grid;
mod search;

use endpoint::EndpointSection;
use grid::GridSection;
use search::SearchSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	endpoint: EndpointSection,
	search: SearchSection,
	grid: GridSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.endpoint.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.grid.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let location = cli.command.location();
		let sources = ConfigSources {
			endpoint_base_url: detect_source(
				cli.base_url.is_some(),
				self.endpoint.base_url.is_some(),
				"PHOTOGRID__ENDPOINT__BASE_URL",
				"--base-url",
				"endpoint.base_url",
			),
			endpoint_timeout: detect_source(
				cli.timeout.is_some(),
				self.endpoint.timeout_secs.is_some(),
				"PHOTOGRID__ENDPOINT__TIMEOUT_SECS",
				"--timeout",
				"endpoint.timeout_secs",
			),
			search_lat: detect_source(
				location.lat.is_some(),
				self.search.lat.is_some(),
				"PHOTOGRID__SEARCH__LAT",
				"--lat",
				"search.lat",
			),
			search_lng: detect_source(
				location.lng.is_some(),
				self.search.lng.is_some(),
				"PHOTOGRID__SEARCH__LNG",
				"--lng",
				"search.lng",
			),
			grid_tile_height: detect_source(
				false,
				self.grid.tile_height.is_some(),
				"PHOTOGRID__GRID__TILE_HEIGHT",
				"",
				"grid.tile_height",
			),
		};

		let config = ResolvedConfig {
			endpoint: self.endpoint.resolve(),
			fields: self.search.resolve()?,
			grid: self.grid.resolve(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
