use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) endpoint_base_url: Option<SettingSource>,
	pub(crate) endpoint_timeout: Option<SettingSource>,
	pub(crate) search_lat: Option<SettingSource>,
	pub(crate) search_lng: Option<SettingSource>,
	pub(crate) grid_tile_height: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for(&self, key: &'static str) -> SettingSource {
		let recorded = match key {
			"endpoint.base_url" => &self.endpoint_base_url,
			"endpoint.timeout_secs" => &self.endpoint_timeout,
			"search.lat" => &self.search_lat,
			"search.lng" => &self.search_lng,
			"grid.tile_height" => &self.grid_tile_height,
			_ => &None,
		};
		recorded.clone().unwrap_or(SettingSource::ConfigKey(key))
	}
}
