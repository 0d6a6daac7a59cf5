use photogrid::transport::resource_url;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let invalid = |key: &'static str, value: String, reason: &str| {
		ConfigError::invalid(key, value, sources.source_for(key), reason)
	};

	if config.endpoint.timeout.is_zero() {
		return Err(invalid(
			"endpoint.timeout_secs",
			config.endpoint.timeout.as_secs().to_string(),
			"must be greater than zero",
		));
	}

	if let Err(err) = resource_url(&config.endpoint.base_url, &config.endpoint.search_path) {
		return Err(invalid(
			"endpoint.base_url",
			config.endpoint.base_url.clone(),
			&err.to_string(),
		));
	}

	let tile_height = config.grid.tile_height;
	if !tile_height.is_finite() || tile_height <= 0.0 {
		return Err(invalid(
			"grid.tile_height",
			tile_height.to_string(),
			"must be a positive number",
		));
	}

	if let Some(point) = config.fields.location {
		if !(-90.0..=90.0).contains(&point.lat) {
			return Err(invalid(
				"search.lat",
				point.lat.to_string(),
				"must be between -90 and 90",
			));
		}
		if !(-180.0..=180.0).contains(&point.lng) {
			return Err(invalid(
				"search.lng",
				point.lng.to_string(),
				"must be between -180 and 180",
			));
		}
	}

	Ok(())
}
