use std::time::Duration;

use photogrid::SearchFields;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub endpoint: EndpointSettings,
	pub fields: SearchFields,
	pub grid: GridSettings,
}

#[derive(Debug, Clone)]
pub struct EndpointSettings {
	pub base_url: String,
	pub search_path: String,
	pub export_path: String,
	pub timeout: Duration,
}

/// How the console grid lays out and paginates results.
#[derive(Debug, Clone)]
pub struct GridSettings {
	pub item_class: String,
	pub tile_height: f64,
	/// Scroll continuations to request after the fresh search.
	pub pages: u32,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
