use std::time::Duration;

use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::resolved::EndpointSettings;
use super::super::util::non_blank;

pub(super) const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub(super) const DEFAULT_SEARCH_PATH: &str = "/partial_photos/";
pub(super) const DEFAULT_EXPORT_PATH: &str = "/photographers/";
pub(super) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the search and export endpoints live.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct EndpointSection {
	pub(super) base_url: Option<String>,
	pub(super) search_path: Option<String>,
	pub(super) export_path: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

impl EndpointSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.base_url.clone() {
			self.base_url = Some(value);
		}
		if let Some(value) = cli.timeout {
			self.timeout_secs = Some(value);
		}
	}

	pub(super) fn resolve(self) -> EndpointSettings {
		EndpointSettings {
			base_url: non_blank(self.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			search_path: non_blank(self.search_path)
				.unwrap_or_else(|| DEFAULT_SEARCH_PATH.to_string()),
			export_path: non_blank(self.export_path)
				.unwrap_or_else(|| DEFAULT_EXPORT_PATH.to_string()),
			timeout: Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
		}
	}
}
