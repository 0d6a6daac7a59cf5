use anyhow::{Result, ensure};
use serde::Deserialize;

use photogrid::{GeoPoint, RangeChoice, SearchFields};

use crate::cli::{CliArgs, Command};

use super::super::util::{non_blank, sanitize_ids};

/// Initial form values, as the page would be pre-filled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) query: Option<String>,
	pub(super) lat: Option<f64>,
	pub(super) lng: Option<f64>,
	pub(super) range: Option<String>,
	pub(super) export_range: Option<String>,
	pub(super) category: Option<String>,
	pub(super) hidden_ids: Option<Vec<String>>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		let location = cli.command.location();
		if let Some(value) = location.lat {
			self.lat = Some(value);
		}
		if let Some(value) = location.lng {
			self.lng = Some(value);
		}
		if let Some(value) = location.range.clone() {
			self.range = Some(value);
		}
		if let Some(value) = location.export_range.clone() {
			self.export_range = Some(value);
		}

		if let Command::Search(args) = &cli.command {
			if let Some(value) = args.query.clone() {
				self.query = Some(value);
			}
			if let Some(value) = args.category.clone() {
				self.category = Some(value);
			}
			if let Some(value) = &args.hide {
				self.hidden_ids = Some(value.clone());
			}
		}
	}

	pub(super) fn resolve(self) -> Result<SearchFields> {
		ensure!(
			self.lat.is_some() == self.lng.is_some(),
			"search.lat and search.lng must be set together"
		);

		let range_value = self.range.map(|value| value.trim().to_string()).unwrap_or_default();
		let mut range = RangeChoice::new(range_value);
		if let Some(export_range) = non_blank(self.export_range) {
			range = range.with_export_range(export_range);
		}

		let mut fields = SearchFields::default()
			.with_text(self.query.unwrap_or_default())
			.with_range(range)
			.with_category(non_blank(self.category).unwrap_or_default())
			.with_hidden_ids(sanitize_ids(self.hidden_ids.unwrap_or_default()));
		if let (Some(lat), Some(lng)) = (self.lat, self.lng) {
			fields = fields.with_location(GeoPoint::new(lat, lng));
		}

		Ok(fields)
	}
}
