use serde::Deserialize;

use photogrid::search::DEFAULT_ITEM_CLASS;

use crate::cli::{CliArgs, Command};

use super::super::resolved::GridSettings;
use super::super::util::non_blank;

pub(super) const DEFAULT_TILE_HEIGHT: f64 = 300.0;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct GridSection {
	pub(super) item_class: Option<String>,
	pub(super) tile_height: Option<f64>,
	pub(super) pages: Option<u32>,
}

impl GridSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Command::Search(args) = &cli.command
			&& let Some(value) = args.pages
		{
			self.pages = Some(value);
		}
	}

	pub(super) fn resolve(self) -> GridSettings {
		GridSettings {
			item_class: non_blank(self.item_class)
				.unwrap_or_else(|| DEFAULT_ITEM_CLASS.to_string()),
			tile_height: self.tile_height.unwrap_or(DEFAULT_TILE_HEIGHT),
			pages: self.pages.unwrap_or(0),
		}
	}
}
