use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use photogrid::view::ConsoleSnapshot;
use photogrid::{
	ConsoleGrid, ExportForm, FragmentParser, FreshTrigger, HttpEndpoint, HttpNavigator, ItemId,
	NavigationPage, PaginationState, ScrollSearchController, SearchQuery,
};

use crate::settings::{EndpointSettings, GridSettings, ResolvedConfig};

/// Grace period on top of the request timeout before giving up on the worker.
const WAIT_MARGIN: Duration = Duration::from_secs(5);

/// What a `search` run left on the page.
#[derive(Debug, Serialize)]
pub(crate) struct SearchReport {
	pub(crate) query: SearchQuery,
	pub(crate) pagination: PaginationState,
	/// Scroll continuations that returned before the grid stopped growing.
	pub(crate) continuations: u32,
	pub(crate) grid: ConsoleSnapshot,
}

/// What an `export` run submitted and where it landed.
#[derive(Debug, Serialize)]
pub(crate) struct ExportReport {
	pub(crate) form: ExportForm,
	pub(crate) page: Option<NavigationPage>,
}

/// Drives a [`ScrollSearchController`] over a console grid.
pub(crate) struct SearchWorkflow {
	controller: ScrollSearchController<ConsoleGrid>,
	endpoint: EndpointSettings,
	grid: GridSettings,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			endpoint,
			fields,
			grid,
		} = config;

		let http = HttpEndpoint::new(&endpoint.base_url, &endpoint.search_path, endpoint.timeout)
			.context("failed to set up the search endpoint")?;
		info!(url = %http.url(), "search endpoint ready");

		let recenter = || debug!("no map attached, skipping recenter");
		let controller = ScrollSearchController::new(ConsoleGrid::new(grid.tile_height), http, recenter)
			.with_fields(fields)
			.with_parser(FragmentParser::new(grid.item_class.clone()));

		Ok(Self {
			controller,
			endpoint,
			grid,
		})
	}

	/// Run a fresh search, then scroll to the bottom until the configured
	/// number of continuations has loaded or the grid stops growing.
	pub(crate) fn run_search(mut self) -> Result<SearchReport> {
		let query = SearchQuery::from_fields(self.controller.fields(), 0);
		if self.controller.fresh_search(FreshTrigger::Submit).is_none() {
			warn!("fresh search was not issued");
		}
		self.wait();

		let mut continuations = 0;
		while continuations < self.grid.pages {
			let position = self.controller.view().scrolled_to_end();
			if self.controller.on_scroll(position).is_none() {
				debug!(continuations, "grid stopped growing");
				break;
			}
			if !self.wait() {
				break;
			}
			continuations += 1;
		}

		Ok(SearchReport {
			query,
			pagination: *self.controller.pagination(),
			continuations,
			grid: self.controller.view().snapshot(),
		})
	}

	/// Select `ids` in order and submit them to the export page.
	pub(crate) fn run_export(mut self, ids: Vec<String>) -> Result<ExportReport> {
		for id in ids {
			self.controller.toggle_item(Some(ItemId::new(id)));
		}

		let form = ExportForm::from_selection(self.controller.selection(), self.controller.fields());
		let mut navigator = HttpNavigator::new(
			&self.endpoint.base_url,
			&self.endpoint.export_path,
			self.endpoint.timeout,
		)
		.context("failed to set up the export endpoint")?;
		let page = self
			.controller
			.export_selection(&mut navigator)
			.context("export failed")?;
		if page.is_none() {
			warn!("selection is empty, nothing exported");
		}

		Ok(ExportReport { form, page })
	}

	fn wait(&mut self) -> bool {
		let applied = self
			.controller
			.wait_for_response(self.endpoint.timeout + WAIT_MARGIN);
		if !applied {
			warn!("no response from the search worker");
		}
		applied
	}
}
