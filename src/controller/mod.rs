//! Pagination-aware search controller for the infinite-scroll grid.
//!
//! [`ScrollSearchController`] owns every piece of page state the grid needs:
//! the form values, the page counter, the selection, and the generation id
//! of the request in flight. Embedders forward page events to it (form
//! submits, filter changes, scrolls, item clicks) and call
//! [`ScrollSearchController::pump_responses`] from their event loop to apply
//! whatever the search worker has answered since.

mod trigger;

use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::Duration;

use tracing::{debug, trace, warn};

pub use trigger::{ControllerState, FreshTrigger};

use crate::export::{ExportError, ExportForm, Navigator};
use crate::recenter::Recenter;
use crate::search::{
	FetchMode, FragmentParser, PaginationState, ResultFragment, ScrollPosition, SearchEndpoint,
	SearchError, SearchOutcome, SearchQuery, SearchResponse, SearchRuntime,
};
use crate::selection::SelectionTracker;
use crate::types::{ItemId, SearchFields};
use crate::view::{Control, ControlStates, PageView};

/// Drives fresh searches, scroll continuations and selection for one page view.
pub struct ScrollSearchController<V: PageView> {
	fields: SearchFields,
	pagination: PaginationState,
	/// Pagination before the last scroll continuation, kept until it resolves.
	rollback: Option<PaginationState>,
	selection: SelectionTracker,
	controls: ControlStates,
	parser: FragmentParser,
	recenter: Box<dyn Recenter>,
	search: SearchRuntime,
	view: V,
}

impl<V: PageView> ScrollSearchController<V> {
	/// Build a controller with empty form values and an empty selection.
	///
	/// The view is synchronised with the initial selection immediately, so
	/// action controls start out disabled.
	pub fn new<E, R>(view: V, endpoint: E, recenter: R) -> Self
	where
		E: SearchEndpoint + 'static,
		R: Recenter + 'static,
	{
		let mut controller = Self {
			fields: SearchFields::default(),
			pagination: PaginationState::default(),
			rollback: None,
			selection: SelectionTracker::new(),
			controls: ControlStates::default(),
			parser: FragmentParser::default(),
			recenter: Box::new(recenter),
			search: SearchRuntime::spawn(Box::new(endpoint)),
			view,
		};
		controller.selection.refresh(&mut controller.view);
		controller
	}

	#[must_use]
	pub fn with_fields(mut self, fields: SearchFields) -> Self {
		self.fields = fields;
		self
	}

	#[must_use]
	pub fn with_pagination(mut self, pagination: PaginationState) -> Self {
		self.pagination = pagination;
		self
	}

	#[must_use]
	pub fn with_parser(mut self, parser: FragmentParser) -> Self {
		self.parser = parser;
		self
	}

	pub fn fields(&self) -> &SearchFields {
		&self.fields
	}

	/// Form values, for the embedder to update as the user edits the page.
	pub fn fields_mut(&mut self) -> &mut SearchFields {
		&mut self.fields
	}

	pub fn pagination(&self) -> &PaginationState {
		&self.pagination
	}

	pub fn selection(&self) -> &SelectionTracker {
		&self.selection
	}

	pub fn controls_mut(&mut self) -> &mut ControlStates {
		&mut self.controls
	}

	pub fn view(&self) -> &V {
		&self.view
	}

	pub fn view_mut(&mut self) -> &mut V {
		&mut self.view
	}

	pub fn state(&self) -> ControllerState {
		if self.search.is_in_flight() {
			ControllerState::Fetching
		} else {
			ControllerState::Idle
		}
	}

	/// Whether `control` currently carries a disabled marker.
	///
	/// The export control is also disabled whenever the selection is empty.
	pub fn is_disabled(&self, control: Control) -> bool {
		let explicit = self.controls.is_disabled(control);
		match control {
			Control::Export => explicit || !self.selection.actions_enabled(),
			_ => explicit,
		}
	}

	/// Toggle an item's selection, or clear the selection with `None`.
	pub fn toggle_item(&mut self, id: Option<ItemId>) {
		self.selection.toggle(id, &mut self.view);
	}

	/// Start a new search from page 0, replacing the grid on response.
	///
	/// Returns the generation id of the issued request, or `None` when the
	/// originating control is disabled.
	pub fn fresh_search(&mut self, trigger: FreshTrigger) -> Option<u64> {
		if self.is_disabled(trigger.control()) {
			debug!(?trigger, "ignoring fresh search from disabled control");
			return None;
		}

		self.pagination.reset();
		self.rollback = None;
		self.recenter.recenter();
		self.toggle_item(None);

		let query = SearchQuery::from_fields(&self.fields, self.pagination.current_page());
		self.issue(query, FetchMode::Replace)
	}

	/// Fetch the next page when the scroll offset passes the trigger point.
	///
	/// Continuations are suppressed while the search button is disabled or a
	/// request is still in flight.
	pub fn on_scroll(&mut self, position: ScrollPosition) -> Option<u64> {
		if self.is_disabled(Control::SearchButton) {
			return None;
		}
		if self.search.is_in_flight() {
			trace!(offset = position.offset, "scroll ignored while fetching");
			return None;
		}
		if !self.pagination.should_continue(position) {
			trace!(
				offset = position.offset,
				threshold = self.pagination.threshold(position.document_height),
				"scroll below trigger point"
			);
			return None;
		}

		self.rollback = Some(self.pagination.advance(position.offset));
		let query = SearchQuery::from_fields(&self.fields, self.pagination.current_page());
		self.issue(query, FetchMode::Append)
	}

	/// Apply every response the worker has produced so far.
	///
	/// Returns how many responses were applied; stale ones are dropped.
	pub fn pump_responses(&mut self) -> usize {
		let mut applied = 0;
		loop {
			match self.search.try_recv() {
				Ok(response) => {
					if self.handle_response(response) {
						applied += 1;
					}
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					self.handle_disconnect();
					break;
				}
			}
		}
		applied
	}

	/// Block until the current request resolves or `timeout` elapses.
	///
	/// Returns `true` once a current response was applied. Stale responses
	/// received while waiting are dropped without ending the wait.
	pub fn wait_for_response(&mut self, timeout: Duration) -> bool {
		while self.search.is_in_flight() {
			match self.search.recv_timeout(timeout) {
				Ok(response) => {
					if self.handle_response(response) {
						return true;
					}
				}
				Err(RecvTimeoutError::Timeout) => return false,
				Err(RecvTimeoutError::Disconnected) => {
					self.handle_disconnect();
					return false;
				}
			}
		}
		false
	}

	/// Submit the selection to `navigator`.
	///
	/// Returns `Ok(None)` without navigating while the export control is
	/// disabled.
	pub fn export_selection<N>(&self, navigator: &mut N) -> Result<Option<N::Output>, ExportError>
	where
		N: Navigator,
	{
		if self.is_disabled(Control::Export) {
			debug!("ignoring export with empty selection");
			return Ok(None);
		}

		let form = ExportForm::from_selection(&self.selection, &self.fields);
		navigator.submit(&form).map(Some)
	}

	/// Hand the view back, stopping the search worker.
	pub fn into_view(self) -> V {
		self.view
	}

	fn issue(&mut self, query: SearchQuery, mode: FetchMode) -> Option<u64> {
		match self.search.issue(query, mode) {
			Ok(id) => Some(id),
			Err(error) => {
				self.apply_outcome(mode, SearchOutcome::Failed(error));
				None
			}
		}
	}

	fn handle_response(&mut self, response: SearchResponse) -> bool {
		if !self.search.matches_latest(response.id) {
			debug!(id = response.id, "dropping stale search response");
			return false;
		}

		self.search.record_completion();
		let outcome = SearchOutcome::from_response(response.body, &self.parser);
		self.apply_outcome(response.mode, outcome);
		true
	}

	/// The worker is gone, so the pending request will never resolve.
	fn handle_disconnect(&mut self) {
		if let Some(mode) = self.search.record_completion() {
			warn!(?mode, "search worker stopped with a request pending");
			self.apply_failure(mode, &SearchError::WorkerGone);
		}
	}

	fn apply_outcome(&mut self, mode: FetchMode, outcome: SearchOutcome) {
		let outcome = match outcome {
			SearchOutcome::Failed(error) => {
				self.apply_failure(mode, &error);
				return;
			}
			other => other,
		};

		self.rollback = None;
		self.view.set_failure(None);
		let fragments = match (mode, outcome) {
			(FetchMode::Replace, SearchOutcome::Batch(batch)) => {
				self.view.clear_grid();
				self.view.set_error_visible(false);
				self.view.set_total_visible(true);
				if let Some(total) = batch.total() {
					self.view.display_total(total);
				}
				batch.into_fragments()
			}
			(FetchMode::Replace, _) => {
				self.view.clear_grid();
				self.view.set_error_visible(true);
				self.view.set_total_visible(false);
				Vec::new()
			}
			(FetchMode::Append, SearchOutcome::Batch(batch)) => batch.into_fragments(),
			(FetchMode::Append, _) => Vec::new(),
		};
		self.render(fragments);
	}

	fn apply_failure(&mut self, mode: FetchMode, error: &SearchError) {
		if mode == FetchMode::Append
			&& let Some(previous) = self.rollback.take()
		{
			self.pagination = previous;
		}
		self.view.set_failure(Some(error));
	}

	fn render(&mut self, fragments: Vec<ResultFragment>) {
		self.view.append(fragments);
		self.view.relayout();
		self.view.relayout_after_images();
	}
}

#[cfg(test)]
mod tests;
