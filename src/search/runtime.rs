use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use tracing::debug;

use super::commands::{FetchMode, SearchCommand, SearchResponse};
use super::{SearchEndpoint, SearchError, SearchQuery, worker};

/// Controller-side handle on the search worker.
///
/// Every issued request gets a fresh generation id. Only the response to the
/// most recently issued request is considered current; anything older is
/// stale by definition.
pub(crate) struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResponse>,
	latest_query_id: Arc<AtomicU64>,
	next_query_id: u64,
	current_query_id: Option<u64>,
	/// Mode of the request still awaiting its response.
	in_flight: Option<FetchMode>,
}

impl SearchRuntime {
	pub(crate) fn spawn(endpoint: Box<dyn SearchEndpoint>) -> Self {
		let (tx, rx, latest_query_id) = worker::spawn(endpoint);
		Self {
			tx,
			rx,
			latest_query_id,
			next_query_id: 0,
			current_query_id: None,
			in_flight: None,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}

	pub(crate) fn issue(&mut self, query: SearchQuery, mode: FetchMode) -> Result<u64, SearchError> {
		self.next_query_id = self.next_query_id.saturating_add(1);
		let id = self.next_query_id;
		debug!(id, page = query.page, ?mode, "issuing search request");

		self.current_query_id = Some(id);
		self.latest_query_id.store(id, AtomicOrdering::Release);
		self.tx
			.send(SearchCommand::Query { id, query, mode })
			.map_err(|_| SearchError::WorkerGone)?;
		self.in_flight = Some(mode);
		Ok(id)
	}

	pub(crate) fn matches_latest(&self, response_id: u64) -> bool {
		Some(response_id) == self.current_query_id
	}

	/// Mark the current request as resolved, returning its mode if one was pending.
	pub(crate) fn record_completion(&mut self) -> Option<FetchMode> {
		self.in_flight.take()
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight.is_some()
	}

	pub(crate) fn try_recv(&mut self) -> Result<SearchResponse, TryRecvError> {
		self.rx.try_recv()
	}

	pub(crate) fn recv_timeout(
		&mut self,
		timeout: Duration,
	) -> Result<SearchResponse, RecvTimeoutError> {
		self.rx.recv_timeout(timeout)
	}
}

impl Drop for SearchRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}
