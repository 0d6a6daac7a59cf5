use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, warn};

use super::commands::{SearchCommand, SearchResponse};
use super::SearchEndpoint;

/// Launches the background search worker thread and returns communication channels.
pub(crate) fn spawn(
	endpoint: Box<dyn SearchEndpoint>,
) -> (
	Sender<SearchCommand>,
	Receiver<SearchResponse>,
	Arc<AtomicU64>,
) {
	let (command_tx, command_rx) = mpsc::channel();
	let (response_tx, response_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(endpoint, command_rx, response_tx, thread_latest));

	(command_tx, response_rx, latest_query_id)
}

fn worker_loop(
	endpoint: Box<dyn SearchEndpoint>,
	command_rx: Receiver<SearchCommand>,
	response_tx: Sender<SearchResponse>,
	latest_query_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(endpoint.as_ref(), &response_tx, &latest_query_id, command) {
			break;
		}
	}
}

fn handle_command(
	endpoint: &dyn SearchEndpoint,
	response_tx: &Sender<SearchResponse>,
	latest_query_id: &AtomicU64,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query { id, query, mode } => {
			if is_superseded(id, latest_query_id) {
				debug!(id, "skipping superseded search request");
				return true;
			}

			let body = endpoint.fetch(&query);
			if let Err(error) = &body {
				warn!(id, page = query.page, %error, "search request failed");
			}
			response_tx.send(SearchResponse { id, mode, body }).is_ok()
		}
		SearchCommand::Shutdown => false,
	}
}

fn is_superseded(id: u64, latest_query_id: &AtomicU64) -> bool {
	latest_query_id.load(AtomicOrdering::Acquire) != id
}
