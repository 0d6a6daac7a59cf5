use super::{SearchError, SearchQuery};

/// How a response is merged into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
	/// Fresh search: the response replaces the grid.
	Replace,
	/// Scroll continuation: the response is appended.
	Append,
}

/// Commands understood by the background search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
	/// Send `query` to the endpoint.
	Query {
		/// Generation id that lets the controller match the response to its request.
		id: u64,
		query: SearchQuery,
		mode: FetchMode,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Raw endpoint response sent back to the controller.
#[derive(Debug)]
pub(crate) struct SearchResponse {
	/// Identifier matching the [`SearchCommand::Query`] that produced the response.
	pub(crate) id: u64,
	pub(crate) mode: FetchMode,
	pub(crate) body: Result<String, SearchError>,
}
