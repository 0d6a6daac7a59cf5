use thiserror::Error;

/// Reasons a search request produced no usable response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
	/// The request never completed: connection, timeout, or body read failure.
	#[error("search request failed: {0}")]
	Transport(String),

	/// The endpoint answered with a non-success status.
	#[error("search endpoint answered with status {status}")]
	Status { status: u16 },

	/// The endpoint address could not be built from configuration.
	#[error("invalid search endpoint url '{url}': {reason}")]
	InvalidUrl { url: String, reason: String },

	/// The background worker has shut down.
	#[error("search worker is no longer running")]
	WorkerGone,
}
