use super::{SearchError, SearchQuery};

/// Anything that can answer a search query with a response body.
///
/// Implementations block; the controller only ever calls them from its
/// background worker thread.
pub trait SearchEndpoint: Send {
	fn fetch(&self, query: &SearchQuery) -> Result<String, SearchError>;
}

impl<F> SearchEndpoint for F
where
	F: Fn(&SearchQuery) -> Result<String, SearchError> + Send,
{
	fn fetch(&self, query: &SearchQuery) -> Result<String, SearchError> {
		self(query)
	}
}
