use super::{FragmentParser, ResultFragment, SearchError};

/// Non-empty response: the fragments to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBatch {
	fragments: Vec<ResultFragment>,
}

impl ResultBatch {
	#[must_use]
	pub fn new(fragments: Vec<ResultFragment>) -> Self {
		Self { fragments }
	}

	/// Result total carried by the first fragment. Zero counts as absent.
	#[must_use]
	pub fn total(&self) -> Option<u64> {
		self.fragments
			.first()
			.and_then(|fragment| fragment.total)
			.filter(|total| *total > 0)
	}

	#[must_use]
	pub fn into_fragments(self) -> Vec<ResultFragment> {
		self.fragments
	}
}

/// What a completed search request means for the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
	Batch(ResultBatch),
	/// The endpoint answered with a blank body.
	Empty,
	Failed(SearchError),
}

impl SearchOutcome {
	/// Classify a raw endpoint response.
	#[must_use]
	pub fn from_response(response: Result<String, SearchError>, parser: &FragmentParser) -> Self {
		match response {
			Ok(body) => {
				let fragments = parser.parse(&body);
				if fragments.is_empty() {
					Self::Empty
				} else {
					Self::Batch(ResultBatch::new(fragments))
				}
			}
			Err(error) => Self::Failed(error),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn whitespace_body_is_empty() {
		let outcome = SearchOutcome::from_response(Ok("  \n ".into()), &FragmentParser::default());
		assert_eq!(outcome, SearchOutcome::Empty);
	}

	#[test]
	fn transport_errors_pass_through() {
		let error = SearchError::Status { status: 502 };
		let outcome = SearchOutcome::from_response(Err(error.clone()), &FragmentParser::default());
		assert_eq!(outcome, SearchOutcome::Failed(error));
	}

	#[test]
	fn zero_total_is_not_reported() {
		let batch = ResultBatch::new(vec![ResultFragment::new(
			r#"<div class="item" data-total="0"></div>"#,
		)]);
		assert_eq!(batch.total(), None);
	}
}
