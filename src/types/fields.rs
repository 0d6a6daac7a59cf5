use super::{GeoPoint, ItemId, RangeChoice};

/// Current values of the search form.
///
/// The controller owns one of these and reads it whenever it builds a query,
/// so embedders update it as the user edits the page rather than passing
/// values per request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFields {
	pub text: String,
	pub location: Option<GeoPoint>,
	pub range: RangeChoice,
	pub category: String,
	pub hidden_ids: Vec<ItemId>,
}

impl SearchFields {
	#[must_use]
	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.text = text.into();
		self
	}

	#[must_use]
	pub fn with_location(mut self, location: GeoPoint) -> Self {
		self.location = Some(location);
		self
	}

	#[must_use]
	pub fn with_range(mut self, range: RangeChoice) -> Self {
		self.range = range;
		self
	}

	#[must_use]
	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.category = category.into();
		self
	}

	#[must_use]
	pub fn with_hidden_ids<I, S>(mut self, ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<ItemId>,
	{
		self.hidden_ids = ids.into_iter().map(Into::into).collect();
		self
	}
}
