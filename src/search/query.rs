use serde::Serialize;

use crate::types::{GeoPoint, ItemId, SearchFields};

/// One request to the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
	pub text: String,
	pub geo_range: String,
	pub location: Option<GeoPoint>,
	pub category: String,
	pub excluded_ids: Vec<ItemId>,
	pub page: u32,
}

impl SearchQuery {
	/// Build a query from the current form values.
	///
	/// An empty query text always requests page 0.
	#[must_use]
	pub fn from_fields(fields: &SearchFields, current_page: u32) -> Self {
		let page = if fields.text.is_empty() { 0 } else { current_page };
		Self {
			text: fields.text.clone(),
			geo_range: fields.range.value.clone(),
			location: fields.location,
			category: fields.category.clone(),
			excluded_ids: fields.hidden_ids.clone(),
			page,
		}
	}

	/// Encode the query as the form fields the endpoint expects.
	///
	/// Nested values use bracket notation (`geo[lat]`, `hidden_ids[]`). A
	/// missing location is sent as empty coordinates.
	#[must_use]
	pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
		let (lat, lng) = match self.location {
			Some(point) => (point.lat.to_string(), point.lng.to_string()),
			None => (String::new(), String::new()),
		};

		let mut pairs = vec![
			("query_string", self.text.clone()),
			("geo[range]", self.geo_range.clone()),
			("geo[lng]", lng),
			("geo[lat]", lat),
			("geo[name]", self.text.clone()),
		];
		pairs.extend(
			self.excluded_ids
				.iter()
				.map(|id| ("hidden_ids[]", id.as_str().to_string())),
		);
		pairs.push(("category", self.category.clone()));
		pairs.push(("page", self.page.to_string()));
		pairs
	}
}
