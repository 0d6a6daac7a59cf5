//! Exporting the current selection to the photographers page.
//!
//! Unlike searches, the export leaves the page: the form is submitted by a
//! full navigation, so it never passes through the search worker.

use serde::Serialize;
use thiserror::Error;

use crate::selection::SelectionTracker;
use crate::types::SearchFields;

/// Errors raised while submitting the export form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
	#[error("export request failed: {0}")]
	Transport(String),

	#[error("export endpoint answered with status {status}")]
	Status { status: u16 },
}

/// The synthetic form posted to the export page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportForm {
	/// Selected ids joined with commas, in selection order.
	pub ids: String,
	pub range: String,
	pub lng: String,
	pub lat: String,
}

impl ExportForm {
	#[must_use]
	pub fn from_selection(selection: &SelectionTracker, fields: &SearchFields) -> Self {
		let ids = selection
			.ids()
			.iter()
			.map(|id| id.as_str())
			.collect::<Vec<_>>()
			.join(",");
		let (lat, lng) = match fields.location {
			Some(point) => (point.lat.to_string(), point.lng.to_string()),
			None => (String::new(), String::new()),
		};

		Self {
			ids,
			range: fields.range.export_range.clone(),
			lng,
			lat,
		}
	}

	#[must_use]
	pub fn form_pairs(&self) -> [(&'static str, &str); 4] {
		[
			("ids", self.ids.as_str()),
			("range", self.range.as_str()),
			("lng", self.lng.as_str()),
			("lat", self.lat.as_str()),
		]
	}
}

/// Performs the full-page navigation that submits an [`ExportForm`].
pub trait Navigator {
	type Output;

	fn submit(&mut self, form: &ExportForm) -> Result<Self::Output, ExportError>;
}
