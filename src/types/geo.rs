use serde::{Deserialize, Serialize};

/// Coordinates attached to the query field by the map widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
	pub lat: f64,
	pub lng: f64,
}

impl GeoPoint {
	#[must_use]
	pub fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}
}

/// The radius option currently checked in the search form.
///
/// `value` is what the search endpoint receives as `geo[range]`; the export
/// form sends `export_range` instead, which usually carries the same radius
/// in the unit the export page expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeChoice {
	pub value: String,
	pub export_range: String,
}

impl RangeChoice {
	/// Build a choice whose export value mirrors the search value.
	#[must_use]
	pub fn new(value: impl Into<String>) -> Self {
		let value = value.into();
		Self {
			export_range: value.clone(),
			value,
		}
	}

	#[must_use]
	pub fn with_export_range(mut self, export_range: impl Into<String>) -> Self {
		self.export_range = export_range.into();
		self
	}
}

/// An empty value lets the endpoint apply its own default radius.
impl Default for RangeChoice {
	fn default() -> Self {
		Self::new("")
	}
}
