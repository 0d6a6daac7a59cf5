use serde::Serialize;

/// Vertical scroll state reported by the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
	/// Current scroll offset from the top of the document.
	pub offset: f64,
	/// Total height of the document.
	pub document_height: f64,
}

impl ScrollPosition {
	#[must_use]
	pub fn new(offset: f64, document_height: f64) -> Self {
		Self {
			offset,
			document_height,
		}
	}
}

/// Page counter plus the offset at which the last continuation fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PaginationState {
	current_page: u32,
	last_trigger_offset: f64,
}

impl PaginationState {
	#[must_use]
	pub fn new(current_page: u32, last_trigger_offset: f64) -> Self {
		Self {
			current_page,
			last_trigger_offset,
		}
	}

	#[must_use]
	pub fn current_page(&self) -> u32 {
		self.current_page
	}

	#[must_use]
	pub fn last_trigger_offset(&self) -> f64 {
		self.last_trigger_offset
	}

	pub fn reset(&mut self) {
		*self = Self::default();
	}

	/// Offset past which the next continuation fires: halfway between the
	/// last trigger and the bottom of the document.
	#[must_use]
	pub fn threshold(&self, document_height: f64) -> f64 {
		(self.last_trigger_offset + document_height) / 2.0
	}

	#[must_use]
	pub fn should_continue(&self, position: ScrollPosition) -> bool {
		position.offset > self.threshold(position.document_height)
	}

	/// Record a continuation fired at `offset` and move to the next page.
	///
	/// Returns the state from before the advance so a failed fetch can be
	/// rolled back.
	pub fn advance(&mut self, offset: f64) -> Self {
		let previous = *self;
		self.last_trigger_offset = offset;
		self.current_page = self.current_page.saturating_add(1);
		previous
	}
}
