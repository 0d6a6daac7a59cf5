use std::collections::BTreeSet;

use serde::Serialize;

use super::{GridView, SelectionView};
use crate::search::{ResultFragment, ScrollPosition, SearchError};
use crate::selection::EMPTY_STATUS;
use crate::types::ItemId;

/// In-memory page used by the command line front-end.
///
/// Items are stacked in a single column of fixed-height tiles, which is
/// enough to give scroll continuations a realistic document height.
#[derive(Debug, Clone)]
pub struct ConsoleGrid {
	tile_height: f64,
	items: Vec<ResultFragment>,
	highlighted: BTreeSet<ItemId>,
	status: String,
	actions_enabled: bool,
	error_visible: bool,
	total_visible: bool,
	total: Option<u64>,
	failure: Option<String>,
	layout_passes: usize,
}

impl ConsoleGrid {
	#[must_use]
	pub fn new(tile_height: f64) -> Self {
		Self {
			tile_height,
			items: Vec::new(),
			highlighted: BTreeSet::new(),
			status: EMPTY_STATUS.to_string(),
			actions_enabled: false,
			error_visible: false,
			total_visible: false,
			total: None,
			failure: None,
			layout_passes: 0,
		}
	}

	pub fn items(&self) -> &[ResultFragment] {
		&self.items
	}

	pub fn is_highlighted(&self, id: &ItemId) -> bool {
		self.highlighted.contains(id)
	}

	pub fn status(&self) -> &str {
		&self.status
	}

	pub fn actions_enabled(&self) -> bool {
		self.actions_enabled
	}

	pub fn error_visible(&self) -> bool {
		self.error_visible
	}

	pub fn total_visible(&self) -> bool {
		self.total_visible
	}

	pub fn total(&self) -> Option<u64> {
		self.total
	}

	pub fn failure(&self) -> Option<&str> {
		self.failure.as_deref()
	}

	/// Number of layout passes run so far, immediate and image-driven.
	pub fn layout_passes(&self) -> usize {
		self.layout_passes
	}

	#[must_use]
	pub fn document_height(&self) -> f64 {
		self.items.len() as f64 * self.tile_height
	}

	/// Scroll position with the viewport pinned to the end of the document.
	#[must_use]
	pub fn scrolled_to_end(&self) -> ScrollPosition {
		let height = self.document_height();
		ScrollPosition::new(height, height)
	}

	#[must_use]
	pub fn snapshot(&self) -> ConsoleSnapshot {
		ConsoleSnapshot {
			items: self
				.items
				.iter()
				.map(|fragment| ConsoleItem {
					id: fragment.id.clone(),
					selected: fragment
						.id
						.as_ref()
						.is_some_and(|id| self.highlighted.contains(id)),
				})
				.collect(),
			total: self.total_visible.then_some(self.total).flatten(),
			no_results: self.error_visible,
			failure: self.failure.clone(),
			status: self.status.clone(),
			actions_enabled: self.actions_enabled,
		}
	}
}

impl SelectionView for ConsoleGrid {
	fn set_actions_enabled(&mut self, enabled: bool) {
		self.actions_enabled = enabled;
	}

	fn set_selection_status(&mut self, label: &str) {
		self.status = label.to_string();
	}

	fn flip_highlight(&mut self, id: &ItemId) {
		if !self.highlighted.remove(id) {
			self.highlighted.insert(id.clone());
		}
	}

	fn clear_highlights(&mut self) {
		self.highlighted.clear();
	}
}

impl GridView for ConsoleGrid {
	fn clear_grid(&mut self) {
		self.items.clear();
		self.highlighted.clear();
	}

	fn append(&mut self, fragments: Vec<ResultFragment>) {
		self.items.extend(fragments);
	}

	fn relayout(&mut self) {
		self.layout_passes += 1;
	}

	// Console tiles carry no images, so the deferred pass runs right away.
	fn relayout_after_images(&mut self) {
		self.layout_passes += 1;
	}

	fn set_error_visible(&mut self, visible: bool) {
		self.error_visible = visible;
	}

	fn set_total_visible(&mut self, visible: bool) {
		self.total_visible = visible;
	}

	fn display_total(&mut self, total: u64) {
		self.total = Some(total);
	}

	fn set_failure(&mut self, error: Option<&SearchError>) {
		self.failure = error.map(ToString::to_string);
	}
}

/// Serializable view of a [`ConsoleGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleSnapshot {
	pub items: Vec<ConsoleItem>,
	pub total: Option<u64>,
	pub no_results: bool,
	pub failure: Option<String>,
	pub status: String,
	pub actions_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleItem {
	pub id: Option<ItemId>,
	pub selected: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn document_grows_with_items() {
		let mut grid = ConsoleGrid::new(200.0);
		assert_eq!(grid.scrolled_to_end(), ScrollPosition::new(0.0, 0.0));

		grid.append(vec![
			ResultFragment::new(r#"<div class="item" data-id="1"></div>"#),
			ResultFragment::new(r#"<div class="item" data-id="2"></div>"#),
		]);
		assert_eq!(grid.document_height(), 400.0);
	}

	#[test]
	fn clearing_drops_highlights() {
		let mut grid = ConsoleGrid::new(200.0);
		grid.append(vec![ResultFragment::new(r#"<div class="item" data-id="1"></div>"#)]);
		grid.flip_highlight(&"1".into());
		assert!(grid.snapshot().items[0].selected);

		grid.clear_grid();
		assert!(!grid.is_highlighted(&"1".into()));
		assert!(grid.snapshot().items.is_empty());
	}
}
