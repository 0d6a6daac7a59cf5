//! Seams between the controllers and whatever renders the page.
//!
//! The controllers never touch rendered nodes directly. They drive a view
//! through the narrow traits below, which lets the same bookkeeping run
//! behind a browser bridge, a terminal, or a test double.

mod console;
mod controls;

pub use console::{ConsoleGrid, ConsoleItem, ConsoleSnapshot};
pub use controls::{Control, ControlStates};

use crate::search::{ResultFragment, SearchError};
use crate::types::ItemId;

/// Rendering surface for the selection counter and action controls.
pub trait SelectionView {
	/// Enable or disable the controls that act on the selection.
	fn set_actions_enabled(&mut self, enabled: bool);

	/// Replace the status label next to the action controls.
	fn set_selection_status(&mut self, label: &str);

	/// Flip the "selected" highlight on the item that was clicked.
	fn flip_highlight(&mut self, id: &ItemId);

	/// Drop every "selected" highlight, including ones on items still shown.
	fn clear_highlights(&mut self);
}

/// Rendering surface for the result grid and its affordances.
pub trait GridView {
	/// Remove every rendered item.
	fn clear_grid(&mut self);

	/// Append fragments to the grid. Ownership of the markup passes to the view.
	fn append(&mut self, fragments: Vec<ResultFragment>);

	/// Re-flow the layout immediately after an append.
	fn relayout(&mut self);

	/// Re-flow again once every image in the last appended fragments has loaded.
	fn relayout_after_images(&mut self);

	fn set_error_visible(&mut self, visible: bool);

	fn set_total_visible(&mut self, visible: bool);

	fn display_total(&mut self, total: u64);

	/// Show or hide the retry affordance for a failed request.
	fn set_failure(&mut self, error: Option<&SearchError>);
}

/// A full page: both the grid and the selection surface.
pub trait PageView: GridView + SelectionView {}

impl<T> PageView for T where T: GridView + SelectionView {}
