//! Bookkeeping for items the user picked for a follow-on action.

use tracing::trace;

use crate::types::ItemId;
use crate::view::SelectionView;

/// Label shown next to the action controls while nothing is selected.
pub const EMPTY_STATUS: &str = " ";

/// Ordered set of selected item identifiers.
///
/// Each identifier appears at most once. Insertion order is kept so exported
/// ids come out in the order they were picked, but nothing relies on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
	selected: Vec<ItemId>,
}

impl SelectionTracker {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Flip membership of `id`, or clear everything when `id` is `None`.
	///
	/// Every call re-renders the counter and the action controls. A concrete
	/// id also flips that item's highlight; `None` drops all highlights.
	pub fn toggle<V>(&mut self, id: Option<ItemId>, view: &mut V)
	where
		V: SelectionView + ?Sized,
	{
		match id {
			None => {
				self.selected.clear();
				view.clear_highlights();
			}
			Some(id) => {
				match self.selected.iter().position(|selected| *selected == id) {
					Some(index) => {
						self.selected.remove(index);
					}
					None => self.selected.push(id.clone()),
				}
				view.flip_highlight(&id);
			}
		}

		trace!(count = self.count(), "selection changed");
		self.refresh(view);
	}

	/// Push the current counter and action state to `view`.
	pub fn refresh<V>(&self, view: &mut V)
	where
		V: SelectionView + ?Sized,
	{
		view.set_actions_enabled(self.actions_enabled());
		view.set_selection_status(&self.status_label());
	}

	#[must_use]
	pub fn count(&self) -> usize {
		self.selected.len()
	}

	#[must_use]
	pub fn contains(&self, id: &ItemId) -> bool {
		self.selected.contains(id)
	}

	#[must_use]
	pub fn ids(&self) -> &[ItemId] {
		&self.selected
	}

	/// Whether controls acting on the selection should accept input.
	#[must_use]
	pub fn actions_enabled(&self) -> bool {
		!self.selected.is_empty()
	}

	/// `"(n)"` while anything is selected, a single space otherwise.
	#[must_use]
	pub fn status_label(&self) -> String {
		match self.count() {
			0 => EMPTY_STATUS.to_string(),
			count => format!("({count})"),
		}
	}
}

#[cfg(test)]
mod tests;
