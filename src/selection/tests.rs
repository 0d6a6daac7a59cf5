use super::*;
use crate::view::SelectionView;

#[derive(Default)]
struct RecordingView {
	actions_enabled: Option<bool>,
	status: Option<String>,
	highlighted: Vec<ItemId>,
}

impl SelectionView for RecordingView {
	fn set_actions_enabled(&mut self, enabled: bool) {
		self.actions_enabled = Some(enabled);
	}

	fn set_selection_status(&mut self, label: &str) {
		self.status = Some(label.to_string());
	}

	fn flip_highlight(&mut self, id: &ItemId) {
		if let Some(index) = self.highlighted.iter().position(|item| item == id) {
			self.highlighted.remove(index);
		} else {
			self.highlighted.push(id.clone());
		}
	}

	fn clear_highlights(&mut self) {
		self.highlighted.clear();
	}
}

#[test]
fn toggling_twice_restores_prior_state() {
	let mut tracker = SelectionTracker::new();
	let mut view = RecordingView::default();

	tracker.toggle(Some("p7".into()), &mut view);
	assert_eq!(tracker.count(), 1);
	assert_eq!(view.status.as_deref(), Some("(1)"));
	assert_eq!(view.actions_enabled, Some(true));
	assert_eq!(view.highlighted, vec![ItemId::from("p7")]);

	tracker.toggle(Some("p7".into()), &mut view);
	assert_eq!(tracker.count(), 0);
	assert_eq!(view.status.as_deref(), Some(" "));
	assert_eq!(view.actions_enabled, Some(false));
	assert!(view.highlighted.is_empty());
}

#[test]
fn reset_clears_any_selection() {
	let mut tracker = SelectionTracker::new();
	let mut view = RecordingView::default();

	for id in ["a", "b", "c"] {
		tracker.toggle(Some(id.into()), &mut view);
	}
	assert_eq!(tracker.status_label(), "(3)");

	assert_eq!(view.highlighted.len(), 3);

	tracker.toggle(None, &mut view);
	assert_eq!(tracker.count(), 0);
	assert_eq!(view.status.as_deref(), Some(EMPTY_STATUS));
	assert_eq!(view.actions_enabled, Some(false));
	assert!(view.highlighted.is_empty());
}

#[test]
fn reset_on_empty_selection_still_refreshes_view() {
	let mut tracker = SelectionTracker::new();
	let mut view = RecordingView::default();

	tracker.toggle(None, &mut view);
	assert_eq!(tracker.count(), 0);
	assert_eq!(view.status.as_deref(), Some(" "));
	assert_eq!(view.actions_enabled, Some(false));
	assert!(view.highlighted.is_empty());
}

#[test]
fn membership_follows_toggle_parity() {
	let mut tracker = SelectionTracker::new();
	let mut view = RecordingView::default();
	let sequence = ["x", "y", "x", "z", "x", "y", "y"];

	for id in sequence {
		tracker.toggle(Some(id.into()), &mut view);
	}

	for id in ["x", "y", "z"] {
		let toggles = sequence.iter().filter(|item| **item == id).count();
		assert_eq!(tracker.contains(&id.into()), toggles % 2 == 1, "id {id}");
	}
	assert_eq!(tracker.count(), 3);
	assert_eq!(tracker.ids(), &[ItemId::from("z"), "x".into(), "y".into()]);
}

#[test]
fn counter_and_actions_agree() {
	let mut tracker = SelectionTracker::new();
	let mut view = RecordingView::default();

	for id in ["a", "b", "a", "b", "c"] {
		tracker.toggle(Some(id.into()), &mut view);
		let empty = tracker.count() == 0;
		assert_eq!(view.status.as_deref() == Some(" "), empty);
		assert_eq!(view.actions_enabled == Some(false), empty);
	}
}
