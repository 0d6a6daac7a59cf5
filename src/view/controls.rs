use std::collections::HashSet;

use serde::Serialize;

/// Page controls that can originate an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
	/// The search form, submitted with the enter key.
	SearchForm,
	/// The explicit search button. Also governs scroll continuations.
	SearchButton,
	/// The radius radio group.
	RangeChoice,
	/// The category selector.
	CategorySelect,
	/// The link that exports the current selection.
	Export,
}

/// Disabled markers set on page controls by the embedder.
#[derive(Debug, Clone, Default)]
pub struct ControlStates {
	disabled: HashSet<Control>,
}

impl ControlStates {
	pub fn set_disabled(&mut self, control: Control, disabled: bool) {
		if disabled {
			self.disabled.insert(control);
		} else {
			self.disabled.remove(&control);
		}
	}

	#[must_use]
	pub fn is_disabled(&self, control: Control) -> bool {
		self.disabled.contains(&control)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn markers_toggle_per_control() {
		let mut controls = ControlStates::default();
		controls.set_disabled(Control::SearchButton, true);
		assert!(controls.is_disabled(Control::SearchButton));
		assert!(!controls.is_disabled(Control::SearchForm));

		controls.set_disabled(Control::SearchButton, false);
		assert!(!controls.is_disabled(Control::SearchButton));
	}
}
