use crate::view::Control;

/// User interactions that start a fresh search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshTrigger {
	/// The search form was submitted (enter in the query box).
	Submit,
	/// The explicit search button was clicked.
	SearchButton,
	/// A different radius was picked.
	RangeChanged,
	/// A different category was picked.
	CategoryChanged,
}

impl FreshTrigger {
	/// The control whose disabled marker guards this trigger.
	#[must_use]
	pub fn control(self) -> Control {
		match self {
			Self::Submit => Control::SearchForm,
			Self::SearchButton => Control::SearchButton,
			Self::RangeChanged => Control::RangeChoice,
			Self::CategoryChanged => Control::CategorySelect,
		}
	}
}

/// Whether the controller is waiting on the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
	Idle,
	Fetching,
}
