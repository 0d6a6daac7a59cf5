use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a rendered grid item, compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
	#[must_use]
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ItemId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ItemId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for ItemId {
	fn from(value: String) -> Self {
		Self(value)
	}
}
