use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::types::ItemId;

/// Class that marks the root element of a rendered grid item.
pub const DEFAULT_ITEM_CLASS: &str = "item";

static CLASSED_TAG: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"<[A-Za-z][\w-]*\s[^>]*?\bclass\s*=\s*(?:"([^"]*)"|'([^']*)')[^>]*>"#)
		.expect("classed tag pattern is valid")
});

static DATA_ID: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"\bdata-id\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("data-id pattern is valid")
});

static DATA_TOTAL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"\bdata-total\s*=\s*(?:"\s*(\d+)\s*"|'\s*(\d+)\s*'|(\d+))"#)
		.expect("data-total pattern is valid")
});

/// One rendered item as returned by the search endpoint.
///
/// The markup is opaque to the controller. Only the identifier and the
/// optional result total are lifted out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultFragment {
	pub markup: String,
	pub id: Option<ItemId>,
	pub total: Option<u64>,
}

impl ResultFragment {
	#[must_use]
	pub fn new(markup: impl Into<String>) -> Self {
		let markup = markup.into();
		let id = first_capture(&DATA_ID, &markup).map(ItemId::new);
		let total = first_capture(&DATA_TOTAL, &markup).and_then(|value| value.parse().ok());
		Self { markup, id, total }
	}
}

/// Splits a response body into item fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentParser {
	item_class: String,
}

impl Default for FragmentParser {
	fn default() -> Self {
		Self::new(DEFAULT_ITEM_CLASS)
	}
}

impl FragmentParser {
	#[must_use]
	pub fn new(item_class: impl Into<String>) -> Self {
		Self {
			item_class: item_class.into(),
		}
	}

	#[must_use]
	pub fn item_class(&self) -> &str {
		&self.item_class
	}

	/// Split `body` at every element carrying the item class.
	///
	/// A blank body yields no fragments. A non-blank body without any item
	/// element is kept whole as a single fragment.
	#[must_use]
	pub fn parse(&self, body: &str) -> Vec<ResultFragment> {
		let body = body.trim();
		if body.is_empty() {
			return Vec::new();
		}

		let starts: Vec<usize> = CLASSED_TAG
			.captures_iter(body)
			.filter(|caps| self.has_item_class(caps))
			.filter_map(|caps| caps.get(0).map(|tag| tag.start()))
			.collect();

		if starts.is_empty() {
			return vec![ResultFragment::new(body)];
		}

		starts
			.iter()
			.enumerate()
			.map(|(index, &start)| {
				let end = starts.get(index + 1).copied().unwrap_or(body.len());
				ResultFragment::new(body[start..end].trim_end())
			})
			.collect()
	}

	fn has_item_class(&self, caps: &Captures<'_>) -> bool {
		caps.get(1)
			.or_else(|| caps.get(2))
			.is_some_and(|classes| {
				classes
					.as_str()
					.split_whitespace()
					.any(|class| class == self.item_class)
			})
	}
}

fn first_capture(pattern: &Regex, haystack: &str) -> Option<String> {
	let caps = pattern.captures(haystack)?;
	caps.iter()
		.skip(1)
		.flatten()
		.next()
		.map(|value| value.as_str().to_string())
}
