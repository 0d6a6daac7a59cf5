use std::collections::HashSet;

use photogrid::ItemId;

/// Trim and deduplicate item ids, keeping the first occurrence of each.
pub(super) fn sanitize_ids(values: Vec<String>) -> Vec<ItemId> {
	let mut seen = HashSet::new();
	let mut cleaned = Vec::new();
	for value in values {
		let normalized = value.trim();
		if normalized.is_empty() {
			continue;
		}
		if seen.insert(normalized.to_string()) {
			cleaned.push(ItemId::new(normalized));
		}
	}
	cleaned
}

/// Trim a free-form value, treating an empty result as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_are_trimmed_and_deduplicated() {
		let cleaned = sanitize_ids(vec![" 12 ".into(), "7".into(), "".into(), "12".into()]);
		assert_eq!(cleaned, vec![ItemId::new("12"), ItemId::new("7")]);
	}

	#[test]
	fn blank_values_become_unset() {
		assert_eq!(non_blank(Some("  ".into())), None);
		assert_eq!(non_blank(Some(" photo ".into())), Some("photo".into()));
		assert_eq!(non_blank(None), None);
	}
}
