use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let fields = &config.fields;
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Base url: {}", config.endpoint.base_url),
		format!("  Search path: {}", config.endpoint.search_path),
		format!("  Export path: {}", config.endpoint.export_path),
		format!("  Timeout: {}s", config.endpoint.timeout.as_secs()),
		format!("  Query: {}", or_placeholder(&fields.text, "(empty)")),
	];
	match fields.location {
		Some(point) => lines.push(format!("  Location: {}, {}", point.lat, point.lng)),
		None => lines.push("  Location: (none)".to_string()),
	}
	lines.push(format!(
		"  Range: {}",
		or_placeholder(&fields.range.value, "(endpoint default)")
	));
	if fields.range.export_range != fields.range.value {
		lines.push(format!("  Export range: {}", fields.range.export_range));
	}
	lines.push(format!(
		"  Category: {}",
		or_placeholder(&fields.category, "(all)")
	));
	if !fields.hidden_ids.is_empty() {
		let ids: Vec<&str> = fields.hidden_ids.iter().map(|id| id.as_str()).collect();
		lines.push(format!("  Hidden ids: {}", ids.join(", ")));
	}
	lines.push(format!("  Item class: {}", config.grid.item_class));
	lines.push(format!("  Tile height: {}", config.grid.tile_height));
	lines.push(format!("  Pages: {}", config.grid.pages));
	lines
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
	if value.is_empty() { placeholder } else { value }
}
