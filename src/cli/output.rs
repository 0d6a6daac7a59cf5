use anyhow::Result;
use serde::Serialize;

use crate::workflow::{ExportReport, SearchReport};

/// Anything the binary can print at the end of a run.
pub(crate) trait Report: Serialize {
	fn plain_lines(&self) -> Vec<String>;
}

impl Report for SearchReport {
	fn plain_lines(&self) -> Vec<String> {
		let grid = &self.grid;
		let mut lines = Vec::new();
		if let Some(failure) = &grid.failure {
			lines.push(format!("Search failed: {failure} (retry with the same arguments)"));
		}
		if grid.no_results {
			lines.push(format!("No results (query: '{}')", self.query.text));
			return lines;
		}

		match grid.total {
			Some(total) => lines.push(format!("{} of {total} photos", grid.items.len())),
			None => lines.push(format!("{} photos", grid.items.len())),
		}
		for item in &grid.items {
			let id = item.id.as_ref().map_or("(no id)", |id| id.as_str());
			let marker = if item.selected { "*" } else { " " };
			lines.push(format!("{marker} {id}"));
		}
		lines.push(format!(
			"Page {} after {} continuation(s)",
			self.pagination.current_page(),
			self.continuations
		));
		lines
	}
}

impl Report for ExportReport {
	fn plain_lines(&self) -> Vec<String> {
		match &self.page {
			Some(page) => vec![
				format!("Exported {}", self.form.ids),
				format!("{} ({})", page.url, page.status),
			],
			None => vec!["Nothing selected".to_string()],
		}
	}
}

/// Print a plain-text representation of the report.
pub(crate) fn print_plain(report: &impl Report) {
	for line in report.plain_lines() {
		println!("{line}");
	}
}

/// Format the report as a JSON string.
pub(crate) fn format_report_json(report: &impl Report) -> Result<String> {
	Ok(serde_json::to_string_pretty(report)?)
}

/// Print the JSON representation of the report.
pub(crate) fn print_json(report: &impl Report) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}
