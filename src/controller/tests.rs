use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::*;
use crate::search::ResultFragment;
use crate::types::GeoPoint;
use crate::recenter::NoMap;
use crate::view::{ConsoleGrid, GridView};

const WAIT: Duration = Duration::from_secs(5);

type QueryLog = Arc<Mutex<Vec<SearchQuery>>>;

fn items(ids: &[&str], total: Option<u64>) -> String {
	ids.iter()
		.enumerate()
		.map(|(index, id)| match total {
			Some(total) if index == 0 => {
				format!(r#"<div class="item" data-total="{total}"><img data-id="{id}"></div>"#)
			}
			_ => format!(r#"<div class="item"><img data-id="{id}"></div>"#),
		})
		.collect()
}

fn recording<F>(respond: F) -> (impl SearchEndpoint, QueryLog)
where
	F: Fn(&SearchQuery) -> Result<String, SearchError> + Send + 'static,
{
	let log = QueryLog::default();
	let sink = Arc::clone(&log);
	let endpoint = move |query: &SearchQuery| -> Result<String, SearchError> {
		sink.lock().unwrap().push(query.clone());
		respond(query)
	};
	(endpoint, log)
}

/// Endpoint that holds every request until the test releases it.
fn gated<F>(respond: F) -> (impl SearchEndpoint, Sender<()>)
where
	F: Fn(&SearchQuery) -> Result<String, SearchError> + Send + 'static,
{
	let (release, gate) = mpsc::channel::<()>();
	let endpoint = move |query: &SearchQuery| -> Result<String, SearchError> {
		gate.recv()
			.map_err(|_| SearchError::Transport("gate closed".into()))?;
		respond(query)
	};
	(endpoint, release)
}

fn counter() -> (Rc<Cell<usize>>, impl FnMut()) {
	let count = Rc::new(Cell::new(0));
	let inner = Rc::clone(&count);
	(count, move || inner.set(inner.get() + 1))
}

fn berlin() -> SearchFields {
	SearchFields::default()
		.with_text("Mitte, Berlin")
		.with_location(GeoPoint::new(52.5167, 13.3667))
}

fn ids(grid: &ConsoleGrid) -> Vec<String> {
	grid.items()
		.iter()
		.filter_map(|fragment| fragment.id.as_ref().map(|id| id.to_string()))
		.collect()
}

#[test]
fn new_controller_starts_with_disabled_actions() {
	let (endpoint, _log) = recording(|_| Ok(String::new()));
	let controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap);

	assert_eq!(controller.view().status(), " ");
	assert!(!controller.view().actions_enabled());
	assert!(controller.is_disabled(Control::Export));
	assert_eq!(controller.state(), ControllerState::Idle);
}

#[test]
fn fresh_search_resets_state_before_querying() {
	let (endpoint, log) = recording(|_| Ok(items(&["1", "2"], Some(42))));
	let (recentered, recenter) = counter();
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, recenter)
		.with_pagination(PaginationState::new(3, 900.0));
	controller.toggle_item(Some("p7".into()));

	let id = controller.fresh_search(FreshTrigger::Submit);
	assert!(id.is_some());
	assert_eq!(recentered.get(), 1);
	assert_eq!(*controller.pagination(), PaginationState::default());
	assert_eq!(controller.selection().count(), 0);
	assert_eq!(controller.view().status(), " ");
	assert_eq!(controller.state(), ControllerState::Fetching);

	assert!(controller.wait_for_response(WAIT));
	assert_eq!(controller.state(), ControllerState::Idle);
	assert_eq!(log.lock().unwrap()[0].page, 0);
}

#[test]
fn empty_query_text_never_paginates() {
	let (endpoint, log) = recording(|_| Ok(items(&["1"], None)));
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_pagination(PaginationState::new(3, 0.0));

	controller.fresh_search(FreshTrigger::SearchButton);
	assert!(controller.wait_for_response(WAIT));

	let position = controller.view().scrolled_to_end();
	assert!(controller.on_scroll(position).is_some());
	assert!(controller.wait_for_response(WAIT));

	assert_eq!(controller.pagination().current_page(), 1);
	let pages: Vec<u32> = log.lock().unwrap().iter().map(|query| query.page).collect();
	assert_eq!(pages, vec![0, 0]);
}

#[test]
fn total_on_first_fragment_is_displayed() {
	let (endpoint, _log) = recording(|_| Ok(items(&["1", "2", "3"], Some(42))));
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_fields(berlin());

	controller.fresh_search(FreshTrigger::Submit);
	assert!(controller.wait_for_response(WAIT));

	let grid = controller.view();
	assert_eq!(grid.total(), Some(42));
	assert!(grid.total_visible());
	assert!(!grid.error_visible());
	assert_eq!(ids(grid), vec!["1", "2", "3"]);
	assert_eq!(grid.layout_passes(), 2);
}

#[test]
fn whitespace_response_shows_error_and_empties_grid() {
	let (endpoint, _log) = recording(|query| {
		if query.category == "none" {
			Ok(" \n\t ".to_string())
		} else {
			Ok(items(&["1"], Some(1)))
		}
	});
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_fields(berlin());

	controller.fresh_search(FreshTrigger::Submit);
	assert!(controller.wait_for_response(WAIT));
	assert_eq!(controller.view().items().len(), 1);

	controller.fields_mut().category = "none".into();
	controller.fresh_search(FreshTrigger::CategoryChanged);
	assert!(controller.wait_for_response(WAIT));

	let grid = controller.view();
	assert!(grid.error_visible());
	assert!(!grid.total_visible());
	assert!(grid.items().is_empty());
}

#[test]
fn scroll_below_threshold_is_ignored() {
	let (endpoint, log) = recording(|_| Ok(items(&["1", "2", "3", "4"], None)));
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_fields(berlin());
	controller.fresh_search(FreshTrigger::Submit);
	assert!(controller.wait_for_response(WAIT));

	let before = *controller.pagination();
	assert!(controller.on_scroll(ScrollPosition::new(200.0, 400.0)).is_none());
	assert_eq!(*controller.pagination(), before);
	assert_eq!(controller.state(), ControllerState::Idle);
	assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn scroll_past_threshold_appends_next_page() {
	let (endpoint, log) = recording(|query| {
		let first = query.page * 2;
		let a = (first + 1).to_string();
		let b = (first + 2).to_string();
		Ok(items(&[a.as_str(), b.as_str()], Some(10)))
	});
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_fields(berlin());
	controller.fresh_search(FreshTrigger::Submit);
	assert!(controller.wait_for_response(WAIT));
	controller.view_mut().display_total(99);

	assert!(controller.on_scroll(ScrollPosition::new(150.0, 200.0)).is_some());
	assert_eq!(controller.pagination().current_page(), 1);
	assert_eq!(controller.pagination().last_trigger_offset(), 150.0);
	assert!(controller.wait_for_response(WAIT));

	let grid = controller.view();
	assert_eq!(ids(grid), vec!["1", "2", "3", "4"]);
	// continuations never touch the total
	assert_eq!(grid.total(), Some(99));
	assert_eq!(log.lock().unwrap()[1].page, 1);
}

#[test]
fn blank_continuation_only_appends() {
	let (endpoint, _log) = recording(|query| {
		if query.page == 0 {
			Ok(items(&["1", "2"], Some(10)))
		} else {
			Ok("  ".to_string())
		}
	});
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_fields(berlin());
	controller.fresh_search(FreshTrigger::Submit);
	assert!(controller.wait_for_response(WAIT));
	let passes = controller.view().layout_passes();

	let position = controller.view().scrolled_to_end();
	assert!(controller.on_scroll(position).is_some());
	assert!(controller.wait_for_response(WAIT));

	let grid = controller.view();
	assert!(!grid.error_visible());
	assert!(grid.total_visible());
	assert_eq!(grid.total(), Some(10));
	assert_eq!(ids(grid), vec!["1", "2"]);
	assert_eq!(grid.layout_passes(), passes + 2);
	assert_eq!(controller.pagination().current_page(), 1);
}

#[test]
fn scroll_is_suppressed_while_search_button_disabled() {
	let (endpoint, log) = recording(|_| Ok(items(&["1"], None)));
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_fields(berlin());
	controller
		.controls_mut()
		.set_disabled(Control::SearchButton, true);

	assert!(controller.on_scroll(ScrollPosition::new(1000.0, 1000.0)).is_none());
	assert_eq!(controller.pagination().current_page(), 0);
	assert!(log.lock().unwrap().is_empty());
}

#[test]
fn scroll_is_suppressed_while_fetching() {
	let (endpoint, release) = gated(|_| Ok(items(&["1"], None)));
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_fields(berlin());

	controller.fresh_search(FreshTrigger::Submit);
	assert!(controller.on_scroll(ScrollPosition::new(1000.0, 1000.0)).is_none());
	assert_eq!(controller.pagination().current_page(), 0);

	release.send(()).unwrap();
	assert!(controller.wait_for_response(WAIT));
}

#[test]
fn disabled_trigger_is_a_silent_no_op() {
	let (endpoint, log) = recording(|_| Ok(items(&["1"], None)));
	let (recentered, recenter) = counter();
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, recenter)
		.with_pagination(PaginationState::new(2, 400.0));
	controller.toggle_item(Some("9".into()));
	controller
		.controls_mut()
		.set_disabled(Control::RangeChoice, true);

	assert!(controller.fresh_search(FreshTrigger::RangeChanged).is_none());
	assert_eq!(recentered.get(), 0);
	assert_eq!(controller.selection().count(), 1);
	assert_eq!(controller.pagination().current_page(), 2);
	assert!(log.lock().unwrap().is_empty());
}

#[test]
fn stale_responses_are_dropped() {
	let (endpoint, _release) = gated(|_| Ok(String::new()));
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_fields(berlin());

	let first = controller.fresh_search(FreshTrigger::Submit).unwrap();
	let second = controller.fresh_search(FreshTrigger::Submit).unwrap();
	assert!(second > first);

	let stale = SearchResponse {
		id: first,
		mode: FetchMode::Replace,
		body: Ok(items(&["old"], Some(5))),
	};
	assert!(!controller.handle_response(stale));
	assert!(controller.view().items().is_empty());
	assert_eq!(controller.state(), ControllerState::Fetching);

	let current = SearchResponse {
		id: second,
		mode: FetchMode::Replace,
		body: Ok(items(&["new"], Some(1))),
	};
	assert!(controller.handle_response(current));
	assert_eq!(ids(controller.view()), vec!["new"]);
	assert_eq!(controller.state(), ControllerState::Idle);
}

#[test]
fn failed_continuation_rolls_back_pagination() {
	let (endpoint, _log) = recording(|query| {
		if query.page == 0 {
			Ok(items(&["1", "2"], Some(4)))
		} else {
			Err(SearchError::Status { status: 503 })
		}
	});
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_fields(berlin());
	controller.fresh_search(FreshTrigger::Submit);
	assert!(controller.wait_for_response(WAIT));

	let position = controller.view().scrolled_to_end();
	assert!(controller.on_scroll(position).is_some());
	assert!(controller.wait_for_response(WAIT));

	assert_eq!(*controller.pagination(), PaginationState::default());
	assert_eq!(ids(controller.view()), vec!["1", "2"]);
	let failure = controller.view().failure().unwrap();
	assert!(failure.contains("503"));

	// a later success clears the retry affordance
	controller.fresh_search(FreshTrigger::Submit);
	assert!(controller.wait_for_response(WAIT));
	assert!(controller.view().failure().is_none());
}

#[test]
fn fresh_search_failure_keeps_previous_grid() {
	let (endpoint, _log) = recording(|query| {
		if query.category.is_empty() {
			Ok(items(&["1"], Some(1)))
		} else {
			Err(SearchError::Transport("connection refused".into()))
		}
	});
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_fields(berlin());
	controller.fresh_search(FreshTrigger::Submit);
	assert!(controller.wait_for_response(WAIT));

	controller.fields_mut().category = "portraits".into();
	controller.fresh_search(FreshTrigger::CategoryChanged);
	assert!(controller.wait_for_response(WAIT));

	assert_eq!(ids(controller.view()), vec!["1"]);
	assert!(controller.view().failure().is_some());
}

#[test]
fn failed_fresh_search_drops_stale_highlights() {
	let (endpoint, _log) = recording(|query| {
		if query.category.is_empty() {
			Ok(items(&["p7", "p8"], Some(2)))
		} else {
			Err(SearchError::Transport("connection reset".into()))
		}
	});
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_fields(berlin());
	controller.fresh_search(FreshTrigger::Submit);
	assert!(controller.wait_for_response(WAIT));
	controller.toggle_item(Some("p7".into()));
	assert!(controller.view().is_highlighted(&"p7".into()));

	controller.fields_mut().category = "landscape".into();
	controller.fresh_search(FreshTrigger::CategoryChanged);
	assert!(controller.wait_for_response(WAIT));

	// the old grid stays, but nothing on it may look selected
	assert_eq!(ids(controller.view()), vec!["p7", "p8"]);
	assert_eq!(controller.selection().count(), 0);
	assert!(!controller.view().is_highlighted(&"p7".into()));

	controller.toggle_item(Some("p7".into()));
	let p7 = "p7".into();
	assert_eq!(
		controller.selection().contains(&p7),
		controller.view().is_highlighted(&p7)
	);
	assert!(controller.selection().contains(&p7));
}

#[test]
fn clicking_items_updates_counter_and_highlight() {
	let (endpoint, _log) = recording(|_| Ok(items(&["p7", "p8"], Some(2))));
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_fields(berlin());
	controller.fresh_search(FreshTrigger::Submit);
	assert!(controller.wait_for_response(WAIT));

	controller.toggle_item(Some("p7".into()));
	assert_eq!(controller.view().status(), "(1)");
	assert!(controller.view().actions_enabled());
	assert!(controller.view().is_highlighted(&"p7".into()));
	assert!(!controller.is_disabled(Control::Export));

	controller.toggle_item(Some("p7".into()));
	assert_eq!(controller.view().status(), " ");
	assert!(!controller.view().actions_enabled());
	assert!(!controller.view().is_highlighted(&"p7".into()));
}

struct RecordingNavigator {
	forms: Vec<ExportForm>,
}

impl Navigator for RecordingNavigator {
	type Output = usize;

	fn submit(&mut self, form: &ExportForm) -> Result<usize, ExportError> {
		self.forms.push(form.clone());
		Ok(self.forms.len())
	}
}

#[test]
fn export_requires_a_selection() {
	let (endpoint, _log) = recording(|_| Ok(String::new()));
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_fields(berlin());
	let mut navigator = RecordingNavigator { forms: Vec::new() };

	assert_eq!(controller.export_selection(&mut navigator), Ok(None));
	assert!(navigator.forms.is_empty());

	controller.toggle_item(Some("4".into()));
	controller.toggle_item(Some("9".into()));
	assert_eq!(controller.export_selection(&mut navigator), Ok(Some(1)));
	assert_eq!(navigator.forms[0].ids, "4,9");
	assert_eq!(navigator.forms[0].lat, "52.5167");
}

#[test]
fn appended_fragments_keep_their_markup() {
	let (endpoint, _log) = recording(|_| Ok(items(&["1"], Some(1))));
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_fields(berlin());
	controller.fresh_search(FreshTrigger::Submit);
	assert!(controller.wait_for_response(WAIT));

	let expected = ResultFragment::new(items(&["1"], Some(1)));
	assert_eq!(controller.view().items(), &[expected]);
}

#[test]
fn dead_worker_resolves_pending_request_as_failure() {
	let (endpoint, _log) = recording(|_| panic!("endpoint crashed"));
	let mut controller = ScrollSearchController::new(ConsoleGrid::new(100.0), endpoint, NoMap)
		.with_fields(berlin());

	assert!(controller.fresh_search(FreshTrigger::Submit).is_some());
	assert!(!controller.wait_for_response(WAIT));

	assert_eq!(controller.state(), ControllerState::Idle);
	let failure = controller.view().failure().unwrap();
	assert!(failure.contains("no longer running"));
	assert_eq!(*controller.pagination(), PaginationState::default());
}
