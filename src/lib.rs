//! Search and selection bookkeeping for an infinite-scroll photo grid.
//!
//! The crate drives a grid of photos backed by a geo-aware search endpoint.
//! [`ScrollSearchController`] decides when to start over and when to fetch
//! the next page, and [`SelectionTracker`] keeps the set of photos picked
//! for export. Rendering, map handling and the endpoint itself stay behind
//! the traits in [`view`], [`recenter`] and [`search`].

pub mod app_dirs;
pub mod controller;
pub mod export;
pub mod logging;
pub mod recenter;
pub mod search;
pub mod selection;
pub mod transport;
pub mod types;
pub mod view;

pub use controller::{ControllerState, FreshTrigger, ScrollSearchController};
pub use export::{ExportError, ExportForm, Navigator};
pub use recenter::{NoMap, Recenter};
pub use search::{
	FragmentParser, PaginationState, ResultFragment, ScrollPosition, SearchEndpoint, SearchError,
	SearchOutcome, SearchQuery,
};
pub use selection::SelectionTracker;
pub use transport::{HttpEndpoint, HttpNavigator, NavigationPage};
pub use types::{GeoPoint, ItemId, RangeChoice, SearchFields};
pub use view::{ConsoleGrid, Control, GridView, PageView, SelectionView};
