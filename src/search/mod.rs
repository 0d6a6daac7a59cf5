//! Search requests, their wire format, and the worker that runs them.

mod commands;
mod endpoint;
mod error;
mod fragment;
mod outcome;
mod pagination;
mod query;
mod runtime;
mod worker;

pub use commands::FetchMode;
pub(crate) use commands::SearchResponse;
pub use endpoint::SearchEndpoint;
pub use error::SearchError;
pub use fragment::{DEFAULT_ITEM_CLASS, FragmentParser, ResultFragment};
pub use outcome::{ResultBatch, SearchOutcome};
pub use pagination::{PaginationState, ScrollPosition};
pub use query::SearchQuery;
pub(crate) use runtime::SearchRuntime;
