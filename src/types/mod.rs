//! Value types shared by the selection, search and export paths.

mod fields;
mod geo;
mod item;

pub use fields::SearchFields;
pub use geo::{GeoPoint, RangeChoice};
pub use item::ItemId;
