//! Weekend getaway forecasts for Sunny
//!
//! Domain types, the built-in mock catalog, the filter projector and the
//! `LocationSource` seam the UI loads through.

pub mod catalog;
pub mod filter;
pub mod source;
pub mod types;

pub use catalog::mock_locations;
pub use filter::filter_locations;
pub use source::{LocationSource, MockSource};
pub use types::*;
