//! Search orchestration module
//!
//! Coordinates keyword extraction and the concurrent provider fan-out.

mod executor;
mod models;

pub use executor::Search;
pub use models::*;
