//! Result types and container for image search results
//!
//! This module defines the normalized image record shared by every engine.

mod container;
mod types;

pub use container::ResultContainer;
pub use types::*;
