//! Image search engine module
//!
//! Defines the ImageEngine trait and the two provider adapters.

mod loader;
mod registry;
mod traits;

// Engine implementations
pub mod pixabay;
pub mod unsplash;

pub use loader::EngineLoader;
pub use pixabay::Pixabay;
pub use registry::EngineRegistry;
pub use traits::*;
pub use unsplash::Unsplash;
