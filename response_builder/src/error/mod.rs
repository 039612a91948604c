//! Error types produced by validation, merging and configuration loading.

mod constructors;
mod conversions;
mod failures;
mod types;

pub use failures::LoadFailures;
pub use types::{BuilderError, Expected};
