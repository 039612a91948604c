//! Extensions for mapping errors to `BuilderResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(BuilderError::from(e)))`
//! patterns when converting external error types into the crate's
//! `BuilderResult<T>` alias (`Result<T, Arc<BuilderError>>`).
//!
//! # Examples
//!
//! ```
//! use response_builder::{BuilderResult, BuilderResultExt};
//!
//! fn encode() -> BuilderResult<serde_json::Value> {
//!     // serde_json::Error implements Into<BuilderError>
//!     serde_json::to_value(&42).into_builder()
//! }
//! ```

use std::sync::Arc;

use crate::{BuilderError, BuilderResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<BuilderError>` into a `BuilderResult<T>`.
pub trait BuilderResultExt<T, E> {
    /// Convert `Result<T, E>` into `BuilderResult<T>` using `Into<BuilderError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<BuilderError>`.
    fn into_builder(self) -> BuilderResult<T>;
}

impl<T, E> BuilderResultExt<T, E> for Result<T, E>
where
    E: Into<BuilderError>,
{
    fn into_builder(self) -> BuilderResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
