//! Constructors for `BuilderError`.

use std::sync::Arc;

use camino::Utf8Path;
use figment::Error as FigmentError;

use super::{BuilderError, Expected};
use crate::kind::{Category, Kind};

impl BuilderError {
    /// Construct an [`BuilderError::InvalidType`] for a value whose kind is
    /// not in `allowed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use response_builder::{BuilderError, Kind};
    /// let e = BuilderError::invalid_type("flag", &[Kind::Boolean], Kind::String);
    /// assert_eq!(
    ///     e.to_string(),
    ///     "\"flag\" must be one of allowed types: boolean (string given)"
    /// );
    /// ```
    #[must_use]
    pub fn invalid_type(name: impl Into<String>, allowed: &[Kind], given: Kind) -> Self {
        Self::InvalidType {
            name: name.into(),
            expected: Expected::Kinds(allowed.to_vec()),
            given: given.to_string(),
        }
    }

    /// Construct an [`BuilderError::InvalidType`] for a record that is not an
    /// instance of `class`.
    #[must_use]
    pub fn not_instance_of(
        name: impl Into<String>,
        class: impl Into<String>,
        given: impl Into<String>,
    ) -> Self {
        Self::InvalidType {
            name: name.into(),
            expected: Expected::Instance(class.into()),
            given: given.into(),
        }
    }

    /// Construct an [`BuilderError::OutOfRange`].
    #[must_use]
    pub fn out_of_range(name: impl Into<String>, value: i128, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            name: name.into(),
            value,
            min,
            max,
        }
    }

    /// Construct a [`BuilderError::Configuration`] error.
    #[must_use]
    pub fn configuration(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Construct a [`BuilderError::ConfigTypeConflict`] for `key`.
    #[must_use]
    pub fn type_conflict(key: impl Into<String>, original: Category, merging: Category) -> Self {
        Self::ConfigTypeConflict {
            key: key.into(),
            original,
            merging,
        }
    }

    /// Construct a [`BuilderError::File`] error for `path`.
    #[must_use]
    pub fn file(path: &Utf8Path, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    /// Construct a gathering error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use response_builder::BuilderError;
    /// let fe = figment::Error::from("boom");
    /// let e = BuilderError::gathering(fe);
    /// assert!(matches!(e, BuilderError::Gathering(_)));
    /// ```
    #[must_use]
    pub fn gathering(source: FigmentError) -> Self {
        Self::Gathering(Box::new(source))
    }

    /// Construct a gathering error wrapped in an [`Arc`].
    #[must_use]
    pub fn gathering_arc(source: FigmentError) -> Arc<Self> {
        Arc::new(Self::gathering(source))
    }
}
