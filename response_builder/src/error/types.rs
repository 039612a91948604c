//! Primary error enum for validation, merging and configuration loading.

use std::fmt;

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

use super::failures::LoadFailures;
use crate::kind::{Category, Kind};

/// Constraint a value was expected to satisfy when an
/// [`BuilderError::InvalidType`] is raised.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Expected {
    /// The value's kind had to be one of the listed kinds.
    Kinds(Vec<Kind>),
    /// The value had to be an instance of the named class.
    Instance(String),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kinds(kinds) => {
                for (i, kind) in kinds.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{kind}")?;
                }
                Ok(())
            }
            Self::Instance(class) => write!(f, "instance of \"{class}\""),
        }
    }
}

/// Errors raised by the response builder core.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuilderError {
    /// A value was not of an allowed kind (or class).
    #[error("\"{name}\" must be one of allowed types: {expected} ({given} given)")]
    InvalidType {
        /// Label of the offending value.
        name: String,
        /// What the value was expected to be.
        expected: Expected,
        /// Kind or class that was actually supplied.
        given: String,
    },

    /// An integer fell outside its inclusive bounds.
    #[error("Invalid value of \"{name}\" ({value}). Must be between {min}-{max} inclusive.")]
    OutOfRange {
        /// Label of the offending value.
        name: String,
        /// Value that was supplied.
        value: i128,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// Merging would change the category of an existing key.
    #[error("Incompatible types. Cannot merge {merging} into {original} (key '{key}').")]
    ConfigTypeConflict {
        /// Dotted path of the conflicting key.
        key: String,
        /// Category held by the base configuration.
        original: Category,
        /// Category supplied by the overriding configuration.
        merging: Category,
    },

    /// The calling code itself is wrong, for example inverted bounds.
    #[error("Invalid configuration of \"{name}\": {message}")]
    Configuration {
        /// Setting or argument at fault.
        name: String,
        /// Human-readable explanation.
        message: String,
    },

    /// A record does not expose a capability it was asked for.
    #[error("\"{class}\" does not implement the {capability} capability")]
    MissingCapability {
        /// Runtime class of the record.
        class: String,
        /// Name of the missing capability.
        capability: &'static str,
    },

    /// No configured converter accepts a record.
    #[error("No converter configured for \"{class}\"")]
    MissingConverter {
        /// Runtime class of the record.
        class: String,
    },

    /// Error originating from a configuration file.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying read or parse error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error while gathering configuration from providers.
    #[error("Failed to gather configuration: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// The merged configuration could not be decoded into typed settings.
    #[error("Failed to decode configuration: {0}")]
    Decode(#[source] serde_json::Error),

    /// Several sources failed during one settings load.
    #[error("settings could not be loaded:\n{0}")]
    Aggregate(Box<LoadFailures>),
}
