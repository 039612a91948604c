//! Core utilities of the response builder.
//!
//! The crate covers what the response builder does before a payload is
//! serialised:
//!
//! - [`merge`] overlays configuration nodes and orders pluggable entries by
//!   priority;
//! - [`validator`] asserts the kind and range of values reaching the builder;
//! - [`converter`] turns payload records into mappings, selecting a
//!   [`Converter`] per record class;
//! - [`settings`] decodes the effective [`ResponseBuilderConfig`] from
//!   defaults, documents, the environment and runtime overrides.
//!
//! Every fallible operation returns a [`BuilderResult`], sharing the error
//! behind an [`Arc`] so one failure can be shared between reports.

use std::sync::Arc;

pub mod converter;
mod error;
mod file;
mod kind;
pub mod layers;
pub mod merge;
mod record;
pub mod result_ext;
pub mod settings;
pub mod validator;

pub use figment;
pub use serde_json;
#[cfg(feature = "toml")]
pub use toml;

pub use converter::{
    Converter, ConverterEntry, ConverterRegistry, ConverterRegistryBuilder, ToArrayConverter,
};
pub use error::{BuilderError, Expected, LoadFailures};
pub use file::{ENV_NESTING_SEPARATOR, load_config_file, load_environment};
pub use kind::{Category, Inspect, Kind, Payload};
pub use layers::{ConfigLayer, LayerComposer, LayerProvenance};
pub use merge::{merge_config, sort_by_pri};
pub use record::{Arrayable, Record, arrayable};
pub use result_ext::BuilderResultExt;
pub use settings::{LoadOptions, ResponseBuilderConfig};

/// Result type used throughout the crate.
pub type BuilderResult<T> = Result<T, Arc<BuilderError>>;
