//! Typed response builder settings and their layered loading.
//!
//! [`ResponseBuilderConfig`] is the effective configuration after every
//! layer has been merged. It is decoded from a plain node so applications
//! can keep configuration in whatever document they already ship, and
//! [`ResponseBuilderConfig::load`] wires the usual sources together:
//! baked-in defaults, an optional document, prefixed environment variables
//! and runtime overrides, in that order of increasing precedence.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::file::{load_config_file, load_environment};
use crate::error::LoadFailures;
use crate::layers::LayerComposer;
use crate::{BuilderResult, BuilderResultExt, ConverterRegistry, validator};

/// Lowest API code applications may use by default.
pub const DEFAULT_MIN_CODE: i64 = 100;

/// Highest API code applications may use by default.
pub const DEFAULT_MAX_CODE: i64 = 1024;

/// Default JSON encoding flags: unescaped slashes and unicode, hex-encoded
/// tags and ampersands.
pub const DEFAULT_ENCODING_OPTIONS: u32 = 271;

/// Settings consumed by the response builder.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResponseBuilderConfig {
    /// Lowest API code the application may return.
    pub min_code: i64,
    /// Highest API code the application may return.
    pub max_code: i64,
    /// JSON encoding flags forwarded with every response.
    pub encoding_options: u32,
    /// Converter selection table.
    pub converter: ConverterSettings,
    /// Debug payload settings.
    pub debug: DebugSettings,
}

/// Raw converter configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConverterSettings {
    /// Entries keyed by record class; see [`ConverterRegistry`].
    pub classes: Map<String, Value>,
}

/// Where debug data goes in a response.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DebugSettings {
    /// Key of the debug node in the response.
    pub debug_key: String,
    /// Exception reporting settings.
    pub exception_handler: ExceptionHandlerSettings,
}

/// Exception trace reporting.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExceptionHandlerSettings {
    /// Key of the trace node inside the debug node.
    pub trace_key: String,
    /// Whether traces are included at all.
    pub trace_enabled: bool,
}

impl Default for ResponseBuilderConfig {
    fn default() -> Self {
        Self {
            min_code: DEFAULT_MIN_CODE,
            max_code: DEFAULT_MAX_CODE,
            encoding_options: DEFAULT_ENCODING_OPTIONS,
            converter: ConverterSettings::default(),
            debug: DebugSettings::default(),
        }
    }
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            debug_key: "debug".to_owned(),
            exception_handler: ExceptionHandlerSettings::default(),
        }
    }
}

impl Default for ExceptionHandlerSettings {
    fn default() -> Self {
        Self {
            trace_key: "trace".to_owned(),
            trace_enabled: false,
        }
    }
}

/// Sources consulted by [`ResponseBuilderConfig::load`].
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    /// Configuration document; a missing file is skipped.
    pub file: Option<Utf8PathBuf>,
    /// Prefix of environment variables to read, such as `RESPONSE_BUILDER_`.
    pub env_prefix: Option<String>,
    /// Overrides applied last.
    pub overrides: Option<Map<String, Value>>,
}

impl ResponseBuilderConfig {
    /// The baked-in default node every other layer is merged over.
    #[must_use]
    pub fn defaults() -> Map<String, Value> {
        let node = json!({
            "min_code": DEFAULT_MIN_CODE,
            "max_code": DEFAULT_MAX_CODE,
            "encoding_options": DEFAULT_ENCODING_OPTIONS,
            "converter": {"classes": {}},
            "debug": {
                "debug_key": "debug",
                "exception_handler": {"trace_key": "trace", "trace_enabled": false}
            }
        });
        match node {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    /// Decodes and validates settings from a merged node.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuilderError::Decode`] when the node does not match
    /// the settings layout, or any error reported by [`Self::validate`].
    pub fn from_node(node: Map<String, Value>) -> BuilderResult<Self> {
        let config: Self = serde_json::from_value(Value::Object(node)).into_builder()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the code bounds and the converter table.
    ///
    /// # Errors
    ///
    /// - [`crate::BuilderError::OutOfRange`] when `min_code` is negative or
    ///   `max_code` is below it;
    /// - any error [`ConverterRegistry::from_config`] reports.
    pub fn validate(&self) -> BuilderResult<()> {
        validator::assert_is_int_range("min_code", &self.min_code, 0, i64::MAX)?;
        validator::assert_is_int_range("max_code", &self.max_code, self.min_code, i64::MAX)?;
        self.converter_registry().map(drop)
    }

    /// Asserts that `code` lies within the configured API code range.
    ///
    /// # Errors
    ///
    /// See [`validator::assert_is_int_range`].
    pub fn assert_api_code<V: crate::Inspect + ?Sized>(&self, code: &V) -> BuilderResult<()> {
        validator::assert_is_int_range("api_code", code, self.min_code, self.max_code)
    }

    /// Builds the converter registry described by `converter.classes`.
    ///
    /// # Errors
    ///
    /// See [`crate::ConverterRegistryBuilder::build`].
    pub fn converter_registry(&self) -> BuilderResult<ConverterRegistry> {
        ConverterRegistry::from_config(&self.converter.classes)
    }

    /// Loads settings from defaults, then the document, the environment and
    /// the overrides named by `options`.
    ///
    /// Failures reading the document or the environment do not stop the
    /// other sources from being read; they are reported together, along with
    /// any merge failure.
    ///
    /// # Errors
    ///
    /// Returns the single failure, or a [`crate::BuilderError::Aggregate`]
    /// when several sources failed, followed by any error from
    /// [`Self::from_node`].
    pub fn load(options: &LoadOptions) -> BuilderResult<Self> {
        let mut composer = LayerComposer::with_capacity(4);
        let mut failures = LoadFailures::default();
        composer.push_defaults(Self::defaults());
        if let Some(path) = &options.file
            && let Some(node) = failures.record(load_config_file(path)).flatten()
        {
            composer.push_file(node, Some(path.clone()));
        }
        if let Some(prefix) = &options.env_prefix
            && let Some(node) = failures.record(load_environment(prefix))
        {
            composer.push_environment(node);
        }
        if let Some(overrides) = &options.overrides {
            composer.push_runtime(overrides.clone());
        }
        let merged = failures.record(composer.compose());
        failures.into_result()?;
        let node = merged.unwrap_or_default();
        Self::from_node(node)
    }
}

#[cfg(test)]
mod tests;
