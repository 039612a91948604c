//! Folding configuration layers into a single node.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};

use super::{ConfigLayer, LayerProvenance};
use crate::BuilderResult;
use crate::merge::merge_config;

/// Builder that accumulates [`ConfigLayer`] values in precedence order.
///
/// Later layers win: each one is merged over everything pushed before it.
///
/// ```rust
/// use response_builder::layers::LayerComposer;
/// use serde_json::json;
///
/// let node = |v: serde_json::Value| v.as_object().cloned().expect("object");
///
/// let mut composer = LayerComposer::new();
/// composer.push_defaults(node(json!({"min_code": 100, "max_code": 1024})));
/// composer.push_environment(node(json!({"max_code": 2048})));
/// composer.push_runtime(node(json!({"min_code": 200})));
///
/// let merged = composer.compose()?;
/// assert_eq!(
///     serde_json::Value::Object(merged),
///     json!({"min_code": 200, "max_code": 2048})
/// );
/// # Ok::<_, std::sync::Arc<response_builder::BuilderError>>(())
/// ```
#[derive(Debug, Default)]
pub struct LayerComposer {
    layers: Vec<ConfigLayer>,
}

impl LayerComposer {
    /// Creates an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Creates a composer with room for `capacity` layers.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: Vec::with_capacity(capacity),
        }
    }

    /// Pushes the defaults layer.
    pub fn push_defaults(&mut self, value: Map<String, Value>) {
        self.push_layer(ConfigLayer::defaults(value));
    }

    /// Pushes a configuration document layer.
    pub fn push_file(&mut self, value: Map<String, Value>, path: Option<Utf8PathBuf>) {
        self.push_layer(ConfigLayer::file(value, path));
    }

    /// Pushes an environment layer.
    pub fn push_environment(&mut self, value: Map<String, Value>) {
        self.push_layer(ConfigLayer::environment(value));
    }

    /// Pushes a layer of runtime overrides.
    pub fn push_runtime(&mut self, value: Map<String, Value>) {
        self.push_layer(ConfigLayer::runtime(value));
    }

    /// Pushes an arbitrary layer.
    pub fn push_layer(&mut self, layer: ConfigLayer) {
        self.layers.push(layer);
    }

    /// Sources of the pushed layers, in push order.
    pub fn provenances(&self) -> impl Iterator<Item = LayerProvenance> + '_ {
        self.layers.iter().map(ConfigLayer::provenance)
    }

    /// Merges every layer, in push order, over an empty node.
    ///
    /// # Errors
    ///
    /// Returns the [`crate::BuilderError::ConfigTypeConflict`] of the first
    /// layer that cannot be merged. That layer is logged with its provenance.
    pub fn compose(&self) -> BuilderResult<Map<String, Value>> {
        let mut merged = Map::new();
        for layer in &self.layers {
            merged = merge_config(&merged, layer.value()).inspect_err(|err| {
                tracing::warn!(
                    provenance = %layer.provenance(),
                    path = layer.path().map(Utf8Path::as_str),
                    error = %err,
                    "configuration layer rejected"
                );
            })?;
        }
        tracing::debug!(
            sources = ?self.provenances().collect::<Vec<_>>(),
            keys = merged.len(),
            "configuration layers composed"
        );
        Ok(merged)
    }
}
