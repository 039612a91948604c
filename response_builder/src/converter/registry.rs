//! Class-keyed converter selection.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::{Converter, TO_ARRAY_HANDLER, ToArrayConverter};
use crate::kind::{Inspect, Kind};
use crate::merge::{self, PRIORITY_KEY};
use crate::record::Record;
use crate::{BuilderError, BuilderResult, validator};

/// Field naming the handler of a converter entry.
pub const HANDLER_KEY: &str = "handler";

/// A configured converter for one record class.
#[derive(Clone, Debug)]
pub struct ConverterEntry {
    class: String,
    handler: String,
    priority: i128,
    config: Map<String, Value>,
    converter: Arc<dyn Converter>,
}

impl ConverterEntry {
    /// Class this entry applies to, directly or through lineage.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Name of the handler serving this entry.
    #[must_use]
    pub fn handler(&self) -> &str {
        &self.handler
    }

    /// Priority the entry was ordered by.
    #[must_use]
    pub const fn priority(&self) -> i128 {
        self.priority
    }

    /// Configuration node of the entry, passed to the converter.
    #[must_use]
    pub const fn config(&self) -> &Map<String, Value> {
        &self.config
    }
}

/// Builder registering named converter handlers before reading the
/// `converter.classes` node.
#[derive(Debug)]
pub struct ConverterRegistryBuilder {
    handlers: BTreeMap<String, Arc<dyn Converter>>,
}

impl Default for ConverterRegistryBuilder {
    fn default() -> Self {
        let mut handlers: BTreeMap<String, Arc<dyn Converter>> = BTreeMap::new();
        handlers.insert(TO_ARRAY_HANDLER.to_owned(), Arc::new(ToArrayConverter));
        Self { handlers }
    }
}

impl ConverterRegistryBuilder {
    /// Registers `converter` under `name`, replacing any previous handler
    /// with that name.
    #[must_use]
    pub fn handler(mut self, name: impl Into<String>, converter: impl Converter + 'static) -> Self {
        self.handlers.insert(name.into(), Arc::new(converter));
        self
    }

    /// Builds a registry from a `converter.classes` node mapping class names
    /// to `{ "handler": <name>, "pri": <int>, ... }` entries.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::InvalidType`] when an entry is a scalar, its
    ///   handler is not a string or its priority is not an integer;
    /// - [`BuilderError::Configuration`] when an entry is a list or its
    ///   handler is not registered.
    pub fn build(&self, classes: &Map<String, Value>) -> BuilderResult<ConverterRegistry> {
        let mut ordered = classes.clone();
        merge::sort_by_pri(&mut ordered)?;
        let entries = ordered
            .into_iter()
            .map(|(class, node)| self.entry(class, node))
            .collect::<BuilderResult<Vec<_>>>()?;
        tracing::debug!(classes = entries.len(), "converter registry built");
        Ok(ConverterRegistry { entries })
    }

    fn entry(&self, class: String, node: Value) -> BuilderResult<ConverterEntry> {
        let config = match node {
            Value::Object(config) => config,
            Value::Array(_) => {
                return Err(Arc::new(BuilderError::configuration(
                    class,
                    "converter entry must be a mapping, not a list",
                )));
            }
            other => {
                return Err(Arc::new(BuilderError::invalid_type(
                    class,
                    &[Kind::Array],
                    other.kind(),
                )));
            }
        };
        let handler_name = format!("{class}.{HANDLER_KEY}");
        let handler = config.get(HANDLER_KEY).unwrap_or(&Value::Null);
        validator::assert_is_string(&handler_name, handler)?;
        let handler = handler.as_str().unwrap_or_default().to_owned();
        let converter = self.handlers.get(&handler).cloned().ok_or_else(|| {
            Arc::new(BuilderError::configuration(
                handler_name,
                format!("unknown converter handler \"{handler}\""),
            ))
        })?;
        let priority = config
            .get(PRIORITY_KEY)
            .and_then(Inspect::as_integer)
            .unwrap_or_default();
        Ok(ConverterEntry {
            class,
            handler,
            priority,
            config,
            converter,
        })
    }
}

/// Converters keyed by record class, in descending priority order.
///
/// # Examples
///
/// ```
/// use response_builder::ConverterRegistry;
/// use serde_json::json;
///
/// let classes = json!({
///     "App\\Models\\Model": {"handler": "to_array"},
///     "App\\Models\\User": {"handler": "to_array", "pri": 10},
/// });
/// let registry = ConverterRegistry::from_config(classes.as_object().expect("object"))?;
/// let order: Vec<&str> = registry.entries().iter().map(|e| e.class()).collect();
/// assert_eq!(order, ["App\\Models\\User", "App\\Models\\Model"]);
/// # Ok::<_, std::sync::Arc<response_builder::BuilderError>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConverterRegistry {
    entries: Vec<ConverterEntry>,
}

impl ConverterRegistry {
    /// Starts a builder with the built-in handlers registered.
    #[must_use]
    pub fn builder() -> ConverterRegistryBuilder {
        ConverterRegistryBuilder::default()
    }

    /// Builds a registry using only the built-in handlers.
    ///
    /// # Errors
    ///
    /// See [`ConverterRegistryBuilder::build`].
    pub fn from_config(classes: &Map<String, Value>) -> BuilderResult<Self> {
        Self::builder().build(classes)
    }

    /// Entries in the order they are consulted.
    #[must_use]
    pub fn entries(&self) -> &[ConverterEntry] {
        &self.entries
    }

    /// Finds the entry for `record`: an exact class match wins, otherwise
    /// the first entry, by priority, the record is an instance of.
    #[must_use]
    pub fn resolve(&self, record: &dyn Record) -> Option<&ConverterEntry> {
        let class = record.class();
        let found = self
            .entries
            .iter()
            .find(|entry| entry.class == class)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|entry| record.instance_of(&entry.class))
            });
        tracing::trace!(class, handler = found.map(ConverterEntry::handler), "converter resolved");
        found
    }

    /// Converts `payload` with the converter configured for its class.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::InvalidType`] when `payload` is not a record;
    /// - [`BuilderError::MissingConverter`] when no entry matches;
    /// - whatever the selected converter reports.
    pub fn convert(&self, payload: &dyn Inspect) -> BuilderResult<Map<String, Value>> {
        let model = validator::assert_record("payload", payload)?;
        let entry = self.resolve(model).ok_or_else(|| {
            Arc::new(BuilderError::MissingConverter {
                class: model.class().to_owned(),
            })
        })?;
        entry.converter.convert(payload, &entry.config)
    }
}
